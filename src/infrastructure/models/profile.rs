use serde::{Deserialize, Serialize};

use crate::domain::models::{account::Account, language::Language};

/// Flat `field -> string` record stored under `profile:<identifier>`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurrealProfile {
    identifier: String,
    name: String,
    surname: String,
    phone_number: Option<String>,
    password: String,
    preferred_language: Language,
}

impl From<Account> for SurrealProfile {
    fn from(acc: Account) -> Self {
        SurrealProfile {
            identifier: acc.identifier,
            name: acc.name,
            surname: acc.surname,
            phone_number: acc.phone_number,
            password: acc.password,
            preferred_language: acc.preferred_language,
        }
    }
}

impl From<SurrealProfile> for Account {
    fn from(profile: SurrealProfile) -> Self {
        Account {
            identifier: profile.identifier,
            name: profile.name,
            surname: profile.surname,
            phone_number: profile.phone_number,
            password: profile.password,
            preferred_language: profile.preferred_language,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
