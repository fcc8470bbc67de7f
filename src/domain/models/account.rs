use validator::Validate;

use crate::domain::models::language::Language;
use crate::domain::validation::{is_name, is_phone_number};

/// A registered profile. `password` always holds an argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub identifier: String,
    pub name: String,
    pub surname: String,
    pub phone_number: Option<String>,
    pub password: String,
    pub preferred_language: Language,
}

#[derive(Debug, Clone, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "ID Number is required"))]
    pub identifier: String,

    #[validate(custom(function = "is_name"))]
    pub name: String,

    #[validate(custom(
        function = "is_name",
        message = "Surname must contain between 1 and 100 characters"
    ))]
    pub surname: String,

    #[validate(custom(function = "is_phone_number"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(required(message = "Preferred language is required"))]
    pub preferred_language: Option<Language>,
}

#[derive(Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authorized(Account),
    /// Unknown identifier and wrong password are deliberately indistinguishable.
    Denied,
}

/// Outbound text message queued after a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub destination: String,
    pub body: String,
}

impl Notification {
    pub fn welcome(destination: &str, name: &str) -> Self {
        Notification {
            destination: destination.to_owned(),
            body: format!("Hello {name}, you have successfully signed up!"),
        }
    }
}
