use crate::domain::models::account::Account;
use crate::domain::models::language::Language;
use ::surrealdb::{Surreal, engine::any::Any};

/// Inserts a profile with the password hashed by SurrealDB itself. The
/// returned account carries the plaintext password for login requests.
pub async fn seed_profile(conn: &Surreal<Any>) -> Account {
    let account = Account {
        identifier: "8001015009087".to_string(),
        name: "Sipho".to_string(),
        surname: "Dlamini".to_string(),
        phone_number: Some("+27831234567".to_string()),
        password: "stR0ngP4ssw0rd!".to_string(),
        preferred_language: Language::Es,
    };

    conn.query(
        r#"
        CREATE type::thing('profile', $identifier) CONTENT {
            identifier: $identifier,
            name: $name,
            surname: $surname,
            phone_number: $phone_number,
            password: crypto::argon2::generate($password),
            preferred_language: $preferred_language
        };
        "#,
    )
    .bind(("identifier", account.identifier.clone()))
    .bind(("name", account.name.clone()))
    .bind(("surname", account.surname.clone()))
    .bind(("phone_number", account.phone_number.clone()))
    .bind(("password", account.password.clone()))
    .bind(("preferred_language", account.preferred_language))
    .await
    .unwrap()
    .check()
    .unwrap();

    account
}
