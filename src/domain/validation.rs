use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

pub fn is_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let compact: String = phone_number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if !PHONE_NUMBER.is_match(&compact) {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Phone number must contain between 7 and 15 digits, optionally prefixed with +",
        )));
    }

    Ok(())
}

pub fn is_identifier(identifier: &str) -> Result<(), ValidationError> {
    if identifier.is_empty() || identifier.len() > 64 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("ID Number must contain between 1 and 64 characters")));
    }

    if !IDENTIFIER.is_match(identifier) {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "ID Number may only contain letters, digits, dashes and underscores",
        )));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.len() > 100 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Name must contain between 1 and 100 characters")));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > 128 {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Password must contain between 1 and 128 characters",
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::international("+27821234567")]
    #[case::local("0821234567")]
    #[case::spaced("+1 (555) 010-9999")]
    fn test_valid_phone_numbers(#[case] phone_number: &str) {
        assert!(is_phone_number(phone_number).is_ok());
    }

    #[rstest]
    #[case::too_short("12345")]
    #[case::letters("+27abc12345")]
    #[case::too_long("+1234567890123456")]
    fn test_invalid_phone_numbers(#[case] phone_number: &str) {
        assert!(is_phone_number(phone_number).is_err());
    }

    #[test]
    fn test_identifier_rejects_whitespace() {
        assert!(is_identifier("123 456").is_err());
        assert!(is_identifier("9001015009087").is_ok());
    }

    #[test]
    fn test_blank_name() {
        let err = is_name("   ").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Name must contain between 1 and 100 characters"
        );
    }
}
