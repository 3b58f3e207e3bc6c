//! User record domain model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::reservation::ReservationMap;

/// Longest email accepted at signup.
pub const MAX_EMAIL_LEN: usize = 30;
/// Longest password accepted at signup.
pub const MAX_PASSWORD_LEN: usize = 20;

/// Account profile plus its reservation set.
///
/// Records are keyed by email in the database, so the email itself is not a
/// field of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub name: String,
    pub abn: i64,
    #[serde(default)]
    pub reservations: ReservationMap,
}

/// The full persisted state: email -> user record.
pub type Database = BTreeMap<String, UserRecord>;

impl UserRecord {
    /// Create a record with an empty reservation set.
    pub fn new(name: impl Into<String>, abn: i64, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            name: name.into(),
            abn,
            reservations: ReservationMap::new(),
        }
    }
}

/// Validate signup fields.
///
/// All four fields must be present (name/email/password non-empty, abn
/// non-zero), the email at most [`MAX_EMAIL_LEN`] characters, the password at
/// most [`MAX_PASSWORD_LEN`]. Nothing else is checked.
pub fn validate_signup(
    name: &str,
    abn: i64,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    if name.is_empty() || email.is_empty() || password.is_empty() || abn == 0 {
        return Err("all fields are required");
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err("email must be at most 30 characters");
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err("password must be at most 20 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup() {
        assert!(validate_signup("Alice", 123, "a@x.com", "pw").is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(validate_signup("", 123, "a@x.com", "pw").is_err());
        assert!(validate_signup("Alice", 0, "a@x.com", "pw").is_err());
        assert!(validate_signup("Alice", 123, "", "pw").is_err());
        assert!(validate_signup("Alice", 123, "a@x.com", "").is_err());
    }

    #[test]
    fn test_email_length_boundary() {
        let email30 = "a".repeat(30);
        let email31 = "a".repeat(31);
        assert!(validate_signup("Alice", 123, &email30, "pw").is_ok());
        assert!(validate_signup("Alice", 123, &email31, "pw").is_err());
    }

    #[test]
    fn test_password_length_boundary() {
        let pw20 = "p".repeat(20);
        let pw21 = "p".repeat(21);
        assert!(validate_signup("Alice", 123, "a@x.com", &pw20).is_ok());
        assert!(validate_signup("Alice", 123, "a@x.com", &pw21).is_err());
    }

    #[test]
    fn test_new_record_has_no_reservations() {
        let record = UserRecord::new("Alice", 123, "pw");
        assert!(record.reservations.is_empty());
    }
}
