//! User entity model and DTOs (login accounts).

use innkeeper_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
///
/// `password_hash` is an Argon2id PHC string; it is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password arrives in plaintext and is
/// hashed by the caller before it reaches the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be of the form local@domain"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Defaults to `staff` if omitted.
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateUser {
        CreateUser {
            username: "frontdesk".into(),
            email: "frontdesk@example.com".into(),
            password: "long enough secret".into(),
            role: None,
        }
    }

    #[test]
    fn create_user_accepts_valid_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn create_user_rejects_short_password() {
        let mut input = input();
        input.password = "short".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_user_rejects_malformed_email() {
        let mut input = input();
        input.email = "not-an-email".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_user_rejects_empty_username() {
        let mut input = input();
        input.username = String::new();
        assert!(input.validate().is_err());
    }
}
