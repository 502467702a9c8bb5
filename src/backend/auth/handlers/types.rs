/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers, plus the input checks applied on registration.
 */

use serde::{Deserialize, Serialize};

use crate::backend::db::User;
use crate::backend::error::ApiError;

/// Register request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (unique, case-sensitive)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

impl RegisterRequest {
    /// Reject empty fields and implausible email addresses
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password must not be empty"));
        }
        if !is_valid_email(&self.email) {
            return Err(ApiError::validation("Invalid email address"));
        }
        Ok(())
    }
}

/// Basic email check
///
/// Exactly one `@`, a non-empty local part and a domain containing a dot
/// that neither starts nor ends the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Login form
///
/// OAuth2 password-flow fields. Extra fields such as `grant_type` or `scope`
/// are accepted and ignored.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Token response returned by a successful login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed JWT to send as `Authorization: Bearer <token>`
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@x."));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn test_register_request_validation() {
        assert!(request("alice", "a@x.com", "pw123").validate().is_ok());
        assert!(request("", "a@x.com", "pw123").validate().is_err());
        assert!(request("alice", "a@x.com", "").validate().is_err());
        assert!(request("alice", "not-an-email", "pw123").validate().is_err());
    }

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            hashed_password: "$2b$04$hash".to_string(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "username": "alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_token_response_shape() {
        let json = serde_json::to_value(TokenResponse::bearer("abc".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"access_token": "abc", "token_type": "bearer"})
        );
    }
}
