/**
 * User Model and Database Operations
 */

use crate::backend::db::{Database, Result};

/// User row
///
/// Handlers convert it to `UserResponse`, which drops the password hash.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, case-sensitive)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    pub hashed_password: String,
}

impl Database {
    /// Create a new user
    ///
    /// Fails with a unique-violation database error if the username or email
    /// is already taken.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, hashed_password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, hashed_password
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&self.pool)
        .await
    }

    /// Get user by username (exact, case-sensitive match)
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, hashed_password
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, hashed_password
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }
}
