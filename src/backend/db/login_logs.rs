//! Login history
//!
//! One row per successful login. Rows are written, never updated, and are
//! not read back by the API.

use chrono::Utc;

use crate::backend::db::{Database, Result};

impl Database {
    /// Record a successful login for `user_id`
    pub async fn record_login(
        &self,
        user_id: i64,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO login_logs (user_id, ip_address, user_agent, login_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(ip_address)
        .bind(user_agent)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
