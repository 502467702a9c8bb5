//! Server Module
//!
//! Everything needed to turn a `Config` into a running Axum application.
//!
//! - **`config`** - configuration loading and validation
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - database setup and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env()` in `main`
//! 2. **Database**: connect and run migrations
//! 3. **State Creation**: token keys and TMDB client
//! 4. **Router Creation**: routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use cinescope::backend::server::{config::Config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{Config, ConfigError};
pub use init::{create_app, create_state, StartupError};
pub use state::AppState;
