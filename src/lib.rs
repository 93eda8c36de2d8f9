//! # Cyber Kittens
//!
//! A minimal kitten-adoption API: account registration and login with
//! bearer tokens, and ownership-scoped CRUD for kittens.
//!
//! ## Overview
//!
//! Cyber Kittens can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `cyberkittens-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use cyberkittens::{api::routes::create_router, auth::jwt::AuthService, db::StoreClient};
//! use cyberkittens::{utils::config::Config, AppState};
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let store = StoreClient::new_local(&config.database.url).await?;
//! let auth_service = AuthService::new(config.auth.jwt_secret.clone(), config.auth.jwt_expiry);
//!
//! let state = AppState {
//!     config: Arc::new(config),
//!     store: Arc::new(store),
//!     auth_service: Arc::new(auth_service),
//! };
//! let app = create_router(state);
//! ```
//!
//! ## Authorization Model
//!
//! Every kitten has exactly one owner - the user who created it - and
//! only the owner can read or delete it. A kitten that does not exist
//! and a kitten owned by someone else are indistinguishable to the
//! caller: both answer 401.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - JWT authentication and middleware
//! - [`db`] - SQLite storage for users and kittens
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration

#![warn(missing_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// JWT authentication and middleware.
pub mod auth;
/// Database client.
pub mod db;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::StoreClient;
pub use types::{AppError, Result};
pub use utils::config::Config;

use crate::auth::jwt::AuthService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Database client
    pub store: Arc<StoreClient>,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
}
