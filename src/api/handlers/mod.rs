//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Authentication handlers (login, register).
pub mod auth;
/// Kitten CRUD handlers.
pub mod kittens;
