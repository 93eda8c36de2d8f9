//! JWT Authentication and Middleware
//!
//! This module provides authentication infrastructure for the Cyber
//! Kittens API, including JWT token generation/validation and Axum
//! middleware.
//!
//! # Module Structure
//!
//! - [`auth::jwt`](crate::auth::jwt) - Password hashing plus JWT encoding and decoding
//! - [`auth::middleware`](crate::auth::middleware) - Axum middleware and extractor for authentication
//!
//! # Security Features
//!
//! - **Password Hashing**: Uses Argon2id (memory-hard) for secure password storage
//! - **JWT Tokens**: HS256 signed tokens with configurable expiration
//! - **Claims**: Minimal identity reference (user id + username), never the stored record
//!
//! # Usage
//!
//! ## Token Generation
//!
//! ```ignore
//! use cyberkittens::auth::jwt::AuthService;
//!
//! let auth_service = AuthService::new(config.auth.jwt_secret.clone(), config.auth.jwt_expiry);
//! let token = auth_service.generate_token(&user.id, &user.username)?;
//! ```
//!
//! ## Middleware
//!
//! [`identity_middleware`](middleware::identity_middleware) runs on the
//! whole router. It attaches decoded [`Claims`](crate::types::Claims)
//! to the request when a valid bearer token is presented, passes the
//! request through anonymously when no `Authorization` header is
//! present, and fails with 401 when a presented token does not verify.
//!
//! ## Extracting the Identity in Handlers
//!
//! ```ignore
//! async fn protected_handler(AuthUser(claims): AuthUser) -> impl IntoResponse {
//!     format!("Hello, {}!", claims.username)
//! }
//! ```
//!
//! # Configuration
//!
//! Configure via environment:
//! ```text
//! JWT_SECRET=your-secret-key   # Required, use a strong random value
//! JWT_EXPIRY=86400             # Token validity in seconds
//! ```

/// JWT token generation, validation, and password hashing services.
pub mod jwt;
/// Authentication middleware and extractor for protected routes.
pub mod middleware;
