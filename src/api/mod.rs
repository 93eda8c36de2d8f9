//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Cyber Kittens, built on
//! the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication
//! - `POST /register` - Register new user, returns a bearer token
//! - `POST /login` - Login and receive a bearer token
//!
//! ## Kittens
//! - `GET /kittens/{id}` - Get a kitten owned by the caller
//! - `POST /kittens` - Create a kitten owned by the caller
//! - `DELETE /kittens/{id}` - Delete a kitten owned by the caller
//!
//! ## Misc
//! - `GET /` - HTML welcome banner
//! - `GET /openapi.json` - OpenAPI document for this API
//!
//! # Authentication
//!
//! Kitten endpoints require a valid JWT token in the `Authorization`
//! header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! A request for a kitten that does not exist is answered exactly like
//! a request for someone else's kitten (401): resource existence is
//! not revealed to non-owners.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document for the Cyber Kittens API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::kittens::get_kitten,
        handlers::kittens::create_kitten,
        handlers::kittens::delete_kitten,
    ),
    components(schemas(
        crate::types::RegisterRequest,
        crate::types::LoginRequest,
        crate::types::TokenResponse,
        crate::types::CreateKittenRequest,
        crate::types::KittenResponse,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "kittens", description = "Ownership-scoped kitten CRUD")
    )
)]
pub struct ApiDoc;
