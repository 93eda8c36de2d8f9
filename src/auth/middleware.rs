use crate::types::{AppError, Claims};
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

/// Attaches the caller's identity to the request, when one is presented.
///
/// No `Authorization` header means the request continues anonymously.
/// A presented header must parse as `<scheme> <token>` with a token
/// that verifies against the configured secret; anything else is an
/// explicit `InvalidToken` error rendered as 401 by the error
/// responder, never an unhandled crash.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(header_value) = req.headers().get(header::AUTHORIZATION) {
        let header_value = header_value
            .to_str()
            .map_err(|_| AppError::InvalidToken("authorization header is not valid UTF-8".to_string()))?;

        // `<scheme> <token>`; the scheme word itself is not inspected.
        let mut parts = header_value.split_whitespace();
        let _scheme = parts.next();
        let token = parts.next().ok_or_else(|| {
            AppError::InvalidToken("authorization header is missing a credential".to_string())
        })?;

        let claims = state.auth_service.verify_token(token).inspect_err(|e| {
            tracing::warn!("token verification failed: {}", e);
        })?;

        req.extensions_mut().insert(claims);
    }

    Ok(next.run(req).await)
}

/// Extractor for the identity attached by [`identity_middleware`].
///
/// Rejects with 401 when the request carries no identity.
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Auth("Authentication required".to_string()))
    }
}
