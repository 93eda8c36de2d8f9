use crate::{
    types::{AppError, LoginRequest, RegisterRequest, Result, TokenResponse},
    AppState,
};
use axum::{extract::State, Json};
use uuid::Uuid;

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = TokenResponse),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>> {
    // Validate input
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "username and password are required".to_string(),
        ));
    }

    // Check if user exists
    if state
        .store
        .get_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "username '{}' is already taken",
            payload.username
        )));
    }

    // Hash password
    let password_hash = state.auth_service.hash_password(&payload.password)?;

    // Create user
    let user_id = Uuid::new_v4().to_string();
    state
        .store
        .create_user(&user_id, &payload.username, &password_hash)
        .await?;

    tracing::info!("registered user {}", payload.username);

    // Issue token
    let token = state
        .auth_service
        .generate_token(&user_id, &payload.username)?;

    Ok(Json(TokenResponse {
        token,
        message: "success".to_string(),
    }))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    // Get user
    let user = state
        .store
        .get_user_by_username(&payload.username)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    // Verify password
    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)?
    {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    // Issue token
    let token = state.auth_service.generate_token(&user.id, &user.username)?;

    Ok(Json(TokenResponse {
        token,
        message: "success".to_string(),
    }))
}
