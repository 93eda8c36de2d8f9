use crate::api::ApiDoc;
use crate::AppState;
use axum::{
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/openapi.json", get(openapi))
        // Public routes (no auth required)
        .route("/register", post(crate::api::handlers::auth::register))
        .route("/login", post(crate::api::handlers::auth::login))
        // Protected routes (handlers require an attached identity)
        .route("/kittens", post(crate::api::handlers::kittens::create_kitten))
        .route(
            "/kittens/{id}",
            get(crate::api::handlers::kittens::get_kitten)
                .delete(crate::api::handlers::kittens::delete_kitten),
        )
        // Identity attach runs on every route; anonymous requests pass through
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::identity_middleware,
        ))
        .with_state(state)
}

async fn banner() -> Html<&'static str> {
    Html(
        "<h1>Welcome to Cyber Kittens!</h1>\
         <p>Cats are available at <a href=\"/kittens/1\">/kittens/:id</a></p>\
         <p>Create a new cat at <b><code>POST /kittens</code></b> and delete one at <b><code>DELETE /kittens/:id</code></b></p>\
         <p>Log in via POST /login or register via POST /register</p>",
    )
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
