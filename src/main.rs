//! Server binary for Cyber Kittens.
//!
//! Loads configuration from the environment, opens the database,
//! builds the router, and serves it.

use anyhow::Context;
use clap::Parser;
use cyberkittens::{
    api::routes::create_router, auth::jwt::AuthService, db::StoreClient, utils::config::Config,
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cyberkittens-server", about = "Cyber Kittens API server")]
struct Cli {
    /// Bind address, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// SQLite path (or ":memory:"), overrides DATABASE_URL
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyberkittens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(database) = cli.database {
        config.database.url = database;
    }

    let store = if config.database.url == ":memory:" {
        StoreClient::new_memory().await
    } else {
        StoreClient::new_local(&config.database.url).await
    }
    .map_err(|e| anyhow::anyhow!("failed to open database: {}", e))?;

    let auth_service = AuthService::new(config.auth.jwt_secret.clone(), config.auth.jwt_expiry);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid bind address")?;

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        auth_service: Arc::new(auth_service),
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
