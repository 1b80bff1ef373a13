mod config;
mod dao;
mod errors;
mod model;
mod routes;
mod shortcode;
mod stats;
mod urls;
mod validator;

use axum::routing::{get, post};
use axum::{serve, Router};
use config::{get_env, AppConfig};
use dotenvy::dotenv;
use routes::{create_link, get_stats, health, redirect};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use validator::{ClickValidator, SimulatedValidator};

const DEFAULT_TRACING_LEVEL: &str = "affiliate_shortener=debug";
const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
const DATABASE_MAX_CONNECTIONS: u32 = 20;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
    pub validator: Arc<dyn ClickValidator>,
}

#[tokio::main]
async fn main() {
    _ = dotenv();
    let database_url = get_env("DATABASE_URL");
    let server_address =
        env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.into());
    configure_tracing();
    let config = Arc::new(AppConfig::from_env());
    let validator: Arc<dyn ClickValidator> =
        Arc::new(SimulatedValidator::new(config.validation_delay_ms));
    let pool = create_db_connection_pool(&database_url).await;
    let listener = create_listener(&server_address).await;
    let router = create_router(AppState {
        pool,
        config,
        validator,
    });
    serve(listener, router)
        .await
        .expect("Server failed to start");
}

fn configure_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or(DEFAULT_TRACING_LEVEL.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn create_db_connection_pool(database_url: &str) -> Pool<Postgres> {
    PgPoolOptions::new()
        .max_connections(DATABASE_MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .expect("Creating database connection pool failed")
}

async fn create_listener(server_address: &str) -> TcpListener {
    let listener = TcpListener::bind(&server_address)
        .await
        .expect("Creating tcp listener failed");
    tracing::info!("Listening on address: {}", server_address);
    listener
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/links", post(create_link))
        .route("/stats", get(get_stats))
        .route("/health", get(health))
        .route("/:short_code", get(redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
