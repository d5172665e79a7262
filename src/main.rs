use axum::{
    routing::{get, post},
    Router,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod db;
mod error;
mod models;
mod routes;

const DATA_FILE: &str = "data/player.json";
const DEFAULT_PORT: u16 = 3000;

fn app(data_path: PathBuf) -> Router {
    Router::new()
        // Health
        .route("/ping", get(routes::health::ping))

        // Player endpoints
        .route(
            "/player",
            get(routes::players::get_players).post(routes::players::create_player),
        )
        .route(
            "/player/{pid}",
            get(routes::players::get_player_by_id)
                .post(routes::players::update_player)
                .delete(routes::players::delete_player),
        )

        // Deposit endpoint
        .route(
            "/deposit/player/{pid}",
            post(routes::deposit::deposit_to_player),
        )

        .layer(TraceLayer::new_for_http())
        .with_state(data_path)
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting player roster server...");

    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(PathBuf::from(DATA_FILE)))
        .await
        .expect("Failed to start server.");
}
