use std::sync::Arc;

use recipe_api::auth::JwtAuthProvider;
use recipe_api::store::{postgres, PgRecipeStore, PgUserStore};
use recipe_api::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = recipe_api::config::config();
    tracing::info!("Starting Recipe API in {:?} mode", config.environment);

    let state = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = postgres::connect(&url)
                .await
                .unwrap_or_else(|e| panic!("failed to connect database: {}", e));
            AppState::new(
                Arc::new(PgRecipeStore::new(pool.clone())),
                Arc::new(PgUserStore::new(pool)),
                Arc::new(JwtAuthProvider),
            )
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, recipes will not survive a restart");
            AppState::in_memory()
        }
    };

    let app = recipe_api::app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("RECIPE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Recipe API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
