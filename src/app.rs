use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::handlers::{auth, recipes};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    // Mutation routes sit behind the auth middleware; reads are public
    let protected = Router::new()
        .route("/v1/recipes", post(recipes::create))
        .route("/v1/recipes/:id", put(recipes::update).patch(recipes::update))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Token issuance
        .route("/v1/auth/register", post(auth::register))
        .route("/v1/auth/login", post(auth::login))
        // Public recipe reads
        .route("/v1/recipes", get(recipes::index))
        .route("/v1/recipes/:id", get(recipes::show))
        .merge(protected)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Recipe API",
            "version": version,
            "description": "Recipe sharing API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/v1/auth/register, /v1/auth/login (public - token acquisition)",
                "recipes": "GET /v1/recipes[/:id] (public), POST/PUT/PATCH (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.recipes.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error_message": "store unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "store_error": e.to_string()
                }
            })),
        ),
    }
}
