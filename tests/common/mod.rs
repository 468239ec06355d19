#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use recipe_api::auth::JwtAuthProvider;
use recipe_api::models::{Recipe, RecipeParams};
use recipe_api::store::{MemoryRecipeStore, MemoryUserStore, RecipeStore};
use recipe_api::AppState;

/// Router over in-memory stores, with a handle on the recipe store so
/// tests can assert what actually got persisted.
pub struct TestApp {
    pub router: Router,
    pub recipes: Arc<MemoryRecipeStore>,
}

pub fn test_app() -> TestApp {
    let recipes = Arc::new(MemoryRecipeStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let state = AppState::new(recipes.clone(), users, Arc::new(JwtAuthProvider));
    TestApp {
        router: recipe_api::app(state),
        recipes,
    }
}

pub fn token_for(user_id: Uuid, name: &str) -> String {
    recipe_api::auth::issue_token(user_id, name).expect("token issuance")
}

/// Seed the canonical cookie recipe owned by `owner`.
pub async fn seed_cookie_recipe(app: &TestApp, owner: Uuid) -> Recipe {
    let recipe = Recipe::create(
        owner,
        RecipeParams {
            title: Some("Cookies".to_string()),
            ingredients: Some("Cookie ingredients, chocolate chips.".to_string()),
            directions: Some("Make the cookies.".to_string()),
        },
    );
    app.recipes.insert(&recipe).await.expect("seed recipe");
    recipe
}

/// Fire one request at the router and decode the JSON body.
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("accept", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
