mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use recipe_api::store::RecipeStore;

use common::{seed_cookie_recipe, send_json, test_app, token_for};

#[tokio::test]
async fn authenticated_user_can_create_a_recipe() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let token = token_for(owner, "creator");

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/v1/recipes",
        Some(&token),
        Some(json!({
            "recipe": {
                "title": "Cookies",
                "ingredients": "Cookie ingredients, chocolate chips.",
                "directions": "Make the cookies."
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Cookies");

    let id: Uuid = body["data"]["id"].as_str().unwrap().parse()?;
    let stored = app.recipes.find(id).await?.unwrap();
    assert_eq!(stored.user_id, owner);
    Ok(())
}

#[tokio::test]
async fn create_requires_a_credential() -> Result<()> {
    let app = test_app();

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/v1/recipes",
        None,
        Some(json!({ "recipe": { "title": "Cookies" } })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["errors"][0],
        "You need to sign in or sign up before continuing."
    );
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_fields() -> Result<()> {
    let app = test_app();
    let token = token_for(Uuid::new_v4(), "creator");

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/v1/recipes",
        Some(&token),
        Some(json!({
            "recipe": {
                "ingredients": "Cookie ingredients, chocolate chips.",
                "directions": "Make the cookies."
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_message"], "Title can't be blank");
    Ok(())
}

#[tokio::test]
async fn anyone_can_read_recipes() -> Result<()> {
    let app = test_app();
    let recipe = seed_cookie_recipe(&app, Uuid::new_v4()).await;

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        &format!("/v1/recipes/{}", recipe.id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Cookies");

    let (status, body) = send_json(&app.router, Method::GET, "/v1/recipes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_recipe_read_is_not_found() -> Result<()> {
    let app = test_app();

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        &format!("/v1/recipes/{}", Uuid::new_v4()),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_message"], "Recipe not found");
    Ok(())
}

#[tokio::test]
async fn cors_headers_are_applied_when_enabled() -> Result<()> {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = test_app();

    // Default development config enables CORS
    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/recipes")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())?;
    let response = app.router.clone().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("CORS header");
    assert_eq!(allow_origin, "*");
    Ok(())
}

#[tokio::test]
async fn health_reports_ok_over_memory_store() -> Result<()> {
    let app = test_app();

    let (status, body) = send_json(&app.router, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}
