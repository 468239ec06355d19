use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{AuthUser, Recipe, RecipeParams};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Request body for create and update: `{"recipe": {..fields..}}`.
#[derive(Debug, Deserialize)]
pub struct RecipeBody {
    pub recipe: RecipeParams,
}

/// GET /v1/recipes - List recipes, newest first
pub async fn index(State(state): State<AppState>) -> ApiResult<Vec<Recipe>> {
    let recipes = state.recipes.list().await?;
    Ok(ApiResponse::success(recipes))
}

/// GET /v1/recipes/:id - Fetch a single recipe
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Recipe> {
    let recipe = state
        .recipes
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;
    Ok(ApiResponse::success(recipe))
}

/// POST /v1/recipes - Create a recipe owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<RecipeBody>,
) -> ApiResult<Recipe> {
    let recipe = Recipe::create(user.id, body.recipe);
    recipe.validate()?;

    state.recipes.insert(&recipe).await?;
    tracing::info!(recipe_id = %recipe.id, user_id = %user.id, "recipe created");

    Ok(ApiResponse::created(recipe))
}

/// PUT /v1/recipes/:id - Update a recipe's fields
///
/// Stage order is load-bearing: authentication happened in the middleware,
/// then existence, then ownership, then validation against a working copy,
/// and only a fully valid copy is committed. Nothing is persisted on any
/// failure path.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecipeBody>,
) -> ApiResult<Recipe> {
    let recipe = state
        .recipes
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;

    if !recipe.owned_by(user.id) {
        return Err(ApiError::unauthorized());
    }

    let updated = recipe.apply(&body.recipe);
    updated.validate()?;

    state.recipes.update(&updated).await?;
    tracing::info!(recipe_id = %updated.id, user_id = %user.id, "recipe updated");

    Ok(ApiResponse::created(updated))
}
