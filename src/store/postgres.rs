use std::time::Duration;

use async_trait::async_trait;
use sqlx::error::DatabaseError as _;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::config;
use crate::models::{Recipe, User};
use crate::store::{RecipeStore, StoreError, UserStore, EMAIL_TAKEN_MESSAGE};

/// Connect a pool using the configured limits and ensure the schema
/// exists. Called once at startup when `DATABASE_URL` is set.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let db = &config::config().database;
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(Duration::from_secs(db.connection_timeout))
        .connect(database_url)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_digest TEXT NOT NULL,
            password_salt TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            ingredients TEXT NOT NULL,
            directions TEXT NOT NULL,
            user_id UUID NOT NULL REFERENCES users(id),
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, ingredients, directions, user_id, created_at, updated_at \
             FROM recipes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, ingredients, directions, user_id, created_at, updated_at \
             FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO recipes (id, title, ingredients, directions, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.ingredients)
        .bind(&recipe.directions)
        .bind(recipe.user_id)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), StoreError> {
        // Single statement keeps the commit atomic per record
        let result = sqlx::query(
            "UPDATE recipes SET title = $2, ingredients = $3, directions = $4, updated_at = $5 \
             WHERE id = $1",
        )
        .bind(recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.ingredients)
        .bind(&recipe.directions)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Recipe not found".to_string()));
        }
        Ok(())
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_digest, password_salt, created_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email, password_digest, password_salt, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(&user.password_salt)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Conflict(EMAIL_TAKEN_MESSAGE.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
