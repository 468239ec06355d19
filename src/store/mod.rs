use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Recipe, User};

pub mod memory;
pub mod postgres;

pub use memory::{MemoryRecipeStore, MemoryUserStore};
pub use postgres::{PgRecipeStore, PgUserStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Durable recipe records. One record per round trip; `update` replaces
/// all mutable fields of an existing record in a single write.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Recipe>, StoreError>;
    async fn insert(&self, recipe: &Recipe) -> Result<(), StoreError>;
    async fn update(&self, recipe: &Recipe) -> Result<(), StoreError>;
}

/// Registered accounts, looked up by email at login and inserted at
/// registration. Emails are unique; a duplicate insert is a `Conflict`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}

pub const EMAIL_TAKEN_MESSAGE: &str = "Email has already been taken";
