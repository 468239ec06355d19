use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Recipe, User};
use crate::store::{RecipeStore, StoreError, UserStore, EMAIL_TAKEN_MESSAGE};

/// Map-backed recipe store for tests and database-less development runs.
#[derive(Debug, Default)]
pub struct MemoryRecipeStore {
    recipes: RwLock<HashMap<Uuid, Recipe>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = self.recipes.read().await;
        let mut all: Vec<Recipe> = recipes.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        Ok(self.recipes.read().await.get(&id).cloned())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), StoreError> {
        self.recipes.write().await.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;
        match recipes.get_mut(&recipe.id) {
            Some(stored) => {
                *stored = recipe.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound("Recipe not found".to_string())),
        }
    }
}

/// Map-backed user store with the same unique-email contract as the
/// relational one.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}
