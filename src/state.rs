use std::sync::Arc;

use crate::auth::{AuthProvider, JwtAuthProvider};
use crate::store::{MemoryRecipeStore, MemoryUserStore, RecipeStore, UserStore};

/// Shared handler dependencies. Stores and the credential resolver sit
/// behind trait objects so tests and database-less runs can swap them.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeStore>,
    pub users: Arc<dyn UserStore>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn new(
        recipes: Arc<dyn RecipeStore>,
        users: Arc<dyn UserStore>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            recipes,
            users,
            auth,
        }
    }

    /// Memory-backed state with JWT auth. Used by tests and when no
    /// `DATABASE_URL` is configured.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRecipeStore::new()),
            Arc::new(MemoryUserStore::new()),
            Arc::new(JwtAuthProvider),
        )
    }
}
