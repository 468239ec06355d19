pub mod recipe;
pub mod user;

pub use recipe::{Recipe, RecipeParams};
pub use user::{AuthUser, User};
