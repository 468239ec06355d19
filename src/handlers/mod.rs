pub mod auth;
pub mod recipes;
