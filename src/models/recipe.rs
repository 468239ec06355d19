use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 255;
pub const INGREDIENTS_MAX_CHARS: usize = 5000;
pub const DIRECTIONS_MAX_CHARS: usize = 5000;

/// A shared recipe. The owner is set at creation and never reassigned;
/// updates may only touch `title`, `ingredients` and `directions`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub directions: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-submitted recipe fields. Any subset may be present; omitted
/// fields are left untouched on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
}

/// Field constraint violation, rendered in the message format clients of
/// the original service already parse ("Ingredients is too long (maximum
/// is 5000 characters)").
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} can't be blank")]
    Blank(&'static str),
    #[error("{field} is too long (maximum is {max} characters)")]
    TooLong { field: &'static str, max: usize },
}

impl Recipe {
    /// Build a new recipe owned by `user_id` from submitted params.
    /// Missing fields default to empty and are caught by `validate`.
    pub fn create(user_id: Uuid, params: RecipeParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: params.title.unwrap_or_default(),
            ingredients: params.ingredients.unwrap_or_default(),
            directions: params.directions.unwrap_or_default(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Working copy with `params` applied. The stored record is untouched
    /// until the caller validates the copy and commits it.
    pub fn apply(&self, params: &RecipeParams) -> Self {
        let mut next = self.clone();
        if let Some(title) = &params.title {
            next.title = title.clone();
        }
        if let Some(ingredients) = &params.ingredients {
            next.ingredients = ingredients.clone();
        }
        if let Some(directions) = &params.directions {
            next.directions = directions.clone();
        }
        next.updated_at = Utc::now();
        next
    }

    /// Ownership predicate: only the creator may mutate a recipe.
    pub fn owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Check all field constraints, reporting the first violation in
    /// declaration order. All-or-nothing: callers must not persist any
    /// field of an invalid record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field("Title", &self.title, TITLE_MAX_CHARS)?;
        check_field("Ingredients", &self.ingredients, INGREDIENTS_MAX_CHARS)?;
        check_field("Directions", &self.directions, DIRECTIONS_MAX_CHARS)?;
        Ok(())
    }
}

fn check_field(name: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(name));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field: name, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_recipe() -> Recipe {
        Recipe::create(
            Uuid::new_v4(),
            RecipeParams {
                title: Some("Cookies".to_string()),
                ingredients: Some("Cookie ingredients, chocolate chips.".to_string()),
                directions: Some("Make the cookies.".to_string()),
            },
        )
    }

    #[test]
    fn valid_recipe_passes() {
        assert_eq!(cookie_recipe().validate(), Ok(()));
    }

    #[test]
    fn overlong_ingredients_message_is_exact() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            ingredients: Some("New cookie mix, more chocolate.".repeat(200)),
            ..Default::default()
        });
        let err = recipe.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ingredients is too long (maximum is 5000 characters)"
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            title: Some("   ".to_string()),
            ..Default::default()
        });
        let err = recipe.validate().unwrap_err();
        assert_eq!(err.to_string(), "Title can't be blank");
    }

    #[test]
    fn apply_leaves_omitted_fields_untouched() {
        let original = cookie_recipe();
        let updated = original.apply(&RecipeParams {
            title: Some("New Cookies".to_string()),
            ..Default::default()
        });
        assert_eq!(updated.title, "New Cookies");
        assert_eq!(updated.ingredients, original.ingredients);
        assert_eq!(updated.directions, original.directions);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.user_id, original.user_id);
    }

    #[test]
    fn ownership_is_exact_id_match() {
        let recipe = cookie_recipe();
        assert!(recipe.owned_by(recipe.user_id));
        assert!(!recipe.owned_by(Uuid::new_v4()));
    }

    #[test]
    fn overlong_title_message_is_exact() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            title: Some("x".repeat(TITLE_MAX_CHARS + 1)),
            ..Default::default()
        });
        let err = recipe.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Title is too long (maximum is 255 characters)"
        );
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            title: Some("x".repeat(TITLE_MAX_CHARS)),
            ..Default::default()
        });
        assert_eq!(recipe.validate(), Ok(()));
    }

    #[test]
    fn overlong_directions_message_is_exact() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            directions: Some("x".repeat(DIRECTIONS_MAX_CHARS + 1)),
            ..Default::default()
        });
        let err = recipe.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Directions is too long (maximum is 5000 characters)"
        );
    }

    #[test]
    fn directions_at_limit_are_accepted() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            directions: Some("x".repeat(DIRECTIONS_MAX_CHARS)),
            ..Default::default()
        });
        assert_eq!(recipe.validate(), Ok(()));
    }

    #[test]
    fn ingredients_at_limit_are_accepted() {
        let recipe = cookie_recipe().apply(&RecipeParams {
            ingredients: Some("x".repeat(INGREDIENTS_MAX_CHARS)),
            ..Default::default()
        });
        assert_eq!(recipe.validate(), Ok(()));
    }
}
