use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::models::User;
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub user: RegisterParams,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Issued credential plus the public view of the account.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// POST /v1/auth/register - Create an account and issue a token
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> ApiResult<TokenResponse> {
    let name = required(body.user.name, "Name")?;
    let email = required(body.user.email, "Email")?;
    let password = required(body.user.password, "Password")?;

    let salt = Uuid::new_v4().to_string();
    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_digest: auth::hash_password(&password, &salt),
        password_salt: salt,
        created_at: Utc::now(),
    };

    // Duplicate email surfaces as a 422 conflict message
    state.users.insert(&user).await?;
    tracing::info!(user_id = %user.id, "user registered");

    let token = issue_token(&user)?;
    Ok(ApiResponse::created(TokenResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// POST /v1/auth/login - Exchange email and password for a token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> ApiResult<TokenResponse> {
    let user = state
        .users
        .find_by_email(&body.email)
        .await?
        .filter(|u| auth::verify_password(u, &body.password))
        .ok_or_else(ApiError::unauthenticated)?;

    let token = issue_token(&user)?;
    Ok(ApiResponse::success(TokenResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

fn issue_token(user: &User) -> Result<String, ApiError> {
    auth::issue_token(user.id, &user.name).map_err(|e| {
        tracing::error!("token issuance failed: {}", e);
        ApiError::internal("Failed to issue credential")
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{} can't be blank", field))),
    }
}
