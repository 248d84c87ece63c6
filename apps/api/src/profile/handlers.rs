use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::{ProfilePatch, UserProfileRow};
use crate::profile::{get_or_create_profile, update_profile, DEFAULT_ACCOUNT};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AccountQuery {
    pub account: Option<String>,
}

impl AccountQuery {
    fn account_id(&self) -> &str {
        self.account.as_deref().unwrap_or(DEFAULT_ACCOUNT)
    }
}

/// GET /api/user
/// Returns the account's profile, creating a default one if none exists.
pub async fn handle_get_user(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<UserProfileRow>, AppError> {
    let profile = get_or_create_profile(&state.db, params.account_id()).await?;
    Ok(Json(profile))
}

/// PUT /api/user
/// Applies the given fields to the account's profile and returns the updated row.
pub async fn handle_update_user(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UserProfileRow>, AppError> {
    let profile = update_profile(&state.db, params.account_id(), patch).await?;
    Ok(Json(profile))
}
