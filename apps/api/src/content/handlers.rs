use axum::{extract::State, Json};

use crate::content::{list_modules, list_resources, list_scenarios, run_seed, SeedSummary};
use crate::errors::AppError;
use crate::models::content::{ModuleRow, ResourceRow, ScenarioRow};
use crate::state::AppState;

/// GET /api/modules
pub async fn handle_list_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModuleRow>>, AppError> {
    Ok(Json(list_modules(&state.db).await?))
}

/// GET /api/scenarios
pub async fn handle_list_scenarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScenarioRow>>, AppError> {
    Ok(Json(list_scenarios(&state.db).await?))
}

/// GET /api/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceRow>>, AppError> {
    Ok(Json(list_resources(&state.db).await?))
}

/// POST /api/seed
pub async fn handle_seed(State(state): State<AppState>) -> Result<Json<SeedSummary>, AppError> {
    Ok(Json(run_seed(&state.db).await?))
}
