// src/handlers/machine.rs

use axum::{
    Json,
    extract::{Path, State},
};
use mechinsight_api::{MachineDetailResponse, MachineListResponse};

use crate::app::AppState;
use crate::auth::extractors::AuthUser;
use crate::error::AppError;

/// POST /machine_details
/// Dernier échantillon de chaque machine de l'utilisateur authentifié
pub async fn machine_details(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MachineListResponse>, AppError> {
    let response = state.machines.list_machines(&user.username)?;
    Ok(Json(response))
}

/// GET /machine_details/{machineId}
/// Historique d'une machine, après contrôle de propriété
pub async fn machine_detail_by_id(
    Path(machine_id): Path<String>,
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MachineDetailResponse>, AppError> {
    let response = state.machines.machine_detail(&user.username, &machine_id)?;
    Ok(Json(response))
}
