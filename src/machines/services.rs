// src/machines/services.rs

use crate::db::DbPool;
use crate::db::repositories::factory_repository::FactoryRepository;
use crate::db::repositories::machine_repository::MachineRepository;
use crate::error::AppError;
use mechinsight_api::{MachineDetailResponse, MachineListResponse, TelemetryRecord};

/// Listing cap: at most this many latest-per-machine rows per response.
const LATEST_RECORDS_CAP: usize = 50;
/// History cap: at most this many samples per single-machine response.
const HISTORY_LIMIT: i64 = 40;

/// Orchestrates the retrieval pipeline: ownership resolution, telemetry
/// reads, response shaping. Identity arrives already verified (the extractor
/// has decoded the token); everything here trusts the username and nothing
/// else.
pub struct MachineService {
    factories: FactoryRepository,
    machines: MachineRepository,
}

impl MachineService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            factories: FactoryRepository::new(pool.clone()),
            machines: MachineRepository::new(pool),
        }
    }

    /// Le tableau de bord: dernier échantillon de chaque machine de
    /// l'utilisateur, newest first.
    pub fn list_machines(&self, username: &str) -> Result<MachineListResponse, AppError> {
        if username.is_empty() {
            return Err(AppError::invalid_input("Username is required"));
        }

        let machine_ids = self.factories.resolve_owned_machines(username)?;
        let latest = self
            .machines
            .latest_per_machine(&machine_ids, LATEST_RECORDS_CAP)?;

        tracing::debug!(
            username,
            returned = latest.len(),
            owned = machine_ids.len(),
            "Machine listing served"
        );

        Ok(MachineListResponse {
            username: username.to_string(),
            total_count: machine_ids.len(),
            returned_count: latest.len(),
            machines: latest.into_iter().map(TelemetryRecord::from).collect(),
        })
    }

    /// L'historique d'une machine, après contrôle de propriété.
    ///
    /// The id arrives as a raw path segment; anything that does not parse as
    /// a positive integer is rejected before touching the store. A failed
    /// ownership check answers 403 whether the machine exists or not.
    pub fn machine_detail(
        &self,
        username: &str,
        raw_machine_id: &str,
    ) -> Result<MachineDetailResponse, AppError> {
        let machine_id = parse_machine_id(raw_machine_id)?;

        if !self.factories.authorize_machine_access(username, machine_id)? {
            return Err(AppError::forbidden("Access denied or machine not found"));
        }

        let rows = self.machines.history(machine_id, HISTORY_LIMIT)?;

        Ok(MachineDetailResponse {
            machine_id,
            username: username.to_string(),
            data_points: rows.len(),
            time_series_data: rows.into_iter().map(TelemetryRecord::from).collect(),
        })
    }
}

fn parse_machine_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input("Machine ID is required"))
}
