use crate::db::error::RepositoryError;
use crate::db::models::machine::TelemetrySample;
use crate::db::schema::machine;
use crate::db::{DbConnection, DbPool};
use diesel::prelude::*;

/// Telemetry query engine: bounded, ordered reads over the `machine` table.
/// No aggregation, no gap-filling; missing intervals simply yield fewer rows.
pub struct MachineRepository {
    pool: DbPool,
}

impl MachineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(Into::into)
    }

    /// Le dernier échantillon de chaque machine demandée, newest first.
    ///
    /// `DISTINCT ON (id)` under `(id, timestamp DESC)` ordering picks the
    /// maximum-timestamp row per machine; `(id, timestamp)` is the table key,
    /// so one machine cannot carry two samples at the same instant. An empty
    /// id set is an empty result, not an error.
    pub fn latest_per_machine(
        &self,
        machine_ids: &[i32],
        cap: usize,
    ) -> Result<Vec<TelemetrySample>, RepositoryError> {
        if machine_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;

        let latest = machine::table
            .filter(machine::id.eq_any(machine_ids))
            .distinct_on(machine::id)
            .order((machine::id, machine::timestamp.desc()))
            .load::<TelemetrySample>(&mut conn)?;

        Ok(collate_newest_first(latest, cap))
    }

    /// L'historique d'une machine, newest first, truncated to `limit`.
    ///
    /// Zero rows for the machine is a `NotFound`.
    pub fn history(
        &self,
        machine_id: i32,
        limit: i64,
    ) -> Result<Vec<TelemetrySample>, RepositoryError> {
        let mut conn = self.conn()?;

        let rows = machine::table
            .filter(machine::id.eq(machine_id))
            .order(machine::timestamp.desc())
            .limit(limit)
            .load::<TelemetrySample>(&mut conn)?;

        if rows.is_empty() {
            return Err(RepositoryError::NotFound(
                "No data found for this machine".to_string(),
            ));
        }

        Ok(rows)
    }
}

/// Sorts one-row-per-machine results newest first (machine id ascending
/// breaks cross-machine timestamp ties) and truncates to the response cap.
fn collate_newest_first(mut samples: Vec<TelemetrySample>, cap: usize) -> Vec<TelemetrySample> {
    samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
    samples.truncate(cap);
    samples
}
