use crate::db::error::RepositoryError;
use crate::db::schema::factory;
use crate::db::{DbConnection, DbPool};
use diesel::prelude::*;

/// Authorization resolver: maps an authenticated username to the set of
/// machines it may access, and gates single-machine access.
pub struct FactoryRepository {
    pool: DbPool,
}

impl FactoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(Into::into)
    }

    /// Toutes les machines enregistrées pour cet utilisateur.
    ///
    /// Zero ownership rows is a `NotFound`, never an empty success: callers
    /// must surface "no machines registered" explicitly.
    pub fn resolve_owned_machines(&self, username: &str) -> Result<Vec<i32>, RepositoryError> {
        let mut conn = self.conn()?;

        let machine_ids = factory::table
            .filter(factory::username.eq(username))
            .select(factory::id)
            .order(factory::id.asc())
            .load::<i32>(&mut conn)?;

        if machine_ids.is_empty() {
            return Err(RepositoryError::NotFound(
                "No machines found for this username".to_string(),
            ));
        }

        Ok(machine_ids)
    }

    /// True iff exactly this (machine, username) pairing exists.
    ///
    /// A missing machine and a machine owned by someone else are
    /// indistinguishable here; the caller turns `false` into a 403.
    pub fn authorize_machine_access(
        &self,
        username: &str,
        machine_id: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.conn()?;

        let row = factory::table
            .filter(factory::id.eq(machine_id))
            .filter(factory::username.eq(username))
            .select(factory::id)
            .first::<i32>(&mut conn)
            .optional()?;

        Ok(row.is_some())
    }
}
