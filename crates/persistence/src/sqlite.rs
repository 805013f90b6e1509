// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-backed storage for generation events.
//!
//! This module owns everything `SQLite`-specific: connection
//! initialization, migration execution, PRAGMA configuration, and the
//! `last_insert_rowid()` workaround for insert IDs. Queries themselves
//! go through the Diesel DSL.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::data_models::{GenerationEventRow, NewGenerationEvent};
use crate::diesel_schema::generation_events;
use crate::error::PersistenceError;

/// Embedded `SQLite` migrations, applied on connection.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite-backed store for generation events.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a new in-memory database and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        Self::new_with_url(":memory:")
    }

    /// Opens (or creates) a file-backed database and runs migrations.
    ///
    /// # Arguments
    ///
    /// * `path` - Filesystem path of the database file
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        Self::new_with_url(path)
    }

    fn new_with_url(database_url: &str) -> Result<Self, PersistenceError> {
        info!("Initializing SQLite database at: {}", database_url);

        let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

        // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(&mut conn)
            .map_err(|e| PersistenceError::DatabaseError(e.to_string()))?;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Inserts one generation event and returns its assigned ID.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to insert
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_generation_event(
        &mut self,
        event: &NewGenerationEvent,
    ) -> Result<i64, PersistenceError> {
        diesel::insert_into(generation_events::table)
            .values(event)
            .execute(&mut self.conn)?;

        // SQLite doesn't support RETURNING in all contexts, so query
        // last_insert_rowid() instead.
        let event_id: i64 =
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(&mut self.conn)?;

        debug!(event_id, template = %event.template, "Recorded generation event");
        Ok(event_id)
    }

    /// Lists the most recent generation events, newest first.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of rows to return
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_generation_events(
        &mut self,
        limit: i64,
    ) -> Result<Vec<GenerationEventRow>, PersistenceError> {
        let rows: Vec<GenerationEventRow> = generation_events::table
            .order(generation_events::event_id.desc())
            .limit(limit)
            .select(GenerationEventRow::as_select())
            .load(&mut self.conn)?;
        Ok(rows)
    }

    /// Counts how many events were recorded for one template key.
    ///
    /// # Arguments
    ///
    /// * `template` - The template key to count events for
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_for_template(&mut self, template: &str) -> Result<i64, PersistenceError> {
        let count: i64 = generation_events::table
            .filter(generation_events::template.eq(template))
            .count()
            .get_result(&mut self.conn)?;
        Ok(count)
    }
}
