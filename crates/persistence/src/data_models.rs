// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::generation_events;

/// A generation event as stored in the database.
///
/// Each row records one successful form generation: which template
/// produced it, the field values the user submitted (as JSON), and
/// when it happened.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = generation_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GenerationEventRow {
    pub event_id: i64,
    pub template: String,
    pub template_type: String,
    pub fields_json: String,
    pub user_agent: Option<String>,
    pub created_at: String,
}

/// Insertable form of a generation event (no `event_id`; the database
/// assigns it).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = generation_events)]
pub struct NewGenerationEvent {
    pub template: String,
    pub template_type: String,
    pub fields_json: String,
    pub user_agent: Option<String>,
    pub created_at: String,
}
