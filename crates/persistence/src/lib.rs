// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Coy Forms generation-event analytics.
//!
//! Every successful generation may be recorded as one append-only row:
//! the template key, its display name, the submitted field values as a
//! JSON blob, and the caller's user agent. Delivery is best-effort and
//! fully decoupled from generation; nothing in the core depends on a
//! write succeeding.
//!
//! `SQLite` is the only backend. In-memory databases serve tests and
//! development; file-backed databases serve deployments.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

mod data_models;
mod diesel_schema;
mod error;
mod sqlite;

pub use data_models::{GenerationEventRow, NewGenerationEvent};
pub use error::PersistenceError;
pub use sqlite::SqlitePersistence;
