// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Coy Forms generator.
//!
//! This crate translates between transport-level request/response DTOs
//! and the core generation engine. Core and domain errors are never
//! leaked directly; every failure is translated into an [`ApiError`]
//! that names the violated rule or the offending input field.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_form_error};
pub use handlers::{
    build_guard_duty, compose_routine_order, generate_form, list_generations, list_templates,
    prune_guard_duty, record_generation,
};
pub use request_response::{
    BuildGuardDutyRequest, FieldInfo, GenerateFormRequest, GenerateFormResponse, GenerationInfo,
    GuardDutyEntryPayload, GuardDutyListResponse, ListGenerationsResponse, ListTemplatesResponse,
    PruneGuardDutyRequest, PruneGuardDutyResponse, RecordGenerationRequest,
    RecordGenerationResponse, RecoveryCrewPayload, RecoveryVehicleCrewPayload,
    RegimentalEntryPayload, RoutineOrderRequest, RoutineOrderResponse, ShowIfInfo, TemplateInfo,
};
