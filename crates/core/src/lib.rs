// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod guard_duty;
mod night_strength;
mod registry;
mod routine_order;
mod templates;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use engine::generate;
pub use guard_duty::{build_guard_duty_list, prune_guard_duty_list};
pub use night_strength::{NightStrengthAdjustment, adjust_night_strength};
pub use registry::{GenerateFn, TemplateDefinition, TemplateId, ValueMap, template_definition};
pub use routine_order::{build_routine_order, format_regimental_duties};
