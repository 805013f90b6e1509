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

mod dates;
mod error;
mod fields;
mod roster;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use dates::{
    default_span_days, format_long, format_long_span, format_short, format_slash, month_name,
    parse_month_name, parse_value_date, weekday_name,
};
pub use error::FormError;
pub use fields::{FieldType, ShowIf, TemplateField};
pub use roster::{
    GuardDutyEntry, IcRole, RecoveryCrew, RecoveryVehicleCrew, RegimentalEntry, RoutineOrderState,
    add_guard_duty_entry, resize_regimental_entries,
};
