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

mod apply;
mod command;
mod error;
mod ids;
mod join;
mod queries;
mod reports;
mod seed;
mod snapshot;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use ids::generated_assignment_id;
pub use join::{LenientJoin, RosterEntry, lenient_join};
pub use queries::{
    Anniversary, TeacherAssignments, UNKNOWN_DEPARTMENT_NAME, assignments_for_teacher,
    capacity_utilization, department_name, department_utilization, grouped_teacher_roster,
    grouped_teacher_roster_matching, orphaned_assignments, roster_for_department,
    service_anniversaries, teacher_profile, teacher_search,
};
pub use reports::{
    DashboardSummary, DepartmentLoad, TeacherService, dashboard_summary, department_distribution,
    department_load, teacher_service_report, tenure_distribution,
};
pub use seed::{SEED_ACADEMIC_YEAR, seed_state};
pub use state::{AppState, TransitionResult};
pub use store::RosterStore;
