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

mod catalog;
mod error;
mod tenure;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{standard_department, standard_departments};
pub use error::DomainError;
pub use tenure::{SERVICE_MILESTONES, TenureBracket, is_service_milestone, service_years};
pub use types::{
    AcademicYear, Assignment, AssignmentDraft, AssignmentId, Contact, Department, DepartmentName,
    Role, Teacher, TeacherId,
};
pub use validation::{
    validate_academic_years, validate_assignment_id_unique, validate_assignment_ids_distinct,
    validate_departments, validate_teacher_id_unique, validate_teacher_ids_distinct,
};
