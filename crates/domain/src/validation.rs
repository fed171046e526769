// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AcademicYear, Assignment, AssignmentId, Department, Teacher, TeacherId};
use std::collections::HashSet;

/// Validates the department reference list.
///
/// # Errors
///
/// Returns an error if:
/// - The list is empty
/// - A department appears more than once
/// - A department has a capacity of zero
pub fn validate_departments(departments: &[Department]) -> Result<(), DomainError> {
    if departments.is_empty() {
        return Err(DomainError::NoDepartments);
    }

    let mut seen: HashSet<_> = HashSet::new();
    for department in departments {
        if !seen.insert(department.id) {
            return Err(DomainError::DuplicateDepartment(department.id));
        }
        if department.capacity == 0 {
            return Err(DomainError::InvalidCapacity {
                department: department.id,
                capacity: department.capacity,
            });
        }
    }

    Ok(())
}

/// Validates that `id` is not already used by one of `existing`.
///
/// # Errors
///
/// Returns an error if a teacher with the same id exists.
pub fn validate_teacher_id_unique(id: &TeacherId, existing: &[Teacher]) -> Result<(), DomainError> {
    if existing.iter().any(|teacher| &teacher.id == id) {
        return Err(DomainError::DuplicateTeacherId(id.clone()));
    }
    Ok(())
}

/// Validates that `id` is not already used by one of `existing`.
///
/// # Errors
///
/// Returns an error if an assignment with the same id exists.
pub fn validate_assignment_id_unique(
    id: &AssignmentId,
    existing: &[Assignment],
) -> Result<(), DomainError> {
    if existing.iter().any(|assignment| &assignment.id == id) {
        return Err(DomainError::DuplicateAssignmentId(id.clone()));
    }
    Ok(())
}

/// Validates that every teacher id in the list is distinct.
///
/// # Errors
///
/// Returns the first repeated id.
pub fn validate_teacher_ids_distinct(teachers: &[Teacher]) -> Result<(), DomainError> {
    let mut seen: HashSet<&TeacherId> = HashSet::new();
    for teacher in teachers {
        if !seen.insert(&teacher.id) {
            return Err(DomainError::DuplicateTeacherId(teacher.id.clone()));
        }
    }
    Ok(())
}

/// Validates that every assignment id in the list is distinct.
///
/// # Errors
///
/// Returns the first repeated id.
pub fn validate_assignment_ids_distinct(assignments: &[Assignment]) -> Result<(), DomainError> {
    let mut seen: HashSet<&AssignmentId> = HashSet::new();
    for assignment in assignments {
        if !seen.insert(&assignment.id) {
            return Err(DomainError::DuplicateAssignmentId(assignment.id.clone()));
        }
    }
    Ok(())
}

/// Validates that each academic year ends on or after its start.
///
/// # Errors
///
/// Returns an error for the first year whose end date precedes its start date.
pub fn validate_academic_years(years: &[AcademicYear]) -> Result<(), DomainError> {
    for year in years {
        if year.end_date < year.start_date {
            return Err(DomainError::InvalidAcademicYear {
                year: year.year,
                reason: format!(
                    "end date {} is before start date {}",
                    year.end_date, year.start_date
                ),
            });
        }
    }
    Ok(())
}
