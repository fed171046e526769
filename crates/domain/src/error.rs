// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AssignmentId, DepartmentName, TeacherId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A teacher with this identifier already exists.
    DuplicateTeacherId(TeacherId),
    /// An assignment with this identifier already exists.
    DuplicateAssignmentId(AssignmentId),
    /// The same department appears more than once in the department list.
    DuplicateDepartment(DepartmentName),
    /// The department list is empty.
    NoDepartments,
    /// A department has no teacher slots.
    InvalidCapacity {
        /// The department with the invalid capacity.
        department: DepartmentName,
        /// The rejected capacity.
        capacity: u32,
    },
    /// The string does not name a known department.
    UnknownDepartment(String),
    /// The string does not name a known role.
    UnknownRole(String),
    /// An academic year ends before it starts.
    InvalidAcademicYear {
        /// The year label.
        year: u16,
        /// Description of the problem.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTeacherId(id) => {
                write!(f, "Teacher with id '{id}' already exists")
            }
            Self::DuplicateAssignmentId(id) => {
                write!(f, "Assignment with id '{id}' already exists")
            }
            Self::DuplicateDepartment(department) => {
                write!(f, "Department '{department}' is listed more than once")
            }
            Self::NoDepartments => write!(f, "At least one department is required"),
            Self::InvalidCapacity {
                department,
                capacity,
            } => {
                write!(
                    f,
                    "Invalid capacity {capacity} for department '{department}'. Must be greater than 0"
                )
            }
            Self::UnknownDepartment(name) => write!(f, "Unknown department: {name}"),
            Self::UnknownRole(name) => write!(f, "Unknown role: {name}"),
            Self::InvalidAcademicYear { year, reason } => {
                write!(f, "Invalid academic year {year}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
