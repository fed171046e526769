// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{Assignment, AssignmentDraft, Teacher, TeacherId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new teacher. The caller supplies the id.
    AddTeacher {
        /// The teacher to add.
        teacher: Teacher,
    },
    /// Replace the teacher that has the same id.
    UpdateTeacher {
        /// The full replacement record.
        teacher: Teacher,
    },
    /// Add a new assignment. The caller supplies the id.
    AddAssignment {
        /// The assignment to add.
        assignment: Assignment,
    },
    /// Replace the assignment that has the same id.
    UpdateAssignment {
        /// The full replacement record.
        assignment: Assignment,
    },
    /// Select the academic year the views are filtered by.
    SetAcademicYear {
        /// The year to select.
        year: u16,
    },
    /// Replace every assignment of a teacher with a new list.
    ///
    /// Assignments of the teacher that are not in the new list are deleted.
    SetAssignmentsForTeacher {
        /// The teacher whose assignments are replaced.
        teacher_id: TeacherId,
        /// The new assignments, without ids.
        assignments: Vec<AssignmentDraft>,
    },
}

impl Command {
    /// Returns the name used for this command in audit events and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddTeacher { .. } => "AddTeacher",
            Self::UpdateTeacher { .. } => "UpdateTeacher",
            Self::AddAssignment { .. } => "AddAssignment",
            Self::UpdateAssignment { .. } => "UpdateAssignment",
            Self::SetAcademicYear { .. } => "SetAcademicYear",
            Self::SetAssignmentsForTeacher { .. } => "SetAssignmentsForTeacher",
        }
    }
}
