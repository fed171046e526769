// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_audit::{AuditEvent, StateSummary};
use roster_domain::{
    AcademicYear, Assignment, AssignmentId, Department, DepartmentName, Teacher, TeacherId,
    standard_departments,
};
use serde::{Deserialize, Serialize};

/// The complete roster: every entity plus the selected academic year.
///
/// A state value is never modified by a command. Commands produce a new
/// value and leave the previous one intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All teachers, in insertion order.
    pub teachers: Vec<Teacher>,
    /// The department reference list.
    pub departments: Vec<Department>,
    /// All assignments, in insertion order.
    pub assignments: Vec<Assignment>,
    /// The academic-year calendar.
    pub academic_years: Vec<AcademicYear>,
    /// The academic year views are filtered by.
    pub current_academic_year: u16,
    /// Number of generated assignment batches so far.
    ///
    /// Advanced by every `SetAssignmentsForTeacher` so generated ids never
    /// repeat across invocations.
    #[serde(default)]
    pub assignment_batch: u64,
}

impl AppState {
    /// Creates an empty roster over the standard department catalog.
    ///
    /// # Arguments
    ///
    /// * `current_academic_year` - The initially selected academic year
    #[must_use]
    pub fn new(current_academic_year: u16) -> Self {
        Self {
            teachers: Vec::new(),
            departments: standard_departments(),
            assignments: Vec::new(),
            academic_years: Vec::new(),
            current_academic_year,
            assignment_batch: 0,
        }
    }

    /// Summarizes the state for audit purposes.
    #[must_use]
    pub fn summary(&self) -> StateSummary {
        StateSummary::new(
            self.teachers.len(),
            self.assignments.len(),
            self.current_academic_year,
        )
    }

    /// Looks up a teacher by id.
    #[must_use]
    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| &teacher.id == id)
    }

    /// Looks up a department by id.
    #[must_use]
    pub fn department(&self, id: DepartmentName) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| department.id == id)
    }

    /// Looks up an assignment by id.
    #[must_use]
    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|assignment| &assignment.id == id)
    }

    /// Looks up the calendar entry for a year.
    #[must_use]
    pub fn academic_year(&self, year: u16) -> Option<&AcademicYear> {
        self.academic_years.iter().find(|entry| entry.year == year)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: AppState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
