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
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Represents the specific action performed.
///
/// An action describes what state change was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`AddTeacher`", "`SetAcademicYear`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact description of the roster at a point in time.
///
/// Summaries hold entity counts and the selected academic year, not the
/// entities themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    /// Number of teachers.
    pub teachers: usize,
    /// Number of assignments.
    pub assignments: usize,
    /// The selected academic year.
    pub academic_year: u16,
}

impl StateSummary {
    /// Creates a new `StateSummary`.
    #[must_use]
    pub const fn new(teachers: usize, assignments: usize, academic_year: u16) -> Self {
        Self {
            teachers,
            assignments,
            academic_year,
        }
    }
}

impl std::fmt::Display for StateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "teachers_count={},assignments_count={},academic_year={}",
            self.teachers, self.assignments, self.academic_year
        )
    }
}

/// An immutable audit event representing a state transition.
///
/// Every applied command produces exactly one audit event, including
/// commands that matched nothing and left the roster unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSummary,
    /// The state after the transition.
    pub after: StateSummary,
    /// Whether the transition modified any entity.
    pub changed: bool,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `changed` - Whether any entity was modified
    #[must_use]
    pub const fn new(
        action: Action,
        before: StateSummary,
        after: StateSummary,
        changed: bool,
    ) -> Self {
        Self {
            action,
            before,
            after,
            changed,
        }
    }
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action.name)?;
        if let Some(details) = &self.action.details {
            write!(f, ": {details}")?;
        }
        write!(f, " [{} -> {}]", self.before, self.after)
    }
}
