// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::AppState;
use roster_domain::{
    DomainError, validate_academic_years, validate_assignment_ids_distinct, validate_departments,
    validate_teacher_ids_distinct,
};
use tracing::info;

impl AppState {
    /// Checks the invariants a loaded state must satisfy.
    ///
    /// Assignments that reference unknown teachers are allowed; queries
    /// handle them through the lenient join.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The department list is empty, repeats a department, or has a zero capacity
    /// - Two teachers or two assignments share an id
    /// - An academic year ends before it starts
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_departments(&self.departments)?;
        validate_teacher_ids_distinct(&self.teachers)?;
        validate_assignment_ids_distinct(&self.assignments)?;
        validate_academic_years(&self.academic_years)?;
        Ok(())
    }

    /// Encodes the state as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_snapshot_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|err| CoreError::Snapshot {
            reason: err.to_string(),
        })
    }

    /// Decodes and validates a state produced by [`Self::to_snapshot_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the decoded state
    /// fails [`Self::validate`].
    pub fn from_snapshot_json(json: &str) -> Result<Self, CoreError> {
        let state: Self = serde_json::from_str(json).map_err(|err| CoreError::Snapshot {
            reason: err.to_string(),
        })?;
        state.validate()?;

        info!(
            "Loaded snapshot with {} teachers and {} assignments",
            state.teachers.len(),
            state.assignments.len()
        );
        Ok(state)
    }
}
