// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ids::{MintedIds, mint_assignment_ids};
use crate::state::{AppState, TransitionResult};
use roster_audit::{Action, AuditEvent};
use roster_domain::{
    Assignment, AssignmentDraft, TeacherId, validate_assignment_id_unique,
    validate_teacher_id_unique,
};
use tracing::debug;

/// Applies a command to the current state, producing a new state and audit event.
///
/// The input state is never modified. Update commands that match no record
/// succeed and return an unchanged copy of the state; the audit event
/// records that nothing matched.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - `AddTeacher` supplies an id that is already in use
/// - `AddAssignment` supplies an id that is already in use
pub fn apply(state: &AppState, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    debug!("Applying {} to {}", name, state.summary());

    let (new_state, details): (AppState, String) = match command {
        Command::AddTeacher { teacher } => {
            validate_teacher_id_unique(&teacher.id, &state.teachers)?;

            let details: String = format!("Added teacher '{}' ({})", teacher.id, teacher.name);
            let mut new_state: AppState = state.clone();
            new_state.teachers.push(teacher);
            (new_state, details)
        }
        Command::UpdateTeacher { teacher } => {
            let mut new_state: AppState = state.clone();
            let mut matched: bool = false;
            for existing in &mut new_state.teachers {
                if existing.id == teacher.id {
                    existing.clone_from(&teacher);
                    matched = true;
                }
            }

            let details: String = if matched {
                format!("Replaced teacher '{}'", teacher.id)
            } else {
                format!("No teacher with id '{}'; nothing replaced", teacher.id)
            };
            (new_state, details)
        }
        Command::AddAssignment { assignment } => {
            validate_assignment_id_unique(&assignment.id, &state.assignments)?;

            let details: String = format!(
                "Added assignment '{}' for teacher '{}' in {} ({})",
                assignment.id,
                assignment.teacher_id,
                assignment.department_id,
                assignment.academic_year
            );
            let mut new_state: AppState = state.clone();
            new_state.assignments.push(assignment);
            (new_state, details)
        }
        Command::UpdateAssignment { assignment } => {
            let mut new_state: AppState = state.clone();
            let mut matched: bool = false;
            for existing in &mut new_state.assignments {
                if existing.id == assignment.id {
                    existing.clone_from(&assignment);
                    matched = true;
                }
            }

            let details: String = if matched {
                format!("Replaced assignment '{}'", assignment.id)
            } else {
                format!("No assignment with id '{}'; nothing replaced", assignment.id)
            };
            (new_state, details)
        }
        Command::SetAcademicYear { year } => {
            let details: String = format!(
                "Academic year changed from {} to {year}",
                state.current_academic_year
            );
            let new_state: AppState = AppState {
                current_academic_year: year,
                ..state.clone()
            };
            (new_state, details)
        }
        Command::SetAssignmentsForTeacher {
            teacher_id,
            assignments,
        } => replace_teacher_assignments(state, &teacher_id, assignments),
    };

    let changed: bool = new_state != *state;
    let audit_event: AuditEvent = AuditEvent::new(
        Action::new(String::from(name), Some(details)),
        state.summary(),
        new_state.summary(),
        changed,
    );
    debug!("Applied {}: {}", name, audit_event);

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

/// Replaces every assignment of `teacher_id` with `drafts`.
///
/// Runs in two phases: existing assignments are partitioned into those of
/// other teachers (retained) and those of this teacher (removed), then each
/// draft receives a fresh id. The result is the retained list followed by
/// the new assignments.
fn replace_teacher_assignments(
    state: &AppState,
    teacher_id: &TeacherId,
    drafts: Vec<AssignmentDraft>,
) -> (AppState, String) {
    let (retained, removed): (Vec<Assignment>, Vec<Assignment>) = state
        .assignments
        .iter()
        .cloned()
        .partition(|assignment| &assignment.teacher_id != teacher_id);

    let minted: MintedIds =
        mint_assignment_ids(teacher_id, state.assignment_batch, drafts.len(), &retained);

    let added: usize = drafts.len();
    let mut assignments: Vec<Assignment> = retained;
    assignments.extend(
        minted
            .ids
            .into_iter()
            .zip(drafts)
            .map(|(id, draft)| Assignment::from_draft(id, teacher_id.clone(), draft)),
    );

    let new_state: AppState = AppState {
        assignments,
        assignment_batch: if added == 0 {
            state.assignment_batch
        } else {
            minted.batch.wrapping_add(1)
        },
        ..state.clone()
    };
    let details: String = format!(
        "Replaced assignments for teacher '{teacher_id}': removed {}, added {added} (batch {})",
        removed.len(),
        minted.batch
    );
    (new_state, details)
}
