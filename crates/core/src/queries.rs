// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views derived from an [`AppState`].
//!
//! Nothing here is cached; every call recomputes from the state it is given.

use crate::join::{RosterEntry, lenient_join};
use crate::state::AppState;
use roster_domain::{
    Assignment, Department, DepartmentName, Teacher, TeacherId, is_service_milestone,
    service_years,
};
use std::cmp::Ordering;

/// Display name used when a department id has no catalog entry.
pub const UNKNOWN_DEPARTMENT_NAME: &str = "Unknown";

/// The roster of a department for one academic year.
///
/// Assignments whose teacher is missing are left out.
#[must_use]
pub fn roster_for_department(
    state: &AppState,
    department: DepartmentName,
    year: u16,
) -> Vec<RosterEntry<'_>> {
    lenient_join(
        &state.teachers,
        state.assignments.iter().filter(|assignment| {
            assignment.department_id == department && assignment.academic_year == year
        }),
    )
    .entries
}

/// Percentage of a department's slots filled by `roster_size` teachers.
///
/// The value is `roster_size / capacity * 100` rounded to the nearest
/// integer, halves rounding up. It may exceed 100 for an over-filled
/// department.
///
/// Returns `None` when the department has no slots.
#[must_use]
pub fn capacity_utilization(department: &Department, roster_size: usize) -> Option<u32> {
    if department.capacity == 0 {
        return None;
    }

    let size: u64 = u64::try_from(roster_size).unwrap_or(u64::MAX);
    let capacity: u64 = u64::from(department.capacity);
    // round(size * 100 / capacity) == floor((200 * size + capacity) / (2 * capacity))
    let percent: u64 = size.saturating_mul(200).saturating_add(capacity) / (capacity * 2);
    Some(u32::try_from(percent).unwrap_or(u32::MAX))
}

/// Capacity utilization of a department's roster for `year`.
///
/// Returns `None` when the department is not in the catalog or has no slots.
#[must_use]
pub fn department_utilization(
    state: &AppState,
    department: DepartmentName,
    year: u16,
) -> Option<u32> {
    let entry: &Department = state.department(department)?;
    capacity_utilization(entry, roster_for_department(state, department, year).len())
}

/// All assignments of a teacher, most recent academic year first.
///
/// Assignments in the same year keep their stored order.
#[must_use]
pub fn assignments_for_teacher<'a>(
    state: &'a AppState,
    teacher_id: &TeacherId,
) -> Vec<&'a Assignment> {
    let mut assignments: Vec<&Assignment> = state
        .assignments
        .iter()
        .filter(|assignment| &assignment.teacher_id == teacher_id)
        .collect();
    sort_by_year_descending(&mut assignments);
    assignments
}

/// A teacher reaching a service milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anniversary<'a> {
    /// The teacher.
    pub teacher: &'a Teacher,
    /// Completed years of service.
    pub years: i32,
}

/// Teachers whose service length is exactly a milestone, longest first.
///
/// Teachers with equal service keep their order from `teachers`.
#[must_use]
pub fn service_anniversaries(teachers: &[Teacher], reference_year: u16) -> Vec<Anniversary<'_>> {
    let mut anniversaries: Vec<Anniversary<'_>> = teachers
        .iter()
        .map(|teacher| Anniversary {
            teacher,
            years: service_years(teacher, reference_year),
        })
        .filter(|anniversary| is_service_milestone(anniversary.years))
        .collect();
    anniversaries.sort_by(|a, b| b.years.cmp(&a.years));
    anniversaries
}

/// Finds the first teacher whose name contains `term`, ignoring case.
///
/// The term is trimmed first. A blank term matches nobody.
#[must_use]
pub fn teacher_search<'a>(state: &'a AppState, term: &str) -> Option<&'a Teacher> {
    let needle: String = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    state
        .teachers
        .iter()
        .find(|teacher| teacher.name.to_lowercase().contains(&needle))
}

/// A teacher together with their assignments, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherAssignments<'a> {
    /// The teacher.
    pub teacher: &'a Teacher,
    /// The teacher's assignments, most recent academic year first.
    pub assignments: Vec<&'a Assignment>,
}

/// Searches for a teacher and returns their full assignment history.
#[must_use]
pub fn teacher_profile<'a>(state: &'a AppState, term: &str) -> Option<TeacherAssignments<'a>> {
    let teacher: &Teacher = teacher_search(state, term)?;
    Some(TeacherAssignments {
        teacher,
        assignments: assignments_for_teacher(state, &teacher.id),
    })
}

/// Every teacher with at least one assignment, grouped.
///
/// Groups are sorted by teacher name, ignoring case; each group's
/// assignments are sorted most recent first.
#[must_use]
pub fn grouped_teacher_roster(state: &AppState) -> Vec<TeacherAssignments<'_>> {
    grouped_teacher_roster_matching(state, "")
}

/// Like [`grouped_teacher_roster`], restricted to teachers whose name
/// contains `term`, ignoring case. An empty term keeps every teacher.
#[must_use]
pub fn grouped_teacher_roster_matching<'a>(
    state: &'a AppState,
    term: &str,
) -> Vec<TeacherAssignments<'a>> {
    let needle: String = term.to_lowercase();
    let entries: Vec<RosterEntry<'a>> = lenient_join(&state.teachers, &state.assignments).entries;

    let mut groups: Vec<TeacherAssignments<'a>> = state
        .teachers
        .iter()
        .filter(|teacher| teacher.name.to_lowercase().contains(&needle))
        .filter_map(|teacher| {
            let mut assignments: Vec<&Assignment> = entries
                .iter()
                .filter(|entry| entry.teacher.id == teacher.id)
                .map(|entry| entry.assignment)
                .collect();
            if assignments.is_empty() {
                return None;
            }
            sort_by_year_descending(&mut assignments);
            Some(TeacherAssignments {
                teacher,
                assignments,
            })
        })
        .collect();

    groups.sort_by(|a, b| compare_names(&a.teacher.name, &b.teacher.name));
    groups
}

/// Assignments that reference a teacher who does not exist.
#[must_use]
pub fn orphaned_assignments(state: &AppState) -> Vec<&Assignment> {
    lenient_join(&state.teachers, &state.assignments).orphaned
}

/// Display name of a department, or [`UNKNOWN_DEPARTMENT_NAME`].
#[must_use]
pub fn department_name(state: &AppState, id: DepartmentName) -> &str {
    state
        .department(id)
        .map_or(UNKNOWN_DEPARTMENT_NAME, |department| department.name.as_str())
}

fn sort_by_year_descending(assignments: &mut [&Assignment]) {
    assignments.sort_by(|a, b| b.academic_year.cmp(&a.academic_year));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
