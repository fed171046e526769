// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate figures for the dashboard and reports views.

use crate::queries::capacity_utilization;
use crate::state::AppState;
use roster_domain::{Department, DepartmentName, Teacher, TenureBracket, service_years};

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    /// All teachers, active or not.
    pub total_teachers: usize,
    /// Teachers currently serving.
    pub active_teachers: usize,
    /// Assignments in the selected academic year.
    pub current_assignments: usize,
    /// Departments in the catalog.
    pub departments: usize,
}

/// Computes the dashboard headline counts for the selected academic year.
#[must_use]
pub fn dashboard_summary(state: &AppState) -> DashboardSummary {
    DashboardSummary {
        total_teachers: state.teachers.len(),
        active_teachers: state
            .teachers
            .iter()
            .filter(|teacher| teacher.is_active)
            .count(),
        current_assignments: state
            .assignments
            .iter()
            .filter(|assignment| assignment.academic_year == state.current_academic_year)
            .count(),
        departments: state.departments.len(),
    }
}

/// How full one department is in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentLoad<'a> {
    /// The department.
    pub department: &'a Department,
    /// Assignments in the department for the year, counted whether or not
    /// their teacher exists.
    pub assigned: usize,
    /// Filled percentage, `None` when the department has no slots.
    pub utilization: Option<u32>,
}

/// Load of every department for `year`, in catalog order.
#[must_use]
pub fn department_load(state: &AppState, year: u16) -> Vec<DepartmentLoad<'_>> {
    state
        .departments
        .iter()
        .map(|department| {
            let assigned: usize = state
                .assignments
                .iter()
                .filter(|assignment| {
                    assignment.academic_year == year && assignment.department_id == department.id
                })
                .count();
            DepartmentLoad {
                department,
                assigned,
                utilization: capacity_utilization(department, assigned),
            }
        })
        .collect()
}

/// Number of assignments per department in `year`.
///
/// Only departments with at least one assignment are listed, in
/// [`DepartmentName::ALL`] order. Assignments are counted whether or not
/// their teacher exists.
#[must_use]
pub fn department_distribution(state: &AppState, year: u16) -> Vec<(DepartmentName, usize)> {
    DepartmentName::ALL
        .into_iter()
        .map(|department| {
            let count: usize = state
                .assignments
                .iter()
                .filter(|assignment| {
                    assignment.academic_year == year && assignment.department_id == department
                })
                .count();
            (department, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Number of active teachers per tenure bracket.
///
/// All four brackets are listed in ascending order, including empty ones.
#[must_use]
pub fn tenure_distribution(
    teachers: &[Teacher],
    reference_year: u16,
) -> Vec<(TenureBracket, usize)> {
    TenureBracket::ALL
        .into_iter()
        .map(|bracket| {
            let count: usize = teachers
                .iter()
                .filter(|teacher| {
                    teacher.is_active
                        && TenureBracket::from_service_years(service_years(teacher, reference_year))
                            == bracket
                })
                .count();
            (bracket, count)
        })
        .collect()
}

/// Service length of one teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherService<'a> {
    /// The teacher.
    pub teacher: &'a Teacher,
    /// Years of service as of the reference year.
    pub years: i32,
    /// The bracket `years` falls into.
    pub bracket: TenureBracket,
}

/// Service length of every teacher, longest first.
#[must_use]
pub fn teacher_service_report(
    teachers: &[Teacher],
    reference_year: u16,
) -> Vec<TeacherService<'_>> {
    let mut report: Vec<TeacherService<'_>> = teachers
        .iter()
        .map(|teacher| {
            let years: i32 = service_years(teacher, reference_year);
            TeacherService {
                teacher,
                years,
                bracket: TenureBracket::from_service_years(years),
            }
        })
        .collect();
    report.sort_by(|a, b| b.years.cmp(&a.years));
    report
}
