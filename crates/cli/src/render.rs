// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text renderings of the roster views.
//!
//! Every function writes to any [`std::fmt::Write`] so the output can be
//! captured in tests.

use roster::{
    Anniversary, AppState, DashboardSummary, RosterEntry, TeacherAssignments,
    assignments_for_teacher, dashboard_summary, department_distribution, department_load,
    department_name, department_utilization, grouped_teacher_roster_matching,
    orphaned_assignments, roster_for_department, service_anniversaries, teacher_profile,
    teacher_service_report, tenure_distribution,
};
use roster_domain::{AcademicYear, Assignment, DepartmentName, Role, Teacher};
use std::fmt::{Result, Write};

fn percent(utilization: Option<u32>) -> String {
    utilization.map_or_else(|| String::from("n/a"), |value| format!("{value}%"))
}

fn write_assignment(out: &mut impl Write, state: &AppState, assignment: &Assignment) -> Result {
    write!(
        out,
        "    {}  {:<14} {}",
        assignment.academic_year,
        department_name(state, assignment.department_id),
        assignment.role
    )?;
    if let Some(remarks) = &assignment.remarks {
        write!(out, "  ({remarks})")?;
    }
    writeln!(out)
}

fn write_teacher_header(out: &mut impl Write, teacher: &Teacher) -> Result {
    let status: &str = if teacher.is_active { "active" } else { "inactive" };
    writeln!(
        out,
        "{} [{}] since {}, {}",
        teacher.name, teacher.id, teacher.start_year, status
    )
}

/// Headline counts, department load and upcoming anniversaries.
pub fn render_dashboard(out: &mut impl Write, state: &AppState, reference_year: u16) -> Result {
    let summary: DashboardSummary = dashboard_summary(state);
    write!(out, "Dashboard, academic year {}", state.current_academic_year)?;
    let calendar: Option<&AcademicYear> = state.academic_year(state.current_academic_year);
    if let Some(calendar) = calendar {
        write!(out, " ({} to {})", calendar.start_date, calendar.end_date)?;
    }
    writeln!(out)?;
    writeln!(out, "  Teachers:     {}", summary.total_teachers)?;
    writeln!(out, "  Active:       {}", summary.active_teachers)?;
    writeln!(out, "  Assignments:  {}", summary.current_assignments)?;
    writeln!(out, "  Departments:  {}", summary.departments)?;

    writeln!(out)?;
    writeln!(out, "Department load")?;
    for load in department_load(state, state.current_academic_year) {
        writeln!(
            out,
            "  {:<14} {:>3}/{:<3} {}",
            load.department.name,
            load.assigned,
            load.department.capacity,
            percent(load.utilization)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Service anniversaries in {reference_year}")?;
    let anniversaries: Vec<Anniversary<'_>> = service_anniversaries(&state.teachers, reference_year);
    if anniversaries.is_empty() {
        writeln!(out, "  none")?;
    }
    for anniversary in anniversaries {
        writeln!(
            out,
            "  {} - {} years",
            anniversary.teacher.name, anniversary.years
        )?;
    }
    Ok(())
}

/// The department catalog with current-year utilization.
pub fn render_departments(out: &mut impl Write, state: &AppState) -> Result {
    let year: u16 = state.current_academic_year;
    for department in &state.departments {
        writeln!(
            out,
            "{} (ages {}), {} slots, {} filled in {year}",
            department.name,
            department.age_group,
            department.capacity,
            percent(department_utilization(state, department.id, year))
        )?;
        for requirement in &department.requirements {
            writeln!(out, "  - {requirement}")?;
        }
    }
    Ok(())
}

/// One department's roster for the selected academic year.
///
/// With `role` set, only entries holding that role are listed; the header
/// still describes the whole roster.
pub fn render_department(
    out: &mut impl Write,
    state: &AppState,
    id: DepartmentName,
    role: Option<Role>,
) -> Result {
    let year: u16 = state.current_academic_year;
    let roster: Vec<RosterEntry<'_>> = roster_for_department(state, id, year);
    writeln!(
        out,
        "{} roster for {year}: {} teacher(s), {} of capacity",
        department_name(state, id),
        roster.len(),
        percent(department_utilization(state, id, year))
    )?;
    for entry in roster
        .iter()
        .filter(|entry| role.is_none_or(|role| entry.assignment.role == role))
    {
        write!(out, "  {:<20} {}", entry.teacher.name, entry.assignment.role)?;
        if let Some(remarks) = &entry.assignment.remarks {
            write!(out, "  ({remarks})")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Every teacher with assignments, grouped and sorted by name.
pub fn render_teachers(out: &mut impl Write, state: &AppState, search: Option<&str>) -> Result {
    let groups: Vec<TeacherAssignments<'_>> =
        grouped_teacher_roster_matching(state, search.unwrap_or_default());
    if groups.is_empty() {
        writeln!(out, "No assigned teachers found")?;
    }
    for group in groups {
        write_teacher_header(out, group.teacher)?;
        for assignment in group.assignments {
            write_assignment(out, state, assignment)?;
        }
    }
    Ok(())
}

/// One teacher's details and assignment history.
pub fn render_teacher(out: &mut impl Write, state: &AppState, teacher: &Teacher) -> Result {
    write_teacher_header(out, teacher)?;
    write!(out, "  phone: {}", teacher.contact.phone)?;
    if let Some(email) = &teacher.contact.email {
        write!(out, ", email: {email}")?;
    }
    writeln!(out)?;
    for assignment in assignments_for_teacher(state, &teacher.id) {
        write_assignment(out, state, assignment)?;
    }
    Ok(())
}

/// The first teacher matching `term`, with their history.
pub fn render_search(out: &mut impl Write, state: &AppState, term: &str) -> Result {
    match teacher_profile(state, term) {
        Some(profile) => {
            write_teacher_header(out, profile.teacher)?;
            for assignment in profile.assignments {
                write_assignment(out, state, assignment)?;
            }
            Ok(())
        }
        None => writeln!(out, "No teacher matching '{}'", term.trim()),
    }
}

/// Tenure and department distributions plus the service table.
pub fn render_reports(out: &mut impl Write, state: &AppState, reference_year: u16) -> Result {
    writeln!(out, "Tenure of active teachers in {reference_year}")?;
    for (bracket, count) in tenure_distribution(&state.teachers, reference_year) {
        writeln!(out, "  {:<12} {count}", bracket.label())?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Assignments per department in {}",
        state.current_academic_year
    )?;
    for (department, count) in department_distribution(state, state.current_academic_year) {
        writeln!(out, "  {:<14} {count}", department_name(state, department))?;
    }

    writeln!(out)?;
    writeln!(out, "Service length")?;
    for row in teacher_service_report(&state.teachers, reference_year) {
        writeln!(
            out,
            "  {:<20} {:>3} years  {}",
            row.teacher.name, row.years, row.bracket
        )?;
    }
    Ok(())
}

/// Assignments whose teacher does not exist.
pub fn render_orphans(out: &mut impl Write, state: &AppState) -> Result {
    let orphans: Vec<&Assignment> = orphaned_assignments(state);
    if orphans.is_empty() {
        return writeln!(out, "No orphaned assignments");
    }
    for assignment in orphans {
        writeln!(
            out,
            "{} references unknown teacher '{}'",
            assignment.id, assignment.teacher_id
        )?;
    }
    Ok(())
}
