// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TEST_YEAR, create_test_assignment, create_test_state, create_test_teacher,
};
use crate::{
    Anniversary, AppState, RosterEntry, TeacherAssignments, UNKNOWN_DEPARTMENT_NAME,
    assignments_for_teacher, capacity_utilization, department_name, department_utilization,
    grouped_teacher_roster, grouped_teacher_roster_matching, orphaned_assignments,
    roster_for_department, service_anniversaries, teacher_profile, teacher_search,
};
use roster_domain::{
    Assignment, Department, DepartmentName, Teacher, TeacherId, standard_department,
};

#[test]
fn test_roster_for_department_filters_by_department_and_year() {
    let state: AppState = create_test_state();

    let roster: Vec<RosterEntry<'_>> =
        roster_for_department(&state, DepartmentName::Primary, TEST_YEAR);

    let names: Vec<&str> = roster.iter().map(|entry| entry.teacher.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "Peter Jones"]);
    assert!(roster.iter().all(|entry| entry.assignment.academic_year == TEST_YEAR));
}

#[test]
fn test_roster_for_department_drops_orphans() {
    let mut state: AppState = create_test_state();
    state.assignments.push(create_test_assignment(
        "a100",
        "ghost",
        DepartmentName::Primary,
        TEST_YEAR,
    ));

    let roster: Vec<RosterEntry<'_>> =
        roster_for_department(&state, DepartmentName::Primary, TEST_YEAR);

    assert_eq!(roster.len(), 2);
    assert_eq!(orphaned_assignments(&state).len(), 1);
}

#[test]
fn test_roster_for_empty_department_is_empty() {
    let state: AppState = create_test_state();

    assert!(roster_for_department(&state, DepartmentName::Adult, TEST_YEAR).is_empty());
}

#[test]
fn test_capacity_utilization_examples() {
    let mut department: Department = standard_department(DepartmentName::Beginner);
    department.capacity = 20;

    assert_eq!(capacity_utilization(&department, 0), Some(0));
    assert_eq!(capacity_utilization(&department, 10), Some(50));
    assert_eq!(capacity_utilization(&department, 20), Some(100));
    assert_eq!(capacity_utilization(&department, 30), Some(150));
}

#[test]
fn test_capacity_utilization_rounds_half_up() {
    let mut department: Department = standard_department(DepartmentName::Beginner);

    department.capacity = 8;
    assert_eq!(capacity_utilization(&department, 1), Some(13));

    department.capacity = 3;
    assert_eq!(capacity_utilization(&department, 1), Some(33));
    assert_eq!(capacity_utilization(&department, 2), Some(67));
}

#[test]
fn test_capacity_utilization_of_zero_capacity_is_none() {
    let mut department: Department = standard_department(DepartmentName::Beginner);
    department.capacity = 0;

    assert_eq!(capacity_utilization(&department, 4), None);
}

#[test]
fn test_department_utilization_is_idempotent() {
    let state: AppState = create_test_state();

    let first: Option<u32> = department_utilization(&state, DepartmentName::Primary, TEST_YEAR);
    let second: Option<u32> = department_utilization(&state, DepartmentName::Primary, TEST_YEAR);

    // 2 of 25 slots
    assert_eq!(first, Some(8));
    assert_eq!(first, second);
}

#[test]
fn test_assignments_for_teacher_sorted_by_year_descending() {
    let mut state: AppState = create_test_state();
    state.assignments.push(create_test_assignment(
        "a010",
        "t001",
        DepartmentName::Senior,
        2025,
    ));

    let assignments: Vec<&Assignment> = assignments_for_teacher(&state, &TeacherId::new("t001"));

    let years: Vec<u16> = assignments.iter().map(|a| a.academic_year).collect();
    assert_eq!(years, vec![2025, 2024, 2023]);
}

#[test]
fn test_assignments_for_unknown_teacher_is_empty() {
    let state: AppState = create_test_state();

    assert!(assignments_for_teacher(&state, &TeacherId::new("t404")).is_empty());
}

#[test]
fn test_service_anniversaries_selects_milestones_longest_first() {
    let reference_year: u16 = 2024;
    let teachers: Vec<Teacher> = vec![
        create_test_teacher("t005", "Five Years", reference_year - 5),
        create_test_teacher("t007", "Seven Years", reference_year - 7),
        create_test_teacher("t010", "Ten Years", reference_year - 10),
    ];

    let anniversaries: Vec<Anniversary<'_>> = service_anniversaries(&teachers, reference_year);

    let found: Vec<(&str, i32)> = anniversaries
        .iter()
        .map(|anniversary| (anniversary.teacher.id.value(), anniversary.years))
        .collect();
    assert_eq!(found, vec![("t010", 10), ("t005", 5)]);
}

#[test]
fn test_teacher_search_is_case_insensitive_substring() {
    let state: AppState = create_test_state();

    let found: Option<&Teacher> = teacher_search(&state, "smith");

    assert_eq!(found.map(|teacher| teacher.name.as_str()), Some("Jane Smith"));
    assert!(teacher_search(&state, "zzz").is_none());
}

#[test]
fn test_teacher_search_returns_first_match_only() {
    let state: AppState = create_test_state();

    // both names contain an "e"
    let found: Option<&Teacher> = teacher_search(&state, "E");

    assert_eq!(found.map(|teacher| teacher.id.value()), Some("t001"));
}

#[test]
fn test_teacher_search_trims_and_ignores_blank_terms() {
    let state: AppState = create_test_state();

    assert!(teacher_search(&state, "   ").is_none());
    assert!(teacher_search(&state, "").is_none());
    assert_eq!(
        teacher_search(&state, "  JONES ").map(|teacher| teacher.id.value()),
        Some("t002")
    );
}

#[test]
fn test_teacher_profile_includes_sorted_history() {
    let state: AppState = create_test_state();

    let profile: TeacherAssignments<'_> = teacher_profile(&state, "jane").unwrap();

    assert_eq!(profile.teacher.id.value(), "t001");
    let ids: Vec<&str> = profile.assignments.iter().map(|a| a.id.value()).collect();
    assert_eq!(ids, vec!["a001", "a002"]);
    assert!(teacher_profile(&state, "nobody").is_none());
}

#[test]
fn test_grouped_roster_excludes_teachers_without_assignments() {
    let mut state: AppState = create_test_state();
    state
        .teachers
        .push(create_test_teacher("t003", "Aaron Idle", 2020));

    let groups: Vec<TeacherAssignments<'_>> = grouped_teacher_roster(&state);

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|group| group.teacher.id.value() != "t003"));
}

#[test]
fn test_grouped_roster_orders_groups_and_assignments() {
    let mut state: AppState = create_test_state();
    state.teachers.push(create_test_teacher("t003", "anna Bell", 2020));
    state.assignments.push(create_test_assignment(
        "a010",
        "t003",
        DepartmentName::Senior,
        2021,
    ));
    state.assignments.push(create_test_assignment(
        "a011",
        "t003",
        DepartmentName::Senior,
        2023,
    ));

    let groups: Vec<TeacherAssignments<'_>> = grouped_teacher_roster(&state);

    let names: Vec<&str> = groups.iter().map(|group| group.teacher.name.as_str()).collect();
    assert_eq!(names, vec!["anna Bell", "Jane Smith", "Peter Jones"]);

    let years: Vec<u16> = groups[0].assignments.iter().map(|a| a.academic_year).collect();
    assert_eq!(years, vec![2023, 2021]);
}

#[test]
fn test_grouped_roster_matching_filters_by_name() {
    let state: AppState = create_test_state();

    let groups: Vec<TeacherAssignments<'_>> = grouped_teacher_roster_matching(&state, "PETER");

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].teacher.id.value(), "t002");
    assert_eq!(groups[0].assignments.len(), 1);
}

#[test]
fn test_grouped_roster_ignores_orphans() {
    let mut state: AppState = create_test_state();
    state.assignments.push(create_test_assignment(
        "a100",
        "ghost",
        DepartmentName::Primary,
        TEST_YEAR,
    ));

    let total: usize = grouped_teacher_roster(&state)
        .iter()
        .map(|group| group.assignments.len())
        .sum();

    assert_eq!(total, 3);
}

#[test]
fn test_department_name_falls_back_to_unknown() {
    let mut state: AppState = create_test_state();
    assert_eq!(department_name(&state, DepartmentName::Adult), "Puitling");

    state
        .departments
        .retain(|department| department.id != DepartmentName::Adult);
    assert_eq!(
        department_name(&state, DepartmentName::Adult),
        UNKNOWN_DEPARTMENT_NAME
    );
}
