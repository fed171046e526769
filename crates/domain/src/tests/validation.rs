// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AcademicYear, Assignment, AssignmentId, Contact, Department, DepartmentName, DomainError,
    Role, Teacher, TeacherId, standard_department, validate_academic_years,
    validate_assignment_id_unique, validate_assignment_ids_distinct, validate_departments,
    validate_teacher_id_unique, validate_teacher_ids_distinct,
};
use time::macros::date;

fn create_test_teacher(id: &str) -> Teacher {
    Teacher::new(
        TeacherId::new(id),
        String::from("Test Teacher"),
        Contact::new(String::from("555-0100"), None),
        2020,
    )
}

fn create_test_assignment(id: &str) -> Assignment {
    Assignment {
        id: AssignmentId::new(id),
        teacher_id: TeacherId::new("t001"),
        department_id: DepartmentName::Primary,
        role: Role::Teacher,
        academic_year: 2024,
        remarks: None,
    }
}

#[test]
fn test_validate_departments_rejects_empty_list() {
    assert_eq!(validate_departments(&[]), Err(DomainError::NoDepartments));
}

#[test]
fn test_validate_departments_rejects_zero_capacity() {
    let mut junior: Department = standard_department(DepartmentName::Junior);
    junior.capacity = 0;

    let result: Result<(), DomainError> = validate_departments(&[junior]);
    assert_eq!(
        result,
        Err(DomainError::InvalidCapacity {
            department: DepartmentName::Junior,
            capacity: 0,
        })
    );
}

#[test]
fn test_validate_departments_rejects_duplicates() {
    let result: Result<(), DomainError> = validate_departments(&[
        standard_department(DepartmentName::Primary),
        standard_department(DepartmentName::Primary),
    ]);
    assert_eq!(
        result,
        Err(DomainError::DuplicateDepartment(DepartmentName::Primary))
    );
}

#[test]
fn test_validate_teacher_id_unique() {
    let existing: Vec<Teacher> = vec![create_test_teacher("t001"), create_test_teacher("t002")];

    assert!(validate_teacher_id_unique(&TeacherId::new("t003"), &existing).is_ok());
    assert_eq!(
        validate_teacher_id_unique(&TeacherId::new("t002"), &existing),
        Err(DomainError::DuplicateTeacherId(TeacherId::new("t002")))
    );
}

#[test]
fn test_validate_assignment_id_unique() {
    let existing: Vec<Assignment> = vec![create_test_assignment("a001")];

    assert!(validate_assignment_id_unique(&AssignmentId::new("a002"), &existing).is_ok());
    assert!(matches!(
        validate_assignment_id_unique(&AssignmentId::new("a001"), &existing),
        Err(DomainError::DuplicateAssignmentId(_))
    ));
}

#[test]
fn test_validate_ids_distinct_reports_first_repeat() {
    let teachers: Vec<Teacher> = vec![
        create_test_teacher("t001"),
        create_test_teacher("t002"),
        create_test_teacher("t001"),
    ];
    assert_eq!(
        validate_teacher_ids_distinct(&teachers),
        Err(DomainError::DuplicateTeacherId(TeacherId::new("t001")))
    );

    let assignments: Vec<Assignment> =
        vec![create_test_assignment("a001"), create_test_assignment("a002")];
    assert!(validate_assignment_ids_distinct(&assignments).is_ok());
}

#[test]
fn test_validate_academic_years_rejects_inverted_range() {
    let good: AcademicYear = AcademicYear::new(2024, date!(2024 - 01 - 01), date!(2024 - 12 - 31));
    let bad: AcademicYear = AcademicYear::new(2023, date!(2023 - 12 - 31), date!(2023 - 01 - 01));

    assert!(validate_academic_years(&[good]).is_ok());
    assert!(matches!(
        validate_academic_years(&[good, bad]),
        Err(DomainError::InvalidAcademicYear { year: 2023, .. })
    ));
}
