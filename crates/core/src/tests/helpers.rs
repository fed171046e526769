// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AppState;
use roster_domain::{
    Assignment, AssignmentDraft, AssignmentId, Contact, DepartmentName, Role, Teacher, TeacherId,
};

pub const TEST_YEAR: u16 = 2024;

pub fn create_test_teacher(id: &str, name: &str, start_year: u16) -> Teacher {
    Teacher::new(
        TeacherId::new(id),
        String::from(name),
        Contact::new(String::from("555-0100"), None),
        start_year,
    )
}

pub fn create_test_assignment(
    id: &str,
    teacher_id: &str,
    department_id: DepartmentName,
    academic_year: u16,
) -> Assignment {
    Assignment {
        id: AssignmentId::new(id),
        teacher_id: TeacherId::new(teacher_id),
        department_id,
        role: Role::Teacher,
        academic_year,
        remarks: None,
    }
}

pub fn create_test_draft(department_id: DepartmentName, academic_year: u16) -> AssignmentDraft {
    AssignmentDraft::new(department_id, Role::Teacher, academic_year)
}

/// Two teachers, three assignments, all in the standard catalog.
pub fn create_test_state() -> AppState {
    AppState {
        teachers: vec![
            create_test_teacher("t001", "Jane Smith", 2015),
            create_test_teacher("t002", "Peter Jones", 2018),
        ],
        assignments: vec![
            create_test_assignment("a001", "t001", DepartmentName::Primary, 2024),
            create_test_assignment("a002", "t001", DepartmentName::Junior, 2023),
            create_test_assignment("a003", "t002", DepartmentName::Primary, 2024),
        ],
        ..AppState::new(TEST_YEAR)
    }
}
