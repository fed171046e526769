// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::AppState;
use roster_domain::{
    AcademicYear, Assignment, AssignmentId, Contact, DepartmentName, Role, Teacher, TeacherId,
};
use time::macros::date;

/// The academic year selected in the seed data.
pub const SEED_ACADEMIC_YEAR: u16 = 2024;

fn teacher(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    start_year: u16,
    is_active: bool,
    photo_url: Option<&str>,
) -> Teacher {
    Teacher {
        id: TeacherId::new(id),
        name: String::from(name),
        contact: Contact::new(String::from(phone), Some(String::from(email))),
        photo_url: photo_url.map(String::from),
        start_year,
        is_active,
    }
}

fn assignment(
    id: &str,
    teacher_id: &str,
    department_id: DepartmentName,
    role: Role,
    academic_year: u16,
) -> Assignment {
    Assignment {
        id: AssignmentId::new(id),
        teacher_id: TeacherId::new(teacher_id),
        department_id,
        role,
        academic_year,
        remarks: None,
    }
}

/// Builds the roster the application starts with.
#[must_use]
pub fn seed_state() -> AppState {
    let teachers: Vec<Teacher> = vec![
        teacher(
            "t001",
            "Pu Liana",
            "111-222-3333",
            "liana.p@example.com",
            2018,
            true,
            Some("https://picsum.photos/id/1005/200/200"),
        ),
        teacher(
            "t002",
            "Jane Smith",
            "222-333-4444",
            "jane.s@example.com",
            2015,
            true,
            Some("https://picsum.photos/id/1027/200/200"),
        ),
        teacher("t003", "Peter Jones", "333-444-5555", "peter.j@example.com", 2018, true, None),
        teacher(
            "t004",
            "Mary Williams",
            "444-555-6666",
            "mary.w@example.com",
            2012,
            false,
            Some("https://picsum.photos/id/1012/200/200"),
        ),
        teacher("t005", "Pu Thanga", "555-666-7777", "thanga.p@example.com", 2019, true, None),
        teacher(
            "t006",
            "Sarah Miller",
            "666-777-8888",
            "sarah.m@example.com",
            2008,
            true,
            Some("https://picsum.photos/id/1013/200/200"),
        ),
        teacher("t007", "Michael Davis", "777-888-9999", "michael.d@example.com", 2022, true, None),
        teacher(
            "t008",
            "Emily Wilson",
            "888-999-0000",
            "emily.w@example.com",
            2016,
            true,
            Some("https://picsum.photos/id/1011/200/200"),
        ),
    ];

    let mut transfer: Assignment =
        assignment("a024", "t005", DepartmentName::Adult, Role::Teacher, 2019);
    transfer.remarks = Some(String::from("Khawbung atanga rawn pem"));

    let assignments: Vec<Assignment> = vec![
        assignment("a020", "t001", DepartmentName::Senior, Role::Teacher, 2021),
        assignment("a021", "t001", DepartmentName::Intermediate, Role::Teacher, 2020),
        assignment("a022", "t001", DepartmentName::Beginner, Role::Teacher, 2019),
        assignment("a023", "t001", DepartmentName::Beginner, Role::Teacher, 2018),
        transfer,
        assignment("a002", "t002", DepartmentName::Sacrament, Role::Leader, 2024),
        assignment("a003", "t003", DepartmentName::Junior, Role::AssistantLeader, 2024),
        assignment("a005", "t006", DepartmentName::Adult, Role::Leader, 2024),
        assignment("a006", "t007", DepartmentName::Beginner, Role::AssistantLeader, 2024),
        assignment("a007", "t008", DepartmentName::Intermediate, Role::Leader, 2024),
        assignment("a008", "t008", DepartmentName::Junior, Role::Secretary, 2024),
        assignment("a012", "t005", DepartmentName::Primary, Role::Teacher, 2024),
        assignment("a013", "t005", DepartmentName::Primary, Role::Teacher, 2023),
        assignment("a010", "t002", DepartmentName::Intermediate, Role::Leader, 2023),
        assignment("a014", "t005", DepartmentName::Junior, Role::Teacher, 2022),
        assignment("a015", "t005", DepartmentName::Junior, Role::Teacher, 2021),
    ];

    let academic_years: Vec<AcademicYear> = vec![
        AcademicYear::new(2024, date!(2024 - 01 - 01), date!(2024 - 12 - 31)),
        AcademicYear::new(2023, date!(2023 - 01 - 01), date!(2023 - 12 - 31)),
        AcademicYear::new(2022, date!(2022 - 01 - 01), date!(2022 - 12 - 31)),
    ];

    AppState {
        teachers,
        assignments,
        academic_years,
        ..AppState::new(SEED_ACADEMIC_YEAR)
    }
}
