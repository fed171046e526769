// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Assignment, AssignmentDraft, AssignmentId, Contact, DepartmentName, DomainError, Role, Teacher,
    TeacherId,
};

#[test]
fn test_teacher_new_defaults_to_active_without_photo() {
    let teacher: Teacher = Teacher::new(
        TeacherId::new("t001"),
        String::from("Pu Liana"),
        Contact::new(String::from("111-222-3333"), None),
        2018,
    );

    assert!(teacher.is_active);
    assert!(teacher.photo_url.is_none());
    assert_eq!(teacher.id.value(), "t001");
}

#[test]
fn test_department_name_round_trips_through_str() {
    for department in DepartmentName::ALL {
        let parsed: DepartmentName = department.as_str().parse().unwrap();
        assert_eq!(parsed, department);
    }
}

#[test]
fn test_department_name_parse_is_case_insensitive() {
    let parsed: DepartmentName = "  junior ".parse().unwrap();
    assert_eq!(parsed, DepartmentName::Junior);
}

#[test]
fn test_adult_department_accepts_both_names() {
    assert_eq!(
        "Puitling".parse::<DepartmentName>().unwrap(),
        DepartmentName::Adult
    );
    assert_eq!(
        "adult".parse::<DepartmentName>().unwrap(),
        DepartmentName::Adult
    );
    assert_eq!(DepartmentName::Adult.to_string(), "Puitling");
}

#[test]
fn test_unknown_department_is_rejected() {
    let result: Result<DepartmentName, DomainError> = "Nursery".parse();
    assert_eq!(
        result,
        Err(DomainError::UnknownDepartment(String::from("Nursery")))
    );
}

#[test]
fn test_role_round_trips_through_str() {
    for role in Role::ALL {
        let parsed: Role = role.as_str().parse().unwrap();
        assert_eq!(parsed, role);
    }
    assert_eq!(
        "assistant leader".parse::<Role>().unwrap(),
        Role::AssistantLeader
    );
}

#[test]
fn test_role_serializes_with_display_label() {
    let json: String = serde_json::to_string(&Role::AssistantLeader).unwrap();
    assert_eq!(json, "\"Asst. Leader\"");

    let json: String = serde_json::to_string(&DepartmentName::Adult).unwrap();
    assert_eq!(json, "\"Puitling\"");
}

#[test]
fn test_identifiers_serialize_transparently() {
    let json: String = serde_json::to_string(&TeacherId::new("t002")).unwrap();
    assert_eq!(json, "\"t002\"");

    let id: AssignmentId = serde_json::from_str("\"a013\"").unwrap();
    assert_eq!(id, AssignmentId::new("a013"));
}

#[test]
fn test_assignment_draft_conversion_keeps_fields() {
    let mut draft: AssignmentDraft =
        AssignmentDraft::new(DepartmentName::Adult, Role::Teacher, 2019);
    draft.remarks = Some(String::from("Transferred in"));

    let assignment: Assignment = Assignment::from_draft(
        AssignmentId::new("a024"),
        TeacherId::new("t005"),
        draft.clone(),
    );

    assert_eq!(assignment.id.value(), "a024");
    assert_eq!(assignment.teacher_id.value(), "t005");
    assert_eq!(assignment.to_draft(), draft);
}
