// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque, stable identifier of a teacher.
///
/// Identifiers are supplied by the caller and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(String);

impl TeacherId {
    /// Creates a new `TeacherId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Creates a new `AssignmentId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The departments of the teaching program.
///
/// The set is closed: every department that can ever hold an assignment
/// is listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DepartmentName {
    /// Ages 4-5.
    Beginner,
    /// Ages 6-8.
    Primary,
    /// Ages 9-11.
    Junior,
    /// Ages 12-13.
    Intermediate,
    /// Age 14.
    Sacrament,
    /// Ages 15-17.
    Senior,
    /// Adults, known locally as "Puitling".
    #[serde(rename = "Puitling")]
    Adult,
}

impl DepartmentName {
    /// Every department in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Beginner,
        Self::Primary,
        Self::Junior,
        Self::Intermediate,
        Self::Sacrament,
        Self::Senior,
        Self::Adult,
    ];

    /// Returns the string representation of this department.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Primary => "Primary",
            Self::Junior => "Junior",
            Self::Intermediate => "Intermediate",
            Self::Sacrament => "Sacrament",
            Self::Senior => "Senior",
            Self::Adult => "Puitling",
        }
    }
}

impl FromStr for DepartmentName {
    type Err = DomainError;

    /// Parses a department name, ignoring ASCII case.
    ///
    /// Both "Puitling" and "Adult" are accepted for the adult department.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "primary" => Ok(Self::Primary),
            "junior" => Ok(Self::Junior),
            "intermediate" => Ok(Self::Intermediate),
            "sacrament" => Ok(Self::Sacrament),
            "senior" => Ok(Self::Senior),
            "puitling" | "adult" => Ok(Self::Adult),
            _ => Err(DomainError::UnknownDepartment(s.to_string())),
        }
    }
}

impl std::fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role a teacher holds within a department for one academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Department leader.
    Leader,
    /// Assistant to the department leader.
    #[serde(rename = "Asst. Leader")]
    AssistantLeader,
    /// Department secretary.
    Secretary,
    /// Classroom teacher.
    Teacher,
}

impl Role {
    /// Every role, most senior first.
    pub const ALL: [Self; 4] = [
        Self::Leader,
        Self::AssistantLeader,
        Self::Secretary,
        Self::Teacher,
    ];

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "Leader",
            Self::AssistantLeader => "Asst. Leader",
            Self::Secretary => "Secretary",
            Self::Teacher => "Teacher",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leader" => Ok(Self::Leader),
            "asst. leader" | "assistant leader" => Ok(Self::AssistantLeader),
            "secretary" => Ok(Self::Secretary),
            "teacher" => Ok(Self::Teacher),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to reach a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number, free form.
    pub phone: String,
    /// Optional email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Creates a new `Contact`.
    #[must_use]
    pub const fn new(phone: String, email: Option<String>) -> Self {
        Self { phone, email }
    }
}

/// A volunteer teacher and their service history anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Caller-supplied identifier, unique across all teachers.
    pub id: TeacherId,
    /// Full display name.
    pub name: String,
    /// Contact details.
    pub contact: Contact,
    /// Optional photo location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// The year service began.
    pub start_year: u16,
    /// Whether the teacher is currently serving.
    pub is_active: bool,
}

impl Teacher {
    /// Creates a new active `Teacher` without a photo.
    ///
    /// # Arguments
    ///
    /// * `id` - The teacher identifier
    /// * `name` - The display name
    /// * `contact` - Contact details
    /// * `start_year` - The year service began
    #[must_use]
    pub const fn new(id: TeacherId, name: String, contact: Contact, start_year: u16) -> Self {
        Self {
            id,
            name,
            contact,
            photo_url: None,
            start_year,
            is_active: true,
        }
    }
}

/// An age-graded department with a fixed number of teacher slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Which department this is.
    pub id: DepartmentName,
    /// Display name.
    pub name: String,
    /// Age range served, for display only.
    pub age_group: String,
    /// Maximum number of simultaneous teacher slots.
    pub capacity: u32,
    /// Qualifications expected of its teachers, in display order.
    pub requirements: Vec<String>,
}

/// A teacher holding a role in a department during one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: AssignmentId,
    /// The teacher holding the role. Not checked against the teacher list.
    pub teacher_id: TeacherId,
    /// The department served.
    pub department_id: DepartmentName,
    /// The role held.
    pub role: Role,
    /// The academic year of service.
    pub academic_year: u16,
    /// Optional free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Assignment {
    /// Builds a full assignment from a draft.
    #[must_use]
    pub fn from_draft(id: AssignmentId, teacher_id: TeacherId, draft: AssignmentDraft) -> Self {
        Self {
            id,
            teacher_id,
            department_id: draft.department_id,
            role: draft.role,
            academic_year: draft.academic_year,
            remarks: draft.remarks,
        }
    }

    /// Returns the assignment without its identity.
    #[must_use]
    pub fn to_draft(&self) -> AssignmentDraft {
        AssignmentDraft {
            department_id: self.department_id,
            role: self.role,
            academic_year: self.academic_year,
            remarks: self.remarks.clone(),
        }
    }
}

/// The identity-free part of an assignment, as entered on a teacher form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    /// The department served.
    pub department_id: DepartmentName,
    /// The role held.
    pub role: Role,
    /// The academic year of service.
    pub academic_year: u16,
    /// Optional free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl AssignmentDraft {
    /// Creates a new `AssignmentDraft` without remarks.
    #[must_use]
    pub const fn new(department_id: DepartmentName, role: Role, academic_year: u16) -> Self {
        Self {
            department_id,
            role,
            academic_year,
            remarks: None,
        }
    }
}

/// Calendar bounds of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    /// The year label used to group assignments.
    pub year: u16,
    /// First day of the year.
    pub start_date: time::Date,
    /// Last day of the year.
    pub end_date: time::Date,
}

impl AcademicYear {
    /// Creates an academic year spanning the given dates.
    #[must_use]
    pub const fn new(year: u16, start_date: time::Date, end_date: time::Date) -> Self {
        Self {
            year,
            start_date,
            end_date,
        }
    }
}
