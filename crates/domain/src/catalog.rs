// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Department, DepartmentName};

/// Returns the reference entry for one department.
#[must_use]
pub fn standard_department(id: DepartmentName) -> Department {
    let (age_group, capacity, requirements): (&str, u32, Vec<&str>) = match id {
        DepartmentName::Beginner => ("4-5", 20, vec!["Basic child safety training"]),
        DepartmentName::Primary => ("6-8", 25, vec!["Curriculum Training Level 1"]),
        DepartmentName::Junior => ("9-11", 30, vec!["Curriculum Training Level 2"]),
        DepartmentName::Intermediate => ("12-13", 30, vec!["Mentorship skills"]),
        DepartmentName::Sacrament => ("14", 25, vec!["Theology Course 101", "PCI Membership"]),
        DepartmentName::Senior => (
            "15-17",
            25,
            vec![
                "Theology Course 201",
                "Advanced Apologetics",
                "PCI Membership",
            ],
        ),
        DepartmentName::Adult => ("18+", 50, vec!["PCI Elder Approval"]),
    };

    Department {
        id,
        name: id.as_str().to_string(),
        age_group: age_group.to_string(),
        capacity,
        requirements: requirements.into_iter().map(String::from).collect(),
    }
}

/// Returns the full department catalog in [`DepartmentName::ALL`] order.
#[must_use]
pub fn standard_departments() -> Vec<Department> {
    DepartmentName::ALL
        .into_iter()
        .map(standard_department)
        .collect()
}
