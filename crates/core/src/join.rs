// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lenient join between assignments and teachers.
//!
//! Assignments may name a teacher that does not exist; nothing on the write
//! path prevents it. Every query that pairs assignments with teachers goes
//! through [`lenient_join`], which drops such assignments from the result
//! and reports them in [`LenientJoin::orphaned`] instead of failing.

use roster_domain::{Assignment, Teacher, TeacherId};
use std::collections::HashMap;
use tracing::debug;

/// An assignment paired with the teacher it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// The teacher holding the assignment.
    pub teacher: &'a Teacher,
    /// The assignment itself.
    pub assignment: &'a Assignment,
}

/// The outcome of joining assignments to teachers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientJoin<'a> {
    /// Assignments whose teacher exists, in input order.
    pub entries: Vec<RosterEntry<'a>>,
    /// Assignments whose teacher does not exist, in input order.
    pub orphaned: Vec<&'a Assignment>,
}

/// Pairs each assignment with its teacher, setting aside orphans.
///
/// When several teachers share an id the first one in `teachers` wins.
pub fn lenient_join<'a, I>(teachers: &'a [Teacher], assignments: I) -> LenientJoin<'a>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut by_id: HashMap<&TeacherId, &Teacher> = HashMap::with_capacity(teachers.len());
    for teacher in teachers {
        by_id.entry(&teacher.id).or_insert(teacher);
    }

    let mut join: LenientJoin<'a> = LenientJoin::default();
    for assignment in assignments {
        match by_id.get(&assignment.teacher_id).copied() {
            Some(teacher) => join.entries.push(RosterEntry {
                teacher,
                assignment,
            }),
            None => join.orphaned.push(assignment),
        }
    }

    if !join.orphaned.is_empty() {
        debug!(
            "Dropped {} assignment(s) referencing unknown teachers",
            join.orphaned.len()
        );
    }

    join
}
