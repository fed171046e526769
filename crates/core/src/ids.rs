// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{Assignment, AssignmentId, TeacherId};
use std::collections::HashSet;

/// Formats the id of a generated assignment.
///
/// The id is `a-{teacher}-{batch}-{index}`. Because the last two segments
/// are always numeric, ids minted for different teachers cannot coincide.
#[must_use]
pub fn generated_assignment_id(teacher_id: &TeacherId, batch: u64, index: usize) -> AssignmentId {
    AssignmentId::new(&format!("a-{teacher_id}-{batch}-{index}"))
}

/// A set of freshly minted ids sharing one batch number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MintedIds {
    /// The batch number the ids were minted under.
    pub batch: u64,
    /// One id per requested item, in item order.
    pub ids: Vec<AssignmentId>,
}

/// Mints `count` assignment ids for `teacher_id`, starting at `first_batch`.
///
/// A batch whose ids would collide with one of `existing` is skipped, so a
/// caller-supplied id that happens to follow the generated pattern is never
/// duplicated.
pub(crate) fn mint_assignment_ids(
    teacher_id: &TeacherId,
    first_batch: u64,
    count: usize,
    existing: &[Assignment],
) -> MintedIds {
    let taken: HashSet<&AssignmentId> = existing.iter().map(|assignment| &assignment.id).collect();

    let mut batch: u64 = first_batch;
    loop {
        let ids: Vec<AssignmentId> = (0..count)
            .map(|index| generated_assignment_id(teacher_id, batch, index))
            .collect();

        if ids.iter().all(|id| !taken.contains(id)) {
            return MintedIds { batch, ids };
        }
        batch = batch.wrapping_add(1);
    }
}
