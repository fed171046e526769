// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Teacher;
use serde::{Deserialize, Serialize};

/// Service lengths, in years, that are celebrated as anniversaries.
pub const SERVICE_MILESTONES: [i32; 5] = [5, 10, 15, 20, 25];

/// Computes how many years a teacher has served as of `reference_year`.
///
/// The result is negative when the teacher's start year lies after the
/// reference year.
#[must_use]
pub fn service_years(teacher: &Teacher, reference_year: u16) -> i32 {
    i32::from(reference_year) - i32::from(teacher.start_year)
}

/// Returns whether a service length is one of the [`SERVICE_MILESTONES`].
#[must_use]
pub fn is_service_milestone(years: i32) -> bool {
    SERVICE_MILESTONES.contains(&years)
}

/// Service-length buckets used for reporting.
///
/// Variants are declared in ascending order, so the derived `Ord` matches
/// the order of the underlying service lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenureBracket {
    /// Two years or less, including teachers who have not started yet.
    UpToTwo,
    /// Three to five years.
    ThreeToFive,
    /// Six to ten years.
    SixToTen,
    /// More than ten years.
    OverTen,
}

impl TenureBracket {
    /// Every bracket in ascending order.
    pub const ALL: [Self; 4] = [
        Self::UpToTwo,
        Self::ThreeToFive,
        Self::SixToTen,
        Self::OverTen,
    ];

    /// Places a service length into its bracket.
    #[must_use]
    pub const fn from_service_years(years: i32) -> Self {
        if years <= 2 {
            Self::UpToTwo
        } else if years <= 5 {
            Self::ThreeToFive
        } else if years <= 10 {
            Self::SixToTen
        } else {
            Self::OverTen
        }
    }

    /// Returns the display label of this bracket.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UpToTwo => "0-2 years",
            Self::ThreeToFive => "3-5 years",
            Self::SixToTen => "6-10 years",
            Self::OverTen => "10+ years",
        }
    }
}

impl std::fmt::Display for TenureBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
