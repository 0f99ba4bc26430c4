//! Roles within a room and per-competitor role histories.
//!
//! A room seats four competitors in four ordered roles. Fairness across
//! rounds is measured on the role-occupancy profile: how many times a
//! competitor has already held each role.
//!
//! # Reference
//! World Universities Debating Championship (WUDC) constitution, British
//! Parliamentary position rotation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{ValidationError, ValidationErrorKind};

/// One of the four ordered roles in a room.
///
/// Ordering follows the speaking order: the first role speaks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// First role (opening government).
    OpeningGovernment,
    /// Second role (opening opposition).
    OpeningOpposition,
    /// Third role (closing government).
    ClosingGovernment,
    /// Fourth role (closing opposition).
    ClosingOpposition,
}

impl Role {
    /// Number of roles per room.
    pub const COUNT: usize = 4;

    /// All roles in speaking order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::OpeningGovernment,
        Role::OpeningOpposition,
        Role::ClosingGovernment,
        Role::ClosingOpposition,
    ];

    /// Zero-based position of this role (0..4).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Role::OpeningGovernment => 0,
            Role::OpeningOpposition => 1,
            Role::ClosingGovernment => 2,
            Role::ClosingOpposition => 3,
        }
    }

    /// Role at the given position, or `None` if `index >= 4`.
    pub fn from_index(index: usize) -> Option<Role> {
        Role::ALL.get(index).copied()
    }

    /// Short label ("OG", "OO", "CG", "CO").
    pub fn abbreviation(self) -> &'static str {
        match self {
            Role::OpeningGovernment => "OG",
            Role::OpeningOpposition => "OO",
            Role::ClosingGovernment => "CG",
            Role::ClosingOpposition => "CO",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Count of prior rounds spent in each role.
///
/// Always exactly four entries, indexed by [`Role::index`]. Profiles only
/// grow: a round adds one to exactly one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleProfile([u32; Role::COUNT]);

impl RoleProfile {
    /// Creates a profile from per-role counts.
    pub fn new(counts: [u32; Role::COUNT]) -> Self {
        Self(counts)
    }

    /// Profile of a competitor that has not yet competed.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a profile from a history of arbitrary length.
    ///
    /// Rejects histories whose length is not exactly four.
    pub fn try_from_slice(history: &[u32]) -> Result<Self, ValidationError> {
        let counts: [u32; Role::COUNT] = history.try_into().map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::MalformedProfile,
                format!(
                    "Role history must have {} entries, got {}",
                    Role::COUNT,
                    history.len()
                ),
            )
        })?;
        Ok(Self(counts))
    }

    /// Per-role counts in role order.
    #[inline]
    pub fn counts(&self) -> [u32; Role::COUNT] {
        self.0
    }

    /// Count for a single role.
    #[inline]
    pub fn get(&self, role: Role) -> u32 {
        self.0[role.index()]
    }

    /// Total rounds recorded.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Smallest per-role count.
    pub fn min(&self) -> u32 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// Largest per-role count.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Difference between the most and least occupied roles.
    pub fn spread(&self) -> u32 {
        self.max() - self.min()
    }

    /// Whether the profile is as even as its total allows (spread ≤ 1).
    pub fn is_balanced(&self) -> bool {
        self.spread() <= 1
    }

    /// The profile after one more round in `role`.
    pub fn incremented(&self, role: Role) -> Self {
        let mut counts = self.0;
        counts[role.index()] += 1;
        Self(counts)
    }

    /// Counts sorted ascending; role identity discarded.
    pub fn sorted(&self) -> [u32; Role::COUNT] {
        let mut counts = self.0;
        counts.sort_unstable();
        counts
    }
}

impl From<[u32; Role::COUNT]> for RoleProfile {
    fn from(counts: [u32; Role::COUNT]) -> Self {
        Self(counts)
    }
}

impl fmt::Display for RoleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}
