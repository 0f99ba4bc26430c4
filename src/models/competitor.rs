//! Competitor model.
//!
//! A competitor is a team (or individual) entering a round with a
//! cumulative rank score and a record of the roles it has already held.

use serde::{Deserialize, Serialize};

use super::{Role, RoleProfile};

/// Cumulative rank score. Higher is better; ties are common.
pub type RankScore = i32;

/// A competitor eligible (or not) for the next round's draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Unique competitor identifier.
    pub id: String,
    /// Cumulative rank score (team points).
    pub rank: RankScore,
    /// Prior role occupancy.
    pub profile: RoleProfile,
    /// Whether the competitor takes part in the upcoming round.
    ///
    /// Inactive competitors are removed before the draw, not down-weighted.
    pub active: bool,
}

impl Competitor {
    /// Creates an active competitor with an empty role history.
    pub fn new(id: impl Into<String>, rank: RankScore) -> Self {
        Self {
            id: id.into(),
            rank,
            profile: RoleProfile::zero(),
            active: true,
        }
    }

    /// Sets the role history.
    pub fn with_profile(mut self, profile: impl Into<RoleProfile>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Sets whether the competitor participates in the next round.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The profile this competitor would have after holding `role`.
    pub fn profile_after(&self, role: Role) -> RoleProfile {
        self.profile.incremented(role)
    }
}
