//! Bracket model.
//!
//! A bracket is the set of rank scores whose competitors may share a room.
//! Most brackets hold a single score; a bracket with several scores is the
//! result of pulling lower-ranked competitors up to complete a room.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RankScore;

/// Rank scores eligible for one room, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bracket {
    ranks: Vec<RankScore>,
}

impl Bracket {
    /// Creates a bracket from rank scores; stores them in descending order.
    pub fn new(ranks: impl IntoIterator<Item = RankScore>) -> Self {
        let mut ranks: Vec<RankScore> = ranks.into_iter().collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.dedup();
        Self { ranks }
    }

    /// Rank scores in descending order.
    pub fn ranks(&self) -> &[RankScore] {
        &self.ranks
    }

    /// Whether competitors with `rank` may sit in this bracket's rooms.
    pub fn contains(&self, rank: RankScore) -> bool {
        self.ranks.contains(&rank)
    }

    /// Highest rank score in the bracket.
    pub fn highest(&self) -> Option<RankScore> {
        self.ranks.first().copied()
    }

    /// Lowest rank score in the bracket.
    pub fn lowest(&self) -> Option<RankScore> {
        self.ranks.last().copied()
    }

    /// Whether this bracket spans more than one rank score.
    pub fn has_pull_up(&self) -> bool {
        self.ranks.len() > 1
    }

    /// Whether the bracket holds no rank scores.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, r) in self.ranks.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("}")
    }
}
