//! Draw quality metrics.
//!
//! Numeric summaries for whoever renders the draw; no formatting lives here.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total cost | Sum of seat costs under the active cost function |
//! | Total badness | Sum of position badness of every resulting profile |
//! | Max badness | Worst single resulting profile |
//! | Pull-up rooms | Rooms whose bracket spans several rank scores |
//! | Unbalanced | Competitors whose resulting profile has spread > 1 |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cost::penalty;
use crate::models::{Draw, RoleProfile};

/// Aggregate indicators for one draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawSummary {
    /// Number of rooms.
    pub rooms: usize,
    /// Number of seated competitors.
    pub competitors: usize,
    /// Sum of seat costs.
    pub total_cost: f64,
    /// Sum of position badness; `None` if any profile is outside the table.
    pub total_badness: Option<u32>,
    /// Largest single-seat badness among seats inside the table.
    pub max_badness: u32,
    /// Rooms whose bracket includes pulled-up competitors.
    pub pull_up_rooms: usize,
    /// Competitors left with a profile spread above one.
    pub unbalanced_competitors: usize,
}

impl DrawSummary {
    /// Computes the summary of a draw.
    pub fn calculate(draw: &Draw) -> Self {
        Self {
            rooms: draw.room_count(),
            competitors: draw.seat_count(),
            total_cost: draw.total_cost(),
            total_badness: draw.total_badness(),
            max_badness: draw.seats().filter_map(|s| s.badness).max().unwrap_or(0),
            pull_up_rooms: draw.rooms.iter().filter(|r| r.bracket.has_pull_up()).count(),
            unbalanced_competitors: draw
                .seats()
                .filter(|s| !s.profile_after.is_balanced())
                .count(),
        }
    }
}

/// Badness of one competitor under our draw and under a reference draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Competitor ID.
    pub competitor_id: String,
    /// Profile after our draw.
    pub ours: RoleProfile,
    /// Badness after our draw.
    pub ours_badness: Option<u32>,
    /// Profile after the reference draw.
    pub reference: RoleProfile,
    /// Badness after the reference draw.
    pub reference_badness: Option<u32>,
}

/// Side-by-side badness of our draw against another draw of the same round.
///
/// The reference is given as the profiles competitors ended the round with
/// (for instance, the draw actually used at the tournament).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawComparison {
    /// One entry per seated competitor with a reference profile, in seat order.
    pub entries: Vec<ComparisonEntry>,
    /// Seated competitors missing from the reference.
    pub missing: Vec<String>,
    /// Sum of our badness over compared entries inside the table.
    pub ours_total: u32,
    /// Sum of reference badness over compared entries inside the table.
    pub reference_total: u32,
}

impl DrawComparison {
    /// Compares `draw` to the reference profiles keyed by competitor ID.
    pub fn compare(draw: &Draw, reference: &HashMap<String, RoleProfile>) -> Self {
        let mut entries = Vec::new();
        let mut missing = Vec::new();

        for seat in draw.seats() {
            match reference.get(&seat.competitor_id) {
                Some(&profile) => entries.push(ComparisonEntry {
                    competitor_id: seat.competitor_id.clone(),
                    ours: seat.profile_after,
                    ours_badness: seat.badness,
                    reference: profile,
                    reference_badness: penalty::lookup(&profile),
                }),
                None => missing.push(seat.competitor_id.clone()),
            }
        }

        let ours_total = entries.iter().filter_map(|e| e.ours_badness).sum();
        let reference_total = entries.iter().filter_map(|e| e.reference_badness).sum();

        Self {
            entries,
            missing,
            ours_total,
            reference_total,
        }
    }

    /// Reference badness minus ours; positive when our draw is fairer.
    pub fn improvement(&self) -> i64 {
        i64::from(self.reference_total) - i64::from(self.ours_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bracket, Role, Room, Seat};

    fn seat(role: Role, id: &str, before: [u32; 4], cost: f64) -> Seat {
        let before = RoleProfile::new(before);
        let after = before.incremented(role);
        Seat {
            role,
            competitor_id: id.into(),
            rank: 3,
            profile_before: before,
            profile_after: after,
            cost,
            badness: penalty::lookup(&after),
        }
    }

    fn sample_draw() -> Draw {
        let seats = vec![
            seat(Role::OpeningGovernment, "A", [0, 1, 1, 1], 0.0),
            seat(Role::OpeningOpposition, "B", [0, 0, 0, 2], 4.0),
            seat(Role::ClosingGovernment, "C", [1, 1, 0, 1], 0.0),
            seat(Role::ClosingOpposition, "D", [1, 1, 1, 0], 0.0),
        ];
        Draw::new(vec![Room {
            index: 0,
            bracket: Bracket::new([3, 2]),
            seats,
        }])
    }

    #[test]
    fn test_summary() {
        let summary = DrawSummary::calculate(&sample_draw());
        assert_eq!(summary.rooms, 1);
        assert_eq!(summary.competitors, 4);
        assert_eq!(summary.total_cost, 4.0);
        // B: [0,1,0,2] → (0,0,1,2) = 4
        assert_eq!(summary.total_badness, Some(4));
        assert_eq!(summary.max_badness, 4);
        assert_eq!(summary.pull_up_rooms, 1);
        assert_eq!(summary.unbalanced_competitors, 1);
    }

    #[test]
    fn test_comparison() {
        let draw = sample_draw();
        let reference: HashMap<String, RoleProfile> = [
            ("A", [1, 1, 1, 1]),
            ("B", [0, 0, 0, 3]),
            ("C", [1, 1, 1, 1]),
        ]
        .into_iter()
        .map(|(id, p)| (id.to_string(), RoleProfile::new(p)))
        .collect();

        let cmp = DrawComparison::compare(&draw, &reference);
        assert_eq!(cmp.entries.len(), 3);
        assert_eq!(cmp.missing, vec!["D".to_string()]);
        assert_eq!(cmp.ours_total, 4);
        assert_eq!(cmp.reference_total, 36);
        assert_eq!(cmp.improvement(), 32);
    }
}
