//! Room and draw (solution) models.
//!
//! A draw is the complete allocation of one round: every active competitor
//! sits in exactly one room, in exactly one role, and every seat of every
//! room is filled.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Bracket, Competitor, RankScore, Role, RoleProfile};
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// One filled role in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Role held in this room.
    pub role: Role,
    /// Seated competitor ID.
    pub competitor_id: String,
    /// Competitor's rank score (denormalized for reporting).
    pub rank: RankScore,
    /// Role history entering the round.
    pub profile_before: RoleProfile,
    /// Role history after this round (`profile_before` + this role).
    pub profile_after: RoleProfile,
    /// Cost charged by the active cost function for this seat.
    pub cost: f64,
    /// Position badness of `profile_after`, independent of the cost function.
    ///
    /// `None` when the profile lies outside the badness table.
    pub badness: Option<u32>,
}

/// A room: four seats in role order, restricted to one bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Zero-based room number in bracket formation order.
    pub index: usize,
    /// Rank scores allowed in this room.
    pub bracket: Bracket,
    /// Seats ordered by role.
    pub seats: Vec<Seat>,
}

impl Room {
    /// Seat holding `role`, if filled.
    pub fn seat(&self, role: Role) -> Option<&Seat> {
        self.seats.iter().find(|s| s.role == role)
    }

    /// Whether every role is filled exactly once, in order.
    pub fn is_complete(&self) -> bool {
        self.seats.len() == Role::COUNT
            && self.seats.iter().zip(Role::ALL).all(|(s, r)| s.role == r)
    }

    /// Sum of seat costs.
    pub fn total_cost(&self) -> f64 {
        self.seats.iter().map(|s| s.cost).sum()
    }
}

/// A complete round allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    /// Rooms in bracket formation order (strongest bracket first).
    pub rooms: Vec<Room>,
}

impl Draw {
    /// Creates a draw from rooms.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Iterates all seats, room by room.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rooms.iter().flat_map(|r| r.seats.iter())
    }

    /// Number of seated competitors.
    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }

    /// Finds a competitor's room and seat.
    pub fn seat_for(&self, competitor_id: &str) -> Option<(&Room, &Seat)> {
        self.rooms.iter().find_map(|room| {
            room.seats
                .iter()
                .find(|s| s.competitor_id == competitor_id)
                .map(|s| (room, s))
        })
    }

    /// Sum of seat costs under the active cost function.
    pub fn total_cost(&self) -> f64 {
        self.rooms.iter().map(Room::total_cost).sum()
    }

    /// Sum of position badness; `None` if any seat is outside the table.
    pub fn total_badness(&self) -> Option<u32> {
        self.seats().map(|s| s.badness).sum()
    }

    /// Role histories after this round, keyed by competitor ID.
    pub fn updated_profiles(&self) -> HashMap<String, RoleProfile> {
        self.seats()
            .map(|s| (s.competitor_id.clone(), s.profile_after))
            .collect()
    }

    /// Checks the draw against the competitors it was generated for.
    ///
    /// Checks:
    /// 1. Every room has four seats in role order
    /// 2. Every seated rank belongs to the room's bracket
    /// 3. Every seat's `profile_after` is `profile_before` plus its role
    /// 4. No competitor is seated twice
    /// 5. Every seated competitor is known, and every known competitor is seated
    ///
    /// # Returns
    /// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
    pub fn verify(&self, competitors: &[Competitor]) -> ValidationResult {
        let mut errors = Vec::new();
        let known: HashSet<&str> = competitors.iter().map(|c| c.id.as_str()).collect();
        let mut seated: HashSet<&str> = HashSet::new();

        for room in &self.rooms {
            if !room.is_complete() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompleteRoom,
                    format!(
                        "Room {} has {} seats or roles out of order",
                        room.index,
                        room.seats.len()
                    ),
                ));
            }

            for seat in &room.seats {
                if !room.bracket.contains(seat.rank) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::BracketViolation,
                        format!(
                            "Competitor '{}' (rank {}) seated in room {} with bracket {}",
                            seat.competitor_id, seat.rank, room.index, room.bracket
                        ),
                    ));
                }
                if seat.profile_after != seat.profile_before.incremented(seat.role) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ProfileMismatch,
                        format!(
                            "Competitor '{}' profile {} does not follow {} in role {}",
                            seat.competitor_id, seat.profile_after, seat.profile_before, seat.role
                        ),
                    ));
                }
                if !seated.insert(seat.competitor_id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateId,
                        format!("Competitor '{}' seated more than once", seat.competitor_id),
                    ));
                }
                if !known.contains(seat.competitor_id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownCompetitor,
                        format!("Seated competitor '{}' is not in the draw input", seat.competitor_id),
                    ));
                }
            }
        }

        for c in competitors {
            if !seated.contains(c.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnseatedCompetitor,
                    format!("Competitor '{}' has no seat", c.id),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(role: Role, id: &str, rank: RankScore) -> Seat {
        let before = RoleProfile::zero();
        Seat {
            role,
            competitor_id: id.into(),
            rank,
            profile_before: before,
            profile_after: before.incremented(role),
            cost: 0.0,
            badness: Some(0),
        }
    }

    fn sample_draw() -> (Draw, Vec<Competitor>) {
        let ids = ["A", "B", "C", "D"];
        let seats = ids
            .iter()
            .zip(Role::ALL)
            .map(|(id, role)| seat(role, id, 5))
            .collect();
        let room = Room {
            index: 0,
            bracket: Bracket::new([5]),
            seats,
        };
        let competitors = ids.iter().map(|id| Competitor::new(*id, 5)).collect();
        (Draw::new(vec![room]), competitors)
    }

    #[test]
    fn test_valid_draw() {
        let (draw, competitors) = sample_draw();
        assert!(draw.verify(&competitors).is_ok());
        assert_eq!(draw.room_count(), 1);
        assert_eq!(draw.seat_count(), 4);
        assert_eq!(draw.total_badness(), Some(0));
    }

    #[test]
    fn test_seat_lookup() {
        let (draw, _) = sample_draw();
        let (room, s) = draw.seat_for("C").unwrap();
        assert_eq!(room.index, 0);
        assert_eq!(s.role, Role::ClosingGovernment);
        assert!(draw.seat_for("Z").is_none());
    }

    #[test]
    fn test_updated_profiles() {
        let (draw, _) = sample_draw();
        let profiles = draw.updated_profiles();
        assert_eq!(profiles["D"].counts(), [0, 0, 0, 1]);
    }

    #[test]
    fn test_bracket_violation_detected() {
        let (mut draw, competitors) = sample_draw();
        draw.rooms[0].seats[2].rank = 4;
        let errors = draw.verify(&competitors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BracketViolation));
    }

    #[test]
    fn test_duplicate_and_unseated_detected() {
        let (mut draw, competitors) = sample_draw();
        draw.rooms[0].seats[3].competitor_id = "A".into();
        let errors = draw.verify(&competitors).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnseatedCompetitor));
    }

    #[test]
    fn test_incomplete_room_detected() {
        let (mut draw, competitors) = sample_draw();
        draw.rooms[0].seats.swap(0, 1);
        let errors = draw.verify(&competitors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IncompleteRoom));
    }

    #[test]
    fn test_total_badness_unknown() {
        let (mut draw, _) = sample_draw();
        draw.rooms[0].seats[1].badness = None;
        assert_eq!(draw.total_badness(), None);
    }
}
