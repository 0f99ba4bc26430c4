//! Turns a solved matching back into rooms of seated competitors.

use super::costs::slot_of;
use crate::assignment::{CostMatrix, Matching};
use crate::cost::penalty;
use crate::error::DrawError;
use crate::models::{Bracket, Competitor, Role, Room, Seat};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Collates a feasible matching into rooms.
///
/// Uses the same column enumeration as
/// [`build_cost_matrix`](super::build_cost_matrix): room `col / 4`, role
/// `col % 4`. Each seat records the matrix cost and, independently of the
/// active cost function, the position badness of its resulting profile.
///
/// # Errors
/// - [`DrawError::InfeasibleAssignment`] if the matching uses a forbidden cell.
/// - [`DrawError::InvariantViolation`] if the inputs disagree on size, the
///   matching addresses a row or column outside the matrix, or a seat is
///   left empty.
pub fn collate_rooms(
    competitors: &[Competitor],
    brackets: &[Bracket],
    matrix: &CostMatrix,
    matching: &Matching,
) -> Result<Vec<Room>, DrawError> {
    let n = matrix.dimension();
    if competitors.len() != n || brackets.len() * Role::COUNT != n {
        return Err(DrawError::InvariantViolation(vec![ValidationError::new(
            ValidationErrorKind::NonSquareMatrix,
            format!(
                "{} competitors and {} rooms do not match a {n}×{n} matrix",
                competitors.len(),
                brackets.len()
            ),
        )]));
    }

    let mut slots: Vec<[Option<Seat>; Role::COUNT]> = vec![Default::default(); brackets.len()];

    for &(row, col) in matching.pairs() {
        if row >= n || col >= n {
            return Err(DrawError::InvariantViolation(vec![ValidationError::new(
                ValidationErrorKind::NonSquareMatrix,
                format!("Matched cell ({row}, {col}) is outside the {n}×{n} matrix"),
            )]));
        }
        let cost = matrix
            .get(row, col)
            .cost()
            .ok_or(DrawError::InfeasibleAssignment {
                forbidden_cells: matching.forbidden_cells().max(1),
            })?;
        let (room, role) = slot_of(col);
        let competitor = &competitors[row];
        let profile_after = competitor.profile_after(role);

        slots[room][role.index()] = Some(Seat {
            role,
            competitor_id: competitor.id.clone(),
            rank: competitor.rank,
            profile_before: competitor.profile,
            profile_after,
            cost,
            badness: penalty::lookup(&profile_after),
        });
    }

    let mut rooms = Vec::with_capacity(brackets.len());
    let mut errors = Vec::new();
    for (index, (seats, bracket)) in slots.into_iter().zip(brackets).enumerate() {
        let filled: Vec<Seat> = seats.into_iter().flatten().collect();
        if filled.len() != Role::COUNT {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteRoom,
                format!("Room {index} has {} of {} seats filled", filled.len(), Role::COUNT),
            ));
        }
        rooms.push(Room {
            index,
            bracket: bracket.clone(),
            seats: filled,
        });
    }

    if errors.is_empty() {
        Ok(rooms)
    } else {
        Err(DrawError::InvariantViolation(errors))
    }
}
