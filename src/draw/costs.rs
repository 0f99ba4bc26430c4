//! Cost matrix construction.
//!
//! Row `i` is competitor `i` (input order). Column `4·k + r` is role `r` of
//! room `k` (bracket formation order). A competitor whose rank is outside a
//! room's bracket gets [`Cell::Forbidden`] for all four of that room's seats.

use crate::assignment::{Cell, CostMatrix};
use crate::cost::{Cost, CostModel};
use crate::error::DrawError;
use crate::models::{Bracket, Competitor, Role};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Column index of `role` in room `room`.
#[inline]
pub fn slot_index(room: usize, role: Role) -> usize {
    room * Role::COUNT + role.index()
}

/// Room and role addressed by a column index.
#[inline]
pub fn slot_of(column: usize) -> (usize, Role) {
    let role = Role::ALL[column % Role::COUNT];
    (column / Role::COUNT, role)
}

/// Builds the square competitor × seat cost matrix.
///
/// Each competitor's four role costs are evaluated once and reused for
/// every room its rank is eligible for.
///
/// # Errors
/// - [`DrawError::InvalidInput`] if `brackets` does not provide exactly one
///   room per four competitors, or a cost is not finite.
/// - Any error from the cost model (e.g. [`DrawError::UnsupportedProfile`]).
pub fn build_cost_matrix(
    competitors: &[Competitor],
    brackets: &[Bracket],
    model: &CostModel,
) -> Result<CostMatrix, DrawError> {
    let n = competitors.len();
    if brackets.len() * Role::COUNT != n {
        return Err(DrawError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::IndivisibleCount,
            format!("{} rooms cannot seat {n} competitors", brackets.len()),
        )]));
    }

    let mut matrix = CostMatrix::forbidden(n);
    for (row, competitor) in competitors.iter().enumerate() {
        let mut role_costs: Option<[Cost; Role::COUNT]> = None;
        for (room, bracket) in brackets.iter().enumerate() {
            if !bracket.contains(competitor.rank) {
                continue;
            }
            let costs = match role_costs {
                Some(c) => c,
                None => {
                    let c = role_costs_for(competitor, model)?;
                    role_costs = Some(c);
                    c
                }
            };
            for role in Role::ALL {
                matrix.set(row, slot_index(room, role), Cell::Allowed(costs[role.index()]));
            }
        }
    }

    matrix.check_finite()?;
    Ok(matrix)
}

fn role_costs_for(
    competitor: &Competitor,
    model: &CostModel,
) -> Result<[Cost; Role::COUNT], DrawError> {
    let mut costs = [0.0; Role::COUNT];
    for role in Role::ALL {
        costs[role.index()] = model.evaluate(role, &competitor.profile)?;
    }
    Ok(costs)
}
