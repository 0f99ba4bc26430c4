//! Bracket formation with pull-ups.
//!
//! # Algorithm
//!
//! Walk the distinct rank scores from highest to lowest, keeping a running
//! count of competitors not yet placed in a full room and the *deficit*
//! (seats still needed to complete the last room).
//!
//! 1. If the current tier has more competitors than the deficit, take just
//!    enough of them to close the pending rooms, emit one bracket per
//!    completed room, and start afresh.
//! 2. Whatever is left of the tier joins the (possibly new) pending bracket
//!    and the deficit is recomputed.
//!
//! A tier that cannot more than cover the deficit is pulled up whole, so the
//! pending bracket spans several rank scores.
//!
//! Grouping is by value, never by input position, so the result does not
//! depend on input order.
//!
//! # Complexity
//! O(n log n) for counting tiers.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::DrawError;
use crate::models::{Bracket, RankScore, Role};
use crate::validation::{ValidationError, ValidationErrorKind};

const ROOM_SIZE: usize = Role::COUNT;

/// Forms one bracket per room from the competitors' rank scores.
///
/// Consecutive rooms drawn from the same tier share an identical bracket.
///
/// # Errors
/// [`DrawError::InvalidInput`] if the number of ranks is not a multiple of
/// four.
///
/// # Example
/// ```
/// use u_draw::draw::define_brackets;
///
/// let brackets = define_brackets(&[10, 10, 10, 9])?;
/// assert_eq!(brackets.len(), 1);
/// assert_eq!(brackets[0].ranks(), &[10, 9]);
/// # Ok::<(), u_draw::DrawError>(())
/// ```
pub fn define_brackets(ranks: &[RankScore]) -> Result<Vec<Bracket>, DrawError> {
    if ranks.len() % ROOM_SIZE != 0 {
        return Err(indivisible(ranks.len()));
    }

    let mut tiers: BTreeMap<RankScore, usize> = BTreeMap::new();
    for &rank in ranks {
        *tiers.entry(rank).or_default() += 1;
    }

    let mut brackets = Vec::with_capacity(ranks.len() / ROOM_SIZE);
    let mut pending: Vec<RankScore> = Vec::new();
    let mut unplaced = 0usize;
    let mut deficit = 0usize;

    for (&rank, &count) in tiers.iter().rev() {
        let mut remaining = count;

        if deficit < remaining {
            if deficit > 0 {
                pending.push(rank);
                remaining -= deficit;
                unplaced += deficit;
            }
            emit(&mut brackets, &pending, unplaced);
            pending.clear();
            unplaced = 0;
        }

        if remaining > 0 {
            pending.push(rank);
        }
        unplaced += remaining;
        deficit = (ROOM_SIZE - unplaced % ROOM_SIZE) % ROOM_SIZE;
    }

    if unplaced % ROOM_SIZE != 0 {
        return Err(indivisible(ranks.len()));
    }
    emit(&mut brackets, &pending, unplaced);

    Ok(brackets)
}

fn emit(brackets: &mut Vec<Bracket>, pending: &[RankScore], unplaced: usize) {
    let rooms = unplaced / ROOM_SIZE;
    if rooms == 0 {
        return;
    }
    let bracket = Bracket::new(pending.iter().copied());
    trace!(bracket = %bracket, rooms, "bracket closed");
    brackets.extend(std::iter::repeat(bracket).take(rooms));
}

fn indivisible(count: usize) -> DrawError {
    DrawError::InvalidInput(vec![ValidationError::new(
        ValidationErrorKind::IndivisibleCount,
        format!("{count} competitors cannot fill rooms of {ROOM_SIZE}"),
    )])
}
