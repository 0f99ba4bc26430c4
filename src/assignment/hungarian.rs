//! Hungarian (Kuhn–Munkres) minimum-cost perfect matching.
//!
//! # Algorithm
//!
//! Shortest augmenting path formulation with row/column potentials `u`, `v`.
//! Rows are inserted one at a time; for each, a Dijkstra-like sweep over
//! reduced costs `c(i, j) - u(i) - v(j)` grows an alternating tree until an
//! unmatched column is reached, then the path is flipped.
//!
//! Ties are broken by the lowest column index, which is why callers that
//! care about fairness shuffle the matrix first (see
//! [`solve_shuffled`](super::solve_shuffled)).
//!
//! # Complexity
//! O(n³) time, O(n) extra space beyond the dense matrix.
//!
//! # References
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"
//! - Jonker & Volgenant (1987), "A Shortest Augmenting Path Algorithm for
//!   Dense and Sparse Linear Assignment Problems"

use super::{CostMatrix, Matching};
use crate::error::DrawError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Solves the assignment problem exactly.
///
/// Forbidden cells are priced by [`CostMatrix::forbidden_cost`], so a
/// matching avoids them whenever one exists; check
/// [`Matching::is_feasible`] on the result.
///
/// # Errors
/// [`DrawError::InvalidInput`] if the matrix holds a non-finite cost or
/// costs too large to solve in `f64`.
pub fn solve(matrix: &CostMatrix) -> Result<Matching, DrawError> {
    let n = matrix.dimension();
    let row_to_col = solve_dense(n, &matrix.to_dense()?).ok_or_else(|| unsolvable(n))?;
    Ok(Matching::from_assignment(matrix, row_to_col))
}

pub(crate) fn unsolvable(n: usize) -> DrawError {
    DrawError::InvalidInput(vec![ValidationError::new(
        ValidationErrorKind::NonFiniteCost,
        format!("No augmenting path in {n}×{n} matrix; costs out of range"),
    )])
}

/// Solves a dense row-major `n × n` problem; returns the column for each row.
///
/// Returns `None` if the sweep finds no reachable column, which only
/// happens when reduced costs are not comparable (NaN or infinite).
pub(crate) fn solve_dense(n: usize, costs: &[f64]) -> Option<Vec<usize>> {
    debug_assert_eq!(costs.len(), n * n);
    if n == 0 {
        return Some(Vec::new());
    }

    // 1-based indices; column 0 is a virtual root.
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; n + 1];
    let mut matched_row = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        matched_row[0] = i;
        let mut j0 = 0usize;
        let mut min_reduced = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = matched_row[j0];
            let row = &costs[(i0 - 1) * n..i0 * n];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = row[j - 1] - u[i0] - v[j];
                if reduced < min_reduced[j] {
                    min_reduced[j] = reduced;
                    way[j] = j0;
                }
                if min_reduced[j] < delta {
                    delta = min_reduced[j];
                    j1 = j;
                }
            }
            if j1 == 0 {
                return None;
            }

            for j in 0..=n {
                if used[j] {
                    u[matched_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_reduced[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == 0 {
                break;
            }
        }

        // flip the augmenting path
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut row_to_col = vec![0usize; n];
    for j in 1..=n {
        row_to_col[matched_row[j] - 1] = j - 1;
    }
    Some(row_to_col)
}
