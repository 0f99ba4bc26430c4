//! Randomized assignment: shuffle, solve, un-shuffle.
//!
//! Exact solvers break ties by index order, which would systematically
//! favour whoever appears first in the input. Drawing independent uniform
//! permutations for rows and columns before solving spreads the choice
//! among equally optimal matchings without changing the optimal total.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::{hungarian, CostMatrix, Matching};
use crate::error::DrawError;

/// Solves `matrix` after applying random row and column permutations.
///
/// The returned matching is expressed in the original indices. A fixed
/// seed on `rng` reproduces the same matching.
///
/// # Errors
/// [`DrawError::InvalidInput`] if the matrix holds a non-finite cost or
/// costs too large to solve in `f64`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_draw::assignment::{solve_shuffled, Cell, CostMatrix};
///
/// let m = CostMatrix::from_fn(4, |_, _| Cell::Allowed(1.0));
/// let matching = solve_shuffled(&m, &mut SmallRng::seed_from_u64(7))?;
/// assert_eq!(matching.total_cost(), 4.0);
/// # Ok::<(), u_draw::DrawError>(())
/// ```
pub fn solve_shuffled<R: Rng + ?Sized>(
    matrix: &CostMatrix,
    rng: &mut R,
) -> Result<Matching, DrawError> {
    let n = matrix.dimension();
    let mut rows: Vec<usize> = (0..n).collect();
    let mut cols: Vec<usize> = (0..n).collect();
    rows.shuffle(rng);
    cols.shuffle(rng);

    let permuted = matrix.permuted(&rows, &cols);
    let dense = permuted.to_dense()?;
    let permuted_assignment =
        hungarian::solve_dense(n, &dense).ok_or_else(|| hungarian::unsolvable(n))?;

    let mut row_to_col = vec![0usize; n];
    for (i, &j) in permuted_assignment.iter().enumerate() {
        row_to_col[rows[i]] = cols[j];
    }
    trace!(n, "shuffled assignment solved");

    Ok(Matching::from_assignment(matrix, row_to_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Cell;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn tie_heavy(n: usize) -> CostMatrix {
        CostMatrix::from_fn(n, |i, j| Cell::Allowed(((i + j) % 3) as f64))
    }

    #[test]
    fn test_same_seed_same_matching() {
        let m = tie_heavy(12);
        let a = solve_shuffled(&m, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = solve_shuffled(&m, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_invariant_across_seeds() {
        let m = tie_heavy(12);
        let reference = hungarian::solve(&m).unwrap().total_cost();
        for seed in 0..25 {
            let matching = solve_shuffled(&m, &mut SmallRng::seed_from_u64(seed)).unwrap();
            assert_eq!(matching.total_cost(), reference);
            assert!(matching.is_feasible());
        }
    }

    #[test]
    fn test_ties_broken_differently() {
        // all-zero matrix: every permutation is optimal
        let m = CostMatrix::from_fn(8, |_, _| Cell::Allowed(0.0));
        let distinct: std::collections::HashSet<Vec<(usize, usize)>> = (0..20)
            .map(|seed| {
                solve_shuffled(&m, &mut SmallRng::seed_from_u64(seed))
                    .unwrap()
                    .pairs()
                    .to_vec()
            })
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_unshuffled_indices_respect_forbidden() {
        // block-diagonal: rows 0..2 may only take columns 0..2
        let m = CostMatrix::from_fn(4, |i, j| {
            if (i < 2) == (j < 2) {
                Cell::Allowed(1.0)
            } else {
                Cell::Forbidden
            }
        });
        for seed in 0..10 {
            let matching = solve_shuffled(&m, &mut SmallRng::seed_from_u64(seed)).unwrap();
            assert!(matching.is_feasible());
            for &(row, col) in matching.pairs() {
                assert_eq!(row < 2, col < 2);
            }
        }
    }

    #[test]
    fn test_non_finite_matrix_rejected() {
        let m = CostMatrix::from_fn(4, |i, _| {
            if i == 2 {
                Cell::Allowed(f64::NAN)
            } else {
                Cell::Allowed(1.0)
            }
        });
        for seed in 0..3 {
            let result = solve_shuffled(&m, &mut SmallRng::seed_from_u64(seed));
            assert!(matches!(result, Err(DrawError::InvalidInput(_))));
        }
    }
}
