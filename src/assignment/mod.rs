//! Minimum-cost perfect bipartite matching.
//!
//! Generic over what rows and columns mean: the draw uses rows for
//! competitors and columns for room seats, but nothing here depends on it.
//!
//! # Submodules
//!
//! - [`hungarian`]: exact O(n³) Kuhn–Munkres solver
//! - `shuffled`: randomized row/column permutation around the exact solver
//!
//! # Usage
//!
//! ```
//! use u_draw::assignment::{hungarian, Cell, CostMatrix};
//!
//! let m = CostMatrix::from_fn(3, |i, j| {
//!     if i == j { Cell::Forbidden } else { Cell::Allowed((i + j) as f64) }
//! });
//! let matching = hungarian::solve(&m)?;
//! assert!(matching.is_feasible());
//! # Ok::<(), u_draw::DrawError>(())
//! ```

pub mod hungarian;
mod matrix;
mod shuffled;

pub use matrix::{Cell, CostMatrix};
pub use shuffled::solve_shuffled;

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// A perfect matching between rows and columns.
///
/// Always a bijection; pairs are ordered by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    pairs: Vec<(usize, usize)>,
    total_cost: f64,
    forbidden_cells: usize,
}

impl Matching {
    /// Builds a matching from `row_to_col`, pricing it against `matrix`.
    ///
    /// `row_to_col` must be a permutation of `0..n`.
    pub fn from_assignment(matrix: &CostMatrix, row_to_col: Vec<usize>) -> Self {
        let mut total_cost = 0.0;
        let mut forbidden_cells = 0;
        for (row, &col) in row_to_col.iter().enumerate() {
            match matrix.get(row, col) {
                Cell::Allowed(c) => total_cost += c,
                Cell::Forbidden => forbidden_cells += 1,
            }
        }
        Self {
            pairs: row_to_col.into_iter().enumerate().collect(),
            total_cost,
            forbidden_cells,
        }
    }

    /// `(row, column)` pairs ordered by row.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Column matched to `row`.
    ///
    /// # Panics
    /// If `row` is out of range.
    pub fn column_for(&self, row: usize) -> usize {
        self.pairs[row].1
    }

    /// Row matched to `col`, if any.
    pub fn row_for(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, c)| c == col).map(|&(r, _)| r)
    }

    /// Sum of allowed cell costs in the matching.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of forbidden cells the matching had to use.
    pub fn forbidden_cells(&self) -> usize {
        self.forbidden_cells
    }

    /// Whether the matching uses only allowed cells.
    pub fn is_feasible(&self) -> bool {
        self.forbidden_cells == 0
    }

    /// Returns the matching if feasible.
    ///
    /// # Errors
    /// [`DrawError::InfeasibleAssignment`] if any forbidden cell was used.
    pub fn into_feasible(self) -> Result<Self, DrawError> {
        if self.is_feasible() {
            Ok(self)
        } else {
            Err(DrawError::InfeasibleAssignment {
                forbidden_cells: self.forbidden_cells,
            })
        }
    }
}
