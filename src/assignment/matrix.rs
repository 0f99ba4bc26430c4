//! Square cost matrix with forbidden cells.
//!
//! Rows are agents (competitors), columns are slots (room seats). A cell is
//! either an allowed finite cost or forbidden. Forbidden cells never carry a
//! magic number; the solver substitutes a value that strictly dominates
//! every combination of allowed cells.

use serde::{Deserialize, Serialize};

use crate::error::DrawError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// One cell of a [`CostMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// The pairing is allowed at this cost.
    Allowed(f64),
    /// The pairing is structurally disallowed.
    Forbidden,
}

impl Cell {
    /// The cost, if allowed.
    #[inline]
    pub fn cost(self) -> Option<f64> {
        match self {
            Cell::Allowed(c) => Some(c),
            Cell::Forbidden => None,
        }
    }

    /// Whether the pairing is disallowed.
    #[inline]
    pub fn is_forbidden(self) -> bool {
        matches!(self, Cell::Forbidden)
    }
}

/// An `n × n` row-major cost matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<Cell>,
}

impl CostMatrix {
    /// Creates an `n × n` matrix with every cell forbidden.
    pub fn forbidden(n: usize) -> Self {
        Self {
            n,
            cells: vec![Cell::Forbidden; n * n],
        }
    }

    /// Creates an `n × n` matrix from a cell generator `(row, col) → Cell`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Self { n, cells }
    }

    /// Creates a matrix from rows.
    ///
    /// # Errors
    /// [`DrawError::InvalidInput`] if the rows do not form a square, or an
    /// allowed cell is not finite.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DrawError> {
        let n = rows.len();
        let mut errors = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonSquareMatrix,
                    format!("Row {i} has {} cells, expected {n}", row.len()),
                ));
            }
        }
        if !errors.is_empty() {
            return Err(DrawError::InvalidInput(errors));
        }
        let matrix = Self {
            n,
            cells: rows.into_iter().flatten().collect(),
        };
        matrix.check_finite()?;
        Ok(matrix)
    }

    /// Rejects NaN or infinite allowed cells.
    pub fn check_finite(&self) -> Result<(), DrawError> {
        let errors: Vec<ValidationError> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(k, cell)| match cell {
                Cell::Allowed(c) if !c.is_finite() => Some(ValidationError::new(
                    ValidationErrorKind::NonFiniteCost,
                    format!("Cost at ({}, {}) is {c}", k / self.n, k % self.n),
                )),
                _ => None,
            })
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DrawError::InvalidInput(errors))
        }
    }

    /// Number of rows (= number of columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.n + col]
    }

    /// Overwrites the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.n + col] = cell;
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    /// Number of allowed cells in a row.
    pub fn allowed_in_row(&self, row: usize) -> usize {
        self.row(row).iter().filter(|c| !c.is_forbidden()).count()
    }

    /// Matrix with rows and columns reordered: result `(i, j)` is
    /// `self(rows[i], cols[j])`.
    ///
    /// Both slices must be permutations of `0..n`.
    pub fn permuted(&self, rows: &[usize], cols: &[usize]) -> CostMatrix {
        debug_assert_eq!(rows.len(), self.n);
        debug_assert_eq!(cols.len(), self.n);
        CostMatrix::from_fn(self.n, |i, j| self.get(rows[i], cols[j]))
    }

    /// Value substituted for forbidden cells when solving.
    ///
    /// Any matching's allowed cells sum to within `±n·max|c|`, so a value
    /// above `2n·max|c|` makes one more forbidden cell always costlier.
    pub fn forbidden_cost(&self) -> f64 {
        let max_abs = self
            .cells
            .iter()
            .filter_map(|c| c.cost())
            .fold(0.0_f64, |m, c| m.max(c.abs()));
        2.0 * self.n as f64 * (max_abs + 1.0) + 1.0
    }

    /// Dense row-major costs with forbidden cells replaced by
    /// [`forbidden_cost`](Self::forbidden_cost).
    ///
    /// # Errors
    /// [`DrawError::InvalidInput`] if an allowed cell is not finite, or the
    /// costs are so large that a sum of `n` substitutes leaves `f64` range.
    pub fn to_dense(&self) -> Result<Vec<f64>, DrawError> {
        self.check_finite()?;
        let big = self.forbidden_cost();
        if !(big * self.n as f64).is_finite() {
            return Err(DrawError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::NonFiniteCost,
                format!(
                    "Costs too large to solve: forbidden-cell substitute {big} over {} rows overflows",
                    self.n
                ),
            )]));
        }
        Ok(self.cells.iter().map(|c| c.cost().unwrap_or(big)).collect())
    }
}
