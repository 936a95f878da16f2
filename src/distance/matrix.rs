//! Ragged cost matrix with per-cell lookup failures.

use thiserror::Error;

/// A failed lookup in a [`CostMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The row, the column, or the cell value itself is absent.
    #[error("matrix entry missing for {from} -> {to}")]
    MissingEntry {
        /// Origin location index.
        from: usize,
        /// Destination location index.
        to: usize,
    },
}

/// An n×n cost table stored as the rows it was given.
///
/// Rows are kept as-is: a matrix may be undersized, ragged, or contain
/// `None` cells. Every such hole surfaces as a [`MatrixError`] from
/// [`CostMatrix::get`] instead of a panic, so callers can decide per edge
/// how to degrade.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::distance::{CostMatrix, MatrixError};
///
/// let m = CostMatrix::from_values(vec![vec![0.0, 5.0], vec![7.0]]);
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), Ok(5.0));
/// assert_eq!(m.get(1, 1), Err(MatrixError::MissingEntry { from: 1, to: 1 }));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostMatrix {
    rows: Vec<Vec<Option<f64>>>,
}

impl CostMatrix {
    /// Creates a matrix from rows that may contain missing cells.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { rows }
    }

    /// Creates a matrix from fully populated rows.
    pub fn from_values(rows: Vec<Vec<f64>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    /// Returns the cost from location `from` to location `to`.
    pub fn get(&self, from: usize, to: usize) -> Result<f64, MatrixError> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .flatten()
            .ok_or(MatrixError::MissingEntry { from, to })
    }

    /// Number of rows in this matrix.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every row has exactly [`size`](Self::size) cells.
    pub fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|row| row.len() == n)
    }

    /// Number of cells that are present but hold no value.
    pub fn count_missing_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_none()).count())
            .sum()
    }
}
