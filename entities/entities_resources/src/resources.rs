//! Resource Vectors and Matrices
//!
//! Owned, dynamically sized containers for per-resource counts. A
//! `ResourceMatrix` keeps its cells in a single row-major buffer so that a
//! process's row is always a contiguous slice.

use std::fmt;
use std::ops::Deref;

/// Units of a single resource type
pub type Units = u64;

/// Process identifier: the row index in every matrix
pub type ProcessIndex = usize;

/// One count per resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourceVector {
    units: Vec<Units>,
}

impl ResourceVector {
    /// Create a vector of `len` zero counts
    pub fn zeroed(len: usize) -> Self {
        Self { units: vec![0; len] }
    }

    /// Number of resource types
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the vector covers no resource types
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Check that every entry of `demand` fits within this vector
    ///
    /// Both sides must cover the same resource types; a shorter `demand`
    /// is compared only over its own length.
    pub fn covers(&self, demand: &[Units]) -> bool {
        demand.iter().zip(&self.units).all(|(need, have)| need <= have)
    }

    /// Add `released` element-wise into this vector
    ///
    /// Sums saturate at `Units::MAX`. No demand can exceed that, so a
    /// saturated entry still covers every possible request.
    pub fn release(&mut self, released: &[Units]) {
        for (have, back) in self.units.iter_mut().zip(released) {
            *have = have.saturating_add(*back);
        }
    }

    /// Borrow the counts as a slice
    pub fn as_slice(&self) -> &[Units] {
        &self.units
    }
}

impl From<Vec<Units>> for ResourceVector {
    fn from(units: Vec<Units>) -> Self {
        Self { units }
    }
}

impl Deref for ResourceVector {
    type Target = [Units];

    fn deref(&self) -> &[Units] {
        &self.units
    }
}

/// Process × resource matrix in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Units>,
}

impl ResourceMatrix {
    /// Create a `rows × cols` matrix of zeros
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`. Untrusted dimensions go
    /// through `from_flat`, which reports that as `ShapeError::TooLarge`.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build a matrix from a flat row-major buffer
    ///
    /// # Returns
    /// * `Ok(ResourceMatrix)` - `cells.len() == rows * cols`
    /// * `Err(ShapeError)` - Shape overflows `usize` or buffer length does not match it
    pub fn from_flat(rows: usize, cols: usize, cells: Vec<Units>) -> Result<Self, ShapeError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(ShapeError::TooLarge { rows, cols })?;
        if cells.len() != expected {
            return Err(ShapeError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a matrix from explicit rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<Units>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::RaggedRow {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows (processes)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (resource types)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if `other` has the same dimensions
    pub fn same_shape(&self, other: &ResourceMatrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Borrow one row
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Units] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Mutably borrow one row
    pub fn row_mut(&mut self, row: usize) -> &mut [Units] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Read a single cell
    pub fn get(&self, row: usize, col: usize) -> Option<Units> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over rows in index order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Units]> + '_ {
        // chunks_exact(0) panics, and a zero-column matrix still has rows
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Column sums (total units held per resource type)
    pub fn column_totals(&self) -> ResourceVector {
        let mut totals = ResourceVector::zeroed(self.cols);
        for row in self.iter_rows() {
            totals.release(row);
        }
        totals
    }
}

impl fmt::Display for ResourceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(|u| u.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Dimension errors raised when building matrices or snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Flat buffer does not hold `rows * cols` cells
    CellCount { expected: usize, actual: usize },
    /// `rows * cols` does not fit in `usize`
    TooLarge { rows: usize, cols: usize },
    /// A row differs in length from the first row
    RaggedRow { row: usize, expected: usize, actual: usize },
    /// Two matrices that must align have different dimensions
    MatrixMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Vector length differs from the matrix column count
    VectorLength { expected: usize, actual: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::CellCount { expected, actual } => {
                write!(f, "Expected {} matrix cells, found {}", expected, actual)
            }
            ShapeError::TooLarge { rows, cols } => {
                write!(f, "A {}x{} matrix is too large to address", rows, cols)
            }
            ShapeError::RaggedRow { row, expected, actual } => {
                write!(f, "Row {} has {} columns, expected {}", row, actual, expected)
            }
            ShapeError::MatrixMismatch { left, right } => write!(
                f,
                "Matrix shapes differ: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            ShapeError::VectorLength { expected, actual } => {
                write!(f, "Resource vector has {} entries, expected {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_and_release() {
        let mut work = ResourceVector::from(vec![3, 3, 2]);
        assert!(work.covers(&[1, 2, 2]));
        assert!(!work.covers(&[4, 0, 0]));

        work.release(&[2, 0, 0]);
        assert_eq!(work.as_slice(), &[5, 3, 2]);
    }

    #[test]
    fn test_release_saturates() {
        let mut work = ResourceVector::from(vec![Units::MAX, 1]);
        work.release(&[1, 2]);
        assert_eq!(work.as_slice(), &[Units::MAX, 3]);
        assert!(work.covers(&[Units::MAX, 3]));
    }

    #[test]
    fn test_column_totals_saturate() {
        let m = ResourceMatrix::from_rows(vec![vec![Units::MAX, 1], vec![1, 1]]).unwrap();
        assert_eq!(m.column_totals().as_slice(), &[Units::MAX, 2]);
    }

    #[test]
    fn test_from_flat_overflowing_shape() {
        let err = ResourceMatrix::from_flat(usize::MAX, 2, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = ResourceMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_row_access() {
        let m = ResourceMatrix::from_flat(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.get(0, 2), Some(3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.column_totals().as_slice(), &[5, 7, 9]);
    }

    #[test]
    fn test_zero_column_matrix_has_rows() {
        let m = ResourceMatrix::zeroed(3, 0);
        assert_eq!(m.iter_rows().count(), 3);
        assert!(m.row(2).is_empty());
    }

    #[test]
    fn test_display() {
        let m = ResourceMatrix::from_rows(vec![vec![7, 4], vec![0, 1]]).unwrap();
        assert_eq!(m.to_string(), "7 4\n0 1\n");
    }
}
