//! System Snapshot
//!
//! A single, immutable picture of the resource state: what each process holds,
//! the most each process may ever hold, and what is still free.

use crate::resources::{ResourceMatrix, ResourceVector, ShapeError, Units};

/// Allocation, maximum demand and available resources for one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    allocation: ResourceMatrix,
    max: ResourceMatrix,
    available: ResourceVector,
}

impl Snapshot {
    /// Create a snapshot after validating that all three parts line up
    ///
    /// # Arguments
    /// * `allocation` - Units currently held, one row per process
    /// * `max` - Declared maximum demand, same shape as `allocation`
    /// * `available` - Units not held by any process, one per resource type
    ///
    /// # Returns
    /// * `Ok(Snapshot)` - Shapes agree
    /// * `Err(ShapeError)` - Matrices differ in shape or `available` has the wrong length
    pub fn new(
        allocation: ResourceMatrix,
        max: ResourceMatrix,
        available: ResourceVector,
    ) -> Result<Self, ShapeError> {
        if !allocation.same_shape(&max) {
            return Err(ShapeError::MatrixMismatch {
                left: (allocation.rows(), allocation.cols()),
                right: (max.rows(), max.cols()),
            });
        }
        if available.len() != allocation.cols() {
            return Err(ShapeError::VectorLength {
                expected: allocation.cols(),
                actual: available.len(),
            });
        }
        Ok(Self {
            allocation,
            max,
            available,
        })
    }

    /// Convenience constructor from nested rows
    ///
    /// With no process rows the column count comes from `available`.
    pub fn from_rows(
        allocation: Vec<Vec<Units>>,
        max: Vec<Vec<Units>>,
        available: Vec<Units>,
    ) -> Result<Self, ShapeError> {
        let cols = available.len();
        let matrix = |rows: Vec<Vec<Units>>| {
            if rows.is_empty() {
                Ok(ResourceMatrix::zeroed(0, cols))
            } else {
                ResourceMatrix::from_rows(rows)
            }
        };
        Self::new(matrix(allocation)?, matrix(max)?, ResourceVector::from(available))
    }

    pub fn num_processes(&self) -> usize {
        self.allocation.rows()
    }

    pub fn num_resources(&self) -> usize {
        self.available.len()
    }

    pub fn allocation(&self) -> &ResourceMatrix {
        &self.allocation
    }

    pub fn max(&self) -> &ResourceMatrix {
        &self.max
    }

    pub fn available(&self) -> &ResourceVector {
        &self.available
    }

    /// Total units in the system per resource type: available plus everything allocated
    pub fn total_resources(&self) -> ResourceVector {
        let mut total = self.available.clone();
        total.release(self.allocation.column_totals().as_slice());
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_shape_mismatch() {
        let err = Snapshot::from_rows(vec![vec![1, 0]], vec![vec![1, 0], vec![0, 0]], vec![0, 0])
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::MatrixMismatch {
                left: (1, 2),
                right: (2, 2)
            }
        );
    }

    #[test]
    fn test_snapshot_available_length() {
        let err = Snapshot::from_rows(vec![vec![1, 0]], vec![vec![1, 0]], vec![0]).unwrap_err();
        assert_eq!(err, ShapeError::VectorLength { expected: 2, actual: 1 });
    }

    #[test]
    fn test_no_processes_keeps_resource_types() {
        let snapshot = Snapshot::from_rows(Vec::new(), Vec::new(), vec![4, 2]).unwrap();
        assert_eq!(snapshot.num_processes(), 0);
        assert_eq!(snapshot.num_resources(), 2);
        assert_eq!(snapshot.allocation().cols(), 2);
        assert_eq!(snapshot.total_resources().as_slice(), &[4, 2]);
    }

    #[test]
    fn test_total_resources_saturate() {
        let snapshot = Snapshot::from_rows(
            vec![vec![Units::MAX], vec![1]],
            vec![vec![Units::MAX], vec![1]],
            vec![1],
        )
        .unwrap();
        assert_eq!(snapshot.total_resources().as_slice(), &[Units::MAX]);
    }

    #[test]
    fn test_total_resources() {
        let snapshot =
            Snapshot::from_rows(vec![vec![1, 2], vec![3, 0]], vec![vec![2, 2], vec![3, 1]], vec![1, 1])
                .unwrap();
        assert_eq!(snapshot.num_processes(), 2);
        assert_eq!(snapshot.num_resources(), 2);
        assert_eq!(snapshot.total_resources().as_slice(), &[5, 3]);
    }
}
