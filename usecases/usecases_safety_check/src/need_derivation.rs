//! Need Derivation Module
//!
//! Computes each process's outstanding need from its allocation and declared
//! maximum.

use std::fmt;

use entities_resources::{ProcessIndex, ResourceMatrix, ShapeError, Units};

/// Derive the need matrix: `need[i][j] = max[i][j] - allocation[i][j]`
///
/// # Arguments
/// * `allocation` - Units currently held, one row per process
/// * `max` - Declared maximum demand, same shape as `allocation`
///
/// # Returns
/// * `Ok(ResourceMatrix)` - Need matrix, every cell non-negative
/// * `Err(SafetyError::InvalidSnapshot)` - Some allocation exceeds its maximum;
///   the first offending cell in row-major order is reported
/// * `Err(SafetyError::ShapeMismatch)` - The two matrices differ in shape
pub fn derive_needs(
    allocation: &ResourceMatrix,
    max: &ResourceMatrix,
) -> Result<ResourceMatrix, SafetyError> {
    if !allocation.same_shape(max) {
        return Err(SafetyError::ShapeMismatch(ShapeError::MatrixMismatch {
            left: (allocation.rows(), allocation.cols()),
            right: (max.rows(), max.cols()),
        }));
    }

    let mut need = ResourceMatrix::zeroed(allocation.rows(), allocation.cols());
    for process in 0..allocation.rows() {
        let held = allocation.row(process);
        let limit = max.row(process);
        for (resource, (cell, (&allocated, &maximum))) in need
            .row_mut(process)
            .iter_mut()
            .zip(held.iter().zip(limit))
            .enumerate()
        {
            *cell = maximum.checked_sub(allocated).ok_or(SafetyError::InvalidSnapshot {
                process,
                resource,
                allocated,
                maximum,
            })?;
        }
    }

    Ok(need)
}

/// Errors that prevent the safety check from running
///
/// An unsafe verdict is not an error; these only describe snapshots that
/// cannot be evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyError {
    /// A process holds more of a resource than it declared as its maximum
    InvalidSnapshot {
        process: ProcessIndex,
        resource: usize,
        allocated: Units,
        maximum: Units,
    },
    /// Allocation and maximum matrices do not line up
    ShapeMismatch(ShapeError),
}

impl fmt::Display for SafetyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyError::InvalidSnapshot {
                process,
                resource,
                allocated,
                maximum,
            } => write!(
                f,
                "Allocation cannot exceed Max: process {} holds {} of resource {} but declares a maximum of {}",
                process, allocated, resource, maximum
            ),
            SafetyError::ShapeMismatch(e) => write!(f, "Snapshot shape mismatch: {}", e),
        }
    }
}

impl std::error::Error for SafetyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SafetyError::ShapeMismatch(e) => Some(e),
            SafetyError::InvalidSnapshot { .. } => None,
        }
    }
}

impl From<ShapeError> for SafetyError {
    fn from(e: ShapeError) -> Self {
        SafetyError::ShapeMismatch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<Units>>) -> ResourceMatrix {
        ResourceMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_derive_needs() {
        let allocation = matrix(vec![vec![0, 1, 0], vec![2, 0, 0]]);
        let max = matrix(vec![vec![7, 5, 3], vec![3, 2, 2]]);
        let need = derive_needs(&allocation, &max).unwrap();
        assert_eq!(need, matrix(vec![vec![7, 4, 3], vec![1, 2, 2]]));
    }

    #[test]
    fn test_allocation_exceeds_max() {
        let allocation = matrix(vec![vec![0, 0], vec![1, 4]]);
        let max = matrix(vec![vec![1, 1], vec![1, 3]]);
        let err = derive_needs(&allocation, &max).unwrap_err();
        assert_eq!(
            err,
            SafetyError::InvalidSnapshot {
                process: 1,
                resource: 1,
                allocated: 4,
                maximum: 3
            }
        );
    }

    #[test]
    fn test_first_violation_reported() {
        let allocation = matrix(vec![vec![5, 5], vec![5, 5]]);
        let max = matrix(vec![vec![5, 4], vec![0, 0]]);
        match derive_needs(&allocation, &max) {
            Err(SafetyError::InvalidSnapshot { process, resource, .. }) => {
                assert_eq!((process, resource), (0, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let allocation = matrix(vec![vec![0, 0]]);
        let max = matrix(vec![vec![0, 0, 0]]);
        assert!(matches!(
            derive_needs(&allocation, &max),
            Err(SafetyError::ShapeMismatch(_))
        ));
    }
}
