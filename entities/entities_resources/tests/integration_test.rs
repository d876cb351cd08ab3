//! Integration tests for entities_resources crate
//!
//! These tests build snapshots the way the loader does (flat buffers) and the
//! way callers do (nested rows) and check that both views agree.

use entities_resources::{ResourceMatrix, ResourceVector, ShapeError, Snapshot};

#[test]
fn test_flat_and_nested_construction_agree() {
    let flat = ResourceMatrix::from_flat(2, 3, vec![0, 1, 0, 2, 0, 0]).unwrap();
    let nested = ResourceMatrix::from_rows(vec![vec![0, 1, 0], vec![2, 0, 0]]).unwrap();
    assert_eq!(flat, nested);
}

#[test]
fn test_from_flat_wrong_length() {
    let err = ResourceMatrix::from_flat(2, 2, vec![1, 2, 3]).unwrap_err();
    assert_eq!(err, ShapeError::CellCount { expected: 4, actual: 3 });
}

#[test]
fn test_empty_snapshot() {
    let snapshot = Snapshot::new(
        ResourceMatrix::zeroed(0, 0),
        ResourceMatrix::zeroed(0, 0),
        ResourceVector::zeroed(0),
    )
    .unwrap();
    assert_eq!(snapshot.num_processes(), 0);
    assert_eq!(snapshot.num_resources(), 0);
    assert!(snapshot.total_resources().is_empty());
}

#[test]
fn test_snapshot_accessors() {
    let snapshot = Snapshot::from_rows(
        vec![vec![0, 1, 0], vec![2, 0, 0]],
        vec![vec![7, 5, 3], vec![3, 2, 2]],
        vec![3, 3, 2],
    )
    .unwrap();

    assert_eq!(snapshot.allocation().row(1), &[2, 0, 0]);
    assert_eq!(snapshot.max().row(0), &[7, 5, 3]);
    assert_eq!(snapshot.available().as_slice(), &[3, 3, 2]);
    assert_eq!(snapshot.total_resources().as_slice(), &[5, 4, 2]);
}

#[test]
fn test_shape_error_display() {
    let err = ShapeError::VectorLength { expected: 3, actual: 2 };
    assert_eq!(err.to_string(), "Resource vector has 2 entries, expected 3");
}
