//! Safety Check Entry Point
//!
//! Runs need derivation followed by the safety simulation over a `Snapshot`.

use entities_resources::Snapshot;
use tracing::info;

use crate::need_derivation::{derive_needs, SafetyError};
use crate::simulation::{simulate, SafetyOutcome};

/// Check whether `snapshot` is in a safe state
///
/// # Returns
/// * `Ok(SafetyOutcome)` - Verdict and completion order (safe or unsafe)
/// * `Err(SafetyError)` - The snapshot is malformed; no simulation was run
pub fn check_safety(snapshot: &Snapshot) -> Result<SafetyOutcome, SafetyError> {
    let need = derive_needs(snapshot.allocation(), snapshot.max())?;
    let outcome = simulate(&need, snapshot.allocation(), snapshot.available());
    info!(
        processes = snapshot.num_processes(),
        resources = snapshot.num_resources(),
        safe = outcome.is_safe(),
        completed = outcome.completed_count(),
        "safety check complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_process_trivially_safe() {
        let snapshot = Snapshot::from_rows(vec![vec![2]], vec![vec![2]], vec![0]).unwrap();
        let outcome = check_safety(&snapshot).unwrap();
        assert!(outcome.is_safe());
        assert_eq!(outcome.order(), &[0]);
    }

    #[test]
    fn test_malformed_snapshot_never_simulates() {
        let snapshot = Snapshot::from_rows(vec![vec![3]], vec![vec![2]], vec![10]).unwrap();
        assert!(matches!(
            check_safety(&snapshot),
            Err(SafetyError::InvalidSnapshot { .. })
        ));
    }
}
