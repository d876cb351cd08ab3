//! Safety Simulation Module
//!
//! The fixed-point reclamation loop at the heart of the safety check.
//!
//! Starting from `work = available`, each pass scans the processes that have
//! not finished yet in ascending index order. A process whose whole need fits
//! in `work` is marked complete, appended to the completion order, and its
//! allocation is added back into `work` straight away, so a later process in
//! the same pass can already use it.
//!
//! The loop stops when every process has completed (safe) or when a pass
//! completes nobody (unsafe). Each productive pass completes at least one
//! process, so there are at most `n + 1` passes and the total cost is
//! O(n² · m) for `n` processes and `m` resource types.

use entities_resources::{ProcessIndex, ResourceMatrix, ResourceVector};
use tracing::{debug, trace};

/// Classification of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every process can finish; the completion order is total
    Safe,
    /// Some processes can never obtain their need
    Unsafe,
}

impl Verdict {
    pub fn is_safe(self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

/// Frozen result of one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyOutcome {
    verdict: Verdict,
    order: Vec<ProcessIndex>,
    completed: Vec<bool>,
    final_work: ResourceVector,
    passes: usize,
}

impl SafetyOutcome {
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_safe(&self) -> bool {
        self.verdict.is_safe()
    }

    /// Processes in the order they were judged able to finish
    ///
    /// Total when safe, the partial prefix discovered before progress stopped
    /// when unsafe.
    pub fn order(&self) -> &[ProcessIndex] {
        &self.order
    }

    /// Number of processes that completed
    pub fn completed_count(&self) -> usize {
        self.order.len()
    }

    /// Whether `process` completed during the simulation
    pub fn is_completed(&self, process: ProcessIndex) -> bool {
        self.completed.get(process).copied().unwrap_or(false)
    }

    /// Processes that never completed, in index order
    pub fn blocked(&self) -> Vec<ProcessIndex> {
        self.completed
            .iter()
            .enumerate()
            .filter(|(_, done)| !**done)
            .map(|(process, _)| process)
            .collect()
    }

    /// Work vector when the loop stopped
    pub fn final_work(&self) -> &ResourceVector {
        &self.final_work
    }

    /// Number of scan passes performed, including the final unproductive one
    pub fn passes(&self) -> usize {
        self.passes
    }
}

/// Run the safety simulation over a derived need matrix
///
/// # Arguments
/// * `need` - Outstanding need per process, as produced by `derive_needs`
/// * `allocation` - Units held per process, same shape as `need`
/// * `available` - Free units per resource type
///
/// # Returns
/// The verdict together with the (full or partial) completion order. The
/// simulation has no failure mode; inputs are only read.
///
/// # Panics
/// Panics if the shapes of `need`, `allocation` and `available` disagree.
/// `Snapshot` and `derive_needs` guarantee matching shapes.
pub fn simulate(
    need: &ResourceMatrix,
    allocation: &ResourceMatrix,
    available: &ResourceVector,
) -> SafetyOutcome {
    assert!(need.same_shape(allocation), "need and allocation must share a shape");
    assert_eq!(need.cols(), available.len(), "available must cover every resource type");

    let num_processes = need.rows();
    let mut work = available.clone();
    let mut completed = vec![false; num_processes];
    let mut order = Vec::with_capacity(num_processes);
    let mut passes = 0;

    let verdict = loop {
        if order.len() == num_processes {
            break Verdict::Safe;
        }

        debug_assert!(passes <= num_processes, "pass budget exhausted");
        passes += 1;
        let completed_before = order.len();

        for process in 0..num_processes {
            if completed[process] || !work.covers(need.row(process)) {
                continue;
            }
            completed[process] = true;
            order.push(process);
            work.release(allocation.row(process));
            trace!(process, pass = passes, work = ?work.as_slice(), "process can complete");
        }

        debug_assert!(order.len() >= completed_before);
        debug!(
            pass = passes,
            newly_completed = order.len() - completed_before,
            total_completed = order.len(),
            "simulation pass finished"
        );

        if order.len() == completed_before {
            break Verdict::Unsafe;
        }
    };

    debug!(
        ?verdict,
        completed = order.len(),
        processes = num_processes,
        passes,
        "safety simulation finished"
    );

    SafetyOutcome {
        verdict,
        order,
        completed,
        final_work: work,
        passes,
    }
}
