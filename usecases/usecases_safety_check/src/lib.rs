//! Use Cases Layer: Safety Check
//!
//! Decides whether a resource-allocation snapshot is in a safe state, that is,
//! whether every process can eventually obtain its declared maximum and finish.
//!
//! ## Overview
//!
//! The `usecases_safety_check` crate holds the only non-trivial logic in the
//! workspace. It runs in two steps:
//!
//! 1. **Need derivation** (`need_derivation`): `need = max - allocation` for
//!    every process and resource type. A snapshot where some allocation
//!    exceeds its declared maximum is rejected here.
//!
//! 2. **Safety simulation** (`simulation`): a fixed-point loop that repeatedly
//!    completes every process whose need fits in the work vector, reclaiming
//!    its allocation, until either everyone has finished (safe) or a full pass
//!    makes no progress (unsafe).
//!
//! ## Modules
//!
//! - **[`need_derivation`](need_derivation/index.html)**: `derive_needs` and `SafetyError`
//! - **[`simulation`](simulation/index.html)**: `simulate`, `SafetyOutcome`, `Verdict`
//! - **[`safety_check`](safety_check/index.html)**: `check_safety`, both steps over a `Snapshot`
//!
//! ## Determinism
//!
//! Processes are scanned in ascending index order and resources released by a
//! completed process are visible to later processes in the same pass. The
//! resulting completion order is therefore fully determined by the snapshot.
//!
//! ## See Also
//!
//! - [`entities_resources`](../../entities/entities_resources/index.html): Snapshot value types
//! - [`adapters_snapshot_io`](../../adapters/adapters_snapshot_io/index.html): Loading snapshots and rendering outcomes

pub mod need_derivation;
pub mod safety_check;
pub mod simulation;

pub use need_derivation::{derive_needs, SafetyError};
pub use safety_check::check_safety;
pub use simulation::{simulate, SafetyOutcome, Verdict};
