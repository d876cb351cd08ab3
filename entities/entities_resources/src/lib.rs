//! Entities Layer: Resources
//!
//! Provides the value types every other layer works with when reasoning about
//! a resource-allocation snapshot:
//! - Resource vectors (one count per resource type)
//! - Resource matrices (one row per process)
//! - System snapshots (allocation, maximum demand, available)
//!
//! ## Overview
//!
//! The `entities_resources` crate is the innermost layer of the workspace. It
//! has no dependencies and contains no algorithmic logic beyond shape
//! validation. Matrices are stored as one contiguous `Vec<Units>` indexed by
//! `row * cols + col`, and rows are handed out as slices.
//!
//! ## Modules
//!
//! - **[`resources`](resources/index.html)**: `ResourceVector`, `ResourceMatrix`
//!   and the `ShapeError` raised when dimensions disagree
//!
//! - **[`snapshot`](snapshot/index.html)**: `Snapshot`, the immutable triple of
//!   allocation, maximum demand and available resources
//!
//! ## See Also
//!
//! - [`usecases_safety_check`](../../usecases/usecases_safety_check/index.html): Safety simulation over a snapshot

pub mod resources;
pub mod snapshot;

pub use resources::{ProcessIndex, ResourceMatrix, ResourceVector, ShapeError, Units};
pub use snapshot::Snapshot;
