//! Adapters Layer: Snapshot I/O
//!
//! Provides the text-facing edges of the safety check:
//! - Loading a snapshot from its textual description
//! - Rendering a safety outcome for the console
//!
//! Depends on the Entities layer for snapshot types and on the Use Cases layer
//! for `SafetyOutcome`. Neither module contains any algorithmic logic.

pub mod report;
pub mod snapshot_loader;

pub use report::{render_need_matrix, render_report, write_report};
pub use snapshot_loader::{load_snapshot, parse_snapshot, read_snapshot, SectionTag, SnapshotLoadError};
