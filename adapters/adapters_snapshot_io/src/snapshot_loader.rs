//! Snapshot Loader Module
//!
//! Reads the textual snapshot format into a validated `Snapshot`.
//!
//! ## Format
//!
//! ```text
//! numProcesses=5
//! numResources=3
//! Allocation=[
//! 0 1 0
//! 2 0 0
//! ...
//! ]
//! Max=[
//! 7 5 3
//! ...
//! ]
//! Available=[
//! 3 3 2
//! ]
//! ```
//!
//! Counts and sections may appear in any order; each is found by the first
//! line containing its tag. Section rows hold `numResources` whitespace
//! separated integers. A line containing `]` closes a section early, and rows
//! that were never read stay zero. Blank lines are skipped and lines starting
//! with `#` are comments.
//!
//! Declared counts are bounded by the input itself: `numProcesses` may not
//! exceed the number of non-comment lines, and the cell count
//! `numProcesses * numResources` may not exceed the input length in bytes.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use entities_resources::{ResourceMatrix, ResourceVector, ShapeError, Snapshot, Units};
use tracing::{debug, warn};

/// Tags that locate counts and sections in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    NumProcesses,
    NumResources,
    Allocation,
    Max,
    Available,
}

impl SectionTag {
    /// Literal token searched for in the input
    pub fn token(self) -> &'static str {
        match self {
            SectionTag::NumProcesses => "numProcesses",
            SectionTag::NumResources => "numResources",
            SectionTag::Allocation => "Allocation",
            SectionTag::Max => "Max",
            SectionTag::Available => "Available",
        }
    }

    fn is_matrix(self) -> bool {
        matches!(
            self,
            SectionTag::Allocation | SectionTag::Max | SectionTag::Available
        )
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Load a snapshot from a file
///
/// # Arguments
/// * `path` - Path of the snapshot description
///
/// # Returns
/// * `Ok(Snapshot)` - Structurally valid snapshot (allocation may still exceed max)
/// * `Err(SnapshotLoadError)` - File unreadable or content malformed
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotLoadError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => SnapshotLoadError::NotText {
            path: path.to_path_buf(),
        },
        _ => SnapshotLoadError::MissingFile {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read snapshot file");
    parse_snapshot(&text)
}

/// Load a snapshot from any reader, e.g. standard input
pub fn read_snapshot<R: Read>(mut reader: R) -> Result<Snapshot, SnapshotLoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(SnapshotLoadError::Read)?;
    parse_snapshot(&text)
}

/// Parse a snapshot from its textual description
pub fn parse_snapshot(text: &str) -> Result<Snapshot, SnapshotLoadError> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();

    let num_processes = parse_count(&lines, SectionTag::NumProcesses)?;
    let num_resources = parse_count(&lines, SectionTag::NumResources)?;
    debug!(num_processes, num_resources, "parsed snapshot dimensions");
    check_dimensions(text.len(), lines.len(), num_processes, num_resources)?;

    let allocation = parse_section(&lines, SectionTag::Allocation, num_processes, num_resources)?;
    let max = parse_section(&lines, SectionTag::Max, num_processes, num_resources)?;
    let available = parse_section(&lines, SectionTag::Available, 1, num_resources)?;

    let snapshot = Snapshot::new(
        ResourceMatrix::from_flat(num_processes, num_resources, allocation)?,
        ResourceMatrix::from_flat(num_processes, num_resources, max)?,
        ResourceVector::from(available),
    )?;
    Ok(snapshot)
}

fn find_tag(lines: &[&str], tag: SectionTag) -> Result<usize, SnapshotLoadError> {
    lines
        .iter()
        .position(|line| line.contains(tag.token()))
        .ok_or(SnapshotLoadError::MissingSection(tag))
}

/// Value after the last `=` on the tag's line
fn parse_count(lines: &[&str], tag: SectionTag) -> Result<usize, SnapshotLoadError> {
    let line = lines[find_tag(lines, tag)?];
    let value = line.rsplit('=').next().unwrap_or(line).trim();
    value.parse().map_err(|_| SnapshotLoadError::InvalidCount {
        tag,
        value: value.to_string(),
    })
}

/// Reject counts larger than the input could describe
///
/// Every process row needs a line of its own, and every cell needs at least
/// one byte of text.
fn check_dimensions(
    text_len: usize,
    line_count: usize,
    num_processes: usize,
    num_resources: usize,
) -> Result<(), SnapshotLoadError> {
    let too_large = SnapshotLoadError::TooLarge {
        num_processes,
        num_resources,
    };
    if num_processes > line_count {
        return Err(too_large);
    }
    match num_processes.checked_mul(num_resources) {
        Some(cells) if cells <= text_len => Ok(()),
        _ => Err(too_large),
    }
}

/// Read `rows` rows of `cols` integers following the tag's header line
fn parse_section(
    lines: &[&str],
    tag: SectionTag,
    rows: usize,
    cols: usize,
) -> Result<Vec<Units>, SnapshotLoadError> {
    let header = find_tag(lines, tag)?;
    let mut cells = vec![0; rows * cols];
    let mut body = lines[header + 1..]
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    for row in 0..rows {
        let Some((offset, line)) = body.next() else {
            warn!(section = %tag, rows_read = row, rows_expected = rows, "input ended inside section");
            break;
        };
        if line.contains(']') {
            debug!(section = %tag, rows_read = row, rows_expected = rows, "section closed early");
            break;
        }

        let malformed = || SnapshotLoadError::MalformedRow {
            section: tag,
            row,
            line: header + 2 + offset,
        };
        let mut tokens = line.split_whitespace();
        for cell in &mut cells[row * cols..(row + 1) * cols] {
            let token = tokens.next().ok_or_else(malformed)?;
            *cell = token.parse().map_err(|_| malformed())?;
        }
    }

    Ok(cells)
}

/// Errors raised while loading a snapshot
#[derive(Debug)]
pub enum SnapshotLoadError {
    /// The input file could not be opened or read
    MissingFile { path: PathBuf, source: io::Error },
    /// The input file exists but is not UTF-8 text
    NotText { path: PathBuf },
    /// Reading from a non-file source failed
    Read(io::Error),
    /// A count tag or section header is absent
    MissingSection(SectionTag),
    /// A count is not a non-negative integer
    InvalidCount { tag: SectionTag, value: String },
    /// The declared counts describe more cells than the input holds
    TooLarge {
        num_processes: usize,
        num_resources: usize,
    },
    /// A section row has too few values or a non-integer value
    ///
    /// `line` is 1-based among non-comment lines.
    MalformedRow {
        section: SectionTag,
        row: usize,
        line: usize,
    },
    /// Parsed parts do not line up
    Shape(ShapeError),
}

impl fmt::Display for SnapshotLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotLoadError::MissingFile { path, source } => {
                write!(f, "Failed to open file location {}: {}", path.display(), source)
            }
            SnapshotLoadError::NotText { path } => {
                write!(f, "Input file {} is not valid UTF-8 text", path.display())
            }
            SnapshotLoadError::Read(e) => write!(f, "Failed to read snapshot: {}", e),
            SnapshotLoadError::MissingSection(tag) if tag.is_matrix() => {
                write!(f, "{} matrix not found in input file", tag)
            }
            SnapshotLoadError::MissingSection(tag) => write!(f, "{} not found in input file", tag),
            SnapshotLoadError::InvalidCount { tag, value } => {
                write!(f, "{} must be a non-negative integer, found {:?}", tag, value)
            }
            SnapshotLoadError::TooLarge {
                num_processes,
                num_resources,
            } => write!(
                f,
                "numProcesses={} and numResources={} describe more than the input file holds",
                num_processes, num_resources
            ),
            SnapshotLoadError::MalformedRow { section, row, line } => write!(
                f,
                "{} row {} (line {}) does not hold the expected non-negative integers",
                section, row, line
            ),
            SnapshotLoadError::Shape(e) => write!(f, "Invalid snapshot shape: {}", e),
        }
    }
}

impl std::error::Error for SnapshotLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotLoadError::MissingFile { source, .. } => Some(source),
            SnapshotLoadError::Read(e) => Some(e),
            SnapshotLoadError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for SnapshotLoadError {
    fn from(e: ShapeError) -> Self {
        SnapshotLoadError::Shape(e)
    }
}
