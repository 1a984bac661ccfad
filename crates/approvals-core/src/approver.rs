use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::fs_ops::FileMover;
use crate::io::OutputSink;
use crate::paths;

const SEPARATOR: &str = " -> ";

/// One pending comparison: the freshly received output and the approved
/// file it should replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRecord {
    pub received: PathBuf,
    pub approved: PathBuf,
}

impl ComparisonRecord {
    /// A record is exactly two paths joined by a single `" -> "`.
    pub fn parse(line_number: usize, line: &str) -> Result<Self, Error> {
        match line.split_once(SEPARATOR) {
            Some((received, approved)) if !approved.contains(SEPARATOR) => Ok(Self {
                received: PathBuf::from(received),
                approved: PathBuf::from(approved),
            }),
            _ => Err(Error::MalformedRecord {
                line_number,
                line: line.to_string(),
            }),
        }
    }
}

/// Parses a whole comparison log up front, so a bad line aborts before
/// anything is renamed.
pub fn parse_records(lines: &[String]) -> Result<Vec<ComparisonRecord>, Error> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| ComparisonRecord::parse(index + 1, line))
        .collect()
}

#[derive(Debug, Default)]
pub struct ApprovalOutcome {
    pub record_count: usize,
    pub approved: Vec<PathBuf>,
    /// Approved path and the reason its rename failed.
    pub failed: Vec<(PathBuf, String)>,
}

/// Moves every received file onto its approved file. A failed move is
/// recorded and the batch carries on.
pub fn approve_all<M: FileMover + ?Sized>(
    records: &[ComparisonRecord],
    mover: &mut M,
) -> ApprovalOutcome {
    let mut outcome = ApprovalOutcome {
        record_count: records.len(),
        ..ApprovalOutcome::default()
    };

    for record in records {
        match mover.move_file(&record.received, &record.approved) {
            Ok(()) => {
                debug!("approved {}", record.approved.display());
                outcome.approved.push(record.approved.clone());
            }
            Err(err) => {
                warn!(
                    "Failed to move '{}' to '{}': {}",
                    record.received.display(),
                    record.approved.display(),
                    err
                );
                outcome.failed.push((record.approved.clone(), err.to_string()));
            }
        }
    }

    info!(
        "Approval finished: {} approved, {} failed",
        outcome.approved.len(),
        outcome.failed.len()
    );
    outcome
}

pub fn report<S: OutputSink + ?Sized>(outcome: &ApprovalOutcome, out: &mut S) -> io::Result<()> {
    match outcome.record_count {
        0 => out.line("No mismatched files found.")?,
        1 => out.line("Mismatched file found.")?,
        _ => out.line("Mismatched files found.")?,
    }

    if !outcome.approved.is_empty() {
        out.line("Updating:")?;
        for approved in &outcome.approved {
            out.line(&format!("  - {}", display_name(approved)))?;
        }
    }

    if !outcome.failed.is_empty() {
        out.line("Failed to update:")?;
        for (approved, reason) in &outcome.failed {
            out.line(&format!("  - {}", display_name(approved)))?;
            out.line(&format!("    Reason: {}", reason))?;
        }
    }

    out.line("")?;
    match outcome.approved.len() {
        1 => out.line("Approved 1 file.")?,
        n => out.line(&format!("Approved {} files.", n))?,
    }
    Ok(())
}

/// Parses `lines`, approves every record and prints the report.
pub fn run<M, S>(lines: &[String], mover: &mut M, out: &mut S) -> Result<ApprovalOutcome, Error>
where
    M: FileMover + ?Sized,
    S: OutputSink + ?Sized,
{
    let records = parse_records(lines)?;
    let outcome = approve_all(&records, mover);
    report(&outcome, out)?;
    Ok(outcome)
}

fn display_name(path: &std::path::Path) -> String {
    paths::file_name(&path.to_string_lossy())
}
