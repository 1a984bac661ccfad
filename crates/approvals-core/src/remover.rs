use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::error::Error;
use crate::fs_ops::FileDeleter;
use crate::io::{InputSource, OutputSink};
use crate::paths;

/// How stray approved files are dealt with once they are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DeletionMode {
    #[serde(rename = "delete", alias = "delete-without-prompting")]
    DeleteWithoutPrompting,
    #[serde(rename = "prompt")]
    Prompt,
    #[serde(rename = "dry-run")]
    DryRun,
}

impl fmt::Display for DeletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeletionMode::DeleteWithoutPrompting => "delete",
            DeletionMode::Prompt => "prompt",
            DeletionMode::DryRun => "dry-run",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// Normalised paths of approved files no test touched, in discovery order.
    pub stray_files: Vec<String>,
    pub deleted: usize,
}

/// Approved files on disk that the last run did not touch.
pub fn find_stray_files(touched: &[String], on_disk: &[String]) -> Vec<String> {
    let touched: HashSet<String> = touched.iter().map(|p| paths::to_posix(p)).collect();
    on_disk
        .iter()
        .map(|p| paths::to_posix(p))
        .filter(|p| !touched.contains(p))
        .collect()
}

pub fn report_stray_files<S: OutputSink + ?Sized>(out: &mut S, stray_files: &[String]) -> io::Result<()> {
    if stray_files.is_empty() {
        out.line("No unused `.approved.` files found.")?;
        out.line("")?;
        return Ok(());
    }

    out.line("Unused `.approved.` files found.")?;
    out.line("")?;
    for stray in stray_files {
        out.line(&format!(
            " - {} (in {}/)",
            paths::file_name(stray),
            paths::parent_dir(stray)
        ))?;
    }
    Ok(())
}

pub fn should_delete<S, I>(mode: DeletionMode, out: &mut S, input: &mut I) -> Result<bool, Error>
where
    S: OutputSink + ?Sized,
    I: InputSource + ?Sized,
{
    match mode {
        DeletionMode::DeleteWithoutPrompting => Ok(true),
        DeletionMode::DryRun => Ok(false),
        DeletionMode::Prompt => {
            out.line("Delete? [Y/n]")?;
            let answer = input.read_line()?;
            Ok(matches!(answer.as_str(), "Y" | "y" | ""))
        }
    }
}

/// Reports stray files, then deletes them if `mode` (or the user) allows.
pub fn remove_abandoned_files<D, S, I>(
    mode: DeletionMode,
    touched: &[String],
    on_disk: &[String],
    deleter: &mut D,
    out: &mut S,
    input: &mut I,
) -> Result<RemovalOutcome, Error>
where
    D: FileDeleter + ?Sized,
    S: OutputSink + ?Sized,
    I: InputSource + ?Sized,
{
    let stray_files = find_stray_files(touched, on_disk);
    debug!(
        "{} touched, {} on disk, {} stray",
        touched.len(),
        on_disk.len(),
        stray_files.len()
    );
    report_stray_files(out, &stray_files)?;

    let mut outcome = RemovalOutcome {
        stray_files,
        deleted: 0,
    };

    if !outcome.stray_files.is_empty() && should_delete(mode, out, input)? {
        for stray in &outcome.stray_files {
            deleter.delete_file(Path::new(stray))?;
            outcome.deleted += 1;
        }
        out.line("")?;
        out.line(&format!("Deleted {} files.", outcome.deleted))?;
        info!("Deleted {} abandoned approved files", outcome.deleted);
    } else {
        out.line("No files were deleted.")?;
    }

    Ok(outcome)
}
