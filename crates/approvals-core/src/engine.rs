use std::path::Path;
use tracing::{debug, info, warn};

use crate::approver::{self, ApprovalOutcome};
use crate::config::AppConfig;
use crate::error::Error;
use crate::fs_ops::LocalFs;
use crate::io::{load_lines, InputSource, OutputSink};
use crate::remover::{self, DeletionMode, RemovalOutcome};
use crate::scanner;

/// Runs both tools against the real filesystem, using the locations in
/// `AppConfig`.
pub struct ApprovalEngine {
    config: AppConfig,
    fs: LocalFs,
}

impl ApprovalEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config, fs: LocalFs }
    }

    /// Accepts every pending comparison listed in the failed-comparison log.
    pub fn approve_all<S: OutputSink + ?Sized>(&mut self, out: &mut S) -> Result<ApprovalOutcome, Error> {
        let log_path = self.config.failed_comparison_log_path();
        info!("Reading failed comparisons from {}", log_path.display());
        let lines = load_lines(&log_path)?;
        approver::run(&lines, &mut self.fs, out)
    }

    /// Deletes approved files that the last test run did not touch.
    pub fn remove_abandoned_files<S, I>(
        &mut self,
        mode: DeletionMode,
        out: &mut S,
        input: &mut I,
    ) -> Result<RemovalOutcome, Error>
    where
        S: OutputSink + ?Sized,
        I: InputSource + ?Sized,
    {
        let log_path = self.config.approved_files_log_path();
        info!("Reading touched files from {}", log_path.display());
        let touched = load_lines(&log_path)?;

        // Test frameworks log absolute paths. Symlinks stay as written so the
        // scanned paths compare equal to the logged ones.
        let root = std::path::absolute(self.config.scan_root_path())?;
        info!("Scanning {} for '{}'", root.display(), self.config.approved_pattern);
        let on_disk: Vec<String> = scanner::find_approved_files(
            &root,
            &self.config.approved_pattern,
            &self.config.ignore_patterns,
        )?
        .into_iter()
        .filter_map(|path| match path.into_os_string().into_string() {
            Ok(path) => Some(path),
            Err(raw) => {
                warn!(
                    "Skipping approved file with a non UTF-8 name: {}",
                    Path::new(&raw).display()
                );
                None
            }
        })
        .collect();
        debug!("mode: {}", mode);

        remover::remove_abandoned_files(mode, &touched, &on_disk, &mut self.fs, out, input)
    }
}
