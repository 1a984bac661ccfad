use approvals_core::DeletionMode;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "approvals")]
#[command(about = "Approve pending comparisons and clean up abandoned .approved. files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Move every received file listed in the failed-comparison log over its approved file
    ApproveAll,
    /// Delete approved files not touched by the last test run
    RemoveAbandoned(RemoveArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// How to handle unused files (defaults to `default_mode` from the configuration)
    #[arg(long, value_enum, conflicts_with_all = ["dry_run", "yes"])]
    pub mode: Option<ModeArg>,
    /// Only list unused files
    #[arg(long, conflicts_with = "yes")]
    pub dry_run: bool,
    /// Delete unused files without asking
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Delete,
    Prompt,
    DryRun,
}

impl From<ModeArg> for DeletionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Delete => DeletionMode::DeleteWithoutPrompting,
            ModeArg::Prompt => DeletionMode::Prompt,
            ModeArg::DryRun => DeletionMode::DryRun,
        }
    }
}

impl RemoveArgs {
    pub fn resolve_mode(&self, default_mode: DeletionMode) -> DeletionMode {
        if self.dry_run {
            DeletionMode::DryRun
        } else if self.yes {
            DeletionMode::DeleteWithoutPrompting
        } else {
            self.mode.map(DeletionMode::from).unwrap_or(default_mode)
        }
    }
}
