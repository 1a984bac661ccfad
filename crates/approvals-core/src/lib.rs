pub mod approver;
pub mod config;
pub mod engine;
pub mod error;
pub mod fs_ops;
pub mod io;
pub mod paths;
pub mod remover;
pub mod scanner;

pub use approver::{ApprovalOutcome, ComparisonRecord};
pub use config::AppConfig;
pub use engine::ApprovalEngine;
pub use error::Error;
pub use fs_ops::{FileDeleter, FileMover, LocalFs};
pub use io::{InputSource, OutputSink, ScriptedInput, StdinSource, StdoutSink};
pub use remover::{DeletionMode, RemovalOutcome};
