mod commands;
mod logging;

use std::process;

use approvals_core::{AppConfig, ApprovalEngine, StdinSource, StdoutSink};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, RemoveArgs};
use dotenv::dotenv;
use tracing::{debug, error};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = match approvals_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    };
    debug!("config: {:?}", config);

    let result = match args.command {
        Some(Commands::ApproveAll) => run_approve_all(config),
        Some(Commands::RemoveAbandoned(remove_args)) => run_remove_abandoned(config, &remove_args),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:#?}", config);
            Ok(())
        }
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("Error: {}", err);
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run_approve_all(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = ApprovalEngine::new(config);
    engine.approve_all(&mut StdoutSink)?;
    Ok(())
}

fn run_remove_abandoned(
    config: AppConfig,
    args: &RemoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.resolve_mode(config.default_mode);
    let mut engine = ApprovalEngine::new(config);
    engine.remove_abandoned_files(mode, &mut StdoutSink, &mut StdinSource)?;
    Ok(())
}
