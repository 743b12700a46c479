mod cli;
pub mod errors;
mod handlers;

use std::process::ExitCode;
use clap::Parser;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Status { dir } => handlers::handle_status(&dir),
        Commands::List { dir, detail } => handlers::handle_list(&dir, detail),
        Commands::Get { dir, file } => handlers::handle_get(&dir, &file),
        Commands::Check { dir } => handlers::handle_check(&dir),
    }
}
