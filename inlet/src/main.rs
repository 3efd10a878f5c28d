mod cli;

use clap::{Parser, Subcommand};
use inlet_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inlet", version, about = "Inlet: HTTP telemetry receiver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a receiver config file
    Check {
        /// Path to the receiver config file
        #[arg(long, default_value = "config/inlet.yaml")]
        config: PathBuf,

        /// Reject unknown keys instead of ignoring them
        #[arg(long)]
        strict: bool,

        /// Print the loaded config as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            config,
            strict,
            json,
        } => {
            init_logging();

            if let Err(e) = cli::check::check(config, strict, json) {
                eprintln!("check error: {e}");
                std::process::exit(1);
            }
        }
    }
}
