// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shiftcast - shift fanout, claim, and escalation coordinator.
//!
//! This is the binary entry point for the Shiftcast service.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shiftcast_config::ShiftcastConfig;

mod serve;

/// Shiftcast - shift fanout, claim, and escalation coordinator.
#[derive(Parser, Debug)]
#[command(name = "shiftcast", version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file, overriding the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Shiftcast gateway server.
    Serve,
    /// Print the effective configuration and exit.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = load_config_or_exit(cli.config.as_deref());

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("shiftcast serve failed: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("shiftcast: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("shiftcast: use --help for available commands");
        }
    }
}

/// Loads configuration from the given path or the XDG hierarchy, rendering
/// diagnostics and exiting on failure.
fn load_config_or_exit(path: Option<&std::path::Path>) -> ShiftcastConfig {
    let loaded = match path {
        Some(p) => shiftcast_config::load_and_validate_path(p),
        None => shiftcast_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            shiftcast_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}
