// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Octogram - a Telegram bot that files GitHub issues.
//!
//! This is the binary entry point for the Octogram bot.

mod serve;

use clap::{Parser, Subcommand};

/// Octogram - a Telegram bot that files GitHub issues.
#[derive(Parser, Debug)]
#[command(name = "octogram", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot: Telegram long polling plus the HTTP gateway.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup. A missing bot token or
    // OAuth secret stops the process here, before any listener starts.
    let config = match octogram_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            octogram_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(err) = serve::run_serve(config).await {
                eprintln!("octogram: {err}");
                std::process::exit(1);
            }
        }
        None => {
            println!("octogram: use --help for available commands");
        }
    }
}
