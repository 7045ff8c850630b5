// File:    main.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Command-line entry point: replays event scripts or runs an interactive OTP prompt.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A command-line front end for segmented OTP input boxes.

use clap::{Parser, Subcommand};
use log::{error, info};
use otp_input_core::OtpInputConfig;
use std::io;
use std::path::PathBuf;

mod interactive;
mod replay;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Replay a script of key, input and paste events\notp-input replay ./script.json\n\n# Replay against four alphanumeric boxes\notp-input --length 4 --pattern '^[A-Z0-9]+$' replay ./script.json\n\n# Type a code interactively\notp-input interactive\n\n# Use a configuration file\notp-input --config ./otp.json interactive"
)]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// The number of boxes. Overrides the configuration.
    #[arg(long, global = true)]
    length: Option<usize>,

    /// The regular expression typed and pasted values must match. Overrides the configuration.
    #[arg(long, global = true)]
    pattern: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of events and print what the input emits
    Replay {
        /// Path to the script file
        #[arg()]
        script: PathBuf,
    },
    /// Type a code into boxes drawn in the terminal
    Interactive,
}

impl Cli {
    fn apply_overrides(&self, mut config: OtpInputConfig) -> OtpInputConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(pattern) = &self.pattern {
            config.pattern.clone_from(pattern);
        }
        config
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let base = cli.config.as_ref().map_or_else(OtpInputConfig::default, |path| {
        OtpInputConfig::from_path(path).unwrap_or_else(|e| {
            error!("Failed to load configuration '{}': {e}", path.display());
            std::process::exit(1);
        })
    });

    match &cli.command {
        Commands::Replay { script } => {
            let script_file = replay::load_script(script).unwrap_or_else(|e| {
                error!("Failed to load script '{}': {e}", script.display());
                std::process::exit(1);
            });
            let config = cli.apply_overrides(script_file.config.unwrap_or(base));
            info!("Replaying {} events", script_file.events.len());
            if let Err(e) = replay::run(config, &script_file.events, &mut io::stdout().lock()) {
                error!("Replay failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Interactive => {
            let config = cli.apply_overrides(base);
            match interactive::run(config) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => info!("Cancelled."),
                Err(e) => {
                    error!("Interactive session failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
