pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "voicecart",
    about = "Voicecart operator CLI",
    long_about = "Inspect voicecart configuration, check catalog readiness, \
                  and run voice commands offline.",
    after_help = "Examples:\n  voicecart doctor --json\n  voicecart config\n  \
                  voicecart say \"add two apples\" \"checkout\""
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, intent rules, and catalog readability")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Load the configured catalog and print its products")]
    Catalog,
    #[command(about = "Run utterances in order against a fresh cart and print each outcome")]
    Say {
        #[arg(required = true, help = "Utterances to process, one argument each")]
        utterances: Vec<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Catalog => commands::catalog::run(),
        Command::Say { utterances } => commands::say::run(&utterances),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
