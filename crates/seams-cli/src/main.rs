use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use seams::services::calculator::Operation;
use seams::services::weather::Units;

mod commands;
mod config;
mod render;

use crate::config::load_config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the step-by-step trace of an agent conversation stored as JSONL
    Trace {
        /// Path to the trace file
        file: PathBuf,

        /// Only print the final answer
        #[arg(short, long)]
        quiet: bool,

        /// Show token usage under assistant messages
        #[arg(short, long)]
        tokens: bool,
    },

    /// Print the final answer of a trace
    Answer {
        /// Path to the trace file
        file: PathBuf,
    },

    /// List the tools of the built-in systems and any manifests
    Tools {
        /// Tool manifest to include (can be given several times)
        #[arg(short, long = "manifest")]
        manifests: Vec<PathBuf>,

        /// Show provider, transport and endpoint for each tool
        #[arg(long)]
        metadata: bool,
    },

    /// Run a calculation through the calculator system
    Calc {
        /// One of add, subtract, multiply, divide
        operation: Operation,

        #[arg(allow_negative_numbers = true)]
        a: f64,

        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Look up the (mock) weather for a location
    Weather {
        /// City name or coordinates
        location: String,

        /// celsius or fahrenheit
        #[arg(short, long, default_value = "celsius")]
        units: Units,

        /// Include a 3-day forecast
        #[arg(short, long)]
        forecast: bool,
    },

    /// Configure the CLI interactively
    Configure,

    /// Print the CLI version
    Version,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Trace {
            file,
            quiet,
            tokens,
        } => commands::trace::execute(&file, quiet, tokens, &load_config()?)?,
        Command::Answer { file } => {
            if !commands::answer::execute(&file)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Tools {
            manifests,
            metadata,
        } => commands::tools::execute(&manifests, metadata, &load_config()?)?,
        Command::Calc { operation, a, b } => {
            commands::calc::execute(operation, a, b, &load_config()?).await?
        }
        Command::Weather {
            location,
            units,
            forecast,
        } => commands::weather::execute(location, units, forecast, &load_config()?).await?,
        Command::Configure => commands::configure::execute()?,
        Command::Version => commands::version::execute()?,
    }

    Ok(ExitCode::SUCCESS)
}
