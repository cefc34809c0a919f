//! bytefmt CLI.
//!
//! The `bytefmt` command formats byte counts, parses size strings and
//! converts sizes between units from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bytefmt")]
#[command(about = "Format, parse and convert human-readable byte sizes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a byte count as a human-readable size
    Format(commands::size::FormatArgs),

    /// Parse a size string into a byte count
    Parse(commands::size::ParseArgs),

    /// Re-express a size string in another unit
    Convert(commands::size::ConvertArgs),

    /// Options file commands
    Options {
        #[command(subcommand)]
        command: commands::options::OptionsCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Commands::Format(args) => commands::size::format(&args),
        Commands::Parse(args) => commands::size::parse(&args),
        Commands::Convert(args) => commands::size::convert(&args),
        Commands::Options { command } => commands::options::execute(command),
    }
}
