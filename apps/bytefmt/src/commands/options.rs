//! Options file commands.
//!
//! Provides show, validate and schema subcommands for bytefmt option files
//! (JSON documents with `format` and `parse` sections).

use anyhow::{Context, Result};
use bytefmt_core::OptionsDocument;
use bytefmt_core::validation::{AdvisoryWarning, validate};
use clap::Subcommand;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum OptionsCommands {
    /// Show an options file with defaults filled in
    Show {
        /// Options file to read (defaults apply when omitted)
        #[arg(long, env = "BYTEFMT_OPTIONS")]
        path: Option<PathBuf>,

        /// Output as raw JSON (no formatting)
        #[arg(long)]
        json: bool,
    },

    /// Validate an options file and show warnings
    Validate {
        /// Options file to validate
        #[arg(long, env = "BYTEFMT_OPTIONS")]
        path: PathBuf,
    },

    /// Output the JSON Schema for option files
    Schema,
}

pub fn execute(cmd: OptionsCommands) -> Result<()> {
    match cmd {
        OptionsCommands::Show { path, json } => cmd_show(path.as_deref(), json),
        OptionsCommands::Validate { path } => cmd_validate(&path),
        OptionsCommands::Schema => cmd_schema(),
    }
}

/// Read an options document, or the defaults when no path is given.
pub fn load_document(path: Option<&Path>) -> Result<OptionsDocument> {
    let Some(path) = path else {
        return Ok(OptionsDocument::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    let doc = OptionsDocument::from_json_str(&raw)
        .with_context(|| format!("Invalid options file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded options file");
    Ok(doc)
}

/// Print advisory warnings to stderr.
pub fn report_warnings(warnings: &[AdvisoryWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "WARN".yellow(), warning);
    }
}

fn cmd_show(path: Option<&Path>, json_output: bool) -> Result<()> {
    let doc = load_document(path)?;
    report_warnings(&validate(&doc.format));

    if json_output {
        println!("{}", serde_json::to_string(&doc)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let doc = load_document(Some(path))?;
    let warnings = validate(&doc.format);

    if warnings.is_empty() {
        println!("{} Options are valid", "OK".green());
    } else {
        println!(
            "{} Options have {} warning(s):",
            "WARN".yellow(),
            warnings.len()
        );
        for w in &warnings {
            println!("  - {}", w);
        }
    }
    Ok(())
}

fn cmd_schema() -> Result<()> {
    println!("{}", bytefmt_core::schema_json_pretty()?);
    Ok(())
}
