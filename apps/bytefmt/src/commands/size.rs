//! format, parse and convert commands.

use super::options::{load_document, report_warnings};
use anyhow::Result;
use bytefmt_core::validation::validate;
use bytefmt_core::{
    CapacityBase, FormatOptions, Formatted, MAX_DECIMAL_PLACES, ParseOptions, Unit,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct FormatArgs {
    /// Byte count to format
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Options file; flags below override its `format` section
    #[arg(long, env = "BYTEFMT_OPTIONS")]
    options: Option<PathBuf>,

    /// Capacity base (1024 or 1000)
    #[arg(long)]
    base: Option<u32>,

    /// Digits after the decimal point
    #[arg(long)]
    decimal_places: Option<usize>,

    /// Keep trailing zeros
    #[arg(long)]
    fixed_decimals: bool,

    /// Print number and unit on separate lines
    #[arg(long)]
    split_unit: bool,

    /// Separator between number and unit
    #[arg(long)]
    unit_separator: Option<String>,

    /// Separator between digit groups
    #[arg(long)]
    thousands_separator: Option<String>,

    /// Force a unit (B, KB, MB, ... or KiB, MiB, ...)
    #[arg(long)]
    to_unit: Option<Unit>,

    /// Only use a unit that divides the value exactly
    #[arg(long)]
    without_float: bool,

    /// Output as JSON (a string, or a [number, unit] array with --split-unit)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Size to parse, e.g. "10MB" or "1.5 GiB"
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Options file; flags below override its `parse` section
    #[arg(long, env = "BYTEFMT_OPTIONS")]
    options: Option<PathBuf>,

    /// Capacity base (1024 or 1000)
    #[arg(long)]
    base: Option<u32>,

    /// Under base 1000, read units as decimal instead of converting to binary
    #[arg(long)]
    no_convert: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Size to convert, e.g. "10TB"
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Target unit (B, KB, MB, ... or KiB, MiB, ...)
    #[arg(long)]
    to: Unit,

    /// Capacity base (1024 or 1000)
    #[arg(long, default_value_t = 1024)]
    base: u32,
}

pub fn format(args: &FormatArgs) -> Result<()> {
    let options = resolve_format_options(args)?;
    report_warnings(&validate(&options));
    tracing::debug!(?options, "resolved format options");

    if options.decimal_places > MAX_DECIMAL_PLACES {
        anyhow::bail!(
            "Cannot format with {} decimal places (at most {MAX_DECIMAL_PLACES})",
            options.decimal_places
        );
    }
    let Some(out) = bytefmt_core::format(args.value, &options) else {
        anyhow::bail!("Cannot format non-finite value {}", args.value);
    };

    if args.json {
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }
    match out {
        Formatted::Joined(s) => println!("{s}"),
        Formatted::Split([number, unit]) => {
            println!("{number}");
            println!("{unit}");
        }
    }
    Ok(())
}

pub fn parse(args: &ParseArgs) -> Result<()> {
    let mut options: ParseOptions = load_document(args.options.as_deref())?.parse;
    if let Some(base) = args.base {
        options.capacity_base = CapacityBase::from(base);
    }
    if args.no_convert {
        options.convert = false;
    }
    tracing::debug!(?options, "resolved parse options");

    match bytefmt_core::parse(&args.text, &options) {
        Some(bytes) => {
            println!("{bytes}");
            Ok(())
        }
        None => anyhow::bail!("Could not read a size from '{}'", args.text),
    }
}

pub fn convert(args: &ConvertArgs) -> Result<()> {
    let base = CapacityBase::from(args.base);
    match bytefmt_core::parse_to_unit(&args.text, args.to, base) {
        Some(s) => {
            println!("{s}");
            Ok(())
        }
        None => anyhow::bail!("Could not convert '{}' to {}", args.text, args.to),
    }
}

fn resolve_format_options(args: &FormatArgs) -> Result<FormatOptions> {
    let mut options = load_document(args.options.as_deref())?.format;

    if let Some(base) = args.base {
        options.capacity_base = CapacityBase::from(base);
    }
    if let Some(places) = args.decimal_places {
        options.decimal_places = places;
    }
    if let Some(separator) = &args.unit_separator {
        options.unit_separator.clone_from(separator);
    }
    if let Some(separator) = &args.thousands_separator {
        options.thousands_separator.clone_from(separator);
    }
    if args.to_unit.is_some() {
        options.to_unit = args.to_unit;
    }
    options.fixed_decimals |= args.fixed_decimals;
    options.split_unit |= args.split_unit;
    options.without_float |= args.without_float;

    Ok(options)
}
