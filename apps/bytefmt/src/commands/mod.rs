//! Subcommand implementations.

pub mod options;
pub mod size;
