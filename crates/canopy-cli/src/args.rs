//! Command-line argument definitions for the Canopy CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input tree, the output destination,
//! the configuration file, the export format and logging verbosity.

use clap::Parser;

use canopy::config::OutputFormat;

/// Command-line arguments for the Canopy tree layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input tree (JSON array of nodes, or TOML with `[[node]]` tables)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; the layout is written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (text, json); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["canopy", "tree.json"]);
        assert_eq!(args.input, "tree.json");
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.format.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_flag() {
        let args = Args::parse_from(["canopy", "tree.toml", "-f", "json", "-o", "out.json"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Args::try_parse_from(["canopy", "tree.json", "--format", "svg"]);
        assert!(result.is_err());
    }
}
