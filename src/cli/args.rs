//! Command line argument parsing for the portevoix CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Portevoix - a French voice-command interpreter
#[derive(Parser, Debug, Clone)]
#[command(name = "portevoix")]
#[command(about = "Maps French voice transcripts onto application navigation intents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PortevoixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PortevoixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interpret a transcript and print the resulting navigation command
    Interpret(InterpretArgs),

    /// Show the tokens a transcript is reduced to
    Analyze(AnalyzeArgs),

    /// Score a query against every intent in the catalog
    Score(ScoreArgs),

    /// List the active intent catalog
    Catalog(CatalogArgs),
}

/// Arguments for interpreting a transcript
#[derive(Parser, Debug, Clone)]
pub struct InterpretArgs {
    /// The transcript to interpret
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: String,

    /// Intent catalog file (JSON); defaults to the built-in catalog
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for analyzing a transcript
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The transcript to analyze
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: String,
}

/// Arguments for scoring a query
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// The query string to score
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Intent catalog file (JSON); defaults to the built-in catalog
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Maximum number of intents to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for listing the catalog
#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    /// Intent catalog file (JSON); defaults to the built-in catalog
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_interpret_command() {
        let args = PortevoixArgs::try_parse_from([
            "portevoix",
            "interpret",
            "montre moi mon profil",
        ])
        .unwrap();

        if let Command::Interpret(interpret_args) = args.command {
            assert_eq!(interpret_args.transcript, "montre moi mon profil");
            assert!(interpret_args.catalog.is_none());
        } else {
            panic!("Expected Interpret command");
        }
    }

    #[test]
    fn test_interpret_with_catalog_file() {
        let args = PortevoixArgs::try_parse_from([
            "portevoix",
            "interpret",
            "ouvre la compta",
            "--catalog",
            "catalog.json",
        ])
        .unwrap();

        if let Command::Interpret(interpret_args) = args.command {
            assert_eq!(interpret_args.catalog, Some(PathBuf::from("catalog.json")));
        } else {
            panic!("Expected Interpret command");
        }
    }

    #[test]
    fn test_score_command() {
        let args = PortevoixArgs::try_parse_from([
            "portevoix",
            "score",
            "profil",
            "--limit",
            "5",
        ])
        .unwrap();

        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.query, "profil");
            assert_eq!(score_args.limit, 5);
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = PortevoixArgs::try_parse_from(["portevoix", "catalog"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = PortevoixArgs::try_parse_from(["portevoix", "-vv", "catalog"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = PortevoixArgs::try_parse_from(["portevoix", "--quiet", "catalog"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            PortevoixArgs::try_parse_from(["portevoix", "--format", "json", "catalog"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
