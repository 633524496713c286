//! Command implementations for the portevoix CLI.

use std::path::PathBuf;

use crate::analysis::{Analyzer, Token, TranscriptAnalyzer};
use crate::catalog::IntentCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::interpreter::Interpreter;
use crate::matching::{ACCEPT_THRESHOLD, intent_score};

/// Execute a CLI command.
pub fn execute_command(args: PortevoixArgs) -> Result<()> {
    match &args.command {
        Command::Interpret(interpret_args) => interpret_transcript(interpret_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_transcript(analyze_args.clone(), &args),
        Command::Score(score_args) => score_query(score_args.clone(), &args),
        Command::Catalog(catalog_args) => show_catalog(catalog_args.clone(), &args),
    }
}

/// Load the catalog named on the command line, or the built-in one.
fn load_catalog(path: &Option<PathBuf>, cli_args: &PortevoixArgs) -> Result<IntentCatalog> {
    match path {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading catalog from: {}", path.display());
            }
            IntentCatalog::from_json_file(path)
        }
        None => Ok(IntentCatalog::builtin()),
    }
}

/// Run the full interpretation pipeline on one transcript.
fn interpret_transcript(args: InterpretArgs, cli_args: &PortevoixArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;
    let interpreter = Interpreter::with_catalog(catalog);
    let interpretation = interpreter.interpret(&args.transcript);

    output_result("Transcript interpreted", &interpretation, cli_args)?;

    Ok(())
}

/// Show the tokens a transcript survives analysis as.
fn analyze_transcript(args: AnalyzeArgs, cli_args: &PortevoixArgs) -> Result<()> {
    let analyzer = TranscriptAnalyzer::new();
    let tokens: Vec<Token> = analyzer.analyze(&args.transcript)?.collect();

    output_result(
        "Transcript analyzed",
        &AnalysisResult {
            transcript: args.transcript.clone(),
            token_count: tokens.len(),
            tokens,
        },
        cli_args,
    )?;

    Ok(())
}

/// Score a query against every intent, best first.
fn score_query(args: ScoreArgs, cli_args: &PortevoixArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;
    let query = args.query.to_lowercase();

    let mut scores: Vec<IntentScore> = catalog
        .iter()
        .filter_map(|intent| {
            intent_score(&query, intent).map(|(score, keyword)| IntentScore {
                intent_id: intent.id.clone(),
                keyword: keyword.to_string(),
                score,
                accepted: score < ACCEPT_THRESHOLD,
            })
        })
        .collect();

    // Stable sort keeps catalog order among equal scores.
    scores.sort_by(|a, b| a.score.total_cmp(&b.score));
    scores.truncate(args.limit);

    output_result("Query scored", &ScoreReport { query, scores }, cli_args)?;

    Ok(())
}

/// List the active catalog.
fn show_catalog(args: CatalogArgs, cli_args: &PortevoixArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;

    output_result("Active catalog", &catalog, cli_args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_for(command: &[&str]) -> PortevoixArgs {
        let mut argv = vec!["portevoix", "--quiet"];
        argv.extend_from_slice(command);
        PortevoixArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_execute_interpret() {
        let args = args_for(&["interpret", "montre moi mon profil"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_analyze() {
        let args = args_for(&["analyze", "j'ai payé 50 euros pour la boulangerie"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_score() {
        let args = args_for(&["score", "profil", "--limit", "3"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_catalog() {
        let args = args_for(&["catalog"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let args = args_for(&["catalog", "--catalog", "/nonexistent/catalog.json"]);
        assert!(execute_command(args).is_err());
    }
}
