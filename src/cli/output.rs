//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::Token;
use crate::cli::args::{OutputFormat, PortevoixArgs};
use crate::error::Result;

/// Result structure for transcript analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub transcript: String,
    pub token_count: usize,
    pub tokens: Vec<Token>,
}

/// One intent's score for a query.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent_id: String,
    pub keyword: String,
    pub score: f64,
    pub accepted: bool,
}

/// Result structure for query scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub query: String,
    pub scores: Vec<IntentScore>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PortevoixArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PortevoixArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("Interpretation") => {
            output_interpretation_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("AnalysisResult") => {
            output_analysis_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("ScoreReport") => {
            output_scores_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("IntentCatalog") => {
            output_catalog_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output an interpretation in human format.
fn output_interpretation_human(value: &serde_json::Value, _args: &PortevoixArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(transcript) = obj.get("transcript").and_then(|t| t.as_str()) {
            println!("Transcript: {transcript:?}");
        }

        match obj.get("outcome") {
            Some(serde_json::Value::Object(outcome)) => {
                if let Some(command) = outcome.get("navigate").and_then(|c| c.as_object()) {
                    let path = command.get("path").and_then(|p| p.as_str()).unwrap_or("");
                    let pairs: Vec<String> = command
                        .get("query_params")
                        .and_then(|q| q.as_array())
                        .map(|params| {
                            params
                                .iter()
                                .filter_map(|pair| {
                                    let pair = pair.as_array()?;
                                    let key = pair.first()?.as_str()?;
                                    let value = pair.get(1)?.as_str()?;
                                    Some(format!("{key}={value}"))
                                })
                                .collect()
                        })
                        .unwrap_or_default();

                    if pairs.is_empty() {
                        println!("Navigate to: {path}");
                    } else {
                        println!("Navigate to: {path}?{}", pairs.join("&"));
                    }
                }
            }
            Some(serde_json::Value::String(_)) => {
                println!("Rejected");
            }
            _ => {}
        }

        if let Some(feedback) = obj.get("feedback").and_then(|f| f.as_object()) {
            let message = feedback.get("message").and_then(|m| m.as_str()).unwrap_or("");
            let severity = feedback
                .get("severity")
                .and_then(|s| s.as_str())
                .unwrap_or("info");
            println!("Feedback: {message} ({severity})");
        }

        if let Some(match_outcome) = obj.get("match_outcome").and_then(|m| m.as_object()) {
            let intent_id = match_outcome
                .get("intent_id")
                .and_then(|i| i.as_str())
                .unwrap_or("unknown");
            let score = match_outcome
                .get("score")
                .and_then(|s| s.as_f64())
                .unwrap_or(1.0);
            let query = match_outcome
                .get("query")
                .and_then(|q| q.as_str())
                .unwrap_or("");
            println!("Best match: {intent_id} (score {score:.3}, query {query:?})");
        }
    }
    Ok(())
}

/// Output surviving tokens in human format.
fn output_analysis_human(value: &serde_json::Value, _args: &PortevoixArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(transcript) = obj.get("transcript").and_then(|t| t.as_str()) {
            println!("Transcript: {transcript:?}");
        }

        if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_array()) {
            println!("Tokens ({}):", tokens.len());

            for token in tokens {
                let text = token.get("text").and_then(|t| t.as_str()).unwrap_or("");
                let position = token.get("position").and_then(|p| p.as_u64()).unwrap_or(0);
                let start = token
                    .get("start_offset")
                    .and_then(|s| s.as_u64())
                    .unwrap_or(0);
                let end = token.get("end_offset").and_then(|e| e.as_u64()).unwrap_or(0);
                println!("  {position}: {text:?} [{start}..{end}]");
            }
        }
    }
    Ok(())
}

/// Output per-intent scores in human format.
fn output_scores_human(value: &serde_json::Value, _args: &PortevoixArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(query) = obj.get("query").and_then(|q| q.as_str()) {
            println!("Scores for {query:?}:");
            println!("═══════════════");
        }

        if let Some(scores) = obj.get("scores").and_then(|s| s.as_array()) {
            for entry in scores {
                let intent_id = entry
                    .get("intent_id")
                    .and_then(|i| i.as_str())
                    .unwrap_or("unknown");
                let keyword = entry.get("keyword").and_then(|k| k.as_str()).unwrap_or("");
                let score = entry.get("score").and_then(|s| s.as_f64()).unwrap_or(1.0);
                let accepted = entry
                    .get("accepted")
                    .and_then(|a| a.as_bool())
                    .unwrap_or(false);
                let marker = if accepted { "  (accepted)" } else { "" };

                println!("  {intent_id:<12} {score:.3}  via {keyword:?}{marker}");
            }
        }
    }
    Ok(())
}

/// Output the intent catalog in human format.
fn output_catalog_human(value: &serde_json::Value, _args: &PortevoixArgs) -> Result<()> {
    if let Some(intents) = value
        .as_object()
        .and_then(|o| o.get("intents"))
        .and_then(|i| i.as_array())
    {
        println!("Intent catalog ({} intents):", intents.len());
        println!("═══════════════");

        for intent in intents {
            let id = intent.get("id").and_then(|i| i.as_str()).unwrap_or("unknown");
            let path = intent.get("path").and_then(|p| p.as_str()).unwrap_or("");
            let keywords = intent
                .get("keywords")
                .and_then(|k| k.as_array())
                .map(|list| {
                    list.iter()
                        .filter_map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();

            println!();
            println!("{id} -> {path}");
            println!("  keywords: {keywords}");

            if let Some(extractor) = intent.get("extractor").and_then(|e| e.as_str()) {
                println!("  extractor: {extractor}");
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &PortevoixArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PortevoixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("profil".to_string())),
            "profil"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_score_report_serialization() {
        let report = ScoreReport {
            query: "profil".to_string(),
            scores: vec![IntentScore {
                intent_id: "profile".to_string(),
                keyword: "profil".to_string(),
                score: 0.0,
                accepted: true,
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"intent_id\":\"profile\""));
        assert!(json.contains("\"accepted\":true"));
    }
}
