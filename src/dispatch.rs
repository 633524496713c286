//! Dispatch: turn an accepted intent and its extracted parameters into a
//! navigation command and a feedback sentence.
//!
//! The catalog stores routes as a path with an optional base query string
//! ("/finance?action=add"). Dispatch splits that base apart, appends the
//! extracted parameters, and composes the feedback the interface speaks
//! back to the user.

use serde::{Deserialize, Serialize};

use crate::catalog::{ExtractorKind, Intent};
use crate::extract::ExtractedParams;

/// How a feedback sentence should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A command was understood and executed.
    Success,
    /// Nothing happened, the user should rephrase.
    Info,
}

/// A sentence to speak or display, with its presentation severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    /// Feedback for a successfully dispatched command.
    pub fn success<S: Into<String>>(message: S) -> Self {
        Feedback {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Feedback for an utterance that did not match anything.
    pub fn info<S: Into<String>>(message: S) -> Self {
        Feedback {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Where the application should navigate, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationCommand {
    /// Route without its query string.
    pub path: String,

    /// Query parameters in their final order: the route's own parameters
    /// first, extracted ones after.
    pub query_params: Vec<(String, String)>,

    /// Sentence confirming what was understood.
    pub feedback: Feedback,
}

impl NavigationCommand {
    /// The full target location, query string included.
    ///
    /// Parameter values are emitted as-is; extracted labels only contain
    /// lowercase letters, digits and spaces.
    pub fn href(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }

        let query: Vec<String> = self
            .query_params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Build the navigation command for an accepted intent.
pub fn dispatch(intent: &Intent, params: &ExtractedParams) -> NavigationCommand {
    let (path, mut query_params) = split_route(&intent.path);

    match intent.extractor {
        Some(ExtractorKind::Expense) => {
            if let Some(amount) = params.amount {
                query_params.push(("amount".to_string(), format_amount(amount)));
            }
            if let Some(label) = &params.label {
                query_params.push(("label".to_string(), label.clone()));
            }
        }
        Some(ExtractorKind::Letter) => {
            if let Some(label) = &params.label {
                query_params.push(("action".to_string(), "create".to_string()));
                query_params.push(("organism".to_string(), label.clone()));
            }
        }
        None => {}
    }

    NavigationCommand {
        path,
        query_params,
        feedback: Feedback::success(feedback_message(intent, params)),
    }
}

/// Feedback for a transcript no intent accepted.
pub fn rejection(transcript: &str) -> Feedback {
    Feedback::info(format!("Je n'ai pas compris : \"{transcript}\""))
}

fn split_route(route: &str) -> (String, Vec<(String, String)>) {
    let Some((path, query)) = route.split_once('?') else {
        return (route.to_string(), Vec::new());
    };

    let query_params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect();

    (path.to_string(), query_params)
}

fn feedback_message(intent: &Intent, params: &ExtractedParams) -> String {
    match intent.extractor {
        Some(ExtractorKind::Expense) => match (params.amount, params.label.as_deref()) {
            (Some(amount), Some(label)) => format!(
                "Dépense de {} € pour « {} » enregistrée",
                format_amount(amount),
                label
            ),
            (Some(amount), None) => format!("Dépense de {} € enregistrée", format_amount(amount)),
            (None, Some(label)) => format!("Dépense pour « {label} » enregistrée"),
            (None, None) => intent.feedback.clone(),
        },
        Some(ExtractorKind::Letter) => match params.label.as_deref() {
            Some(label) => format!("Rédaction d'une lettre pour {label}"),
            None => intent.feedback.clone(),
        },
        None => intent.feedback.clone(),
    }
}

/// Render an amount the way it was spoken: integers without a decimal
/// part, decimals with a dot.
fn format_amount(amount: f64) -> String {
    format!("{amount}")
}
