//! Entity extraction from accepted transcripts.
//!
//! Matching only decides *where* to navigate; extraction pulls the
//! parameters the destination needs out of the raw phrase. Extraction runs
//! on the lowercased transcript, not on the filtered tokens, because the
//! surrounding words the analyzer throws away ("pour", "la", digits) are
//! exactly what the patterns anchor on.

pub mod amount;
pub mod label;

use serde::{Deserialize, Serialize};

use crate::catalog::ExtractorKind;

pub use amount::extract_amount;
pub use label::extract_label;

/// Parameters pulled from a transcript. Absent entities stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedParams {
    /// Monetary amount, already normalized to a dot decimal separator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Free-text label: what an expense was for, or which organism a
    /// letter is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ExtractedParams {
    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.label.is_none()
    }
}

impl ExtractorKind {
    /// Run this extractor on a transcript.
    ///
    /// The transcript is lowercased first; the patterns only recognize
    /// lowercase text.
    pub fn run(&self, transcript: &str) -> ExtractedParams {
        let transcript = transcript.to_lowercase();

        match self {
            ExtractorKind::Expense => ExtractedParams {
                amount: extract_amount(&transcript),
                label: extract_label(&transcript),
            },
            ExtractorKind::Letter => ExtractedParams {
                amount: None,
                label: extract_label(&transcript),
            },
        }
    }
}
