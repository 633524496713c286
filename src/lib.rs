//! # Portevoix
//!
//! A French voice-command interpreter: maps free-form speech-to-text
//! transcripts onto a fixed catalog of application navigation intents.
//!
//! ## Features
//!
//! - Flexible transcript analysis pipeline (tokenizer + filters)
//! - Fuzzy keyword matching with normalized edit distance
//! - Fixed, JSON-loadable intent catalog
//! - Regex entity extraction (amounts, labels, organisms)
//! - Navigation commands with composed French feedback

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod interpreter;
pub mod matching;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::analysis::{Analyzer, Token, TranscriptAnalyzer};
    pub use crate::catalog::{ExtractorKind, Intent, IntentCatalog};
    pub use crate::dispatch::{Feedback, NavigationCommand, Severity};
    pub use crate::error::{PortevoixError, Result};
    pub use crate::extract::ExtractedParams;
    pub use crate::interpreter::{Interpretation, Interpreter, Outcome};
    pub use crate::matching::{ACCEPT_THRESHOLD, BestMatchSelector};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
