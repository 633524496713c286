//! Intent catalog: the fixed, ordered list of voice-reachable destinations.
//!
//! The catalog is read-only configuration. Every intent carries the keyword
//! synonyms it answers to, the route the application should navigate to, a
//! default French feedback sentence, and optionally the entity extractor to
//! run on accepted utterances. Catalog order matters: when two intents reach
//! the same score, the first one scanned wins.
//!
//! # Examples
//!
//! ```
//! use portevoix::catalog::IntentCatalog;
//!
//! let catalog = IntentCatalog::builtin();
//! let profile = catalog.get("profile").unwrap();
//!
//! assert_eq!(profile.path, "/profile");
//! assert!(profile.keywords.iter().any(|k| k == "profil"));
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortevoixError, Result};

/// The kind of entity extraction to run on an accepted utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Pull a monetary amount and a label ("50 euros pour la boulangerie").
    Expense,
    /// Pull the organism a letter is addressed to ("une lettre pour la caf").
    Letter,
}

/// A single voice-reachable destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Stable identifier, unique within a catalog.
    pub id: String,

    /// Keyword synonyms this intent answers to. Never empty.
    pub keywords: Vec<String>,

    /// Route the application navigates to, possibly carrying a base query
    /// string ("/finance?action=add").
    pub path: String,

    /// Default French feedback sentence spoken back to the user.
    pub feedback: String,

    /// Entity extractor to run when this intent is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<ExtractorKind>,
}

impl Intent {
    /// Create a new intent without an extractor.
    pub fn new<S: Into<String>>(id: S, keywords: &[&str], path: S, feedback: S) -> Self {
        Intent {
            id: id.into(),
            keywords: keywords.iter().map(|&k| k.to_string()).collect(),
            path: path.into(),
            feedback: feedback.into(),
            extractor: None,
        }
    }

    /// Attach an entity extractor to this intent.
    pub fn with_extractor(mut self, extractor: ExtractorKind) -> Self {
        self.extractor = Some(extractor);
        self
    }
}

/// An ordered, immutable collection of intents.
///
/// Loaded once at startup, either from the built-in table or from a JSON
/// file, then only read. Validation guarantees that every intent has an id,
/// a path, and at least one non-empty keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Create a catalog from a list of intents, validating the invariants.
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let catalog = IntentCatalog { intents };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// The expected format is the serialized form of this type:
    /// `{"intents": [{"id": ..., "keywords": [...], ...}]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let catalog: IntentCatalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog of application destinations.
    pub fn builtin() -> Self {
        IntentCatalog {
            intents: vec![
                Intent::new("home", &["accueil", "maison", "dashboard"], "/", "Retour à l'accueil"),
                Intent::new(
                    "profile",
                    &["profil", "compte", "paramètre"],
                    "/profile",
                    "Ouverture du profil",
                ),
                Intent::new(
                    "finance",
                    &["finance", "compta", "budget"],
                    "/finance",
                    "Ouverture de l'espace finance",
                ),
                Intent::new(
                    "add-expense",
                    &["dépense", "achat", "payer", "facture"],
                    "/finance?action=add",
                    "Ajout d'une dépense",
                )
                .with_extractor(ExtractorKind::Expense),
                Intent::new(
                    "analytics",
                    &["analyse", "statistique", "graphique"],
                    "/analytics",
                    "Ouverture des analyses",
                ),
                Intent::new(
                    "documents",
                    &["document", "fichier", "dossier"],
                    "/documents",
                    "Ouverture des documents",
                ),
                Intent::new(
                    "scan",
                    &["scanner", "scan", "ticket", "reçu"],
                    "/finance?action=scan",
                    "Ouverture du scanner",
                ),
                Intent::new(
                    "mails",
                    &["mail", "courrier", "inbox"],
                    "/mails",
                    "Ouverture des mails",
                ),
                Intent::new(
                    "letter",
                    &["éditeur", "écrire", "rédiger", "lettre"],
                    "/editor",
                    "Ouverture de l'éditeur de lettres",
                )
                .with_extractor(ExtractorKind::Letter),
                Intent::new(
                    "organisms",
                    &["admin", "organisme", "gestion"],
                    "/add-organisms",
                    "Ouverture de la gestion des organismes",
                ),
                Intent::new(
                    "marketplace",
                    &["magasin", "boutique", "plugin"],
                    "/marketplace",
                    "Ouverture du marketplace",
                ),
                Intent::new(
                    "privacy",
                    &["légal", "cgu", "confidentialité"],
                    "/legal/privacy",
                    "Ouverture de la politique de confidentialité",
                ),
                Intent::new(
                    "cgv",
                    &["cgv", "vente"],
                    "/legal/cgv",
                    "Ouverture des conditions générales de vente",
                ),
                Intent::new(
                    "mentions",
                    &["mentions légales", "éditeur du site"],
                    "/legal/mentions",
                    "Ouverture des mentions légales",
                ),
                Intent::new("faq", &["aide", "faq", "support"], "/faq", "Ouverture de la FAQ"),
            ],
        }
    }

    /// Get the intents in catalog order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Look up an intent by id.
    pub fn get(&self, id: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.id == id)
    }

    /// Number of intents in the catalog.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Iterate over intents in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intent> {
        self.intents.iter()
    }

    fn validate(&self) -> Result<()> {
        if self.intents.is_empty() {
            return Err(PortevoixError::catalog("catalog contains no intents"));
        }

        for intent in &self.intents {
            if intent.id.is_empty() {
                return Err(PortevoixError::catalog("intent with an empty id"));
            }
            if intent.path.is_empty() {
                return Err(PortevoixError::catalog(format!(
                    "intent '{}' has an empty path",
                    intent.id
                )));
            }
            if intent.keywords.is_empty() {
                return Err(PortevoixError::catalog(format!(
                    "intent '{}' has an empty keyword list",
                    intent.id
                )));
            }
            if intent.keywords.iter().any(|keyword| keyword.is_empty()) {
                return Err(PortevoixError::catalog(format!(
                    "intent '{}' has an empty keyword",
                    intent.id
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a IntentCatalog {
    type Item = &'a Intent;
    type IntoIter = std::slice::Iter<'a, Intent>;

    fn into_iter(self) -> Self::IntoIter {
        self.intents.iter()
    }
}
