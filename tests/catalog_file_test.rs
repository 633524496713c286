//! Catalog loading from JSON files.

use std::io::Write;

use portevoix::catalog::IntentCatalog;
use portevoix::interpreter::Interpreter;
use tempfile::NamedTempFile;

#[test]
fn test_load_catalog_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    let json = r#"{
  "intents": [
    {
      "id": "lights",
      "keywords": ["lumière", "lampe"],
      "path": "/lights",
      "feedback": "Allumage des lumières"
    },
    {
      "id": "expense",
      "keywords": ["dépense"],
      "path": "/finance?action=add",
      "feedback": "Ajout d'une dépense",
      "extractor": "expense"
    }
  ]
}"#;
    file.write_all(json.as_bytes()).unwrap();

    let catalog = IntentCatalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("lights").is_some());

    let interpreter = Interpreter::with_catalog(catalog);
    let interpretation = interpreter.interpret("allume la lumière");

    assert!(interpretation.is_accepted());
    assert_eq!(interpretation.command().unwrap().href(), "/lights");
    assert_eq!(interpretation.feedback.message, "Allumage des lumières");
}

#[test]
fn test_extractor_survives_the_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(&IntentCatalog::builtin()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let catalog = IntentCatalog::from_json_file(file.path()).unwrap();
    let interpreter = Interpreter::with_catalog(catalog);
    let interpretation = interpreter.interpret("j'ai payé 50 euros pour la boulangerie");

    assert_eq!(
        interpretation.command().unwrap().href(),
        "/finance?action=add&amount=50&label=boulangerie"
    );
}

#[test]
fn test_empty_catalog_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"intents": []}"#).unwrap();

    assert!(IntentCatalog::from_json_file(file.path()).is_err());
}

#[test]
fn test_malformed_json_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not a catalog").unwrap();

    assert!(IntentCatalog::from_json_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(IntentCatalog::from_json_file("/nonexistent/catalog.json").is_err());
}
