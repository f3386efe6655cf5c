//! Configuration Tests.
//!
//! Parses JSON fragments through the same serde path the simulator
//! uses and checks default fallback behaviour for missing fields,
//! sections, and whole files.

use std::io::Write;

use tempfile::NamedTempFile;

use rv32sc_core::common::CoreError;
use rv32sc_core::config::Config;

// ═════════════════════════════════════════════════════════════════════════════
//  Defaults
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.ram_words, 16384);
}

/// An empty JSON object is a complete configuration: every field has
/// a default.
#[test]
fn test_empty_json_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.general.start_pc, 0);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.ram_words, 16384);
}

#[test]
fn test_partial_general_section() {
    let json = r#"{
        "general": { "start_pc": 4096 }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.general.start_pc, 4096);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.ram_words, 16384);
}

#[test]
fn test_partial_memory_section() {
    let json = r#"{
        "memory": { "ram_words": 1024 }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.memory.ram_words, 1024);
    assert_eq!(config.general.start_pc, 0);
}

#[test]
fn test_full_config() {
    let json = r#"{
        "general": {
            "trace_instructions": true,
            "start_pc": 65536
        },
        "memory": {
            "ram_words": 32768
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 65536);
    assert_eq!(config.memory.ram_words, 32768);
}

/// Fields this build does not know about are skipped, so configs can
/// carry settings for other tools.
#[test]
fn test_unknown_fields_ignored() {
    let json = r#"{
        "general": { "start_pc": 8, "future_option": true },
        "frontend": { "theme": "dark" }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.general.start_pc, 8);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Rejection
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_malformed_json_rejected() {
    assert!(serde_json::from_str::<Config>("{ general: ").is_err());
}

#[test]
fn test_wrong_field_type_rejected() {
    let json = r#"{ "general": { "start_pc": "zero" } }"#;
    assert!(serde_json::from_str::<Config>(json).is_err());
}

// ═════════════════════════════════════════════════════════════════════════════
//  Loading from disk
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{ "memory": {{ "ram_words": 2048 }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.memory.ram_words, 2048);
}

#[test]
fn test_from_json_file_missing_is_io_error() {
    let result = Config::from_json_file("/nonexistent/config.json");
    assert!(matches!(result, Err(CoreError::Io { .. })));
}

#[test]
fn test_from_json_file_bad_json_is_config_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "not json at all").unwrap();
    file.flush().unwrap();

    let result = Config::from_json_file(file.path().to_str().unwrap());

    assert!(matches!(result, Err(CoreError::Config { .. })));
}
