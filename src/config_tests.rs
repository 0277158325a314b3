#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;

fn make_config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.currency_symbol, "$");
    assert!(config.sample_data);
    assert_eq!(config.default_color, ColorTag::Slate);
    assert_eq!(config.thresholds(), Thresholds::default());
}

#[test]
fn test_parse_empty_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_parse_partial() {
    let config = Config::parse("currency_symbol = \"€\"\ndefault_color = \"indigo\"").unwrap();
    assert_eq!(config.currency_symbol, "€");
    assert_eq!(config.default_color, ColorTag::Indigo);
    assert!(config.sample_data);
}

#[test]
fn test_parse_thresholds() {
    let config = Config::parse("warn_percent = 50\nalert_percent = 80").unwrap();
    assert_eq!(
        config.thresholds(),
        Thresholds {
            warn_percent: 50,
            alert_percent: 80,
        }
    );
}

#[test]
fn test_parse_rejects_inverted_thresholds() {
    assert!(Config::parse("warn_percent = 95\nalert_percent = 80").is_err());
}

#[test]
fn test_parse_rejects_unknown_keys_and_colors() {
    assert!(Config::parse("currency = \"$\"").is_err());
    assert!(Config::parse("default_color = \"magenta\"").is_err());
}

#[test]
fn test_load_from_file() {
    let file = make_config_file("sample_data = false\n");
    let config = Config::load_from(file.path()).unwrap();
    assert!(!config.sample_data);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_malformed_file() {
    let file = make_config_file("sample_data = [");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(format!("{err}").contains("Invalid config"));
}
