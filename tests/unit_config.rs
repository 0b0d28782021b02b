// tests/unit_config.rs
use codecity_core::config::{Config, OutputFormat, CONFIG_FILE};
use codecity_core::error::CityError;
use codecity_core::lang::Lang;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::new();
    assert_eq!(config.ignore, vec!["/vendor/".to_string()]);
    assert_eq!(config.languages, vec![Lang::Go]);
    assert_eq!(config.format, OutputFormat::Table);
}

#[test]
fn test_parse_full_toml() {
    let toml = r#"
[analysis]
ignore = ["/third_party/", "_test.go"]
languages = ["go", "rust"]

[output]
format = "json"
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.ignore, vec!["/third_party/", "_test.go"]);
    assert_eq!(config.languages, vec![Lang::Go, Lang::Rust]);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::parse_toml("[output]\nformat = \"table\"\n").unwrap();
    assert_eq!(config.ignore, vec!["/vendor/"]);
    assert_eq!(config.languages, vec![Lang::Go]);
}

#[test]
fn test_unknown_language_is_rejected() {
    assert!(Config::parse_toml("[analysis]\nlanguages = [\"cobol\"]\n").is_err());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.languages, vec![Lang::Go]);
}

#[test]
fn test_load_malformed_file_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[analysis\nignore = 3").unwrap();
    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, CityError::Config { .. }));
    assert!(err.is_invalid_input());
}

#[test]
fn test_extend_ignore_skips_duplicates() {
    let mut config = Config::new();
    config.extend_ignore(vec!["/vendor/".to_string(), "/gen/".to_string()]);
    assert_eq!(config.ignore, vec!["/vendor/", "/gen/"]);
}

#[test]
fn test_lang_from_str() {
    assert_eq!("go".parse::<Lang>(), Ok(Lang::Go));
    assert_eq!("Rust".parse::<Lang>(), Ok(Lang::Rust));
    assert!("cobol".parse::<Lang>().is_err());
}
