//! Integration tests for the demo configuration types.

use dromb_containers::config::{DemoConfig, Section};

#[test]
fn default_runs_every_section() {
    let cfg = DemoConfig::default();
    assert!(cfg.sections.is_empty());
    assert_eq!(cfg.selected_sections(), Section::ALL.to_vec());
    assert!(cfg.vector_len > 0);
}

#[test]
fn section_from_str_is_case_insensitive() {
    let s: Section = "Arithmetic".parse().unwrap();
    assert_eq!(s, Section::Arithmetic);
    assert_eq!(" matrix ".parse::<Section>().unwrap(), Section::Matrix);
}

#[test]
fn section_from_str_unknown_errors() {
    let err = "vectors".parse::<Section>().unwrap_err();
    assert!(err.contains("constructors"));
}

#[test]
fn config_serializes_to_json() {
    let cfg = DemoConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("vector_len"));
    assert!(json.contains("rhombuses"));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: DemoConfig =
        serde_json::from_str(r#"{ "vector_len": 4, "sections": ["bitwise", "unary"] }"#).unwrap();
    assert_eq!(cfg.vector_len, 4);
    assert_eq!(cfg.fill_value, DemoConfig::default().fill_value);
    assert_eq!(cfg.selected_sections(), vec![Section::Bitwise, Section::Unary]);
}
