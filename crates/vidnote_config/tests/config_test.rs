//! Tests for configuration loading and validation.

use std::io::Write;
use vidnote_config::{HeadlineRules, NoteLayout, VidnoteConfig};
use vidnote_error::VidnoteErrorKind;

#[test]
fn test_bundled_defaults_match_struct_defaults() {
    let loaded = VidnoteConfig::from_toml_str("").expect("Bundled defaults should load");
    assert_eq!(loaded, VidnoteConfig::default());
}

#[test]
fn test_default_sampling_values() {
    let config = VidnoteConfig::default();
    assert_eq!(config.article.temperature, 0.8);
    assert_eq!(config.article.max_tokens, 4000);
    assert_eq!(config.note.title_temperature, 0.8);
    assert_eq!(config.note.title_max_tokens, 500);
    assert_eq!(config.note.body_temperature, 0.7);
    assert_eq!(config.note.max_tokens, 2000);
    assert_eq!(config.note.placeholder_title, "小红书笔记");
    assert_eq!(config.model.name, "google/gemini-pro");
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let config = VidnoteConfig::from_toml_str(
        r#"
        [note]
        max_tokens = 1200

        [model]
        name = "anthropic/claude-3-haiku"
        "#,
    )
    .expect("Override should load");

    assert_eq!(config.note.max_tokens, 1200);
    assert_eq!(config.note.title_max_tokens, 500);
    assert_eq!(config.model.name, "anthropic/claude-3-haiku");
    assert_eq!(config.model.api_url, "https://openrouter.ai/api/v1");
}

#[test]
fn test_from_file_overlays_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    writeln!(file, "[headlines]\nmax_candidates = 3").expect("Failed to write temp file");

    let config = VidnoteConfig::from_file(file.path()).expect("File should load");
    assert_eq!(config.headlines.max_candidates, 3);
    assert_eq!(config.headlines.min_chars, 6);
}

#[test]
fn test_load_with_explicit_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[organize]\nchunk_chars = 800\noverlap_chars = 80\n")
        .expect("Failed to write config");

    let config = VidnoteConfig::load_with(Some(&path)).expect("Explicit file should load");
    assert_eq!(config.organize.chunk_chars, 800);
    assert_eq!(config.organize.overlap_chars, 80);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    assert!(VidnoteConfig::load_with(Some(&path)).is_err());
}

#[test]
fn test_serialized_config_round_trips_through_loader() {
    let mut config = VidnoteConfig::default();
    config.layout.split_ratio = 0.25;
    let text = toml::to_string(&config).expect("Config should serialize");

    let loaded = VidnoteConfig::from_toml_str(&text).expect("Serialized config should load");
    assert_eq!(loaded.layout.split_ratio, 0.25);
}

fn assert_config_error(toml: &str, needle: &str) {
    let err = VidnoteConfig::from_toml_str(toml).expect_err("Config should be rejected");
    match err.kind() {
        VidnoteErrorKind::Config(e) => assert!(
            e.message.contains(needle),
            "expected '{}' in '{}'",
            needle,
            e.message
        ),
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_inverted_headline_bounds() {
    assert_config_error("[headlines]\nmin_chars = 60", "min_chars");
}

#[test]
fn test_validate_rejects_zero_candidates() {
    assert_config_error("[headlines]\nmax_candidates = 0", "max_candidates");
}

#[test]
fn test_validate_rejects_out_of_range_temperature() {
    assert_config_error("[article]\ntemperature = 2.5", "article.temperature");
}

#[test]
fn test_validate_rejects_zero_token_cap() {
    assert_config_error("[note]\ntitle_max_tokens = 0", "note.title_max_tokens");
}

#[test]
fn test_validate_rejects_overlap_not_smaller_than_chunk() {
    assert_config_error("[organize]\nchunk_chars = 100\noverlap_chars = 100", "overlap_chars");
}

#[test]
fn test_headline_rules_bounds_are_inclusive() {
    let rules = HeadlineRules::default();
    assert!(!rules.accepts("五个字符吧"));
    assert!(rules.accepts("六个字符的题"));
    assert!(rules.accepts(&"字".repeat(49)));
    assert!(!rules.accepts(&"字".repeat(50)));
}

#[test]
fn test_layout_split_index() {
    let layout = NoteLayout::default();
    assert_eq!(layout.split_index(0), 0);
    assert_eq!(layout.split_index(4), 2);
    assert_eq!(layout.split_index(7), 3);

    let front_loaded = NoteLayout {
        split_ratio: 1.0,
        max_images: 3,
    };
    assert_eq!(front_loaded.split_index(4), 4);
}
