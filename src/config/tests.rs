//! Configuration tests
//!
//! These tests serve as compile-time guards to ensure all config fields
//! are properly serialized. When you add a new field, these tests will
//! fail until you update all the necessary places.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
/// This catches TOML syntax errors like array-of-tables elements placed
/// before the plain keys of their parent table.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.theme.as_deref(), Some(config.theme.as_str()));
    assert_eq!(file.reduce_motion, Some(false));

    let content = SiteContent::from_file(file.content);
    assert_eq!(content, config.content);

    let motion = MotionConfig::from_file(file.motion);
    assert_eq!(motion, config.motion);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, config.logging.level);
    assert_eq!(logging.file_enabled, config.logging.file_enabled);
    assert_eq!(logging.file_rotation, config.logging.file_rotation);
}

/// Multiline snippet code must survive serialization byte-for-byte; the
/// template is written so TOML's leading-newline trim cancels out.
#[test]
fn test_snippet_code_roundtrips_exactly() {
    let mut config = Config::default();
    config.content.snippets = vec![
        Snippet {
            label: Some("demo.sh".to_string()),
            language: "sh".to_string(),
            code: "set -e\ncargo install marquee\nmarquee".to_string(),
        },
        Snippet {
            label: None,
            language: "toml".to_string(),
            code: "theme = \"daylight\"".to_string(),
        },
    ];

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("custom snippets should parse");
    let content = SiteContent::from_file(file.content);

    assert_eq!(content.snippets, config.content.snippets);
}

/// A """ run inside multiline code closes the TOML string early when
/// emitted raw, so the template escapes the third quote of each run.
/// Covers a docstring mid-snippet and a quote run flush against the
/// closing delimiter.
#[test]
fn test_triple_quoted_code_roundtrips_exactly() {
    let mut config = Config::default();
    config.content.snippets = vec![
        Snippet {
            label: Some("greet.py".to_string()),
            language: "python".to_string(),
            code: "def greet():\n    \"\"\"Say hello.\"\"\"\n    print(\"hi\")\n".to_string(),
        },
        Snippet {
            label: None,
            language: "python".to_string(),
            code: "message = \"\"\ndocs = \"\"\"inline\"\"\"".to_string(),
        },
    ];

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Triple-quoted code should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
    let content = SiteContent::from_file(parsed.unwrap().content);

    assert_eq!(content.snippets, config.content.snippets);
}

#[test]
fn test_custom_content_roundtrip() {
    let mut config = Config::default();
    config.content.brand = "acme".to_string();
    config.content.commands = vec!["test".to_string(), "bench".to_string()];
    config.content.tagline = "We say \"fast\" and mean it.".to_string();
    config.content.links = vec![NavLink {
        label: "Home".to_string(),
        url: "https://example.com".to_string(),
    }];

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("custom content should parse");
    let content = SiteContent::from_file(file.content);

    assert_eq!(content, config.content);
}

// ─────────────────────────────────────────────────────────────────────────────
// EXHAUSTIVE TESTS: Compile-time guards for config completeness
// ─────────────────────────────────────────────────────────────────────────────

/// EXHAUSTIVE TEST: Ensures every motion field is serialized to TOML.
///
/// The destructuring pattern will fail to compile when a field is added
/// to FileMotion, forcing the template in serialization.rs to be updated
/// along with it.
#[test]
fn test_all_motion_fields_have_toml_serialization() {
    let toml_str = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("template should parse");

    let FileMotion {
        startup_hold_ms,
        typing_ms,
        deleting_ms,
        hold_ms,
        word_pause_ms,
        cycle_pause_ms,
        pause_poll_ms,
        cursor_blink_ms,
        reveal_stagger_ms,
        reveal_fade_ms,
        copied_reset_ms,
    } = file.motion.expect("[motion] section should be emitted");

    assert!(startup_hold_ms.is_some(), "startup_hold_ms missing");
    assert!(typing_ms.is_some(), "typing_ms missing");
    assert!(deleting_ms.is_some(), "deleting_ms missing");
    assert!(hold_ms.is_some(), "hold_ms missing");
    assert!(word_pause_ms.is_some(), "word_pause_ms missing");
    assert!(cycle_pause_ms.is_some(), "cycle_pause_ms missing");
    assert!(pause_poll_ms.is_some(), "pause_poll_ms missing");
    assert!(cursor_blink_ms.is_some(), "cursor_blink_ms missing");
    assert!(reveal_stagger_ms.is_some(), "reveal_stagger_ms missing");
    assert!(reveal_fade_ms.is_some(), "reveal_fade_ms missing");
    assert!(copied_reset_ms.is_some(), "copied_reset_ms missing");
}

/// EXHAUSTIVE TEST: Ensures every content field is serialized to TOML.
#[test]
fn test_all_content_fields_have_toml_serialization() {
    let toml_str = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("template should parse");

    let FileContent {
        brand,
        separator,
        commands,
        headline,
        tagline,
        features,
        snippets,
        links,
    } = file.content.expect("[content] section should be emitted");

    assert!(brand.is_some(), "brand missing");
    assert!(separator.is_some(), "separator missing");
    assert!(commands.is_some(), "commands missing");
    assert!(headline.is_some(), "headline missing");
    assert!(tagline.is_some(), "tagline missing");
    assert!(!features.unwrap_or_default().is_empty(), "features missing");
    assert!(!snippets.unwrap_or_default().is_empty(), "snippets missing");
    assert!(!links.unwrap_or_default().is_empty(), "links missing");
}

/// EXHAUSTIVE TEST: Ensures every logging field is serialized to TOML.
#[test]
fn test_all_logging_fields_have_toml_serialization() {
    let toml_str = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("template should parse");

    let FileLogging {
        level,
        file_enabled,
        file_dir,
        file_rotation,
        file_prefix,
    } = file.logging.expect("[logging] section should be emitted");

    assert!(level.is_some(), "level missing");
    assert!(file_enabled.is_some(), "file_enabled missing");
    assert!(file_dir.is_some(), "file_dir missing");
    assert!(file_rotation.is_some(), "file_rotation missing");
    assert!(file_prefix.is_some(), "file_prefix missing");
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing details
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_log_rotation_parses_known_values() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("never"), LogRotation::Never);
    // Unknown values fall back to daily rather than failing startup.
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}

#[test]
fn test_empty_file_config_yields_defaults() {
    let file: FileConfig = toml::from_str("").expect("empty config should parse");
    assert!(file.theme.is_none());

    let content = SiteContent::from_file(file.content);
    assert_eq!(content, SiteContent::default());

    let motion = MotionConfig::from_file(file.motion);
    assert_eq!(motion, MotionConfig::default());
}

#[test]
fn test_partial_motion_section_parses() {
    let file: FileConfig = toml::from_str(
        r#"
[motion]
typing_ms = 25
"#,
    )
    .expect("partial motion section should parse");

    let motion = MotionConfig::from_file(file.motion);
    assert_eq!(motion.typing_ms, 25);
    assert_eq!(motion.deleting_ms, MotionConfig::default().deleting_ms);
}
