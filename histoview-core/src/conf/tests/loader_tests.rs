use crate::conf::{ConfigError, HistoviewConfig, load_config, load_config_or_default};
use pretty_assertions::assert_eq;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn load_config_reads_all_sections() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("histoview.toml");
    fs::write(
        &path,
        "[view]\nmax_buckets = 8\nhide_delay_ms = 500\n\n[text]\nbar_width = 12\ncolor = false\n",
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.view.max_buckets, 8);
    assert_eq!(cfg.view.hide_delay(), Duration::from_millis(500));
    assert_eq!(cfg.view.coalescer().max_buckets(), 8);
    assert_eq!(cfg.text.bar_width, 12);
    assert!(!cfg.text.color);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("histoview.toml");
    fs::write(&path, "[view]\nmax_buckets = 10\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.view.hide_delay_ms, 2000);
    assert_eq!(cfg.text, HistoviewConfig::default().text);
}

#[test]
fn empty_file_is_the_default_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("histoview.toml");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg, HistoviewConfig::default());
    assert_eq!(cfg.view.max_buckets, 20);
}

#[test]
fn zero_max_buckets_is_invalid() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("histoview.toml");
    fs::write(&path, "[view]\nmax_buckets = 0\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "view.max_buckets",
            ..
        }
    ));
}

#[test]
fn unknown_keys_are_parse_errors() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("histoview.toml");
    fs::write(&path, "[view]\nmax_bucket = 3\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(
        load_config_or_default(None).unwrap(),
        HistoviewConfig::default()
    );
}

#[test]
fn default_text_config_matches_default_renderer() {
    // Act
    let from_config = HistoviewConfig::default().text.renderer();
    let library = crate::render::TextRenderer::default();

    // Assert
    assert_eq!(from_config.bar_width, library.bar_width);
    assert_eq!(from_config.color, library.color);
    assert!(library.color);
}
