//! YAML v1 configuration files
//!
//! Load/save through real files, rejection of bad input, and the effect of a
//! loaded config on a run.

mod common;

use common::*;
use designgraph_ir::config::{ConfigError, ExtractionConfig, Preset, TraversalConfig};
use designgraph_ir::pipeline::ExtractionPipeline;
use designgraph_ir::shared::models::{Color, Paint};
use designgraph_ir::DesignDocument;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write yaml");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

#[test]
fn test_file_roundtrip_preserves_every_section() {
    let original = ExtractionConfig::preset(Preset::Thorough)
        .traversal(|t| t.max_depth(12).include_hidden(true))
        .palette(|p| p.max_palette_size(10).max_gray_shades(3))
        .timeout_ms(0)
        .build()
        .unwrap();

    let file = write_yaml(&original.to_yaml().unwrap());
    let loaded = ExtractionConfig::from_yaml(&path_of(&file)).unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loaded.timeout(), None);
    assert_eq!(loaded.preset, Preset::Thorough);
}

#[test]
fn test_partial_override_keeps_preset_defaults() {
    let file = write_yaml(
        "version: 1\npreset: fast\noverrides:\n  typography:\n    min_font_size: 10\n    max_font_size: 64\n",
    );
    let config = ExtractionConfig::from_yaml(&path_of(&file)).unwrap();

    assert_eq!(config.typography.min_font_size, 10.0);
    assert_eq!(config.typography.max_font_size, 64.0);
    assert_eq!(config.traversal, TraversalConfig::from_preset(Preset::Fast));
    assert_eq!(config.timeout_ms, Preset::Fast.timeout_ms());
}

#[test]
fn test_out_of_range_values_rejected() {
    let cases = [
        "version: 1\npreset: balanced\noverrides:\n  traversal:\n    max_depth: 0\n",
        "version: 1\npreset: balanced\noverrides:\n  timeout_ms: 7200000\n",
        "version: 1\npreset: balanced\noverrides:\n  palette:\n    max_palette_size: 0\n",
    ];
    for yaml in cases {
        let file = write_yaml(yaml);
        let err = ExtractionConfig::from_yaml(&path_of(&file)).unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }), "{yaml}: {err}");
    }

    let file = write_yaml(
        "version: 1\npreset: balanced\noverrides:\n  spacing:\n    min_spacing: 50\n    max_spacing: 10\n",
    );
    let err = ExtractionConfig::from_yaml(&path_of(&file)).unwrap_err();
    assert!(matches!(err, ConfigError::InvertedBounds { .. }), "{err}");
}

#[test]
fn test_malformed_files_rejected() {
    let unknown_field =
        write_yaml("version: 1\npreset: fast\noverrides:\n  traversal:\n    max_dpth: 3\n");
    assert!(matches!(
        ExtractionConfig::from_yaml(&path_of(&unknown_field)),
        Err(ConfigError::Yaml(_))
    ));

    let wrong_version = write_yaml("version: 2\npreset: fast\n");
    assert!(matches!(
        ExtractionConfig::from_yaml(&path_of(&wrong_version)),
        Err(ConfigError::UnsupportedVersion { found: 2, .. })
    ));

    let bad_preset = write_yaml("version: 1\npreset: turbo\n");
    assert!(matches!(
        ExtractionConfig::from_yaml(&path_of(&bad_preset)),
        Err(ConfigError::UnknownPreset(_))
    ));

    let missing = ExtractionConfig::from_yaml("/nonexistent/designgraph/config.yaml");
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn test_loaded_config_drives_extraction() {
    let file =
        write_yaml("version: 1\npreset: balanced\noverrides:\n  color:\n    min_fill_opacity: 0.6\n");
    let config = ExtractionConfig::from_yaml(&path_of(&file)).unwrap();

    let screen = ScreenBuilder::new("Home")
        .child(fixture_filled("solid", Color::rgb(0.0, 0.0, 0.0)))
        .child(
            fixture_filled("faint", Color::rgb(1.0, 0.0, 0.0))
                .with_fill(Paint::solid(Color::rgb(0.0, 1.0, 0.0)).with_opacity(0.5)),
        )
        .build();
    let doc = DesignDocument::new("Doc", vec![screen]);

    let output = ExtractionPipeline::new(config).extract(&doc).unwrap();
    assert!(output.tokens.colors.contains("#000000"));
    assert!(output.tokens.colors.contains("#FF0000"));
    assert!(!output.tokens.colors.contains("#00FF00"));
}
