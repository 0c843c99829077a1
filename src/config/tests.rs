//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::prompt::{RESOURCE_NAME, RenderParameters, Variant, WORKING_DIRECTORY};
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.default_variant, Variant::Standard);
    assert!(config.working_directory.is_none());
    assert!(config.render_log.is_none());
    assert!(config.params.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
default_variant: cloud-control
working_directory: /srv/work
render_log: logs/renders.ndjson
params:
  provider_version: "1.2.0"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_variant, Variant::CloudControl);
    assert_eq!(config.working_directory.as_deref(), Some("/srv/work"));
    assert_eq!(
        config.render_log,
        Some(PathBuf::from("logs/renders.ndjson"))
    );
    assert_eq!(config.params.get("provider_version").unwrap(), "1.2.0");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
default_variant: standard
unknown_field: "some value"
another_unknown:
  nested: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.default_variant, Variant::Standard);
}

#[test]
fn test_parse_invalid_variant() {
    let result = Config::from_yaml("default_variant: azure");
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to parse config YAML")
    );
}

#[test]
fn test_validate_empty_working_directory() {
    let err = Config::from_yaml("working_directory: \"  \"").unwrap_err();
    assert!(err.to_string().contains("working_directory must be non-empty"));
}

#[test]
fn test_validate_empty_render_log() {
    let err = Config::from_yaml("render_log: \"\"").unwrap_err();
    assert!(err.to_string().contains("render_log must be non-empty"));
}

#[test]
fn test_validate_params_cannot_set_system_slots() {
    let yaml = r#"
params:
  machine: sparc
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("cannot set 'machine'"));
}

#[test]
fn test_apply_defaults_keeps_explicit_values() {
    let yaml = r#"
working_directory: /from/config
params:
  resource_name: aws_s3_bucket
"#;
    let config = Config::from_yaml(yaml).unwrap();

    let mut params = RenderParameters::new().with_working_directory("/from/cli");
    config.apply_defaults(&mut params);

    assert_eq!(params.get(WORKING_DIRECTORY), Some("/from/cli"));
    assert_eq!(params.get(RESOURCE_NAME), Some("aws_s3_bucket"));
}

#[test]
fn test_to_yaml_skips_unset_fields() {
    let yaml = Config::default().to_yaml().unwrap();
    assert!(yaml.contains("default_variant: standard"));
    assert!(!yaml.contains("render_log"));

    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_config_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "default_variant: cloud-control").unwrap();
    writeln!(file, "working_directory: /tmp/work").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.default_variant, Variant::CloudControl);
    assert_eq!(config.working_directory.as_deref(), Some("/tmp/work"));
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load("/nonexistent/path/tfprompt.yaml");
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to read config file")
    );
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "working_directory: /implicit").unwrap();

    let mut explicit = NamedTempFile::new().unwrap();
    writeln!(explicit, "working_directory: /explicit").unwrap();

    let config = Config::resolve(Some(explicit.path()), dir.path()).unwrap();
    assert_eq!(config.working_directory.as_deref(), Some("/explicit"));
}

#[test]
fn test_resolve_finds_default_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "working_directory: /implicit").unwrap();

    let config = Config::resolve(None, dir.path()).unwrap();
    assert_eq!(config.working_directory.as_deref(), Some("/implicit"));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::resolve(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_explicit_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(Config::resolve(Some(&missing), dir.path()).is_err());
}
