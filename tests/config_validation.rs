//! Integration tests for configuration loading and validation

#![allow(clippy::expect_used)]

use packet_wire::config::{CodecConfig, LoggingConfig, WireConfig, MAX_PACKET_SIZE};
use packet_wire::error::ProtocolError;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = WireConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_zero_field_length() {
    let mut config = WireConfig::default();
    config.codec.max_field_length = 0;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max field length must be greater than 0")));
}

#[test]
fn test_field_length_above_prefix_range() {
    let config = CodecConfig {
        max_packet_size: usize::MAX,
        max_field_length: i32::MAX as usize + 1,
    };
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("length prefixes are i32")));
}

#[test]
fn test_field_larger_than_packet() {
    let config = CodecConfig {
        max_packet_size: 1024,
        max_field_length: 2048,
    };
    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("cannot be larger than max packet size")));
}

#[test]
fn test_packet_size_below_header() {
    let config = CodecConfig {
        max_packet_size: 2,
        max_field_length: 1,
    };
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Max packet size too small")));
}

#[test]
fn test_empty_app_name() {
    let config = WireConfig::default_with_overrides(|c| c.logging.app_name = String::new());
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));

    let strict = config.validate_strict();
    assert!(matches!(strict, Err(ProtocolError::ConfigError(msg)) if msg.contains("validation failed")));
}

#[test]
fn test_long_app_name() {
    let logging = LoggingConfig {
        app_name: "x".repeat(65),
        ..LoggingConfig::default()
    };
    assert!(logging
        .validate()
        .iter()
        .any(|e| e.contains("too long")));
}

#[test]
fn test_from_toml() {
    let toml = r#"
        [codec]
        max_packet_size = 65536
        max_field_length = 1024

        [logging]
        app_name = "chat-relay"
        log_level = "debug"
        json_format = true
    "#;

    let config = WireConfig::from_toml(toml).expect("valid TOML");
    assert_eq!(config.codec.max_packet_size, 65536);
    assert_eq!(config.codec.max_field_length, 1024);
    assert_eq!(config.logging.app_name, "chat-relay");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
}

#[test]
fn test_from_toml_missing_sections_use_defaults() {
    let config = WireConfig::from_toml("").expect("empty TOML is valid");
    assert_eq!(config.codec, CodecConfig::default());
    assert_eq!(config.codec.max_packet_size, MAX_PACKET_SIZE);
}

#[test]
fn test_from_toml_bad_level() {
    let toml = r#"
        [logging]
        app_name = "x"
        log_level = "loud"
        json_format = false
    "#;
    assert!(matches!(
        WireConfig::from_toml(toml),
        Err(ProtocolError::ConfigError(_))
    ));
}

#[test]
fn test_example_config_roundtrips() {
    let text = WireConfig::example_config();
    let parsed = WireConfig::from_toml(&text).expect("example config parses");
    assert_eq!(parsed.codec, CodecConfig::default());
    assert_eq!(parsed.logging.log_level, Level::INFO);
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("packet-wire-{}.toml", std::process::id()));
    let config = WireConfig::default_with_overrides(|c| c.codec.max_field_length = 4096);

    config.save_to_file(&path).expect("save config");
    let loaded = WireConfig::from_file(&path).expect("load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.codec.max_field_length, 4096);
}

#[test]
fn test_missing_file() {
    let result = WireConfig::from_file("/nonexistent/packet-wire.toml");
    assert!(matches!(result, Err(ProtocolError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn test_save_into_missing_directory() {
    let path = std::env::temp_dir()
        .join(format!("packet-wire-missing-{}", std::process::id()))
        .join("config.toml");
    let result = WireConfig::default().save_to_file(&path);
    assert!(matches!(result, Err(ProtocolError::Io(_))));
}
