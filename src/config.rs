//! # Configuration Management
//!
//! Centralized configuration for the packet codec.
//!
//! The wire format itself is fixed; configuration only bounds how much a
//! reader is willing to accept and how diagnostics are emitted.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`

use crate::error::{constants, ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Size of the leading packet type identifier (i32)
pub const TYPE_ID_SIZE: usize = 4;

/// Size of the length prefix in front of every text or byte-run field (i32)
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Max accepted size of a single encoded packet (16 MB)
pub const MAX_PACKET_SIZE: usize = 16 * 1024 * 1024;

/// Max accepted length of a single variable-length field (1 MB)
pub const MAX_FIELD_LENGTH: usize = 1024 * 1024;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WireConfig {
    /// Decoder limits
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WireConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
        })
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("PACKET_WIRE_MAX_PACKET_SIZE") {
            config.codec.max_packet_size = size.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!("Invalid PACKET_WIRE_MAX_PACKET_SIZE: {e}"))
            })?;
        }

        if let Ok(len) = std::env::var("PACKET_WIRE_MAX_FIELD_LENGTH") {
            config.codec.max_field_length = len.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!("Invalid PACKET_WIRE_MAX_FIELD_LENGTH: {e}"))
            })?;
        }

        if let Ok(level) = std::env::var("PACKET_WIRE_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid PACKET_WIRE_LOG_LEVEL: {level}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns a list of problems. An empty list means the configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Limits applied while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Largest buffer `Packet::parse_with` will look at
    pub max_packet_size: usize,

    /// Largest length prefix a reader accepts for text and byte runs
    pub max_field_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_packet_size: MAX_PACKET_SIZE,
            max_field_length: MAX_FIELD_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Validate codec limits
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_packet_size < TYPE_ID_SIZE {
            errors.push(format!(
                "Max packet size too small: {} (minimum: {TYPE_ID_SIZE} bytes)",
                self.max_packet_size
            ));
        }

        if self.max_field_length == 0 {
            errors.push("Max field length must be greater than 0".to_string());
        } else if self.max_field_length > i32::MAX as usize {
            errors.push(format!(
                "Max field length too large: {} (length prefixes are i32)",
                self.max_field_length
            ));
        }

        if self.max_field_length > self.max_packet_size {
            errors.push("Max field length cannot be larger than max packet size".to_string());
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("packet-wire"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
