//! Settings for the command-line front end
//!
//! Settings come from an optional TOML file. Every table and key may be
//! omitted; missing values fall back to [`Settings::default`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Convert command-line arguments with `Value::infer` instead of passing strings
    pub infer_types: bool,
    /// Colour diagnostics
    pub color: bool,
    /// Name shown for the template in diagnostics
    pub source_name: String,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    arguments: Option<TomlArguments>,
    diagnostics: Option<TomlDiagnostics>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlArguments {
    infer_types: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDiagnostics {
    color: Option<bool>,
    source_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            infer_types: true,
            color: false,
            source_name: "template".to_string(),
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let mut settings = Self::default();

        if let Some(arguments) = parsed.arguments {
            if let Some(infer) = arguments.infer_types {
                settings.infer_types = infer;
            }
        }
        if let Some(diagnostics) = parsed.diagnostics {
            if let Some(color) = diagnostics.color {
                settings.color = color;
            }
            if let Some(name) = diagnostics.source_name {
                settings.source_name = name;
            }
        }

        Ok(settings)
    }

    /// Enable or disable argument type inference
    pub fn with_infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }

    /// Enable or disable coloured diagnostics
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the name used for the template in diagnostics
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}
