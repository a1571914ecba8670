//! Storage formats for descriptors.
//!
//! Descriptors can be kept in TOML, JSON or YAML files. The format is picked
//! from the file extension when loading from disk.

use std::path::{Path, PathBuf};

use crate::model::NavDescriptor;

/// Serialization format of a descriptor file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorFormat {
    Toml,
    Json,
    Yaml,
}

impl DescriptorFormat {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Error returned when a descriptor cannot be loaded or written.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// I/O error reading the descriptor file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File extension does not name a known format.
    #[error("Unsupported descriptor format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl NavDescriptor {
    /// Parse a descriptor from a string in the given format.
    ///
    /// # Errors
    ///
    /// Returns the format's parse error if the content is malformed.
    pub fn from_str_as(content: &str, format: DescriptorFormat) -> Result<Self, DescriptorError> {
        let descriptor = match format {
            DescriptorFormat::Toml => toml::from_str(content)?,
            DescriptorFormat::Json => serde_json::from_str(content)?,
            DescriptorFormat::Yaml => {
                // Empty YAML documents deserialize as null
                if content.trim().is_empty() {
                    Self::default()
                } else {
                    serde_yaml::from_str(content)?
                }
            }
        };
        Ok(descriptor)
    }

    /// Serialize the descriptor in the given format.
    ///
    /// Sidebar sections are always written in the group-list form.
    pub fn to_string_as(&self, format: DescriptorFormat) -> Result<String, DescriptorError> {
        let content = match format {
            DescriptorFormat::Toml => toml::to_string_pretty(self)?,
            DescriptorFormat::Json => serde_json::to_string_pretty(self)?,
            DescriptorFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(content)
    }

    /// Load a descriptor file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let format = DescriptorFormat::from_path(path)
            .ok_or_else(|| DescriptorError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        let descriptor = Self::from_str_as(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            nav = descriptor.nav.len(),
            sections = descriptor.sidebar.len(),
            "Loaded navigation descriptor"
        );
        Ok(descriptor)
    }
}
