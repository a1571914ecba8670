//! Site configuration for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Navigation
//!
//! The navigation descriptor lives either inline (`[[theme.nav]]`,
//! `[theme.sidebar]`) or in a separate TOML, JSON or YAML file named by
//! `theme.navigation_file`. Either way it is available as
//! [`Config::descriptor`] after loading.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `theme.footer.message`
//! - `theme.footer.copyright`
//! - `theme.social_links[].link`

mod compression;
mod expand;
mod host;
mod page;
mod theme;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use docnav_descriptor::{DescriptorError, NavDescriptor};
use serde::Deserialize;

pub use compression::{BuildConfig, CompressionAlgorithm, CompressionPass, DEFAULT_THRESHOLD};
pub use host::{HostBuildConfig, HostCompressionPass, HostConfig, HostThemeConfig};
pub use page::{HeadTag, MarkdownConfig};
pub use theme::{
    ButtonTranslations, DateTimeStyle, DocFooterConfig, FooterConfig, FormatOptions,
    LastUpdatedConfig, LocaleSearchOptions, ModalFooterTranslations, ModalTranslations,
    OutlineConfig, OutlineLevel, SearchConfig, SearchOptions, SearchProvider, SearchTranslations,
    SocialLink, ThemeConfig,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub src_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Default content directory, relative to the config file.
const DEFAULT_SRC_DIR: &str = "docs";

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Site description for metadata.
    pub description: Option<String>,
    /// Content root as written in the config file.
    pub src_dir: String,
    /// Extra tags added to every page's `<head>`.
    pub head: Vec<HeadTag>,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Markdown rendering options.
    pub markdown: MarkdownConfig,
    /// Build post-processing configuration.
    pub build: BuildConfig,

    /// Content root resolved against the config directory (set after loading).
    #[serde(skip)]
    pub src_dir_resolved: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// External navigation file could not be loaded.
    #[error("Navigation file error: {0}")]
    Descriptor(#[from] DescriptorError),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.footer.copyright`").
        field: String,
        /// Error message (e.g., "${`COPYRIGHT_YEAR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated again, so an override cannot bypass validation.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// the navigation file cannot be loaded or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Navigation bar and sidebar.
    #[must_use]
    pub fn descriptor(&self) -> &NavDescriptor {
        &self.theme.descriptor
    }

    /// Directory containing the config file, or the current directory for
    /// default configurations.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(src_dir) = &settings.src_dir {
            self.src_dir = src_dir.display().to_string();
            self.src_dir_resolved.clone_from(src_dir);
        }
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: None,
            src_dir: DEFAULT_SRC_DIR.to_owned(),
            head: Vec::new(),
            theme: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            build: BuildConfig::default(),
            src_dir_resolved: base.join(DEFAULT_SRC_DIR),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            nav = config.descriptor().nav.len(),
            sidebar_sections = config.descriptor().sidebar.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks site metadata, head tags, theme settings and compression
    /// passes. The
    /// navigation descriptor is checked separately with
    /// [`docnav_descriptor::validate`], which reports findings instead of
    /// failing. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.src_dir, "src_dir")?;
        for (i, head) in self.head.iter().enumerate() {
            require_non_empty(&head.tag, &format!("head[{i}].tag"))?;
        }
        self.validate_theme()?;
        self.validate_build()?;
        Ok(())
    }

    /// Validate social links and outline levels.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        for (i, social) in self.theme.social_links.iter().enumerate() {
            require_non_empty(&social.icon, &format!("theme.social_links[{i}].icon"))?;
            require_http_url(&social.link, &format!("theme.social_links[{i}].link"))?;
        }

        if let Some(outline) = &self.theme.outline {
            let (start, end) = outline.level.bounds();
            if start == 0 || end > 6 || start > end {
                return Err(ConfigError::Validation(format!(
                    "theme.outline.level must cover heading levels 1 to 6 in order, got {start}..{end}"
                )));
            }
        }

        Ok(())
    }

    /// Validate compression passes.
    ///
    /// Disabled passes may repeat an algorithm, since only one of them runs.
    fn validate_build(&self) -> Result<(), ConfigError> {
        let mut algorithms = HashSet::new();

        for (i, pass) in self.build.compression.iter().enumerate() {
            if !pass.disable && !algorithms.insert(pass.algorithm) {
                return Err(ConfigError::Validation(format!(
                    "build.compression[{i}] repeats algorithm {:?}",
                    pass.algorithm
                )));
            }

            let ext = pass.ext();
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::Validation(format!(
                    "build.compression[{i}].ext must start with '.' followed by a name"
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        expand::expand_env_opt(&mut self.description, "description")?;

        if let Some(ref mut footer) = self.theme.footer {
            expand::expand_env_opt(&mut footer.message, "theme.footer.message")?;
            expand::expand_env_opt(&mut footer.copyright, "theme.footer.copyright")?;
        }

        for (i, social) in self.theme.social_links.iter_mut().enumerate() {
            social.link = expand::expand_env(&social.link, &format!("theme.social_links[{i}].link"))?;
        }

        Ok(())
    }

    /// Resolve paths against the config directory and load the external
    /// navigation file, if any.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.src_dir_resolved = config_dir.join(&self.src_dir);

        if let Some(file) = &self.theme.navigation_file {
            if !self.theme.descriptor.is_empty() {
                return Err(ConfigError::Validation(
                    "theme.navigation_file cannot be combined with inline theme.nav or theme.sidebar"
                        .to_owned(),
                ));
            }
            self.theme.descriptor = NavDescriptor::load(&config_dir.join(file))?;
        }

        Ok(())
    }
}
