//! `[build]` section: compression passes run by the host's bundler on
//! emitted assets.
//!
//! docnav only declares the passes; it never compresses anything itself.

use serde::{Deserialize, Serialize};

/// Default size threshold in bytes. Smaller assets are not compressed.
pub const DEFAULT_THRESHOLD: u64 = 1025;

/// Compression algorithm of a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    #[serde(rename = "gzip")]
    Gzip,
    #[serde(
        rename(serialize = "brotliCompress", deserialize = "brotli"),
        alias = "brotliCompress"
    )]
    Brotli,
}

impl CompressionAlgorithm {
    /// File extension appended to compressed assets.
    #[must_use]
    pub fn default_ext(self) -> &'static str {
        match self {
            Self::Gzip => ".gz",
            Self::Brotli => ".br",
        }
    }
}

/// Single compression pass.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompressionPass {
    pub algorithm: CompressionAlgorithm,
    /// Minimum asset size in bytes.
    #[serde(default = "default_threshold")]
    pub threshold: u64,
    /// Output extension override.
    #[serde(default)]
    pub ext: Option<String>,
    /// Remove the uncompressed asset after compressing.
    #[serde(default)]
    pub delete_origin_file: bool,
    /// Log each compressed asset during the build.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Keep the pass declared but skip it.
    #[serde(default)]
    pub disable: bool,
}

fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD
}

fn default_verbose() -> bool {
    true
}

impl CompressionPass {
    #[must_use]
    pub fn new(algorithm: CompressionAlgorithm) -> Self {
        Self {
            algorithm,
            threshold: DEFAULT_THRESHOLD,
            ext: None,
            delete_origin_file: false,
            verbose: true,
            disable: false,
        }
    }

    /// Extension written by this pass.
    #[must_use]
    pub fn ext(&self) -> &str {
        self.ext
            .as_deref()
            .unwrap_or_else(|| self.algorithm.default_ext())
    }
}

/// Build configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Compression passes in run order. Defaults to gzip then brotli.
    pub compression: Vec<CompressionPass>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compression: vec![
                CompressionPass::new(CompressionAlgorithm::Gzip),
                CompressionPass::new(CompressionAlgorithm::Brotli),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_passes() {
        let build: BuildConfig = toml::from_str("").unwrap();

        assert_eq!(
            build.compression,
            vec![
                CompressionPass::new(CompressionAlgorithm::Gzip),
                CompressionPass::new(CompressionAlgorithm::Brotli),
            ]
        );
        assert_eq!(build.compression[0].ext(), ".gz");
        assert_eq!(build.compression[1].ext(), ".br");
        assert_eq!(build.compression[0].threshold, 1025);
    }

    #[test]
    fn test_parse_passes() {
        let toml = r#"
[[compression]]
algorithm = "gzip"
threshold = 10240

[[compression]]
algorithm = "brotli"
threshold = 10240
ext = ".brotli"
delete_origin_file = true
"#;
        let build: BuildConfig = toml::from_str(toml).unwrap();

        assert_eq!(build.compression.len(), 2);
        assert_eq!(build.compression[0].threshold, 10240);
        assert_eq!(build.compression[1].algorithm, CompressionAlgorithm::Brotli);
        assert_eq!(build.compression[1].ext(), ".brotli");
        assert!(build.compression[1].delete_origin_file);
    }

    #[test]
    fn test_parse_full_plugin_options() {
        let toml = r#"
[[compression]]
verbose = true
disable = false
threshold = 10240
algorithm = "gzip"
ext = ".gz"

[[compression]]
verbose = false
disable = true
threshold = 10240
algorithm = "brotliCompress"
ext = ".br"
"#;
        let build: BuildConfig = toml::from_str(toml).unwrap();

        let gzip = &build.compression[0];
        assert!(gzip.verbose);
        assert!(!gzip.disable);
        assert_eq!(gzip.ext(), ".gz");
        let brotli = &build.compression[1];
        assert_eq!(brotli.algorithm, CompressionAlgorithm::Brotli);
        assert!(!brotli.verbose);
        assert!(brotli.disable);
    }

    #[test]
    fn test_verbose_and_disable_defaults() {
        let build: BuildConfig = toml::from_str("[[compression]]\nalgorithm = \"gzip\"\n").unwrap();

        assert!(build.compression[0].verbose);
        assert!(!build.compression[0].disable);
    }

    #[test]
    fn test_empty_list_disables_compression() {
        let build: BuildConfig = toml::from_str("compression = []").unwrap();
        assert!(build.compression.is_empty());
    }

    #[test]
    fn test_brotli_accepts_host_spelling() {
        let toml = r#"
[[compression]]
algorithm = "brotliCompress"
"#;
        let build: BuildConfig = toml::from_str(toml).unwrap();
        assert_eq!(build.compression[0].algorithm, CompressionAlgorithm::Brotli);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let toml = r#"
[[compression]]
algorithm = "zstd"
"#;
        assert!(toml::from_str::<BuildConfig>(toml).is_err());
    }
}
