//! Configuration for the ktmap generator.
//!
//! Three inputs are handled here:
//! - the optional tool config file (`ktmap.toml`), which names the input and output locations
//!   and the logging setup,
//! - the mapped-types document listing the Kotlin/Java pairs to generate,
//! - the built-in pair list used when no document is supplied.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;
mod pairs;

pub use logging::{init_tracing, LoggingConfig};
pub use pairs::{builtin_pairs, load_pairs, parse_pairs, MappedTypesDocument, MappingPair};

/// Environment variable that overrides config file discovery.
pub const KTMAP_CONFIG_ENV_VAR: &str = "KTMAP_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
    #[error("invalid mapped types document {path}: {message}")]
    Yaml { path: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep just the message; the default `Display` embeds a source snippet.
        ConfigError::Toml(err.message().to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KtmapConfig {
    /// Mapped-types document listing the pairs to generate.
    #[serde(default = "KtmapConfig::default_mapped_types")]
    pub mapped_types: PathBuf,

    /// Root directory receiving one subdirectory per pair.
    #[serde(default = "KtmapConfig::default_output_dir")]
    pub output_dir: PathBuf,

    /// Where `ktmap index` writes the aggregated mapping list.
    #[serde(default = "KtmapConfig::default_index_file")]
    pub index_file: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KtmapConfig {
    fn default_mapped_types() -> PathBuf {
        PathBuf::from("mapped-types.yaml")
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from("mappings")
    }

    fn default_index_file() -> PathBuf {
        PathBuf::from("mapped-types-index.yaml")
    }

    /// Load a config file from TOML. Relative paths resolve against the file's directory.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::load_from_str(&text)?;
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Parse a config from a TOML string; paths are left as written.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.mapped_types,
            &mut self.output_dir,
            &mut self.index_file,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl Default for KtmapConfig {
    fn default() -> Self {
        Self {
            mapped_types: Self::default_mapped_types(),
            output_dir: Self::default_output_dir(),
            index_file: Self::default_index_file(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Discover the ktmap configuration file for a working root.
///
/// Search order:
/// 1) `KTMAP_CONFIG_PATH` (absolute or relative to `root`)
/// 2) `ktmap.toml` in `root`
/// 3) `.ktmap.toml` in `root`
pub fn discover_config_path(root: &Path) -> Option<PathBuf> {
    if let Some(value) = std::env::var_os(KTMAP_CONFIG_ENV_VAR) {
        let candidate = PathBuf::from(value);
        return Some(if candidate.is_absolute() {
            candidate
        } else {
            root.join(candidate)
        });
    }

    ["ktmap.toml", ".ktmap.toml"]
        .into_iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration for a working root.
///
/// If no config is present, returns [`KtmapConfig::default`] and `None`.
pub fn load_for_root(root: &Path) -> Result<(KtmapConfig, Option<PathBuf>), ConfigError> {
    let Some(path) = discover_config_path(root) else {
        return Ok((KtmapConfig::default(), None));
    };

    let config = KtmapConfig::load_from_path(&path)?;
    Ok((config, Some(path)))
}
