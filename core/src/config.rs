//! Configuration loading for the hero page
//!
//! The page ships with [`PageConfig::default`]; tooling can point at a TOML
//! file to try other batch sizes or timings against the same data.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zenith_types::PageConfig;

/// Errors that can occur during config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a page config from a TOML file.
///
/// Missing keys fall back to their defaults and the result is normalized
/// with [`PageConfig::validated`].
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a page config from TOML text.
pub fn parse_config(contents: &str) -> Result<PageConfig, toml::de::Error> {
    let config: PageConfig = toml::from_str(contents)?;
    Ok(config.validated())
}

/// Load from `path` when given, otherwise use the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<PageConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(PageConfig::default()),
    }
}
