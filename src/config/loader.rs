use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::CountedConfig;
use crate::errors::{Error, Result};

/// File name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".counted.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<CountedConfig, toml::de::Error> {
    toml::from_str::<CountedConfig>(contents)
}

/// Load a config file the user named explicitly. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<CountedConfig> {
    let contents = crate::io::read_file(path)?;
    let config =
        parse_config(&contents).map_err(|e| Error::configuration(e.to_string(), path))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Try one candidate path during discovery.
///
/// Missing files are silent; unreadable or malformed files warn and are skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CountedConfig> {
    let contents = match std::fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %config_path.display(), error = %e, "failed to read config file");
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!(path = %config_path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            warn!(
                path = %config_path.display(),
                error = %e,
                "invalid config file, using defaults"
            );
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover a config starting from `start`, falling back to defaults.
pub fn discover_config(start: PathBuf) -> CountedConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "no config found, using default config"
            );
            CountedConfig::default()
        })
}

/// Discover a config from the current directory.
pub fn load_config() -> CountedConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(error = %e, "failed to get current directory, using default config");
            CountedConfig::default()
        }
    }
}
