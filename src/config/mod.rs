//! Configuration for the `counted` driver.
//!
//! Settings come from three layers, highest precedence first: command-line
//! arguments, a `.counted.toml` file, and built-in defaults that reproduce
//! the classic two-value demonstration.

pub mod core;
pub mod loader;

pub use self::core::{CountedConfig, RunSection, DEFAULT_LENGTHS};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
