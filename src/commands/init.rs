use crate::config::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};
use crate::io;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# counted configuration

[run]
# Lengths to construct, in order
lengths = [10, 20]
# Index of the value whose square is printed
report = 0
# Construct on the thread pool
parallel = false
"#;

/// Write a default `.counted.toml` in the current directory.
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&path, force)?;
    Ok(path)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(Error::validation(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    tracing::info!(path = %config_path.display(), "wrote default configuration");
    Ok(())
}
