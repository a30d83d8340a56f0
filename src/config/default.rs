//! Default configuration file creation.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Header comment written at the top of a freshly created config file.
const FILE_HEADER: &str = "# chartwall configuration\n# Values here seed the dashboard controls at startup.\n\n";

/// Creates the default configuration file at the XDG config path.
///
/// Returns `ConfigError::AlreadyExists` if a file is present and `force`
/// is not set. With `force`, the existing file is backed up to
/// `config.toml.bak` before being overwritten.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let dir = xdg::config_dir();
    xdg::ensure_dir(&dir).map_err(|e| ConfigError::WriteError {
        path: dir.clone(),
        source: e,
    })?;

    let path = xdg::config_path();
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup = path.with_extension("toml.bak");
        fs::copy(&path, &backup).map_err(|e| ConfigError::WriteError {
            path: backup.clone(),
            source: e,
        })?;
        tracing::info!("backed up existing config to {:?}", backup);
    }

    let body = toml::to_string_pretty(&Config::default()).map_err(|e| {
        ConfigError::SerializeError {
            message: e.to_string(),
        }
    })?;
    fs::write(&path, format!("{FILE_HEADER}{body}")).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
