//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{fs, path::Path};

use directories::ProjectDirs;
use log::{debug, info};

use healthsync_viz::{VizError, config::AppConfig};

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (healthsync-viz/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, VizError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        if !path.exists() {
            return Err(VizError::Config(format!(
                "Missing configuration file: {}",
                path.display()
            )));
        }
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("healthsync-viz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "healthsync", "healthsync-viz") {
        let system_config = proj_dirs.config_dir().join("config.toml");
        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(&system_config);
        }
    }

    // 4. Fall back to defaults
    debug!("No configuration file found, using defaults");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, VizError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| VizError::Config(format!("Failed to parse TOML configuration: {err}")))
}
