//! Path management for the EERIS CLI
//!
//! Provides XDG-compliant path resolution for configuration and session data.
//!
//! ## Path Resolution Order
//!
//! 1. `EERIS_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/eeris-cli` or `~/.config/eeris-cli`
//! 3. Windows: `%APPDATA%\eeris-cli`

use std::path::PathBuf;

use crate::error::EerisError;

/// Manages all paths used by the EERIS CLI
#[derive(Debug, Clone)]
pub struct EerisPaths {
    /// Base directory for all EERIS CLI data
    base_dir: PathBuf,
}

impl EerisPaths {
    /// Create a new EerisPaths instance
    ///
    /// Path resolution:
    /// 1. `EERIS_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/eeris-cli` or `~/.config/eeris-cli`
    /// 3. Windows: `%APPDATA%\eeris-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EerisError> {
        let base_dir = if let Ok(custom) = std::env::var("EERIS_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EerisPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/eeris-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted session (token + role)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EerisError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EerisError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EerisError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| EerisError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("eeris-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EerisError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EerisError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("eeris-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("eeris");
        let paths = EerisPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }
}
