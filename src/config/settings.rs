//! User settings for the EERIS CLI
//!
//! Manages client preferences: the backend server URL, display formatting,
//! and export defaults.

use serde::{Deserialize, Serialize};

use super::paths::EerisPaths;
use crate::error::EerisError;

/// User settings for the EERIS CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the EERIS backend
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Width of the off-screen chart surface in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Height of the off-screen chart surface in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Default filename for exported history documents
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_chart_width() -> u32 {
    600
}

fn default_chart_height() -> u32 {
    400
}

fn default_export_filename() -> String {
    "expense_history.pdf".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            server_url: default_server_url(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            export_filename: default_export_filename(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EerisPaths) -> Result<Self, EerisError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)
                .map_err(|e| EerisError::Io(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&content)
                .map_err(|e| EerisError::Json(format!("Failed to parse settings: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EerisPaths) -> Result<(), EerisError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| EerisError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), content)
            .map_err(|e| EerisError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.chart_width, 600);
        assert_eq!(settings.chart_height, 400);
        assert_eq!(settings.export_filename, "expense_history.pdf");
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.server_url, Settings::default().server_url);
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.server_url = "https://expenses.example.com".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.server_url, "https://expenses.example.com");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(
            paths.settings_file(),
            r#"{"server_url": "http://10.0.0.2:5000"}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.server_url, "http://10.0.0.2:5000");
        assert_eq!(settings.currency_symbol, "$");
    }
}
