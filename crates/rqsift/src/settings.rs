//! Settings for the rqsift binary
//!
//! Provides:
//! - Settings file discovery (CLI flag, env var, standard paths)
//! - TOML parsing with serde
//! - Environment variable overrides

use rqsift_cwlogs::CwlConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Complete tool settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log source connection settings
    pub source: CwlConfig,
}

/// Settings loader
pub struct SettingsLoader {
    /// Path to settings file (if specified via CLI)
    cli_path: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a new settings loader
    pub fn new() -> Self {
        Self { cli_path: None }
    }

    /// Set the settings path from CLI argument
    pub fn with_cli_path(mut self, path: Option<PathBuf>) -> Self {
        self.cli_path = path;
        self
    }

    /// Load settings with the following precedence:
    /// 1. CLI --config flag
    /// 2. RQSIFT_CONFIG environment variable
    /// 3. ~/.config/rqsift/config.toml
    /// 4. /etc/rqsift/config.toml
    /// 5. Default values
    ///
    /// Environment overrides apply after the file is read. Validation is
    /// left to the source constructor so CLI overrides can land first.
    pub fn load(&self) -> SettingsResult<Settings> {
        let settings_path = self.find_settings_file();

        let mut settings = if let Some(path) = settings_path {
            info!("Loading settings from: {}", path.display());
            self.load_from_file(&path)?
        } else {
            debug!("No settings file found, using defaults");
            Settings::default()
        };

        settings.source.apply_env_overrides();

        Ok(settings)
    }

    /// Find the settings file to use
    fn find_settings_file(&self) -> Option<PathBuf> {
        // 1. CLI --config flag
        if let Some(path) = &self.cli_path {
            if path.exists() {
                return Some(path.clone());
            }
            warn!("CLI settings path does not exist: {}", path.display());
        }

        // 2. RQSIFT_CONFIG environment variable
        if let Ok(env_path) = std::env::var("RQSIFT_CONFIG") {
            let path = PathBuf::from(&env_path);
            if path.exists() {
                return Some(path);
            }
            warn!("RQSIFT_CONFIG path does not exist: {}", env_path);
        }

        // 3. ~/.config/rqsift/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("rqsift").join("config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 4. /etc/rqsift/config.toml (Unix only)
        #[cfg(unix)]
        {
            let path = PathBuf::from("/etc/rqsift/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Load settings from a TOML file
    fn load_from_file(&self, path: &Path) -> SettingsResult<Settings> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper module for platform-specific directories
mod dirs {
    use std::path::PathBuf;

    /// Get the user's config directory
    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        }

        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".config"))
                })
        }

        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.source.endpoint, "http://localhost:4566");
        assert!(settings.source.auth_token.is_none());
        assert_eq!(settings.source.timeout_ms, 30000);
    }

    #[test]
    fn test_parse_empty_toml() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.source.endpoint, "http://localhost:4566");
    }

    #[test]
    fn test_parse_partial_source_table() {
        let toml_str = r#"
[source]
endpoint = "https://logs.eu-west-1.example.com"
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.source.endpoint, "https://logs.eu-west-1.example.com");
        assert_eq!(settings.source.timeout_ms, 30000);
    }

    #[test]
    fn test_parse_full_source_table() {
        let toml_str = r#"
[source]
endpoint = "https://logs.eu-west-1.example.com"
auth_token = "token-123"
api_key = "key-456"
timeout_ms = 5000
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.source.endpoint, "https://logs.eu-west-1.example.com");
        assert_eq!(settings.source.auth_token.as_deref(), Some("token-123"));
        assert_eq!(settings.source.api_key.as_deref(), Some("key-456"));
        assert_eq!(settings.source.timeout_ms, 5000);
    }

    #[test]
    fn test_serialize_settings() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        assert!(toml_str.contains("[source]"));
        assert!(toml_str.contains("endpoint"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]").unwrap();
        writeln!(file, "endpoint = \"http://localhost:9324\"").unwrap();
        writeln!(file, "timeout_ms = 1000").unwrap();

        let loader = SettingsLoader::new();
        let settings = loader.load_from_file(file.path()).unwrap();

        assert_eq!(settings.source.endpoint, "http://localhost:9324");
        assert_eq!(settings.source.timeout_ms, 1000);
    }

    #[test]
    fn test_cli_path_short_circuits_discovery() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]").unwrap();
        writeln!(file, "endpoint = \"http://from-cli-path:4566\"").unwrap();

        let loader = SettingsLoader::new().with_cli_path(Some(file.path().to_path_buf()));
        let found = loader.find_settings_file();

        assert_eq!(found.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "source = [ not toml").unwrap();

        let loader = SettingsLoader::new();
        let result = loader.load_from_file(file.path());

        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let loader = SettingsLoader::new();
        let result = loader.load_from_file(Path::new("/nonexistent/rqsift.toml"));

        assert!(matches!(result, Err(SettingsError::ReadError(_))));
    }
}
