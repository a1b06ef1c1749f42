//! Application configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults so treenav works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Tree and listing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_root_name")]
    pub root_name: String,
    #[serde(default)]
    pub sample_content: bool,
    #[serde(default = "default_extension")]
    pub default_extension: String,
    #[serde(default = "default_true")]
    pub folders_first: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            sample_content: false,
            default_extension: default_extension(),
            folders_first: true,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_breadcrumb_separator")]
    pub breadcrumb_separator: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            breadcrumb_separator: default_breadcrumb_separator(),
        }
    }
}

/// Log output settings for frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_root_name() -> String {
    "root".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_breadcrumb_separator() -> String {
    " / ".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "/tmp/treenav.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_general() {
        let config = Config::default();

        assert_eq!(config.general.root_name, "root");
        assert!(!config.general.sample_content);
        assert_eq!(config.general.default_extension, "txt");
        assert!(config.general.folders_first);
    }

    #[test]
    fn default_config_ui() {
        let config = Config::default();

        assert_eq!(config.ui.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.ui.breadcrumb_separator, " / ");
    }

    #[test]
    fn default_config_log() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, "/tmp/treenav.log");
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
root_name = "Computer"
sample_content = true
default_extension = "md"
folders_first = false

[ui]
date_format = "%d/%m/%Y"
breadcrumb_separator = " > "

[log]
level = "debug"
file = "/var/tmp/tn.log"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.root_name, "Computer");
        assert!(config.general.sample_content);
        assert_eq!(config.general.default_extension, "md");
        assert!(!config.general.folders_first);

        assert_eq!(config.ui.date_format, "%d/%m/%Y");
        assert_eq!(config.ui.breadcrumb_separator, " > ");

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, "/var/tmp/tn.log");
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
sample_content = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert!(config.general.sample_content);
        assert_eq!(config.general.root_name, "root");
        assert!(config.general.folders_first);
        assert_eq!(config.ui.breadcrumb_separator, " / ");
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        let default = Config::default();

        assert_eq!(config.general.root_name, default.general.root_name);
        assert_eq!(config.ui.date_format, default.ui.date_format);
        assert_eq!(config.log.level, default.log.level);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }
}
