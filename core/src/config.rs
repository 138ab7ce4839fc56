//! Settings for taskline.
//!
//! Read from an optional TOML file; every key has a default so a missing file
//! is the same as an empty one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::repository::file::DEFAULT_FILE_NAME;

const APP_DIR_NAME: &str = ".taskline";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "taskline.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the task file lives. Defaults to `~/.taskline`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file. Defaults to `taskline.log` in the data directory.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: default_file_name(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read { path: path.display().to_string(), source })
            }
        };
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// A data directory given on the command line wins over the file.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_app_dir(),
        }
    }

    pub fn resolve_log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(self.resolve_data_dir()?.join(LOG_FILE_NAME)),
        }
    }
}

pub fn default_app_dir() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_dir.join(APP_DIR_NAME))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_app_dir()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_full() {
        let settings = Settings::parse(
            r#"
data_dir = "/tmp/tasks"
file_name = "duke.json"
log_level = "debug"
log_file = "/var/log/taskline.log"
"#,
        )
        .unwrap();
        assert_eq!(settings.data_dir, Some(PathBuf::from("/tmp/tasks")));
        assert_eq!(settings.file_name, "duke.json");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.resolve_log_path().unwrap(), PathBuf::from("/var/log/taskline.log"));
    }

    #[test]
    fn test_log_path_follows_data_dir() {
        let settings = Settings::default().with_data_dir(Some(PathBuf::from("/from/cli")));
        assert_eq!(
            settings.resolve_log_path().unwrap(),
            PathBuf::from("/from/cli/taskline.log")
        );
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "file_name = [").unwrap();
        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_cli_data_dir_overrides() {
        let from_file = Settings {
            data_dir: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };
        let kept = from_file.clone().with_data_dir(None);
        assert_eq!(kept.resolve_data_dir().unwrap(), PathBuf::from("/from/file"));

        let overridden = from_file.with_data_dir(Some(PathBuf::from("/from/cli")));
        assert_eq!(overridden.resolve_data_dir().unwrap(), PathBuf::from("/from/cli"));
    }
}
