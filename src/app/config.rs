use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/commands";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub width: u16,
    pub max_height: u16,
    /// Rows kept free between the popup and the container edges.
    pub margin: u16,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: 44,
            max_height: 16,
            margin: 1,
        }
    }
}

/// Key overrides: action name (`"popup.next"`) to key (`"ctrl+j"`).
pub type KeyConfig = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceKind,
    pub endpoint: String,
    pub request_timeout_ms: u64,
    pub theme: PaletteType,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub popup: PopupConfig,
    pub icons: HashMap<String, String>,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: 5000,
            theme: PaletteType::CatppuccinMocha,
            log_level: "info".to_string(),
            log_file: None,
            popup: PopupConfig::default(),
            icons: HashMap::new(),
            keys: KeyConfig::new(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("slashpad");
        path.push("config.toml");
        path
    })
}

/// Reads the config at `path`. A missing file is not an error.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Loads the user config, falling back to defaults. The error, if any, is
/// returned alongside so it can be logged once logging is up.
pub fn load() -> (AppConfig, Option<anyhow::Error>) {
    match get_config_path() {
        Some(path) => match load_from(&path) {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::default(), Some(err)),
        },
        None => (AppConfig::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
source = "builtin"
theme = "nord"

[popup]
width = 30

[icons]
video = "V"

[keys]
"popup.next" = "ctrl+j"
"#
        )
        .unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.source, SourceKind::Builtin);
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.popup.width, 30);
        assert_eq!(config.popup.max_height, 16);
        assert_eq!(config.icons.get("video").map(String::as_str), Some("V"));
        assert_eq!(config.keys.get("popup.next").map(String::as_str), Some("ctrl+j"));
        assert_eq!(config.request_timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source = 42").unwrap();
        let err = load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }
}
