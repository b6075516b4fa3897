//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_SERVER_URL, SERVER_URL_ENV};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Server
    pub server_url: String,

    // Seconds between automatic refreshes, 0 = off
    pub refresh_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Server URL, with the environment override taking precedence
    pub fn effective_server_url(&self) -> String {
        self.server_url_with(std::env::var(SERVER_URL_ENV).ok())
    }

    fn server_url_with(&self, env_override: Option<String>) -> String {
        match env_override.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => {
                info!(url = %url, "Using server URL from environment");
                url
            }
            _ => self.server_url.clone(),
        }
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "activity-board-settings-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir("roundtrip");
        let settings = Settings {
            window_w: Some(900.0),
            server_url: "http://board.local:8080".into(),
            refresh_interval_secs: 0,
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = temp_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"server_url":"http://x:1"}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.server_url, "http://x:1");
        assert_eq!(settings.refresh_interval_secs, DEFAULT_REFRESH_INTERVAL_SECS);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_env_override() {
        let settings = Settings::default();
        assert_eq!(settings.server_url_with(None), DEFAULT_SERVER_URL);
        assert_eq!(settings.server_url_with(Some("  ".into())), DEFAULT_SERVER_URL);
        assert_eq!(
            settings.server_url_with(Some("http://other:9000".into())),
            "http://other:9000"
        );
    }

    #[test]
    fn test_zero_interval_disables_refresh() {
        let mut settings = Settings::default();
        assert_eq!(settings.refresh_interval(), Some(Duration::from_secs(30)));
        settings.refresh_interval_secs = 0;
        assert_eq!(settings.refresh_interval(), None);
    }
}
