//! Application configuration and privacy settings

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "MESSENGER_CONFIG";

/// Errors raised while loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme (dark/light/system)
    pub theme: Theme,

    /// Mirror toasts as desktop notifications
    pub desktop_notifications: bool,

    /// How long a toast stays on screen
    pub toast_duration_secs: u64,

    /// Start signed in, bypassing the login screen
    pub skip_auth: bool,

    /// Window settings
    pub window: WindowSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            desktop_notifications: false,
            toast_duration_secs: 4,
            skip_auth: false,
            window: WindowSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config file location: `$MESSENGER_CONFIG`, then the platform config dir
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("org", "messenger", "Messenger")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

/// Theme options
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// Window settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Who may see or do something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Everyone,
    Contacts,
    Nobody,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Self::Everyone, Self::Contacts, Self::Nobody];

    pub fn label(self) -> &'static str {
        match self {
            Self::Everyone => "Все",
            Self::Contacts => "Мои контакты",
            Self::Nobody => "Никто",
        }
    }
}

/// Auto-delete window for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDelete {
    Off,
    Day,
    Week,
    Month,
}

impl AutoDelete {
    pub const ALL: [AutoDelete; 4] = [Self::Off, Self::Day, Self::Week, Self::Month];

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Выключено",
            Self::Day => "24 часа",
            Self::Week => "7 дней",
            Self::Month => "30 дней",
        }
    }
}

/// Privacy settings
#[derive(Debug, Clone, PartialEq)]
pub struct PrivacySettings {
    pub show_online: bool,
    pub show_last_seen: bool,
    pub profile_photo: Visibility,
    pub status: Visibility,
    pub read_receipts: bool,
    pub two_step_verification: bool,
    pub end_to_end_encryption: bool,
    pub allow_calls: Visibility,
    pub allow_video_calls: Visibility,
    pub allow_groups: Visibility,
    pub block_screenshots: bool,
    pub auto_delete: AutoDelete,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_online: true,
            show_last_seen: true,
            profile_photo: Visibility::Everyone,
            status: Visibility::Contacts,
            read_receipts: true,
            two_step_verification: false,
            end_to_end_encryption: true,
            allow_calls: Visibility::Everyone,
            allow_video_calls: Visibility::Contacts,
            allow_groups: Visibility::Everyone,
            block_screenshots: false,
            auto_delete: AutoDelete::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "Light", "window": { "width": 900.0 } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.toast_duration_secs, 4);
        assert!(!config.skip_auth);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_privacy_defaults() {
        let settings = PrivacySettings::default();
        assert!(settings.show_online);
        assert!(settings.end_to_end_encryption);
        assert!(!settings.two_step_verification);
        assert_eq!(settings.status, Visibility::Contacts);
        assert_eq!(settings.allow_video_calls, Visibility::Contacts);
        assert_eq!(settings.auto_delete, AutoDelete::Off);
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(Visibility::Nobody.label(), "Никто");
        assert_eq!(AutoDelete::Week.label(), "7 дней");
        assert_eq!(AutoDelete::ALL.len(), 4);
    }
}
