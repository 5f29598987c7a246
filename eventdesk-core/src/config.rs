//! Global eventdesk configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventDeskError, EventDeskResult};

static DEFAULT_DATA_DIR: &str = "~/eventdesk";
static DEFAULT_EVENT_ID: &str = "service-day";
static DEFAULT_AUTH_URL: &str = "http://localhost:8787/auth";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_event_id() -> String {
    DEFAULT_EVENT_ID.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

/// Global configuration at ~/.config/eventdesk/config.toml
///
/// `event_id` selects which document the CLI operates on; the page this
/// tool descends from was pinned to a single event the same way.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventDeskConfig {
    /// Where the document store lives.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// The event document to display and edit.
    #[serde(default = "default_event_id")]
    pub event_id: String,

    /// Base URL of the identity provider.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
}

impl Default for EventDeskConfig {
    fn default() -> Self {
        EventDeskConfig {
            data_dir: default_data_dir(),
            event_id: default_event_id(),
            auth_url: default_auth_url(),
        }
    }
}

impl EventDeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: EventDeskConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The document store root with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Where the document store lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Which event document to display and edit:
# event_id = \"{DEFAULT_EVENT_ID}\"

# Base URL of the identity provider:
# auth_url = \"{DEFAULT_AUTH_URL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: EventDeskConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.event_id, DEFAULT_EVENT_ID);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: EventDeskConfig =
            toml::from_str(r#"event_id = "spring-gala""#).unwrap();
        assert_eq!(config.event_id, "spring-gala");
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn data_path_leaves_absolute_paths_alone() {
        let config = EventDeskConfig {
            data_dir: PathBuf::from("/var/lib/eventdesk"),
            ..Default::default()
        };
        assert_eq!(config.data_path(), PathBuf::from("/var/lib/eventdesk"));
    }
}
