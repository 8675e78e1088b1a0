//! Configuration of the tee time poller.
//!
//! The configuration is layered with figment: built-in defaults, then an
//! optional YAML file, then environment variables prefixed with `TEETIME_`
//! (`__` separates nested keys).
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Widget API of the golf club
//! api:
//!   url: "https://prd-sgf-widget-api.azurewebsites.net"
//!   club_id: "71d046c5-1016-4b88-9347-eade7d50d2b7"
//!   course_id: "0f1334d7-88dc-444d-bd14-1a5a19ea5aa6"
//!   # Seconds between two fetches while polling
//!   polling_interval: 300
//!
//! # Initial form values
//! form:
//!   players: 2
//!   from: "08:00"
//!   to: "12:00"
//!
//! # Notification sound, the terminal bell when no command is set
//! sound:
//!   muted: false
//!   command: ["paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"]
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export TEETIME_API__COURSE_ID="another-course"
//! export TEETIME_API__POLLING_INTERVAL=120
//! export TEETIME_SOUND__MUTED=true
//! ```

use std::path::Path;

use anyhow::bail;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables overriding the configuration.
const ENV_PREFIX: &str = "TEETIME_";

/// Root configuration structure.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Widget API settings
    pub api: Api,
    /// Initial form values
    pub form: Form,
    /// Notification sound settings
    pub sound: SoundConfig,
}

/// Widget API configuration.
///
/// # YAML Section
///
/// ```yaml
/// api:
///   url: "https://prd-sgf-widget-api.azurewebsites.net"
///   club_id: "71d046c5-1016-4b88-9347-eade7d50d2b7"
///   course_id: "0f1334d7-88dc-444d-bd14-1a5a19ea5aa6"
///   polling_interval: 300
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Api {
    /// Base URL of the widget API.
    ///
    /// Should include the protocol (http/https). A trailing slash is removed
    /// on load.
    pub url: String,

    /// Club identifier, part of the endpoint path.
    pub club_id: String,

    /// Course identifier, sent as the `courseId` query parameter.
    pub course_id: String,

    /// Polling interval in seconds.
    ///
    /// How frequently the schedule is fetched again once polling started.
    pub polling_interval: u64,
}

impl Default for Api {
    fn default() -> Self {
        Api {
            url: "https://prd-sgf-widget-api.azurewebsites.net".to_owned(),
            club_id: "71d046c5-1016-4b88-9347-eade7d50d2b7".to_owned(),
            course_id: "0f1334d7-88dc-444d-bd14-1a5a19ea5aa6".to_owned(),
            polling_interval: 5 * 60,
        }
    }
}

/// Initial form values, overridden by the command-line arguments.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Size of the party (1-4)
    pub players: u8,
    /// Start of the time window, `HH:MM`
    pub from: String,
    /// End of the time window, `HH:MM`
    pub to: String,
}

impl Default for Form {
    fn default() -> Self {
        Form {
            players: 1,
            from: "05:00".to_owned(),
            to: "20:00".to_owned(),
        }
    }
}

/// Notification sound configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SoundConfig {
    /// Start with the sound muted
    pub muted: bool,
    /// Player command and its arguments; the terminal bell when absent
    pub command: Option<Vec<String>>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional YAML file merged over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, a value has the wrong
    /// type, or the polling interval is zero.
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            if !Path::new(path).exists() {
                bail!("config file {} not found", path);
            }
            figment = figment.merge(Yaml::file(path));
        }

        let mut config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        // Normalize API URL by removing trailing slash if present
        while config.api.url.ends_with('/') {
            config.api.url.pop();
        }

        if config.api.polling_interval == 0 {
            bail!("api.polling_interval must be at least 1 second");
        }

        debug!("loaded config {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let config = Config::load(None).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api.polling_interval, 300);
        assert_eq!(config.form.from, "05:00");
        assert_eq!(config.form.to, "20:00");
        assert!(config.sound.command.is_none());
    }

    #[test]
    #[serial]
    fn test_load_yaml_file() {
        let file = write_config(
            r#"
api:
  url: "http://localhost:8080/"
  polling_interval: 60
form:
  players: 3
  from: "08:00"
sound:
  command: ["paplay", "ding.oga"]
"#,
        );

        let config = Config::load(file.path().to_str()).unwrap();

        assert_eq!(config.api.url, "http://localhost:8080");
        assert_eq!(config.api.polling_interval, 60);
        assert_eq!(config.api.course_id, Api::default().course_id);
        assert_eq!(config.form.players, 3);
        assert_eq!(config.form.from, "08:00");
        assert_eq!(config.form.to, "20:00");
        assert_eq!(
            config.sound.command,
            Some(vec!["paplay".to_string(), "ding.oga".to_string()])
        );
    }

    #[test]
    #[serial]
    fn test_load_env_overrides_file() {
        let file = write_config("api:\n  course_id: \"from-file\"\n");

        unsafe {
            std::env::set_var("TEETIME_API__COURSE_ID", "from-env");
            std::env::set_var("TEETIME_SOUND__MUTED", "true");
        }
        let config = Config::load(file.path().to_str());
        unsafe {
            std::env::remove_var("TEETIME_API__COURSE_ID");
            std::env::remove_var("TEETIME_SOUND__MUTED");
        }

        let config = config.unwrap();
        assert_eq!(config.api.course_id, "from-env");
        assert!(config.sound.muted);
    }

    #[test]
    #[serial]
    fn test_load_missing_file() {
        let result = Config::load(Some("/nonexistent/teetime.yaml"));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_load_rejects_zero_interval() {
        let file = write_config("api:\n  polling_interval: 0\n");
        assert!(Config::load(file.path().to_str()).is_err());
    }

    #[test]
    #[serial]
    fn test_load_rejects_wrong_type() {
        let file = write_config("form:\n  players: many\n");
        assert!(Config::load(file.path().to_str()).is_err());
    }
}
