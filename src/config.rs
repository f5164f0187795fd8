//! Application-level configuration loading: listening port, preset file location, ticker period
//! and the admin credentials checked by `/login`.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LIVE_SCORES_CONFIG_PATH";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TEAMS_FILE: &str = "teams.json";
const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    port: u16,
    teams_file: PathBuf,
    tick_interval: Duration,
    admin: AdminCredentials,
}

/// Literal username/password pair accepted by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "password".into(),
        }
    }
}

impl AdminCredentials {
    /// Compare against submitted credentials.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(path = %path.display(), "loaded configuration");
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document; absent keys take their default value.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Port the HTTP server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Override the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// JSON file holding the team presets.
    pub fn teams_file(&self) -> &PathBuf {
        &self.teams_file
    }

    /// Period of the clock ticker and live-score broadcast.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Credentials accepted by `/login`.
    pub fn admin(&self) -> &AdminCredentials {
        &self.admin
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: u16,
    teams_file: PathBuf,
    tick_interval_ms: u64,
    admin: AdminCredentials,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            teams_file: PathBuf::from(DEFAULT_TEAMS_FILE),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            admin: AdminCredentials::default(),
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            port: value.port,
            teams_file: value.teams_file,
            tick_interval: Duration::from_millis(value.tick_interval_ms.max(1)),
            admin: value.admin,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
