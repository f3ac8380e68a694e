/// Application configuration
use harmony_core::{HarmonyError, Result};
use harmony_playback::{PlaybackConfig, RepeatMode, ShuffleAlgorithm, MAX_CROSSFADE_SECS};
use harmony_providers::Latency;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "harmony.toml";

/// Prefix of environment overrides (`HARMONY_SIMULATION__SEARCH_MS=0`)
pub const ENV_PREFIX: &str = "HARMONY";

/// Login password read by the CLI itself, never a config key
pub const PASSWORD_ENV: &str = "HARMONY_LOGIN_PASSWORD";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_session")]
    pub session: SessionSettings,

    #[serde(default = "default_simulation")]
    pub simulation: SimulationSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Directory holding the persisted session slot
    #[serde(default = "default_session_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,

    #[serde(default = "default_search_ms")]
    pub search_ms: u64,

    #[serde(default = "default_connect_ms")]
    pub connect_ms: u64,

    #[serde(default)]
    pub catalog_ms: u64,

    /// Playback clock period
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default)]
    pub shuffle_algorithm: ShuffleAlgorithm,

    #[serde(default)]
    pub crossfade_secs: u8,
}

impl AppConfig {
    /// Load from `harmony.toml` (or `path`) and `HARMONY_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Double underscore separates sections so field names keep theirs
        settings = settings.add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(config_env(std::env::vars()))),
        );

        let config = settings
            .build()
            .map_err(|e| HarmonyError::config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| HarmonyError::config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.session.dir.as_os_str().is_empty() {
            return Err(HarmonyError::config("session.dir must not be empty"));
        }

        if self.simulation.tick_ms == 0 {
            return Err(HarmonyError::config("simulation.tick_ms must be positive"));
        }

        if self.playback.history_size == 0 {
            return Err(HarmonyError::config("playback.history_size must be positive"));
        }

        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(HarmonyError::config(format!(
                "playback.volume must be between 0 and 1, got {}",
                self.playback.volume
            )));
        }

        if self.playback.crossfade_secs > MAX_CROSSFADE_SECS {
            return Err(HarmonyError::config(format!(
                "playback.crossfade_secs must be at most {MAX_CROSSFADE_SECS}"
            )));
        }

        Ok(())
    }

    pub fn latency(&self) -> Latency {
        Latency {
            login: Duration::from_millis(self.simulation.login_ms),
            search: Duration::from_millis(self.simulation.search_ms),
            connect: Duration::from_millis(self.simulation.connect_ms),
            catalog: Duration::from_millis(self.simulation.catalog_ms),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_ms)
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            history_size: self.playback.history_size,
            volume: self.playback.volume,
            repeat: self.playback.repeat,
            shuffle_algorithm: self.playback.shuffle_algorithm,
            crossfade_secs: self.playback.crossfade_secs,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: default_session(),
            simulation: default_simulation(),
            playback: default_playback(),
        }
    }
}

// Default values
/// Environment visible to the config loader, secrets removed
fn config_env(vars: impl IntoIterator<Item = (String, String)>) -> config::Map<String, String> {
    vars.into_iter()
        .filter(|(key, _)| !key.eq_ignore_ascii_case(PASSWORD_ENV))
        .collect()
}

fn default_session() -> SessionSettings {
    SessionSettings {
        dir: default_session_dir(),
    }
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".harmony")
}

fn default_simulation() -> SimulationSettings {
    SimulationSettings {
        login_ms: default_login_ms(),
        search_ms: default_search_ms(),
        connect_ms: default_connect_ms(),
        catalog_ms: 0,
        tick_ms: default_tick_ms(),
    }
}

fn default_login_ms() -> u64 {
    1000
}

fn default_search_ms() -> u64 {
    500
}

fn default_connect_ms() -> u64 {
    1500
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_playback() -> PlaybackSettings {
    let defaults = PlaybackConfig::default();
    PlaybackSettings {
        history_size: defaults.history_size,
        volume: defaults.volume,
        repeat: defaults.repeat,
        shuffle_algorithm: defaults.shuffle_algorithm,
        crossfade_secs: defaults.crossfade_secs,
    }
}

fn default_history_size() -> usize {
    PlaybackConfig::default().history_size
}

fn default_volume() -> f32 {
    PlaybackConfig::default().volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Prefix no test environment sets, so only the file is read
    const UNSET_PREFIX: &str = "HARMONY_CONFIG_TEST_UNSET";

    #[test]
    fn defaults_match_simulated_latencies() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let latency = config.latency();
        assert_eq!(latency, Latency::default());
        assert_eq!(config.tick(), Duration::from_secs(1));
        assert_eq!(config.playback_config().history_size, 50);
    }

    #[test]
    fn file_overrides_only_what_it_names() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[simulation]\nsearch_ms = 0\n\n[playback]\nshuffle_algorithm = \"smart\"\nrepeat = \"all\""
        )
        .unwrap();

        let config = AppConfig::load_with_prefix(Some(file.path()), UNSET_PREFIX).unwrap();

        assert_eq!(config.simulation.search_ms, 0);
        assert_eq!(config.simulation.login_ms, 1000);
        assert_eq!(config.playback.shuffle_algorithm, ShuffleAlgorithm::Smart);
        assert_eq!(config.playback.repeat, RepeatMode::All);
        assert_eq!(config.session.dir, PathBuf::from(".harmony"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_with_prefix(
            Some(Path::new("/nonexistent/harmony.toml")),
            UNSET_PREFIX,
        );
        assert!(matches!(result, Err(HarmonyError::Config(_))));
    }

    #[test]
    fn login_password_is_not_a_config_key() {
        let vars = [
            (PASSWORD_ENV.to_string(), "hunter2".to_string()),
            ("HARMONY_SIMULATION__SEARCH_MS".to_string(), "0".to_string()),
        ];

        let env = config_env(vars);

        assert!(!env.contains_key(PASSWORD_ENV));
        assert_eq!(
            env.get("HARMONY_SIMULATION__SEARCH_MS").map(String::as_str),
            Some("0")
        );

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env)),
            )
            .build()
            .unwrap();
        assert!(config.get_string("login_password").is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut config = AppConfig::default();
        config.playback.volume = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.playback.crossfade_secs = MAX_CROSSFADE_SECS + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.simulation.tick_ms = 0;
        assert!(config.validate().is_err());
    }
}
