//! Game configuration loaded from TOML.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the human seat.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Milliseconds the computer waits before rolling.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Milliseconds per square when animating a snake or ladder.
    #[serde(default = "default_animation_step_ms")]
    animation_step_ms: u64,

    /// Fixed dice seed; a fresh random seed when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_player_name() -> String {
    "You".to_string()
}

fn default_computer_delay_ms() -> u64 {
    1000
}

fn default_animation_step_ms() -> u64 {
    50
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            computer_delay_ms: default_computer_delay_ms(),
            animation_step_ms: default_animation_step_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(player_name = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(name) = &args.name {
            self.player_name = name.clone();
        }
        if let Some(delay) = args.computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(step) = args.animation_step_ms {
            self.animation_step_ms = step;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    /// Pause before each computer roll.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Time a token spends on each square of a slide.
    pub fn animation_step(&self) -> Duration {
        Duration::from_millis(self.animation_step_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_name.trim().is_empty() {
            return Err(ConfigError::new("player_name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("player_name = \"Ada\"\nseed = 42\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_name(), "Ada");
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.computer_delay_ms(), 1000);
        assert_eq!(config.animation_step(), Duration::from_millis(50));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn load_is_logged_once_a_subscriber_is_installed() {
        let file = write_config("player_name = \"Ada\"\n");
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || GameConfig::load(file.path()).unwrap());

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Config loaded successfully"), "{output}");
        assert!(output.contains("Ada"), "{output}");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("computer_delay_ms = \"soon\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let file = write_config("player_name = \"  \"\n");
        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let file = write_config("player_name = \"Ada\"\ncomputer_delay_ms = 500\n");
        let args = PlayArgs {
            computer_delay_ms: Some(0),
            seed: Some(9),
            ..PlayArgs::default()
        };
        let config = GameConfig::from_file(file.path())
            .unwrap()
            .with_overrides(&args);
        assert_eq!(config.player_name(), "Ada");
        assert_eq!(config.computer_delay(), Duration::ZERO);
        assert_eq!(*config.seed(), Some(9));
    }
}
