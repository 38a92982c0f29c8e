//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Marker;
use tracing::{debug, info, instrument};

/// Who takes the first turn of every round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstMove {
    /// The human opens each round.
    #[default]
    Human,
    /// The computer opens each round.
    Computer,
}

/// Configuration for a terminal game session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Round wins needed to take a set.
    #[serde(default = "default_rounds_to_win")]
    rounds_to_win: u32,

    /// Markers the computer draws from (the human's marker is excluded).
    #[serde(default = "default_computer_markers")]
    computer_markers: Vec<String>,

    /// Who opens each round.
    #[serde(default)]
    first_to_move: FirstMove,

    /// Clear the terminal between turns.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_rounds_to_win() -> u32 {
    5
}

fn default_computer_markers() -> Vec<String> {
    ["X", "O", "#", "@", "&", "*", "?", "$"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_to_win: default_rounds_to_win(),
            computer_markers: default_computer_markers(),
            first_to_move: FirstMove::default(),
            clear_screen: default_clear_screen(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rounds_to_win = config.rounds_to_win, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the rounds needed to win a set when given.
    pub fn with_rounds_to_win(mut self, rounds: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(rounds) = rounds {
            self.rounds_to_win = rounds;
        }
        self.validate()?;
        Ok(self)
    }

    /// Overrides whether the screen is cleared between turns.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Overrides who opens each round.
    pub fn with_first_to_move(mut self, first: FirstMove) -> Self {
        self.first_to_move = first;
        self
    }

    /// Parses the configured computer markers.
    pub fn marker_options(&self) -> Result<Vec<Marker>, ConfigError> {
        self.computer_markers
            .iter()
            .map(|s| {
                s.parse::<Marker>().map_err(|e| {
                    ConfigError::new(format!("Invalid computer marker {:?}: {}", s, e))
                })
            })
            .collect()
    }

    /// Checks value ranges and marker options.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_to_win == 0 {
            return Err(ConfigError::new("rounds_to_win must be at least 1".to_string()));
        }

        let mut options = self.marker_options()?;
        options.sort_by_key(|m| m.symbol());
        options.dedup();
        if options.len() < 2 {
            return Err(ConfigError::new(
                "computer_markers needs at least two distinct markers".to_string(),
            ));
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
