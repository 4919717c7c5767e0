//! Configuration management for the gridstake engine

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors, kept separate from the engine's operation taxonomy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {message} ({field})")]
    Invalid {
        message: String,
        field: &'static str,
    },
}

/// Main configuration for a gridstake deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridstakeConfig {
    /// Game arbitration settings
    pub game: GameSettings,
    /// Notification fan-out settings
    pub events: EventSettings,
}

/// Game arbitration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Stake each player must pledge, in the host's smallest unit
    pub required_stake: u64,
    /// Seconds without an accepted move before a timeout claim is allowed
    pub move_timeout_secs: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            required_stake: 10_000,
            move_timeout_secs: 300, // 5 minutes
        }
    }
}

/// Notification fan-out settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSettings {
    /// Capacity of the broadcast channel handed to observers
    pub broadcast_capacity: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            broadcast_capacity: 256,
        }
    }
}

impl GridstakeConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: GridstakeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.required_stake == 0 {
            return Err(ConfigError::Invalid {
                message: "required stake must be greater than 0".to_string(),
                field: "game.required_stake",
            });
        }

        if self.game.move_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "move timeout must be greater than 0".to_string(),
                field: "game.move_timeout_secs",
            });
        }

        if self.game.move_timeout_secs > 86_400 {
            return Err(ConfigError::Invalid {
                message: "move timeout must be within 24 hours".to_string(),
                field: "game.move_timeout_secs",
            });
        }

        if self.events.broadcast_capacity == 0 {
            return Err(ConfigError::Invalid {
                message: "broadcast capacity must be greater than 0".to_string(),
                field: "events.broadcast_capacity",
            });
        }

        Ok(())
    }

    /// Create a production-ready configuration
    pub fn production() -> Self {
        Self {
            game: GameSettings {
                required_stake: 50_000,
                move_timeout_secs: 600, // 10 minutes between moves
            },
            events: EventSettings {
                broadcast_capacity: 1024,
            },
        }
    }

    /// Create a development configuration with a short timeout window
    pub fn development() -> Self {
        Self {
            game: GameSettings {
                required_stake: 100,
                move_timeout_secs: 10,
            },
            events: EventSettings {
                broadcast_capacity: 64,
            },
        }
    }
}
