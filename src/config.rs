//! Session configuration.
//!
//! Room dimensions are fixed at session start and shared by every room; the
//! shell may load overrides from a JSON file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("room dimensions too small: got {width}x{height}, need at least 5x5")]
    RoomTooSmall { width: usize, height: usize },
    #[error("dungeon extent must be positive, got {0}")]
    BadExtent(i32),
}

/// Player tuning knobs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub health: i32,
    pub size: f32,
    pub speed: f32,
    pub hit_cooldown: i32,
    pub shot_range: f32,
    pub bombs: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: PLAYER_STARTING_HEALTH,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            hit_cooldown: PLAYER_HIT_COOLDOWN_FRAMES,
            shot_range: PLAYER_SHOT_RANGE,
            bombs: PLAYER_STARTING_BOMBS,
        }
    }
}

/// Everything a session needs to start
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub room_width: usize,
    pub room_height: usize,
    pub dungeon_extent: i32,
    /// Fixed RNG seed for reproducible sessions; entropy-seeded when absent
    pub seed: Option<u64>,
    pub player: PlayerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            dungeon_extent: DEFAULT_DUNGEON_EXTENT,
            seed: None,
            player: PlayerConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: SessionConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_width < MIN_ROOM_DIM || self.room_height < MIN_ROOM_DIM {
            return Err(ConfigError::RoomTooSmall {
                width: self.room_width,
                height: self.room_height,
            });
        }
        if self.dungeon_extent <= 0 {
            return Err(ConfigError::BadExtent(self.dungeon_extent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_in_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "room_width": 21, "seed": 9 }"#).unwrap();
        assert_eq!(config.room_width, 21);
        assert_eq!(config.room_height, DEFAULT_ROOM_HEIGHT);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.player.health, PLAYER_STARTING_HEALTH);
    }

    #[test]
    fn test_tiny_rooms_are_rejected() {
        let config = SessionConfig {
            room_width: 3,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomTooSmall { width: 3, .. })
        ));
    }

    #[test]
    fn test_nonpositive_extent_is_rejected() {
        let config = SessionConfig {
            dungeon_extent: 0,
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BadExtent(0))));
    }
}
