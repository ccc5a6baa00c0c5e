//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for building a [`World`](crate::World).
//! [`validate()`](WorldConfig::validate) checks it up front so that a
//! bad config fails before any generation work is done.

use std::error::Error;
use std::fmt;

use delve_bus::DispatchError;
use delve_gen::{DungeonGenerator, GenError};
use delve_grid::GridError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a config or building a session.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The generator parameters are invalid.
    Gen(GenError),
    /// The generated layers could not form a grid.
    Grid(GridError),
    /// The hub could not be wired.
    Dispatch(DispatchError),
    /// `max_generation_attempts` is zero.
    InvalidGenerationAttempts,
    /// No generated dungeon had a tile the actor could stand on.
    NoOpenTile {
        /// How many dungeons were generated.
        attempts: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gen(e) => write!(f, "generator: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Dispatch(e) => write!(f, "dispatch: {e}"),
            Self::InvalidGenerationAttempts => {
                write!(f, "max_generation_attempts must be at least 1")
            }
            Self::NoOpenTile { attempts } => {
                write!(f, "no open tile in {attempts} generated dungeon(s)")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Gen(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Dispatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GenError> for ConfigError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<DispatchError> for ConfigError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Parameters for generating a world.
///
/// The default is the classic 100 × 10 map with five rooms of side
/// 5..=20.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Rooms the generator tries to place.
    pub room_count: usize,
    /// Smallest room side.
    pub room_min_size: u32,
    /// Largest room side.
    pub room_max_size: u32,
    /// Seed for generation and spawn placement.
    pub seed: u64,
    /// Dungeons to generate before giving up on finding an open tile.
    ///
    /// Small maps with large rooms often reject every room, so a single
    /// attempt is not enough in practice.
    pub max_generation_attempts: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 10,
            room_count: 5,
            room_min_size: 5,
            room_max_size: 20,
            seed: 0,
            max_generation_attempts: 32,
        }
    }
}

impl WorldConfig {
    /// The dungeon generator these parameters describe.
    pub fn generator(&self) -> Result<DungeonGenerator, ConfigError> {
        Ok(DungeonGenerator::builder()
            .size(self.width, self.height)
            .rooms(self.room_count)
            .room_size(self.room_min_size, self.room_max_size)
            .build()?)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Generator parameters (dimensions, room sizes).
        self.generator()?;
        // 2. At least one generation attempt.
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::InvalidGenerationAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_width_fails() {
        let cfg = WorldConfig {
            width: 0,
            ..WorldConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Gen(GenError::EmptyMap { .. })) => {}
            other => panic!("expected Gen(EmptyMap), got {other:?}"),
        }
    }

    #[test]
    fn inverted_room_sizes_fail() {
        let cfg = WorldConfig {
            room_min_size: 9,
            room_max_size: 3,
            ..WorldConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Gen(GenError::RoomSizeRange { min: 9, max: 3 })) => {}
            other => panic!("expected Gen(RoomSizeRange), got {other:?}"),
        }
    }

    #[test]
    fn zero_attempts_fail() {
        let cfg = WorldConfig {
            max_generation_attempts: 0,
            ..WorldConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidGenerationAttempts));
    }

    #[test]
    fn errors_chain_their_source() {
        let err = ConfigError::from(GridError::NoPassableTile);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid:"));
        assert!(ConfigError::InvalidGenerationAttempts.source().is_none());
    }
}
