//! Errors from generator configuration and carving.

use std::error::Error;
use std::fmt;

use crate::room::Room;

/// Errors detected by [`DungeonGeneratorBuilder::build`](crate::DungeonGeneratorBuilder::build)
/// and [`DungeonGenerator::carve`](crate::DungeonGenerator::carve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenError {
    /// Map width or height is zero.
    EmptyMap {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Minimum room size is zero, which would allow degenerate rooms.
    ZeroRoomSize,
    /// Minimum room size exceeds the maximum.
    RoomSizeRange {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
    /// A room handed to `carve` is degenerate or reaches past the map edge.
    RoomOutOfBounds {
        /// The rejected room.
        room: Room,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap { width, height } => {
                write!(f, "map must have at least one tile, got {width}x{height}")
            }
            Self::ZeroRoomSize => write!(f, "room_min_size must be at least 1"),
            Self::RoomSizeRange { min, max } => {
                write!(f, "room_min_size ({min}) exceeds room_max_size ({max})")
            }
            Self::RoomOutOfBounds { room } => write!(
                f,
                "room ({}, {})..=({}, {}) does not fit the map",
                room.xmin, room.ymin, room.xmax, room.ymax
            ),
        }
    }
}

impl Error for GenError {}
