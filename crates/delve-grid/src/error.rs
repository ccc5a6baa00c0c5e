//! Error types for grid construction, queries, and actor placement.

use delve_core::{LayerKind, Pos};
use std::fmt;

/// Errors arising from grid construction, spawn-point search, or actor placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero tiles.
    EmptyGrid,
    /// A supplied layer does not match the grid's dimensions.
    DimensionMismatch {
        /// The offending layer.
        kind: LayerKind,
        /// Grid `(width, height)`.
        expected: (u32, u32),
        /// Layer `(width, height)`.
        actual: (u32, u32),
    },
    /// No tile on the grid is free of impassable occupants.
    NoPassableTile,
    /// An actor was placed outside the grid.
    ActorOffMap {
        /// The rejected position.
        pos: Pos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one tile"),
            Self::DimensionMismatch {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "{kind} layer is {}x{}, grid is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::NoPassableTile => write!(f, "grid has no passable tile"),
            Self::ActorOffMap { pos } => write!(f, "actor position {pos} is off the map"),
        }
    }
}

impl std::error::Error for GridError {}
