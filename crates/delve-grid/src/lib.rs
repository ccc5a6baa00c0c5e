//! Multi-layer occupancy grid for Delve worlds.
//!
//! [`LayerGrid`] owns one [`Occupancy`](delve_core::Occupancy) field per
//! layer kind and answers point queries against the layer table: does
//! any (or every) kind present on a tile satisfy a
//! [`TraitQuery`](delve_core::TraitQuery)? It is the only state the push
//! resolver mutates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::LayerGrid;
