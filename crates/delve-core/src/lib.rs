//! Core types for the Delve tile world.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fixed layer table (material kinds and their static traits), the
//! typed trait predicate used for tile queries, positions and cardinal
//! directions, and the per-kind boolean [`Occupancy`] field that the
//! generator fills and the grid mutates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod layer;
pub mod pos;
pub mod query;

pub use field::Occupancy;
pub use layer::{LayerDef, LayerKind, LayerRegistry, LayerSet, LayerTraits};
pub use pos::{Direction, Pos};
pub use query::TraitQuery;
