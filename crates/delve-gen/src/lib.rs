//! Procedural dungeon generation for Delve worlds.
//!
//! A dungeon is built from randomly placed, possibly overlapping
//! rectangular [`Room`]s. Tiles outside every room become stone; the
//! perimeter of a room that overlaps nothing becomes wall; everything
//! else a room covers becomes floor, so overlapping rooms fuse into one
//! open area. Rubble is then scattered over floor tiles.
//!
//! ```
//! use delve_core::LayerKind;
//! use delve_gen::DungeonGenerator;
//! use rand::SeedableRng;
//!
//! let generator = DungeonGenerator::builder()
//!     .size(40, 20)
//!     .rooms(6)
//!     .room_size(3, 8)
//!     .build()
//!     .unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let dungeon = generator.generate(&mut rng);
//! assert_eq!(dungeon.layer(LayerKind::Stone).width(), 40);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod room;

pub use error::GenError;
pub use generator::{Dungeon, DungeonGenerator, DungeonGeneratorBuilder};
pub use room::Room;
