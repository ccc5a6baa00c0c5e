//! Delve: a layered tile world with procedural dungeons and chain pushing.
//!
//! This is the facade crate that re-exports the public API of the Delve
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use delve::prelude::*;
//!
//! let mut session = Session::new(&WorldConfig { seed: 3, ..WorldConfig::default() })?;
//! let start = session.world().actor();
//! for dir in Direction::ALL {
//!     session.step(dir)?;
//! }
//! let mut screen = FrameBuffer::new();
//! session.render(&mut screen)?;
//! assert_eq!(screen.frame().len(), 10);
//! assert!(session.world().grid().in_bounds(start));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `delve-core` | Layer kinds and table, positions, trait queries, occupancy |
//! | [`gen`] | `delve-gen` | Room placement and dungeon carving |
//! | [`grid`] | `delve-grid` | The multi-layer grid and its tile queries |
//! | [`bus`] | `delve-bus` | Event broadcast and request/response hub |
//! | [`engine`] | `delve-engine` | Movement, pushing, sessions, render and input seams |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Layer kinds, positions and occupancy (`delve-core`).
pub use delve_core as types;

/// Dungeon generation (`delve-gen`).
///
/// [`gen::DungeonGenerator`] places rooms and carves them into one
/// occupancy field per layer kind.
pub use delve_gen as gen;

/// The layered grid (`delve-grid`).
pub use delve_grid as grid;

/// Message hub (`delve-bus`).
///
/// Generic over the message enums; [`engine::Game`] is the protocol a
/// session uses.
pub use delve_bus as bus;

/// Game engine (`delve-engine`).
///
/// [`engine::Session`] wires a [`engine::World`] to the movement and
/// push resolvers and drives the turn loop.
pub use delve_engine as engine;

/// Common imports for typical Delve usage.
pub mod prelude {
    // Core types
    pub use delve_core::{Direction, LayerKind, LayerRegistry, Pos, TraitQuery};

    // Generation and grid
    pub use delve_gen::DungeonGenerator;
    pub use delve_grid::LayerGrid;

    // Hub
    pub use delve_bus::{DispatchError, Hub, ServiceHandler, Subscriber};

    // Engine
    pub use delve_engine::{
        ConfigError, FrameBuffer, InputSource, Intent, MoveOutcome, PushOutcome, RenderSink,
        ScriptedInput, Session, SessionError, World, WorldConfig,
    };
}
