//! Movement, chain pushing and the turn loop for Delve worlds.
//!
//! A [`Session`] owns a [`World`] and a [`GameHub`]. Each move intent is
//! published as a [`GameEvent::PlayerMove`]; the [`MovementResolver`]
//! steps the actor or, when the target is blocked, asks the
//! [`PushResolver`] (bound to [`GameRequest::Push`]) to shove the line
//! of objects ahead. Rendering and input are seams: anything
//! implementing [`RenderSink`] and [`InputSource`] can drive a session.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod input;
pub mod movement;
pub mod protocol;
pub mod push;
pub mod render;
pub mod session;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use input::{InputSource, Intent, ScriptedInput};
pub use movement::{MoveOutcome, MovementResolver};
pub use protocol::{
    Game, GameEvent, GameEventKind, GameHub, GameRequest, GameRequestKind, GameResponse,
    GameResponseKind, PushRequest,
};
pub use push::{resolve_push, PushOutcome, PushResolver};
pub use render::{compose_rows, draw_frame, FrameBuffer, RenderSink, ACTOR_GLYPH};
pub use session::{Session, SessionError, SessionStats};
pub use world::World;
