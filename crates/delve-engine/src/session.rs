//! The turn loop: draw, wait for input, resolve, repeat.

use std::error::Error;
use std::fmt;
use std::io;

use delve_bus::DispatchError;
use delve_core::Direction;
use log::info;

use crate::config::{ConfigError, WorldConfig};
use crate::input::{InputSource, Intent};
use crate::movement::{MoveOutcome, MovementResolver};
use crate::protocol::{GameEvent, GameEventKind, GameHub, GameRequestKind};
use crate::push::PushResolver;
use crate::render::{compose_rows, draw_frame, RenderSink};
use crate::world::World;

// ── SessionError ───────────────────────────────────────────────────

/// Errors that end a running session.
#[derive(Debug)]
pub enum SessionError {
    /// Rendering or input failed.
    Io(io::Error),
    /// A move could not be dispatched.
    Dispatch(DispatchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal i/o: {e}"),
            Self::Dispatch(e) => write!(f, "dispatch: {e}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Dispatch(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DispatchError> for SessionError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}

// ── SessionStats ───────────────────────────────────────────────────

/// Running counts over a session's moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Move intents processed.
    pub turns: u64,
    /// Moves onto an open tile.
    pub moves: u64,
    /// Successful pushes, whether or not the actor followed.
    pub pushes: u64,
    /// Moves that changed nothing (off-map or failed push).
    pub blocked: u64,
}

impl SessionStats {
    fn record(&mut self, outcome: MoveOutcome) {
        self.turns += 1;
        match outcome {
            MoveOutcome::Moved => self.moves += 1,
            MoveOutcome::Pushed { .. } => self.pushes += 1,
            MoveOutcome::OutOfBounds | MoveOutcome::PushFailed => self.blocked += 1,
        }
    }
}

// ── Session ────────────────────────────────────────────────────────

/// A world plus the hub wired to drive it.
///
/// # Example
///
/// ```
/// use delve_engine::{FrameBuffer, ScriptedInput, Session, WorldConfig};
/// use delve_core::Direction;
///
/// let mut session = Session::new(&WorldConfig::default())?;
/// let mut screen = FrameBuffer::new();
/// session.run(&mut ScriptedInput::moves([Direction::Right; 3]), &mut screen)?;
/// assert_eq!(session.stats().turns, 3);
/// assert_eq!(screen.frame().len(), 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Session {
    world: World,
    hub: GameHub,
    stats: SessionStats,
}

impl Session {
    /// Generate a world from `config` and wire the standard resolvers.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        let world = World::generate(config)?;
        Self::with_world(world)
    }

    /// Wire the standard resolvers around an existing world.
    pub fn with_world(world: World) -> Result<Self, ConfigError> {
        let mut hub = GameHub::new();
        hub.subscribe(GameEventKind::PlayerMove, MovementResolver);
        hub.bind(GameRequestKind::Push, PushResolver)?;
        info!(
            "session started on a {}x{} map, actor at {}",
            world.grid().width(),
            world.grid().height(),
            world.actor()
        );
        Ok(Self {
            world,
            hub,
            stats: SessionStats::default(),
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Counts over the moves made so far.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Resolve one move.
    ///
    /// Returns `None` only if no subscriber recorded an outcome.
    pub fn step(&mut self, direction: Direction) -> Result<Option<MoveOutcome>, DispatchError> {
        self.hub
            .publish(&GameEvent::PlayerMove(direction), &mut self.world)?;
        let outcome = self.world.take_last_move();
        if let Some(outcome) = outcome {
            self.stats.record(outcome);
            self.world.record_move(outcome);
        }
        Ok(outcome)
    }

    /// The current frame, one string per map row.
    pub fn frame(&self) -> Vec<String> {
        compose_rows(self.world.grid(), Some(self.world.actor()))
    }

    /// Draw the current frame to `sink`.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        draw_frame(sink, &self.frame())
    }

    /// Run until `input` yields [`Intent::Quit`].
    ///
    /// Draws before every poll, so the sink always ends showing the
    /// final state.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<(), SessionError>
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        loop {
            self.render(sink)?;
            match input.poll()? {
                Some(Intent::Move(direction)) => {
                    self.step(direction)?;
                }
                Some(Intent::Quit) => break,
                None => {}
            }
        }
        info!("session ended: {:?}", self.stats);
        Ok(())
    }
}
