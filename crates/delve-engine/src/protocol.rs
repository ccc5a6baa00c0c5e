//! The messages a Delve session routes through its hub.

use delve_bus::{Hub, Protocol, Request, Tagged};
use delve_core::{Direction, Pos};

use crate::push::PushOutcome;
use crate::world::World;

/// The hub every session wires up.
pub type GameHub = Hub<Game, World>;

/// Broadcast events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player asked to move one tile.
    PlayerMove(Direction),
}

/// Routing key of [`GameEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEventKind {
    /// [`GameEvent::PlayerMove`].
    PlayerMove,
}

impl Tagged for GameEvent {
    type Kind = GameEventKind;

    fn kind(&self) -> GameEventKind {
        match self {
            Self::PlayerMove(_) => GameEventKind::PlayerMove,
        }
    }
}

/// Shove the line of objects starting at `origin` one tile along
/// `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushRequest {
    /// First tile of the line.
    pub origin: Pos,
    /// Displacement applied to every object in the line.
    pub direction: Direction,
}

/// Requests answered by exactly one handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameRequest {
    /// Resolve a chain push.
    Push(PushRequest),
}

/// Routing key of [`GameRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameRequestKind {
    /// [`GameRequest::Push`].
    Push,
}

impl Tagged for GameRequest {
    type Kind = GameRequestKind;

    fn kind(&self) -> GameRequestKind {
        match self {
            Self::Push(_) => GameRequestKind::Push,
        }
    }
}

impl From<PushRequest> for GameRequest {
    fn from(request: PushRequest) -> Self {
        Self::Push(request)
    }
}

/// Handler answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResponse {
    /// Answer to [`GameRequest::Push`].
    Push(PushOutcome),
}

/// Tag of [`GameResponse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResponseKind {
    /// [`GameResponse::Push`].
    Push,
}

impl Tagged for GameResponse {
    type Kind = GameResponseKind;

    fn kind(&self) -> GameResponseKind {
        match self {
            Self::Push(_) => GameResponseKind::Push,
        }
    }
}

impl TryFrom<GameResponse> for PushOutcome {
    type Error = GameResponse;

    fn try_from(response: GameResponse) -> Result<Self, GameResponse> {
        match response {
            GameResponse::Push(outcome) => Ok(outcome),
        }
    }
}

impl Request<Game> for PushRequest {
    type Response = PushOutcome;
}

/// Marker tying the Delve message enums together.
#[derive(Clone, Copy, Debug)]
pub struct Game;

impl Protocol for Game {
    type Event = GameEvent;
    type Request = GameRequest;
    type Response = GameResponse;

    fn expected_response(kind: GameRequestKind) -> GameResponseKind {
        match kind {
            GameRequestKind::Push => GameResponseKind::Push,
        }
    }
}
