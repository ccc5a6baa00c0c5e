//! Turning a move event into an actor step or a push.

use delve_bus::{DispatchError, Services, Subscriber};
use delve_core::{Direction, TraitQuery};
use log::debug;

use crate::protocol::{Game, GameEvent, PushRequest};
use crate::world::World;

const PASSABLE: TraitQuery = TraitQuery::new().passable(true);

/// How a move resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target tile is off the map. Nothing changed.
    OutOfBounds,
    /// The target was open and the actor stepped onto it.
    Moved,
    /// The line of objects in front of the actor moved one tile.
    ///
    /// `advanced` is false when the target still holds something
    /// impassable afterwards; the actor then stays put.
    Pushed {
        /// Whether the actor stepped onto the target.
        advanced: bool,
    },
    /// The target was occupied and could not be pushed. Nothing changed.
    PushFailed,
}

impl MoveOutcome {
    /// Whether the actor changed tile.
    pub fn actor_moved(&self) -> bool {
        matches!(self, Self::Moved | Self::Pushed { advanced: true })
    }
}

/// Subscribes to [`GameEvent::PlayerMove`] and moves the actor.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Resolve one move of the actor along `direction`.
    ///
    /// Only a blocked target reaches the push service; direct moves and
    /// off-map targets never issue a request.
    ///
    /// # Errors
    ///
    /// Wiring errors from the push request (`NoHandler`,
    /// `InvalidResponseType`). Blocked moves are outcomes, not errors.
    pub fn resolve(
        direction: Direction,
        world: &mut World,
        services: &Services<Game, World>,
    ) -> Result<MoveOutcome, DispatchError> {
        let target = world.actor().step(direction);
        if !world.grid().in_bounds(target) {
            return Ok(MoveOutcome::OutOfBounds);
        }
        if world.grid().is_open(target) {
            world.place_actor(target);
            return Ok(MoveOutcome::Moved);
        }

        let pushed = services.call(
            PushRequest {
                origin: target,
                direction,
            },
            world,
        )?;
        if !pushed.is_success() {
            return Ok(MoveOutcome::PushFailed);
        }
        let advanced = world.grid().tile_has_all(target, &PASSABLE);
        if advanced {
            world.place_actor(target);
        }
        Ok(MoveOutcome::Pushed { advanced })
    }
}

impl Subscriber<Game, World> for MovementResolver {
    fn name(&self) -> &str {
        "movement"
    }

    fn handle(
        &self,
        event: &GameEvent,
        world: &mut World,
        services: &Services<Game, World>,
    ) -> Result<(), DispatchError> {
        match *event {
            GameEvent::PlayerMove(direction) => {
                let outcome = Self::resolve(direction, world, services)?;
                debug!("move {direction:?}: {outcome:?}, actor at {}", world.actor());
                world.record_move(outcome);
            }
        }
        Ok(())
    }
}
