//! Chain pushing.
//!
//! A push shoves the contiguous line of pushable objects that starts at
//! an origin tile one step along a cardinal direction. It succeeds only
//! if walking forward from the origin reaches a resting tile (every
//! occupant passable) before an immovable occupant or the map edge.

use delve_bus::ServiceHandler;
use delve_core::{Direction, Pos, TraitQuery};
use delve_grid::LayerGrid;
use log::trace;

use crate::protocol::{Game, GameRequest, GameResponse};
use crate::world::World;

const PUSHABLE: TraitQuery = TraitQuery::new().pushable(true);
const PASSABLE: TraitQuery = TraitQuery::new().passable(true);
const IMMOVABLE: TraitQuery = TraitQuery::new().passable(false).pushable(false);

/// What a push did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The line moved one tile. `chain_len` counts the tiles shifted,
    /// origin included.
    Pushed {
        /// Tiles in the line.
        chain_len: usize,
    },
    /// The origin holds nothing pushable.
    NothingToPush,
    /// An immovable occupant or the map edge stopped the line.
    Blocked,
}

impl PushOutcome {
    /// Whether the line moved.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Pushed { .. })
    }
}

/// Push the line starting at `origin` one tile along `direction`.
///
/// On any outcome other than [`PushOutcome::Pushed`] the grid is left
/// untouched.
pub fn resolve_push(grid: &mut LayerGrid, origin: Pos, direction: Direction) -> PushOutcome {
    if !grid.tile_has_any(origin, &PUSHABLE) {
        return PushOutcome::NothingToPush;
    }

    // Forward: find the resting tile.
    let mut terminal = origin.step(direction);
    let mut chain_len = 1;
    loop {
        if !grid.in_bounds(terminal) {
            trace!("push from {origin} ran off the map at {terminal}");
            return PushOutcome::Blocked;
        }
        if grid.tile_has_all(terminal, &PASSABLE) {
            break;
        }
        if grid.tile_has_any(terminal, &IMMOVABLE) {
            trace!("push from {origin} blocked at {terminal}");
            return PushOutcome::Blocked;
        }
        chain_len += 1;
        terminal = terminal.step(direction);
    }

    // Backward: shift every pushable occupant one tile forward, front first.
    let back = direction.opposite();
    let mut to = terminal;
    while to != origin {
        let from = to.step(back);
        for kind in grid.occupants(from) {
            if grid.registry().traits(kind).pushable {
                grid.move_occupant(kind, from, to);
            }
        }
        to = from;
    }
    trace!("pushed {chain_len} tile(s) from {origin} into {terminal}");
    PushOutcome::Pushed { chain_len }
}

/// Answers push requests against the world's grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct PushResolver;

impl ServiceHandler<Game, World> for PushResolver {
    fn name(&self) -> &str {
        "push_resolver"
    }

    fn handle(&self, request: GameRequest, world: &mut World) -> GameResponse {
        match request {
            GameRequest::Push(push) => {
                GameResponse::Push(resolve_push(world.grid_mut(), push.origin, push.direction))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::LayerKind;
    use delve_test_utils::fixtures::{chain_row, ChainEnd};
    use delve_test_utils::{ascii_grid, to_ascii};

    fn push_right(rows: &[&str], origin: Pos) -> (PushOutcome, Vec<String>) {
        let mut grid = ascii_grid(rows).grid;
        let outcome = resolve_push(&mut grid, origin, Direction::Right);
        (outcome, to_ascii(&grid, None))
    }

    #[test]
    fn five_wide_row_against_wall_then_floor() {
        let (outcome, after) = push_right(&["0000#"], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Blocked);
        assert_eq!(after, ["0000#"]);

        let (outcome, after) = push_right(&["0000."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Pushed { chain_len: 4 });
        assert_eq!(after, [".0000"]);
    }

    #[test]
    fn single_object_slides_over_floor() {
        let (outcome, after) = push_right(&["0...#"], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Pushed { chain_len: 1 });
        assert_eq!(after, [".0..#"]);
    }

    #[test]
    fn adjacent_wall_blocks() {
        let (outcome, after) = push_right(&["0#..."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Blocked);
        assert_eq!(after, ["0#..."]);
    }

    #[test]
    fn open_floor_accepts_object() {
        let (outcome, after) = push_right(&["0...."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Pushed { chain_len: 1 });
        assert_eq!(after, [".0..."]);
    }

    #[test]
    fn nothing_to_push_on_plain_wall() {
        let (outcome, after) = push_right(&["#...."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::NothingToPush);
        assert_eq!(after, ["#...."]);
    }

    #[test]
    fn chain_shifts_as_a_unit() {
        let (outcome, after) = push_right(&["000.."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Pushed { chain_len: 3 });
        assert_eq!(after, [".000."]);
    }

    #[test]
    fn chain_running_off_map_is_blocked() {
        let (outcome, after) = push_right(&["0000"], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Blocked);
        assert_eq!(after, ["0000"]);
    }

    #[test]
    fn stone_blocks_like_wall() {
        let (outcome, _) = push_right(&["00 ."], Pos::new(0, 0));
        assert_eq!(outcome, PushOutcome::Blocked);
    }

    #[test]
    fn empty_tile_is_a_resting_tile() {
        // A tile with no occupants at all is vacuously passable.
        let mut grid = ascii_grid(&["0."]).grid;
        grid.set(LayerKind::Floor, Pos::new(1, 0), false);
        assert!(grid.occupants(Pos::new(1, 0)).is_empty());
        let outcome = resolve_push(&mut grid, Pos::new(0, 0), Direction::Right);
        assert!(outcome.is_success());
        assert!(grid.contains(LayerKind::Rubble, Pos::new(1, 0)));
        assert!(grid.contains(LayerKind::Floor, Pos::new(0, 0)));
    }

    #[test]
    fn push_works_on_every_axis() {
        let rows = [".....", "..0..", ".000.", "..0..", "....."];
        for (dir, origin, expected) in [
            (Direction::Up, Pos::new(2, 1), Pos::new(2, 0)),
            (Direction::Down, Pos::new(2, 3), Pos::new(2, 4)),
            (Direction::Left, Pos::new(1, 2), Pos::new(0, 2)),
            (Direction::Right, Pos::new(3, 2), Pos::new(4, 2)),
        ] {
            let mut grid = ascii_grid(&rows).grid;
            assert!(resolve_push(&mut grid, origin, dir).is_success(), "{dir:?}");
            assert!(grid.contains(LayerKind::Rubble, expected), "{dir:?}");
            assert!(!grid.contains(LayerKind::Rubble, origin), "{dir:?}");
        }
    }

    #[test]
    fn chain_fixture_against_wall() {
        let mut fixture = chain_row(3, ChainEnd::Wall);
        let before = to_ascii(&fixture.grid, None);
        let outcome = resolve_push(&mut fixture.grid, Pos::new(1, 0), Direction::Right);
        assert_eq!(outcome, PushOutcome::Blocked);
        assert_eq!(to_ascii(&fixture.grid, None), before);
    }

    #[test]
    fn resolver_answers_through_world() {
        let parsed = ascii_grid(&["@0."]);
        let mut world = World::new(parsed.grid, Pos::new(0, 0)).unwrap();
        let request = GameRequest::Push(crate::protocol::PushRequest {
            origin: Pos::new(1, 0),
            direction: Direction::Right,
        });
        assert_eq!(
            PushResolver.handle(request, &mut world),
            GameResponse::Push(PushOutcome::Pushed { chain_len: 1 })
        );
        assert!(world.grid().contains(LayerKind::Rubble, Pos::new(2, 0)));
    }
}
