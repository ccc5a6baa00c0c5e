//! World state: the grid, the actor, and the last move's outcome.

use delve_core::{LayerRegistry, Pos};
use delve_grid::{GridError, LayerGrid};
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, WorldConfig};
use crate::movement::MoveOutcome;

/// Everything a turn can read or change.
///
/// The hub passes a `&mut World` to every subscriber and handler, so
/// this is the one place game state lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    grid: LayerGrid,
    actor: Pos,
    last_move: Option<MoveOutcome>,
}

impl World {
    /// A world with the actor at `actor`.
    ///
    /// Only the bounds are checked. The caller may place the actor on a
    /// tile it could not walk onto.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ActorOffMap`] if `actor` is outside `grid`.
    pub fn new(grid: LayerGrid, actor: Pos) -> Result<Self, GridError> {
        if !grid.in_bounds(actor) {
            return Err(GridError::ActorOffMap { pos: actor });
        }
        Ok(Self {
            grid,
            actor,
            last_move: None,
        })
    }

    /// Generate a world from `config`, seeding ChaCha8 from `config.seed`.
    pub fn generate(config: &WorldConfig) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::generate_with(config, &mut rng)
    }

    /// Generate a world, drawing all randomness from `rng`.
    ///
    /// Dungeons without an open tile are discarded and regenerated, up
    /// to `config.max_generation_attempts` in total. The actor spawns
    /// on a random open tile.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid or no attempt yields an
    /// open tile.
    pub fn generate_with<R: Rng + ?Sized>(
        config: &WorldConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = config.generator()?;
        for attempt in 1..=config.max_generation_attempts {
            let dungeon = generator.generate(rng);
            let rooms = dungeon.rooms_placed();
            let grid = LayerGrid::from_dungeon(LayerRegistry::standard(), dungeon)?;
            match grid.random_passable_tile(rng) {
                Ok(actor) => {
                    debug!("world ready after {attempt} attempt(s): {rooms} room(s), actor at {actor}");
                    return Ok(Self::new(grid, actor)?);
                }
                Err(GridError::NoPassableTile) => {
                    warn!("dungeon {attempt} has no open tile ({rooms} room(s)), regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(ConfigError::NoOpenTile {
            attempts: config.max_generation_attempts,
        })
    }

    /// The layered map.
    pub fn grid(&self) -> &LayerGrid {
        &self.grid
    }

    /// Mutable access to the map.
    pub fn grid_mut(&mut self) -> &mut LayerGrid {
        &mut self.grid
    }

    /// Where the actor stands.
    pub fn actor(&self) -> Pos {
        self.actor
    }

    /// Outcome of the most recent move, if any move has been made.
    pub fn last_move(&self) -> Option<MoveOutcome> {
        self.last_move
    }

    pub(crate) fn place_actor(&mut self, pos: Pos) {
        self.actor = pos;
    }

    pub(crate) fn record_move(&mut self, outcome: MoveOutcome) {
        self.last_move = Some(outcome);
    }

    pub(crate) fn take_last_move(&mut self) -> Option<MoveOutcome> {
        self.last_move.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::TraitQuery;

    #[test]
    fn actor_off_the_map_is_rejected() {
        let grid = LayerGrid::new(LayerRegistry::standard(), 3, 2).unwrap();
        for pos in [Pos::new(3, 0), Pos::new(0, 2), Pos::new(-1, 1)] {
            match World::new(grid.clone(), pos) {
                Err(GridError::ActorOffMap { pos: p }) => assert_eq!(p, pos),
                other => panic!("expected ActorOffMap, got {other:?}"),
            }
        }
        let world = World::new(grid, Pos::new(2, 1)).unwrap();
        assert_eq!(world.actor(), Pos::new(2, 1));
        assert_eq!(world.last_move(), None);
    }

    #[test]
    fn generated_actor_stands_on_open_tile() {
        for seed in 0..20 {
            let config = WorldConfig {
                seed,
                ..WorldConfig::default()
            };
            let world = World::generate(&config).unwrap();
            assert!(world.grid().is_open(world.actor()), "seed {seed}");
            assert!(!world
                .grid()
                .tile_has_any(world.actor(), &TraitQuery::new().passable(false)));
        }
    }

    #[test]
    fn same_seed_same_world() {
        let config = WorldConfig {
            seed: 7,
            ..WorldConfig::default()
        };
        assert_eq!(World::generate(&config), World::generate(&config));
    }

    #[test]
    fn impossible_map_reports_no_open_tile() {
        // Rooms need 6 tiles a side but the map is 4 wide: nothing fits.
        let config = WorldConfig {
            width: 4,
            height: 4,
            room_min_size: 6,
            room_max_size: 6,
            max_generation_attempts: 3,
            ..WorldConfig::default()
        };
        assert_eq!(
            World::generate(&config),
            Err(ConfigError::NoOpenTile { attempts: 3 })
        );
    }

    #[test]
    fn invalid_config_is_rejected_before_generating() {
        let config = WorldConfig {
            height: 0,
            ..WorldConfig::default()
        };
        assert!(matches!(World::generate(&config), Err(ConfigError::Gen(_))));
    }
}
