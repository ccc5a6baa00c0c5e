//! The layered grid.

use delve_core::{LayerKind, LayerRegistry, LayerSet, Occupancy, Pos, TraitQuery};
use delve_gen::{Dungeon, DungeonGenerator};
use indexmap::IndexMap;
use rand::Rng;

use crate::error::GridError;

/// Matches any impassable kind.
const IMPASSABLE: TraitQuery = TraitQuery::new().passable(false);

/// Per-kind occupancy over a `width × height` map.
///
/// Layers are stored in registry (draw) order, so every iteration over
/// a tile's occupants is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerGrid {
    width: u32,
    height: u32,
    registry: LayerRegistry,
    layers: IndexMap<LayerKind, Occupancy>,
}

impl LayerGrid {
    /// An empty grid: no kind occupies any tile.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(registry: LayerRegistry, width: u32, height: u32) -> Result<Self, GridError> {
        Self::from_layers(registry, width, height, std::iter::empty())
    }

    /// Build a grid from explicit layers.
    ///
    /// Kinds not supplied start empty; a kind supplied twice keeps the
    /// last occupancy.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is 0 or a layer's dimensions
    /// differ from the grid's.
    pub fn from_layers(
        registry: LayerRegistry,
        width: u32,
        height: u32,
        layers: impl IntoIterator<Item = (LayerKind, Occupancy)>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut by_kind: IndexMap<LayerKind, Occupancy> = registry
            .kinds()
            .map(|kind| (kind, Occupancy::new(width, height)))
            .collect();
        for (kind, occupancy) in layers {
            if (occupancy.width(), occupancy.height()) != (width, height) {
                return Err(GridError::DimensionMismatch {
                    kind,
                    expected: (width, height),
                    actual: (occupancy.width(), occupancy.height()),
                });
            }
            by_kind.insert(kind, occupancy);
        }
        Ok(Self {
            width,
            height,
            registry,
            layers: by_kind,
        })
    }

    /// Adopt the layers of a generated dungeon.
    pub fn from_dungeon(registry: LayerRegistry, dungeon: Dungeon) -> Result<Self, GridError> {
        let (width, height) = (dungeon.width(), dungeon.height());
        Self::from_layers(registry, width, height, dungeon.into_layers())
    }

    /// Generate a dungeon and adopt it.
    pub fn generate<R: Rng + ?Sized>(
        registry: LayerRegistry,
        generator: &DungeonGenerator,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        Self::from_dungeon(registry, generator.generate(rng))
    }

    /// Grid width (columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The layer table this grid was built with.
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Occupancy of `kind`.
    pub fn layer(&self, kind: LayerKind) -> &Occupancy {
        &self.layers[&kind]
    }

    /// Whether `pos` is on the map.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    /// Whether `kind` occupies `pos`. Off-map tiles hold nothing.
    pub fn contains(&self, kind: LayerKind, pos: Pos) -> bool {
        self.layers[&kind].get(pos)
    }

    /// Set or clear `kind` at `pos`.
    pub fn set(&mut self, kind: LayerKind, pos: Pos, present: bool) {
        if let Some(layer) = self.layers.get_mut(&kind) {
            layer.set(pos, present);
        }
    }

    /// Kinds present at `pos`, in draw order.
    pub fn occupants(&self, pos: Pos) -> LayerSet {
        self.layers
            .iter()
            .filter(|(_, occ)| occ.get(pos))
            .map(|(&kind, _)| kind)
            .collect()
    }

    /// True if some kind occupying `pos` satisfies `query`.
    pub fn tile_has_any(&self, pos: Pos, query: &TraitQuery) -> bool {
        self.layers
            .iter()
            .any(|(&kind, occ)| occ.get(pos) && query.matches(self.registry.traits(kind)))
    }

    /// True if every kind occupying `pos` satisfies `query`.
    ///
    /// Vacuously true for a tile nothing occupies.
    pub fn tile_has_all(&self, pos: Pos, query: &TraitQuery) -> bool {
        self.layers
            .iter()
            .all(|(&kind, occ)| !occ.get(pos) || query.matches(self.registry.traits(kind)))
    }

    /// Whether `pos` is on the map and holds no impassable kind.
    ///
    /// This is both "can the actor stand here" and "can a pushed object
    /// come to rest here".
    pub fn is_open(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.tile_has_any(pos, &IMPASSABLE)
    }

    /// Whether any tile on the map is open.
    pub fn has_open_tile(&self) -> bool {
        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Pos::new(x, y)))
            .any(|p| !self.tile_has_any(p, &IMPASSABLE))
    }

    /// Pick a uniformly random open tile by rejection sampling.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::NoPassableTile)` when no tile is open,
    /// instead of sampling forever.
    pub fn random_passable_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Pos, GridError> {
        if !self.has_open_tile() {
            return Err(GridError::NoPassableTile);
        }
        loop {
            let pos = Pos::new(
                rng.random_range(0..self.width) as i32,
                rng.random_range(0..self.height) as i32,
            );
            if !self.tile_has_any(pos, &IMPASSABLE) {
                return Ok(pos);
            }
        }
    }

    /// Clear `kind` at `from` and set it at `to`.
    ///
    /// Performs no bounds or collision checks; the caller establishes
    /// that the move is legal.
    pub fn move_occupant(&mut self, kind: LayerKind, from: Pos, to: Pos) {
        if let Some(layer) = self.layers.get_mut(&kind) {
            layer.set(from, false);
            layer.set(to, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    /// 3x1 strip: floor | floor+rubble | wall.
    fn strip() -> LayerGrid {
        let mut g = LayerGrid::new(LayerRegistry::standard(), 3, 1).unwrap();
        g.set(LayerKind::Floor, p(0, 0), true);
        g.set(LayerKind::Floor, p(1, 0), true);
        g.set(LayerKind::Rubble, p(1, 0), true);
        g.set(LayerKind::Wall, p(2, 0), true);
        g
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            LayerGrid::new(LayerRegistry::standard(), 0, 4),
            Err(GridError::EmptyGrid)
        );
    }

    #[test]
    fn from_layers_rejects_mismatched_layer() {
        let err = LayerGrid::from_layers(
            LayerRegistry::standard(),
            4,
            4,
            [(LayerKind::Wall, Occupancy::new(4, 3))],
        )
        .unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                kind: LayerKind::Wall,
                expected: (4, 4),
                actual: (4, 3),
            }
        );
    }

    #[test]
    fn in_bounds_uses_width_and_height_independently() {
        let g = LayerGrid::new(LayerRegistry::standard(), 5, 2).unwrap();
        assert!(g.in_bounds(p(4, 1)));
        assert!(!g.in_bounds(p(1, 4)));
        assert!(!g.in_bounds(p(-1, 0)));
        assert!(!g.in_bounds(p(5, 0)));
        assert!(!g.in_bounds(p(0, 2)));
    }

    #[test]
    fn has_any_and_all() {
        let g = strip();
        let impassable = TraitQuery::new().passable(false);
        let passable = TraitQuery::new().passable(true);
        let pushable = TraitQuery::new().pushable(true);

        assert!(!g.tile_has_any(p(0, 0), &impassable));
        assert!(g.tile_has_all(p(0, 0), &passable));

        assert!(g.tile_has_any(p(1, 0), &impassable));
        assert!(g.tile_has_any(p(1, 0), &pushable));
        assert!(!g.tile_has_all(p(1, 0), &passable));

        let immovable = TraitQuery::new().passable(false).pushable(false);
        assert!(g.tile_has_any(p(2, 0), &immovable));
        assert!(!g.tile_has_any(p(1, 0), &immovable));
    }

    #[test]
    fn has_all_is_vacuous_on_empty_tile() {
        let g = LayerGrid::new(LayerRegistry::standard(), 2, 2).unwrap();
        let impossible = TraitQuery::new().passable(true).pushable(true);
        assert!(g.tile_has_all(p(1, 1), &impossible));
        assert!(!g.tile_has_any(p(1, 1), &TraitQuery::new()));
    }

    #[test]
    fn occupants_follow_draw_order() {
        let g = strip();
        assert_eq!(
            g.occupants(p(1, 0)).to_vec(),
            vec![LayerKind::Floor, LayerKind::Rubble]
        );
        assert!(g.occupants(p(7, 7)).is_empty());
    }

    #[test]
    fn move_occupant_moves_one_kind_only() {
        let mut g = strip();
        g.move_occupant(LayerKind::Rubble, p(1, 0), p(0, 0));
        assert!(g.contains(LayerKind::Rubble, p(0, 0)));
        assert!(!g.contains(LayerKind::Rubble, p(1, 0)));
        assert!(g.contains(LayerKind::Floor, p(1, 0)));
        assert!(g.is_open(p(1, 0)));
        assert!(!g.is_open(p(0, 0)));
    }

    #[test]
    fn random_passable_tile_without_any_fails() {
        let mut g = LayerGrid::new(LayerRegistry::standard(), 3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                g.set(LayerKind::Stone, p(x, y), true);
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            g.random_passable_tile(&mut rng),
            Err(GridError::NoPassableTile)
        );
    }

    #[test]
    fn random_passable_tile_finds_lone_opening() {
        let mut g = LayerGrid::new(LayerRegistry::standard(), 4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                g.set(LayerKind::Wall, p(x, y), true);
            }
        }
        g.set(LayerKind::Wall, p(2, 3), false);
        g.set(LayerKind::Floor, p(2, 3), true);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(g.random_passable_tile(&mut rng), Ok(p(2, 3)));
    }

    proptest! {
        #[test]
        fn random_passable_tile_is_never_blocked(seed in any::<u64>(), gen_seed in any::<u64>()) {
            let generator = DungeonGenerator::builder()
                .size(30, 15)
                .rooms(6)
                .room_size(3, 8)
                .build()
                .unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(gen_seed);
            let g = LayerGrid::generate(LayerRegistry::standard(), &generator, &mut rng).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            match g.random_passable_tile(&mut rng) {
                Ok(pos) => {
                    prop_assert!(g.in_bounds(pos));
                    prop_assert!(!g.tile_has_any(pos, &TraitQuery::new().passable(false)));
                }
                Err(GridError::NoPassableTile) => prop_assert!(!g.has_open_tile()),
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
