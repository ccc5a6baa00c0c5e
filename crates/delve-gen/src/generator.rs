//! Dungeon generator and its builder.

use delve_core::{LayerKind, Occupancy, Pos};
use log::debug;
use rand::Rng;

use crate::error::GenError;
use crate::room::{boundary_mask, coverage, Room};

/// Per-kind occupancy produced by [`DungeonGenerator::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    layers: [Occupancy; LayerKind::COUNT],
    rooms_placed: usize,
}

impl Dungeon {
    /// Occupancy of `kind`.
    pub fn layer(&self, kind: LayerKind) -> &Occupancy {
        &self.layers[kind.index()]
    }

    /// Number of rooms accepted during placement (may be below the
    /// requested count).
    pub fn rooms_placed(&self) -> usize {
        self.rooms_placed
    }

    /// Map width.
    pub fn width(&self) -> u32 {
        self.layers[0].width()
    }

    /// Map height.
    pub fn height(&self) -> u32 {
        self.layers[0].height()
    }

    /// Consume the dungeon, yielding `(kind, occupancy)` for every kind.
    pub fn into_layers(self) -> impl Iterator<Item = (LayerKind, Occupancy)> {
        LayerKind::ALL.into_iter().zip(self.layers)
    }
}

/// A validated dungeon recipe.
///
/// Constructed via the builder pattern: [`DungeonGenerator::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonGenerator {
    width: u32,
    height: u32,
    room_count: usize,
    room_min_size: u32,
    room_max_size: u32,
}

/// Builder for [`DungeonGenerator`].
///
/// Defaults: 100×10 map, 5 rooms, room sides 5 to 20.
pub struct DungeonGeneratorBuilder {
    width: u32,
    height: u32,
    room_count: usize,
    room_min_size: u32,
    room_max_size: u32,
}

impl DungeonGenerator {
    /// Create a new builder with default settings.
    pub fn builder() -> DungeonGeneratorBuilder {
        DungeonGeneratorBuilder {
            width: 100,
            height: 10,
            room_count: 5,
            room_min_size: 5,
            room_max_size: 20,
        }
    }

    /// Map width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Requested number of rooms.
    pub fn room_count(&self) -> usize {
        self.room_count
    }

    /// Sample candidate rooms.
    ///
    /// Draws at most `2 × room_count` candidates and keeps those whose
    /// far corner stays inside the map. Stops as soon as `room_count`
    /// rooms are accepted; running out of tries first is not an error.
    pub fn place_rooms<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Room> {
        let budget = self.room_count.saturating_mul(2);
        let mut rooms = Vec::with_capacity(self.room_count);
        let mut tries = 0;
        while rooms.len() < self.room_count && tries < budget {
            tries += 1;
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            let w = rng.random_range(self.room_min_size..=self.room_max_size);
            let h = rng.random_range(self.room_min_size..=self.room_max_size);

            let xmax = u64::from(x) + u64::from(w);
            let ymax = u64::from(y) + u64::from(h);
            if xmax >= u64::from(self.width) || ymax >= u64::from(self.height) {
                continue;
            }
            rooms.push(Room {
                xmin: x,
                ymin: y,
                xmax: xmax as u32,
                ymax: ymax as u32,
            });
        }
        debug!(
            "placed {}/{} rooms in {tries} tries on a {}x{} map",
            rooms.len(),
            self.room_count,
            self.width,
            self.height
        );
        rooms
    }

    /// Classify every tile given an already-placed room list.
    ///
    /// Rubble placement still consumes randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::RoomOutOfBounds`] for the first room that does
    /// not [`fit`](Room::fits) this generator's map. Nothing is carved
    /// and `rng` is untouched in that case.
    pub fn carve<R: Rng + ?Sized>(
        &self,
        rooms: &[Room],
        rng: &mut R,
    ) -> Result<Dungeon, GenError> {
        if let Some(&room) = rooms.iter().find(|r| !r.fits(self.width, self.height)) {
            return Err(GenError::RoomOutOfBounds { room });
        }
        Ok(self.carve_unchecked(rooms, rng))
    }

    /// `carve` for rooms already known to fit.
    fn carve_unchecked<R: Rng + ?Sized>(&self, rooms: &[Room], rng: &mut R) -> Dungeon {
        let (width, height) = (self.width, self.height);
        let counts = coverage(width, height, rooms);
        let boundary = boundary_mask(width, height, rooms);
        let count_at = |p: Pos| counts[(p.y as usize) * (width as usize) + p.x as usize];
        let is_wall = |p: Pos| count_at(p) == 1 && boundary.get(p);

        let stone = Occupancy::from_fn(width, height, |p| count_at(p) == 0);
        let wall = Occupancy::from_fn(width, height, |p| is_wall(p));
        let floor = Occupancy::from_fn(width, height, |p| count_at(p) > 0 && !is_wall(p));

        let mut rubble = Occupancy::new(width, height);
        let samples = (width as usize) * (height as usize) / 9;
        for _ in 0..samples {
            let p = Pos::new(
                rng.random_range(0..width) as i32,
                rng.random_range(0..height) as i32,
            );
            if floor.get(p) {
                rubble.set(p, true);
            }
        }

        debug!(
            "carved dungeon: {} wall, {} floor, {} rubble tiles",
            wall.count(),
            floor.count(),
            rubble.count()
        );

        let mut layers = [
            Occupancy::new(0, 0),
            Occupancy::new(0, 0),
            Occupancy::new(0, 0),
            Occupancy::new(0, 0),
        ];
        layers[LayerKind::Stone.index()] = stone;
        layers[LayerKind::Wall.index()] = wall;
        layers[LayerKind::Floor.index()] = floor;
        layers[LayerKind::Rubble.index()] = rubble;

        Dungeon {
            layers,
            rooms_placed: rooms.len(),
        }
    }

    /// Place rooms and carve them into a [`Dungeon`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Dungeon {
        let rooms = self.place_rooms(rng);
        self.carve_unchecked(&rooms, rng)
    }
}

impl DungeonGeneratorBuilder {
    /// Set map dimensions.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of rooms to attempt.
    pub fn rooms(mut self, count: usize) -> Self {
        self.room_count = count;
        self
    }

    /// Set the inclusive range of room side lengths.
    pub fn room_size(mut self, min: u32, max: u32) -> Self {
        self.room_min_size = min;
        self.room_max_size = max;
        self
    }

    /// Build the generator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - either map dimension is zero
    /// - the minimum room size is zero
    /// - the minimum room size exceeds the maximum
    pub fn build(self) -> Result<DungeonGenerator, GenError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenError::EmptyMap {
                width: self.width,
                height: self.height,
            });
        }
        if self.room_min_size == 0 {
            return Err(GenError::ZeroRoomSize);
        }
        if self.room_min_size > self.room_max_size {
            return Err(GenError::RoomSizeRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        Ok(DungeonGenerator {
            width: self.width,
            height: self.height,
            room_count: self.room_count,
            room_min_size: self.room_min_size,
            room_max_size: self.room_max_size,
        })
    }
}
