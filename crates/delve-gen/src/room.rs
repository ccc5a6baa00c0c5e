//! Generation-time rooms and the per-tile masks derived from them.

use delve_core::{Occupancy, Pos};

/// An axis-aligned rectangle with inclusive bounds.
///
/// The outermost ring of tiles is the room's boundary; everything within
/// (boundary included) is covered by the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Left column.
    pub xmin: u32,
    /// Top row.
    pub ymin: u32,
    /// Right column (inclusive).
    pub xmax: u32,
    /// Bottom row (inclusive).
    pub ymax: u32,
}

impl Room {
    /// Whether `pos` lies inside the rectangle, boundary included.
    pub fn covers(&self, pos: Pos) -> bool {
        pos.x >= self.xmin as i32
            && pos.x <= self.xmax as i32
            && pos.y >= self.ymin as i32
            && pos.y <= self.ymax as i32
    }

    /// Whether `pos` lies on the rectangle's perimeter.
    pub fn on_boundary(&self, pos: Pos) -> bool {
        self.covers(pos)
            && (pos.x == self.xmin as i32
                || pos.x == self.xmax as i32
                || pos.y == self.ymin as i32
                || pos.y == self.ymax as i32)
    }

    /// Whether the whole rectangle fits in a `width × height` map.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.xmin < self.xmax && self.ymin < self.ymax && self.xmax < width && self.ymax < height
    }
}

/// Count of rooms covering each tile, row-major.
pub(crate) fn coverage(width: u32, height: u32, rooms: &[Room]) -> Vec<u32> {
    let mut counts = vec![0u32; (width as usize) * (height as usize)];
    for room in rooms {
        for y in room.ymin..=room.ymax {
            let row = (y as usize) * (width as usize);
            for x in room.xmin..=room.xmax {
                counts[row + x as usize] += 1;
            }
        }
    }
    counts
}

/// Tiles on the perimeter of at least one room.
pub(crate) fn boundary_mask(width: u32, height: u32, rooms: &[Room]) -> Occupancy {
    let mut mask = Occupancy::new(width, height);
    for room in rooms {
        for x in room.xmin..=room.xmax {
            mask.set(Pos::new(x as i32, room.ymin as i32), true);
            mask.set(Pos::new(x as i32, room.ymax as i32), true);
        }
        for y in room.ymin..=room.ymax {
            mask.set(Pos::new(room.xmin as i32, y as i32), true);
            mask.set(Pos::new(room.xmax as i32, y as i32), true);
        }
    }
    mask
}
