//! The per-kind boolean occupancy field.

use crate::pos::Pos;

/// A `width × height` boolean field, stored row-major.
///
/// One `Occupancy` exists per [`LayerKind`](crate::LayerKind); a set
/// cell means that kind is present on the tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupancy {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Occupancy {
    /// An all-clear field.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, false)
    }

    /// A field with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![value; (width as usize) * (height as usize)],
        }
    }

    /// Build a field by evaluating `f` at every position.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Pos) -> bool) -> Self {
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(f(Pos::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Field width (columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height (rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of `pos`, or `None` when out of bounds.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i32 || pos.y >= self.height as i32 {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    /// Whether the cell at `pos` is set. Out-of-bounds cells read as clear.
    pub fn get(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Set or clear the cell at `pos`.
    ///
    /// Writes outside the field are dropped (and trip a debug assertion).
    pub fn set(&mut self, pos: Pos, value: bool) {
        debug_assert!(self.index(pos).is_some(), "occupancy write out of bounds at {pos}");
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Positions of set cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| Pos::new((i % width) as i32, (i / width) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_roundtrip() {
        let mut f = Occupancy::new(4, 3);
        assert!(!f.get(Pos::new(3, 2)));
        f.set(Pos::new(3, 2), true);
        assert!(f.get(Pos::new(3, 2)));
        assert_eq!(f.count(), 1);
        f.set(Pos::new(3, 2), false);
        assert_eq!(f.count(), 0);
    }

    #[test]
    fn out_of_bounds_reads_clear() {
        let f = Occupancy::filled(2, 2, true);
        assert!(!f.get(Pos::new(-1, 0)));
        assert!(!f.get(Pos::new(0, -1)));
        assert!(!f.get(Pos::new(2, 0)));
        assert!(!f.get(Pos::new(0, 2)));
    }

    #[test]
    fn width_and_height_are_independent() {
        let f = Occupancy::new(5, 2);
        assert_eq!(f.index(Pos::new(4, 1)), Some(9));
        assert_eq!(f.index(Pos::new(1, 4)), None);
    }

    #[test]
    fn from_fn_and_positions_agree() {
        let f = Occupancy::from_fn(3, 3, |p| p.x == p.y);
        let diag: Vec<_> = f.positions().collect();
        assert_eq!(diag, vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
    }
}
