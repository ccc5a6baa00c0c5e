//! Test fixtures for Delve development.
//!
//! Grids are written as ASCII art, one string per row:
//!
//! | char | layers             |
//! |------|--------------------|
//! | ` `  | Stone              |
//! | `#`  | Wall               |
//! | `.`  | Floor              |
//! | `0`  | Floor + Rubble     |
//! | `@`  | Floor, actor start |
//!
//! [`to_ascii`] renders a grid back in the same legend so tests can
//! compare whole maps.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use delve_core::{LayerKind, LayerRegistry, Pos};
use delve_grid::LayerGrid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A grid parsed from ASCII rows, plus the `@` position if any.
pub struct AsciiGrid {
    pub grid: LayerGrid,
    pub actor: Option<Pos>,
}

/// Parse `rows` with the standard layer table.
///
/// # Panics
///
/// On ragged rows, an empty map, more than one `@` or an unknown char.
pub fn ascii_grid(rows: &[&str]) -> AsciiGrid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut grid = LayerGrid::new(LayerRegistry::standard(), width, height)
        .expect("ascii map must be non-empty");
    let mut actor = None;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count() as u32,
            width,
            "row {y} is {:?}, expected {width} chars",
            row
        );
        for (x, ch) in row.chars().enumerate() {
            let p = Pos::new(x as i32, y as i32);
            let kinds: &[LayerKind] = match ch {
                ' ' => &[LayerKind::Stone],
                '#' => &[LayerKind::Wall],
                '.' => &[LayerKind::Floor],
                '0' => &[LayerKind::Floor, LayerKind::Rubble],
                '@' => {
                    assert!(actor.is_none(), "more than one '@' in map");
                    actor = Some(p);
                    &[LayerKind::Floor]
                }
                other => panic!("unknown map char {other:?} at {p}"),
            };
            for &kind in kinds {
                grid.set(kind, p, true);
            }
        }
    }
    AsciiGrid { grid, actor }
}

/// Render `grid` in the fixture legend, with `@` at `actor`.
///
/// Tiles holding nothing render as `?`.
pub fn to_ascii(grid: &LayerGrid, actor: Option<Pos>) -> Vec<String> {
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| {
                    let p = Pos::new(x, y);
                    if actor == Some(p) {
                        '@'
                    } else if grid.contains(LayerKind::Rubble, p) {
                        '0'
                    } else if grid.contains(LayerKind::Wall, p) {
                        '#'
                    } else if grid.contains(LayerKind::Floor, p) {
                        '.'
                    } else if grid.contains(LayerKind::Stone, p) {
                        ' '
                    } else {
                        '?'
                    }
                })
                .collect()
        })
        .collect()
}

/// A deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
