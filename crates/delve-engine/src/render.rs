//! Composing frames and the sink they are drawn to.

use std::io;

use delve_core::Pos;
use delve_grid::LayerGrid;

/// Glyph drawn over the actor's tile.
pub const ACTOR_GLYPH: char = '@';

/// Where frames go. One `draw_row` per map row, then `flush_frame`.
pub trait RenderSink {
    /// Draw row `row` of the frame.
    fn draw_row(&mut self, row: u32, text: &str) -> io::Result<()>;

    /// Finish the frame.
    fn flush_frame(&mut self) -> io::Result<()>;
}

/// Compose each map row as a string of one glyph per column.
///
/// Kinds are painted in layer-table order over a blank background, so
/// the last kind present on a tile wins. The actor, if given, is drawn
/// last.
pub fn compose_rows(grid: &LayerGrid, actor: Option<Pos>) -> Vec<String> {
    let (width, height) = (grid.width() as usize, grid.height() as usize);
    let mut cells = vec![' '; width * height];
    for def in grid.registry().iter() {
        for p in grid.layer(def.kind).positions() {
            cells[(p.y as usize) * width + p.x as usize] = def.glyph;
        }
    }
    if let Some(p) = actor.filter(|&p| grid.in_bounds(p)) {
        cells[(p.y as usize) * width + p.x as usize] = ACTOR_GLYPH;
    }
    cells
        .chunks(width.max(1))
        .take(height)
        .map(|row| row.iter().collect())
        .collect()
}

/// Draw `rows` to `sink` and flush.
pub fn draw_frame<S: RenderSink + ?Sized>(sink: &mut S, rows: &[String]) -> io::Result<()> {
    for (y, row) in rows.iter().enumerate() {
        sink.draw_row(y as u32, row)?;
    }
    sink.flush_frame()
}

/// A sink that keeps the last flushed frame in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    pending: Vec<String>,
    frame: Vec<String>,
    frames: usize,
}

impl FrameBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the most recently flushed frame.
    pub fn frame(&self) -> &[String] {
        &self.frame
    }

    /// Number of frames flushed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderSink for FrameBuffer {
    fn draw_row(&mut self, row: u32, text: &str) -> io::Result<()> {
        let row = row as usize;
        if self.pending.len() <= row {
            self.pending.resize(row + 1, String::new());
        }
        self.pending[row] = text.to_string();
        Ok(())
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        self.frame = std::mem::take(&mut self.pending);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_test_utils::ascii_grid;

    #[test]
    fn glyphs_follow_layer_table() {
        let parsed = ascii_grid(&["#.0 ", "#@##"]);
        let rows = compose_rows(&parsed.grid, parsed.actor);
        assert_eq!(rows, ["#·0 ", "#@##"]);
    }

    #[test]
    fn registry_glyphs_and_draw_order_are_honoured() {
        use delve_core::{LayerDef, LayerKind, LayerRegistry};

        // Draw rubble first so floor paints over it.
        let def = |kind: LayerKind, glyph| LayerDef {
            glyph,
            ..kind.default_def()
        };
        let registry = LayerRegistry::new([
            def(LayerKind::Rubble, '*'),
            def(LayerKind::Stone, ' '),
            def(LayerKind::Wall, 'W'),
            def(LayerKind::Floor, '_'),
        ])
        .unwrap();
        let mut grid = LayerGrid::new(registry, 3, 1).unwrap();
        grid.set(LayerKind::Wall, Pos::new(0, 0), true);
        grid.set(LayerKind::Floor, Pos::new(1, 0), true);
        grid.set(LayerKind::Rubble, Pos::new(1, 0), true);
        grid.set(LayerKind::Rubble, Pos::new(2, 0), true);
        assert_eq!(compose_rows(&grid, None), ["W_*"]);
    }

    #[test]
    fn tiles_with_nothing_are_blank() {
        let grid = LayerGrid::new(delve_core::LayerRegistry::standard(), 3, 2).unwrap();
        assert_eq!(compose_rows(&grid, None), ["   ", "   "]);
    }

    #[test]
    fn width_and_height_are_not_swapped() {
        let parsed = ascii_grid(&["#....", "....#"]);
        let rows = compose_rows(&parsed.grid, None);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.chars().count() == 5));
        assert_eq!(rows[1].chars().last(), Some('#'));
    }

    #[test]
    fn frame_buffer_keeps_last_flushed_frame() {
        let mut fb = FrameBuffer::new();
        draw_frame(&mut fb, &["ab".to_string(), "cd".to_string()]).unwrap();
        fb.draw_row(0, "xx").unwrap();
        assert_eq!(fb.frame(), ["ab", "cd"]);
        assert_eq!(fb.frames(), 1);
        fb.flush_frame().unwrap();
        assert_eq!(fb.frame(), ["xx"]);
        assert_eq!(fb.frames(), 2);
    }
}
