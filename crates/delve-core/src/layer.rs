//! The layer table: material kinds, their static traits, and glyphs.
//!
//! Every tile of a Delve world is described by which [`LayerKind`]s
//! occupy it. Kinds form a closed set; their behaviour comes from a
//! [`LayerRegistry`], a fixed table built at compile time and handed to
//! the grid at construction. The registry's row order is also the draw
//! order used when composing a frame (later rows paint over earlier ones).

use smallvec::SmallVec;
use std::fmt;

/// A category of world material.
///
/// Adding a kind means adding a variant here, a row in
/// [`LayerKind::default_def`], and extending [`LayerKind::ALL`]; the
/// exhaustive matches below make the compiler point at every site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    /// Solid rock outside every room. Impassable, immovable.
    Stone,
    /// Room perimeter where rooms do not overlap. Impassable, immovable.
    Wall,
    /// Open room interior. Passable.
    Floor,
    /// Loose debris lying on floor. Impassable but pushable.
    Rubble,
}

impl LayerKind {
    /// Number of layer kinds.
    pub const COUNT: usize = 4;

    /// All kinds in default draw order.
    pub const ALL: [LayerKind; Self::COUNT] = [
        LayerKind::Stone,
        LayerKind::Wall,
        LayerKind::Floor,
        LayerKind::Rubble,
    ];

    /// Dense index of this kind, `0..COUNT`.
    pub const fn index(self) -> usize {
        match self {
            LayerKind::Stone => 0,
            LayerKind::Wall => 1,
            LayerKind::Floor => 2,
            LayerKind::Rubble => 3,
        }
    }

    /// Lower-case name used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            LayerKind::Stone => "stone",
            LayerKind::Wall => "wall",
            LayerKind::Floor => "floor",
            LayerKind::Rubble => "rubble",
        }
    }

    /// The standard table row for this kind.
    pub const fn default_def(self) -> LayerDef {
        let (passable, pushable, glyph) = match self {
            LayerKind::Stone => (false, false, ' '),
            LayerKind::Wall => (false, false, '#'),
            LayerKind::Floor => (true, false, '·'),
            LayerKind::Rubble => (false, true, '0'),
        };
        LayerDef {
            kind: self,
            traits: LayerTraits { passable, pushable },
            glyph,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static behaviour of a layer kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerTraits {
    /// Whether the presence of this kind leaves the tile enterable.
    pub passable: bool,
    /// Whether objects of this kind can be displaced by a push.
    pub pushable: bool,
}

/// One row of the layer table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerDef {
    /// The kind this row describes.
    pub kind: LayerKind,
    /// Passable/pushable traits.
    pub traits: LayerTraits,
    /// Glyph painted where this kind is present.
    pub glyph: char,
}

/// The kinds occupying a single tile, in registry order.
pub type LayerSet = SmallVec<[LayerKind; LayerKind::COUNT]>;

/// A fixed, finite table of [`LayerDef`]s, one per [`LayerKind`].
///
/// Lookups by kind are O(1); iteration follows row order, which is the
/// draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerRegistry {
    rows: [LayerDef; LayerKind::COUNT],
    by_kind: [usize; LayerKind::COUNT],
}

impl LayerRegistry {
    /// The standard table: stone, wall, floor, rubble.
    pub const fn standard() -> Self {
        Self {
            rows: [
                LayerKind::Stone.default_def(),
                LayerKind::Wall.default_def(),
                LayerKind::Floor.default_def(),
                LayerKind::Rubble.default_def(),
            ],
            by_kind: [0, 1, 2, 3],
        }
    }

    /// Build a table from explicit rows.
    ///
    /// Row order becomes draw order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any kind appears more than once (and therefore
    /// another kind is missing).
    pub fn new(rows: [LayerDef; LayerKind::COUNT]) -> Result<Self, String> {
        let mut by_kind = [usize::MAX; LayerKind::COUNT];
        for (row, def) in rows.iter().enumerate() {
            let slot = &mut by_kind[def.kind.index()];
            if *slot != usize::MAX {
                return Err(format!("layer kind '{}' listed twice", def.kind));
            }
            *slot = row;
        }
        Ok(Self { rows, by_kind })
    }

    /// The row for `kind`.
    pub fn get(&self, kind: LayerKind) -> &LayerDef {
        &self.rows[self.by_kind[kind.index()]]
    }

    /// Traits for `kind`.
    pub fn traits(&self, kind: LayerKind) -> LayerTraits {
        self.get(kind).traits
    }

    /// Glyph for `kind`.
    pub fn glyph(&self, kind: LayerKind) -> char {
        self.get(kind).glyph
    }

    /// Rows in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerDef> + '_ {
        self.rows.iter()
    }

    /// Kinds in draw order.
    pub fn kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.rows.iter().map(|def| def.kind)
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
