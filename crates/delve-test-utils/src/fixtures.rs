//! Canned push-chain layouts.

use crate::{ascii_grid, AsciiGrid};

/// What ends a [`chain_row`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainEnd {
    /// A wall right after the chain.
    Wall,
    /// Open floor running out to the given distance from the chain's
    /// first object.
    Open(usize),
    /// The chain runs to the edge of the map.
    Edge,
}

/// A one-row map: actor at x=0, then `k` rubble tiles, then `end`.
///
/// # Panics
///
/// If `end` is `Open(d)` with `d <= k`.
pub fn chain_row(k: usize, end: ChainEnd) -> AsciiGrid {
    let mut row = String::from("@");
    row.push_str(&"0".repeat(k));
    match end {
        ChainEnd::Wall => row.push('#'),
        ChainEnd::Open(d) => {
            assert!(d > k, "resting tile at {d} is inside a chain of {k}");
            row.push_str(&".".repeat(d - k + 1));
        }
        ChainEnd::Edge => {}
    }
    ascii_grid(&[row.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_ascii;

    #[test]
    fn layouts() {
        let w = chain_row(2, ChainEnd::Wall);
        assert_eq!(to_ascii(&w.grid, w.actor), ["@00#"]);
        let o = chain_row(2, ChainEnd::Open(3));
        assert_eq!(to_ascii(&o.grid, o.actor), ["@00.."]);
        let e = chain_row(3, ChainEnd::Edge);
        assert_eq!(to_ascii(&e.grid, e.actor), ["@000"]);
    }
}
