//! Typed predicates over [`LayerTraits`].

use crate::layer::LayerTraits;

/// A conjunction of trait requirements.
///
/// Each field is either unconstrained (`None`) or requires the trait to
/// have the given value. An empty query matches every kind.
///
/// ```
/// use delve_core::{LayerKind, LayerRegistry, TraitQuery};
///
/// let reg = LayerRegistry::standard();
/// let immovable = TraitQuery::new().passable(false).pushable(false);
/// assert!(immovable.matches(reg.traits(LayerKind::Wall)));
/// assert!(!immovable.matches(reg.traits(LayerKind::Rubble)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TraitQuery {
    passable: Option<bool>,
    pushable: Option<bool>,
    contradictory: bool,
}

impl TraitQuery {
    /// A query with no requirements.
    pub const fn new() -> Self {
        Self {
            passable: None,
            pushable: None,
            contradictory: false,
        }
    }

    /// Require `passable == value`.
    pub const fn passable(mut self, value: bool) -> Self {
        self.passable = Some(value);
        self
    }

    /// Require `pushable == value`.
    pub const fn pushable(mut self, value: bool) -> Self {
        self.pushable = Some(value);
        self
    }

    /// Combine two queries with AND.
    ///
    /// If both constrain the same trait to different values the result
    /// can never match; that contradiction is kept rather than resolved.
    pub fn and(self, other: Self) -> Self {
        let (passable, c1) = merge(self.passable, other.passable);
        let (pushable, c2) = merge(self.pushable, other.pushable);
        Self {
            passable,
            pushable,
            contradictory: self.contradictory || other.contradictory || c1 || c2,
        }
    }

    /// Whether `traits` satisfies every requirement.
    pub fn matches(&self, traits: LayerTraits) -> bool {
        if self.contradictory {
            return false;
        }
        self.passable.is_none_or(|v| traits.passable == v)
            && self.pushable.is_none_or(|v| traits.pushable == v)
    }
}

/// Merge two requirements on one trait; the flag reports a conflict.
fn merge(a: Option<bool>, b: Option<bool>) -> (Option<bool>, bool) {
    match (a, b) {
        (Some(x), Some(y)) => (Some(x), x != y),
        (x, y) => (x.or(y), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCK: LayerTraits = LayerTraits {
        passable: false,
        pushable: false,
    };
    const OPEN: LayerTraits = LayerTraits {
        passable: true,
        pushable: false,
    };
    const CRATE: LayerTraits = LayerTraits {
        passable: false,
        pushable: true,
    };

    #[test]
    fn empty_query_matches_everything() {
        let q = TraitQuery::new();
        assert!(q.matches(ROCK));
        assert!(q.matches(OPEN));
        assert!(q.matches(CRATE));
    }

    #[test]
    fn single_requirement() {
        let q = TraitQuery::new().passable(false);
        assert!(q.matches(ROCK));
        assert!(!q.matches(OPEN));
        assert!(q.matches(CRATE));
    }

    #[test]
    fn conjunction() {
        let q = TraitQuery::new().passable(false).pushable(false);
        assert!(q.matches(ROCK));
        assert!(!q.matches(OPEN));
        assert!(!q.matches(CRATE));
    }

    #[test]
    fn and_combines_disjoint_requirements() {
        let q = TraitQuery::new()
            .passable(false)
            .and(TraitQuery::new().pushable(true));
        assert_eq!(q, TraitQuery::new().passable(false).pushable(true));
        assert!(q.matches(CRATE));
        assert!(!q.matches(ROCK));
    }

    #[test]
    fn and_with_contradiction_matches_nothing() {
        let q = TraitQuery::new()
            .passable(true)
            .and(TraitQuery::new().passable(false));
        assert!(!q.matches(ROCK));
        assert!(!q.matches(OPEN));
        assert!(!q.matches(CRATE));
    }
}
