//! Cyclic index generators.
//!
//! An indexer hands out an unbounded stream of `usize` values, one per call,
//! wrapping at the ends of the representable range. The pool reduces each
//! value modulo its length, so the raw stream never has to know about slots.

use serde::{Deserialize, Serialize};

use crate::config::IndexerConfig;

/// Produces the next raw index on every call.
///
/// Calling `next_index` advances internal state. Two callers sharing one
/// indexer observe one interleaved sequence, not two independent ones.
pub trait Indexer {
    fn next_index(&mut self) -> usize;
}

impl<I: Indexer + ?Sized> Indexer for &mut I {
    fn next_index(&mut self) -> usize {
        (**self).next_index()
    }
}

impl<I: Indexer + ?Sized> Indexer for Box<I> {
    fn next_index(&mut self) -> usize {
        (**self).next_index()
    }
}

// =============================================================================
// Ascending
// =============================================================================

/// Counts up from `since`, wrapping from `usize::MAX` to `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ascending {
    current: usize,
}

impl Ascending {
    pub fn new() -> Self {
        Self::since(usize::MIN)
    }

    pub fn since(since: usize) -> Self {
        Ascending { current: since }
    }

    /// The value the next call will return.
    pub fn peek(&self) -> usize {
        self.current
    }
}

impl Default for Ascending {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer for Ascending {
    fn next_index(&mut self) -> usize {
        let index = self.current;
        self.current = self.current.wrapping_add(1);
        index
    }
}

impl Iterator for Ascending {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_index())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// =============================================================================
// Descending
// =============================================================================

/// Counts down from `since`, wrapping from `0` to `usize::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descending {
    current: usize,
}

impl Descending {
    pub fn new() -> Self {
        Self::since(usize::MAX)
    }

    pub fn since(since: usize) -> Self {
        Descending { current: since }
    }

    /// The value the next call will return.
    pub fn peek(&self) -> usize {
        self.current
    }
}

impl Default for Descending {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer for Descending {
    fn next_index(&mut self) -> usize {
        let index = self.current;
        self.current = self.current.wrapping_sub(1);
        index
    }
}

impl Iterator for Descending {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_index())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// =============================================================================
// Runtime-selected direction
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Either indexer, for when the direction is only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyIndexer {
    Ascending(Ascending),
    Descending(Descending),
}

impl AnyIndexer {
    /// Starts at the direction's default when `since` is `None`.
    pub fn new(direction: Direction, since: Option<usize>) -> Self {
        match (direction, since) {
            (Direction::Ascending, Some(s)) => AnyIndexer::Ascending(Ascending::since(s)),
            (Direction::Ascending, None) => AnyIndexer::Ascending(Ascending::new()),
            (Direction::Descending, Some(s)) => AnyIndexer::Descending(Descending::since(s)),
            (Direction::Descending, None) => AnyIndexer::Descending(Descending::new()),
        }
    }

    pub fn from_config(config: &IndexerConfig) -> Self {
        Self::new(config.direction, config.since)
    }

    pub fn direction(&self) -> Direction {
        match self {
            AnyIndexer::Ascending(_) => Direction::Ascending,
            AnyIndexer::Descending(_) => Direction::Descending,
        }
    }

    pub fn peek(&self) -> usize {
        match self {
            AnyIndexer::Ascending(inner) => inner.peek(),
            AnyIndexer::Descending(inner) => inner.peek(),
        }
    }
}

impl Indexer for AnyIndexer {
    fn next_index(&mut self) -> usize {
        match self {
            AnyIndexer::Ascending(inner) => inner.next_index(),
            AnyIndexer::Descending(inner) => inner.next_index(),
        }
    }
}

impl Iterator for AnyIndexer {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_index())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl From<Ascending> for AnyIndexer {
    fn from(inner: Ascending) -> Self {
        AnyIndexer::Ascending(inner)
    }
}

impl From<Descending> for AnyIndexer {
    fn from(inner: Descending) -> Self {
        AnyIndexer::Descending(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ascending_defaults_to_zero() {
        let values: Vec<usize> = Ascending::new().take(5).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn descending_defaults_to_max() {
        let values: Vec<usize> = Descending::new().take(3).collect();
        assert_eq!(values, vec![usize::MAX, usize::MAX - 1, usize::MAX - 2]);
    }

    #[test]
    fn ascending_wraps_past_max() {
        let mut indexer = Ascending::since(usize::MAX);
        assert_eq!(indexer.next_index(), usize::MAX);
        assert_eq!(indexer.next_index(), 0);
    }

    #[test]
    fn descending_wraps_past_zero() {
        let mut indexer = Descending::since(1);
        assert_eq!(indexer.next_index(), 1);
        assert_eq!(indexer.next_index(), 0);
        assert_eq!(indexer.next_index(), usize::MAX);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut indexer = Ascending::since(7);
        assert_eq!(indexer.peek(), 7);
        assert_eq!(indexer.peek(), 7);
        assert_eq!(indexer.next_index(), 7);
        assert_eq!(indexer.peek(), 8);
    }

    #[test]
    fn shared_indexer_interleaves() {
        fn draw(mut indexer: impl Indexer) -> usize {
            indexer.next_index()
        }

        let mut indexer = Ascending::new();
        assert_eq!(draw(&mut indexer), 0);
        assert_eq!(draw(&mut indexer), 1);
        assert_eq!(indexer.next_index(), 2);
    }

    #[test]
    fn any_indexer_dispatches_by_direction() {
        let mut up = AnyIndexer::new(Direction::Ascending, Some(10));
        let mut down = AnyIndexer::new(Direction::Descending, Some(10));
        assert_eq!(up.direction(), Direction::Ascending);
        assert_eq!(down.direction(), Direction::Descending);
        assert_eq!((up.next_index(), up.next_index()), (10, 11));
        assert_eq!((down.next_index(), down.next_index()), (10, 9));
    }

    #[test]
    fn any_indexer_defaults_follow_direction() {
        assert_eq!(AnyIndexer::new(Direction::Ascending, None).peek(), usize::MIN);
        assert_eq!(AnyIndexer::new(Direction::Descending, None).peek(), usize::MAX);
    }

    #[test]
    fn indexers_report_unbounded_size_hint() {
        let unbounded = (usize::MAX, None);
        assert_eq!(Ascending::new().size_hint(), unbounded);
        assert_eq!(Descending::new().size_hint(), unbounded);
        assert_eq!(AnyIndexer::new(Direction::Descending, None).size_hint(), unbounded);
        let taken: Vec<usize> = AnyIndexer::new(Direction::Ascending, Some(4)).take(3).collect();
        assert_eq!(taken, vec![4, 5, 6]);
    }

    #[test]
    fn boxed_trait_object_is_an_indexer() {
        let mut boxed: Box<dyn Indexer> = Box::new(Descending::since(2));
        assert_eq!(boxed.next_index(), 2);
        assert_eq!(boxed.next_index(), 1);
    }

    proptest! {
        #[test]
        fn ascending_follows_wrapping_progression(since in any::<usize>(), count in 0usize..64) {
            let mut indexer = Ascending::since(since);
            for k in 0..count {
                prop_assert_eq!(indexer.next_index(), since.wrapping_add(k));
            }
        }

        #[test]
        fn descending_follows_wrapping_progression(since in any::<usize>(), count in 0usize..64) {
            let mut indexer = Descending::since(since);
            for k in 0..count {
                prop_assert_eq!(indexer.next_index(), since.wrapping_sub(k));
            }
        }
    }
}
