//! Fixed-capacity pool with round-robin slot selection.
//!
//! A pool fills by appending until it holds `capacity` resources. From then
//! on every write overwrites, and every read returns, the slot picked by an
//! indexer's next value modulo the current length.

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::error::{ConfigError, EmptyPoolError};
use crate::indexer::{Ascending, Indexer};

pub const DEFAULT_CAPACITY: usize = 3;

const DEFAULT_CAPACITY_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Which half of its life a pool is in. Derived from `len < capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Writes append.
    Growth,
    /// Writes overwrite the slot chosen by the indexer.
    Steady,
}

#[derive(Debug, Clone)]
pub struct RoundRobin<T> {
    slots: Vec<T>,
    capacity: NonZeroUsize,
    // Drives `write` when the caller brings no indexer of their own.
    write_indexer: Ascending,
}

impl<T> RoundRobin<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_NZ)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        RoundRobin {
            slots: Vec::with_capacity(capacity.get()),
            capacity,
            write_indexer: Ascending::new(),
        }
    }

    pub fn from_config(config: &PoolConfig) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(config.capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn phase(&self) -> Phase {
        if self.slots.len() < self.capacity.get() {
            Phase::Growth
        } else {
            Phase::Steady
        }
    }

    /// Maps a raw indexer value into `[0, len)`. `None` while empty.
    pub fn restrict(&self, raw: usize) -> Option<usize> {
        raw.checked_rem(self.slots.len())
    }

    /// Stores `resource`, picking the slot with the pool's own ascending
    /// indexer once the pool is full.
    pub fn write(&mut self, resource: T) {
        if self.phase() == Phase::Growth {
            self.append(resource);
            return;
        }
        let raw = self.write_indexer.next_index();
        self.overwrite(raw, resource);
    }

    /// Stores `resource`, picking the slot with `indexer` once the pool is
    /// full. The indexer is not consulted while the pool is still growing.
    pub fn write_with<I: Indexer + ?Sized>(&mut self, indexer: &mut I, resource: T) {
        if self.phase() == Phase::Growth {
            self.append(resource);
            return;
        }
        let raw = indexer.next_index();
        self.overwrite(raw, resource);
    }

    /// Returns the resource in the slot picked by `indexer`.
    ///
    /// Fails only when nothing has been written yet. The indexer is not
    /// advanced in that case.
    pub fn read<I: Indexer + ?Sized>(&self, indexer: &mut I) -> Result<&T, EmptyPoolError> {
        if self.slots.is_empty() {
            return Err(EmptyPoolError);
        }
        let slot = self.restrict(indexer.next_index()).ok_or(EmptyPoolError)?;
        Ok(&self.slots[slot])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    fn append(&mut self, resource: T) {
        let slot = self.slots.len();
        self.slots.push(resource);
        trace!(slot, len = self.slots.len(), "appended resource");
        if self.phase() == Phase::Steady {
            debug!(capacity = self.capacity.get(), "pool reached capacity");
        }
    }

    // Only called in the steady phase, so `restrict` always yields a slot.
    fn overwrite(&mut self, raw: usize, resource: T) {
        if let Some(slot) = self.restrict(raw) {
            self.slots[slot] = resource;
            trace!(raw, slot, "overwrote resource");
        }
    }
}

impl<T> Default for RoundRobin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RoundRobin<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
