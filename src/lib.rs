//! # Round-Robin Resource Pool
//!
//! A fixed-capacity pool that fills once and is then overwritten and read
//! back cyclically. Slot selection is driven by an [`Indexer`], a stateful
//! counter that runs either up ([`Ascending`]) or down ([`Descending`]) and
//! wraps at the ends of `usize`.
//!
//! ```
//! use roundrobin::{Ascending, RoundRobin};
//!
//! let mut pool = RoundRobin::new();
//! for resource in [0, 1, 2, 3] {
//!     pool.write(resource);
//! }
//! assert_eq!(pool.as_slice(), &[3, 1, 2]);
//!
//! let mut indexer = Ascending::new();
//! assert_eq!(pool.read(&mut indexer), Ok(&3));
//! assert_eq!(pool.read(&mut indexer), Ok(&1));
//! ```
//!
//! ## Modules
//!
//! - `indexer`: index generators and the [`Indexer`] trait.
//! - `pool`: the [`RoundRobin`] pool itself.
//! - `config`: TOML construction settings.
//! - `selftest`: scenario checks behind the `selftest` binary.
//!
//! Nothing here is synchronized. Share a pool across threads only behind
//! your own lock.
pub mod config;
pub mod error;
pub mod indexer;
pub mod pool;
pub mod selftest;

pub use config::{Config, IndexerConfig, PoolConfig};
pub use error::{ConfigError, EmptyPoolError};
pub use indexer::{AnyIndexer, Ascending, Descending, Direction, Indexer};
pub use pool::{Phase, RoundRobin, DEFAULT_CAPACITY};
