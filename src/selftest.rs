//! Scenario checks that exercise an indexer or a pool end to end.
//!
//! Each check returns `true` on success. The `selftest` binary reports them
//! one line per scenario.

use colored::Colorize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, EmptyPoolError};
use crate::indexer::{AnyIndexer, Ascending, Descending, Indexer};
use crate::pool::RoundRobin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub passed: bool,
}

impl Outcome {
    fn new(name: &str, passed: bool) -> Self {
        debug!(scenario = name, passed, "scenario finished");
        Outcome {
            name: name.to_string(),
            passed,
        }
    }
}

/// One report line, e.g. `test for 'backward indexer' is OK`.
pub fn format_outcome(outcome: &Outcome) -> String {
    let status = if outcome.passed {
        "is OK".green()
    } else {
        "is FAILED".red().bold()
    };
    format!("test for '{}' {}", outcome.name, status)
}

pub fn format_summary(outcomes: &[Outcome]) -> String {
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    let plural = if outcomes.len() == 1 { "" } else { "s" };
    format!(
        "Summary: {} scenario{plural} run, {} failed",
        outcomes.len(),
        failed
    )
}

/// `steps` values starting at `since`, each `step` away from the last,
/// wrapping at the ends of `usize`.
pub fn make_range(since: usize, step: isize, steps: usize) -> Vec<usize> {
    let mut value = since;
    let mut range = Vec::with_capacity(steps);
    for _ in 0..steps {
        range.push(value);
        value = value.wrapping_add_signed(step);
    }
    range
}

/// Every value in `expected` must come out of `indexer`, in order.
pub fn check_indexer<I: Indexer + ?Sized>(indexer: &mut I, expected: &[usize]) -> bool {
    expected.iter().all(|&value| indexer.next_index() == value)
}

pub fn check_empty<T, I: Indexer + ?Sized>(pool: &RoundRobin<T>, indexer: &mut I) -> bool {
    matches!(pool.read(indexer), Err(EmptyPoolError))
}

/// Verifies the pool's capacity, performs `writes` with the pool's own
/// indexer, then expects `reads` from successive reads through `indexer`.
pub fn check_write_read<T, I>(
    pool: &mut RoundRobin<T>,
    capacity: usize,
    indexer: &mut I,
    writes: &[T],
    reads: &[T],
) -> bool
where
    T: Clone + PartialEq,
    I: Indexer + ?Sized,
{
    if pool.capacity() != capacity {
        return false;
    }

    for resource in writes {
        pool.write(resource.clone());
    }

    reads
        .iter()
        .all(|expected| matches!(pool.read(indexer), Ok(actual) if actual == expected))
}

/// Runs the standard scenarios against a pool and read indexer built from
/// `config`.
///
/// The write/read scenario fills the pool with `0..=capacity`, so the last
/// write lands on slot 0, then reads `2 * capacity + 1` times. The expected
/// reads come from a plain model of the pool walked by a copy of the
/// configured indexer.
pub fn run_default_suite(config: &Config) -> Result<Vec<Outcome>, ConfigError> {
    config.validate()?;

    let mut outcomes = Vec::with_capacity(4);

    outcomes.push(Outcome::new(
        "forward  indexer",
        check_indexer(&mut Ascending::new(), &make_range(usize::MIN, 1, 25)),
    ));

    outcomes.push(Outcome::new(
        "backward indexer",
        check_indexer(&mut Descending::new(), &make_range(usize::MAX, -1, 25)),
    ));

    let empty: RoundRobin<usize> = RoundRobin::from_config(&config.pool)?;
    outcomes.push(Outcome::new(
        "getting from empty",
        check_empty(&empty, &mut AnyIndexer::from_config(&config.indexer)),
    ));

    let capacity = config.pool.capacity;
    let writes: Vec<usize> = (0..=capacity).collect();
    let reads = expected_reads(
        capacity,
        AnyIndexer::from_config(&config.indexer),
        capacity.saturating_mul(2).saturating_add(1),
    );
    let mut pool: RoundRobin<usize> = RoundRobin::from_config(&config.pool)?;
    outcomes.push(Outcome::new(
        "setting to empty then getting from",
        check_write_read(
            &mut pool,
            capacity,
            &mut AnyIndexer::from_config(&config.indexer),
            &writes,
            &reads,
        ),
    ));

    Ok(outcomes)
}

// Slot 0 holds `capacity` after the overwrite, every other slot its index.
fn expected_reads(capacity: usize, indexer: AnyIndexer, count: usize) -> Vec<usize> {
    let mut model: Vec<usize> = (0..capacity).collect();
    if let Some(first) = model.first_mut() {
        *first = capacity;
    }
    indexer
        .take(count)
        .map(|raw| model[raw % capacity])
        .collect()
}
