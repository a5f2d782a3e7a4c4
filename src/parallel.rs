// =============================================================================
// Parallel driver: odd and even indices accumulated on two concurrent workers
// =============================================================================

use crate::error::SumsError;
use crate::fork_join::ForkJoin;
use crate::partition::{partial_sum, Parity};
use log::{debug, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelOutcome {
    pub odd_sum: u64,
    pub even_sum: u64,
    pub elapsed: Duration,
}

impl ParallelOutcome {
    pub fn total(&self) -> u64 {
        self.odd_sum + self.even_sum
    }
}

fn unit(parity: Parity, max_number: u64) -> u64 {
    let sum = partial_sum(parity, max_number);
    debug!("{} indices up to {} done: {}", parity, max_number, sum);
    sum
}

/// Sums the triangular numbers of `[1, max_number]` with the odd and even
/// halves running concurrently on `fork_join`.
///
/// Neither half is read until both have finished. The timer covers dispatch,
/// both halves and the join, but not building the backend.
pub fn run_parallel(max_number: u64, fork_join: &ForkJoin) -> Result<ParallelOutcome, SumsError> {
    info!(
        "parallel run over [1, {}] on {}",
        max_number,
        fork_join.backend()
    );

    let start = Instant::now();
    let (odd_sum, even_sum) = fork_join.join(
        || unit(Parity::Odd, max_number),
        || unit(Parity::Even, max_number),
    )?;
    let elapsed = start.elapsed();

    let outcome = ParallelOutcome {
        odd_sum,
        even_sum,
        elapsed,
    };
    info!(
        "parallel run finished in {:.3}s, total {}",
        elapsed.as_secs_f64(),
        outcome.total()
    );
    Ok(outcome)
}
