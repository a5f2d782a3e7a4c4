use crate::partition::accumulate;
use log::info;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialOutcome {
    pub total: u64,
    pub elapsed: Duration,
}

/// One pass over `[1, max_number]` on the calling thread.
pub fn run_sequential(max_number: u64) -> SequentialOutcome {
    info!("sequential run over [1, {}]", max_number);

    let start = Instant::now();
    let total = accumulate(1..=max_number);
    let elapsed = start.elapsed();

    info!(
        "sequential run finished in {:.3}s, total {}",
        elapsed.as_secs_f64(),
        total
    );
    SequentialOutcome { total, elapsed }
}
