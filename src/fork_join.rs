//! Two-task fan-out and join.
//!
//! Both units run concurrently with the calling thread, which blocks until
//! both have returned. Each unit hands back its own result, so nothing is
//! shared between them while they run.

use crate::config::Config;
use crate::error::SumsError;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Deserialize;
use std::fmt;
use std::thread;

const LEFT_WORKER: &str = "sums-left";
const RIGHT_WORKER: &str = "sums-right";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Dedicated rayon pool, units dispatched with `ThreadPool::join`.
    #[default]
    Rayon,
    /// One named OS thread per unit inside `std::thread::scope`.
    ScopedThreads,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Rayon => write!(f, "rayon"),
            Backend::ScopedThreads => write!(f, "scoped-threads"),
        }
    }
}

pub enum ForkJoin {
    Rayon(ThreadPool),
    ScopedThreads,
}

impl ForkJoin {
    pub fn new(backend: Backend, threads: usize) -> Result<Self, SumsError> {
        match backend {
            Backend::Rayon => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("sums-pool-{}", index))
                    .build()?;
                debug!("built rayon pool with {} threads", pool.current_num_threads());
                Ok(ForkJoin::Rayon(pool))
            }
            Backend::ScopedThreads => {
                debug!("using scoped OS threads");
                Ok(ForkJoin::ScopedThreads)
            }
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SumsError> {
        Self::new(config.backend, config.threads)
    }

    pub fn backend(&self) -> Backend {
        match self {
            ForkJoin::Rayon(_) => Backend::Rayon,
            ForkJoin::ScopedThreads => Backend::ScopedThreads,
        }
    }

    /// Runs `left` and `right` concurrently and returns both results once
    /// both have finished.
    ///
    /// With the rayon backend a panic in either unit resumes on the caller,
    /// the same as `rayon::join`. With scoped threads it is reported as
    /// [`SumsError::WorkerPanicked`].
    pub fn join<A, B, RA, RB>(&self, left: A, right: B) -> Result<(RA, RB), SumsError>
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        match self {
            ForkJoin::Rayon(pool) => Ok(pool.join(left, right)),
            ForkJoin::ScopedThreads => join_scoped(left, right),
        }
    }
}

impl fmt::Debug for ForkJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkJoin::Rayon(pool) => f
                .debug_struct("ForkJoin::Rayon")
                .field("threads", &pool.current_num_threads())
                .finish(),
            ForkJoin::ScopedThreads => f.write_str("ForkJoin::ScopedThreads"),
        }
    }
}

fn join_scoped<A, B, RA, RB>(left: A, right: B) -> Result<(RA, RB), SumsError>
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    // Any handle still unjoined on an early return is joined when the scope ends.
    thread::scope(|s| -> Result<(RA, RB), SumsError> {
        let left_handle = thread::Builder::new()
            .name(LEFT_WORKER.to_string())
            .spawn_scoped(s, left)
            .map_err(|source| SumsError::Spawn {
                name: LEFT_WORKER.to_string(),
                source,
            })?;
        let right_handle = thread::Builder::new()
            .name(RIGHT_WORKER.to_string())
            .spawn_scoped(s, right)
            .map_err(|source| SumsError::Spawn {
                name: RIGHT_WORKER.to_string(),
                source,
            })?;

        let left_result = left_handle.join().map_err(|_| SumsError::WorkerPanicked {
            name: LEFT_WORKER.to_string(),
        })?;
        let right_result = right_handle.join().map_err(|_| SumsError::WorkerPanicked {
            name: RIGHT_WORKER.to_string(),
        })?;

        Ok((left_result, right_result))
    })
}
