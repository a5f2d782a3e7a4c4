//! Parallel vs. single-threaded cumulative triangular sums.
//!
//! The range `[1, max_number]` is split into odd and even indices, each half is
//! summed on its own worker, and the result is compared against one sequential
//! pass over the same range. Both paths are timed.
//!
//! Run with: cargo run --release --bin parallel_sums [CONFIG.toml]

pub mod config;
pub mod error;
pub mod fork_join;
pub mod parallel;
pub mod partition;
pub mod report;
pub mod sequential;
pub mod triangular;

pub use config::Config;
pub use error::SumsError;
pub use fork_join::{Backend, ForkJoin};
pub use parallel::{run_parallel, ParallelOutcome};
pub use report::Language;
pub use sequential::{run_sequential, SequentialOutcome};
