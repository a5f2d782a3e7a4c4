//! Odd/even partitioning of the range `[1, max]`.

use crate::triangular::triangular_sum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    fn first(self) -> u64 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 2,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
        }
    }
}

/// Indices of the given parity in `[1, max]`, ascending. Empty when `max` is 0.
pub fn indices(parity: Parity, max: u64) -> impl Iterator<Item = u64> {
    (parity.first()..=max).step_by(2)
}

/// Sum of the triangular sums of every index yielded.
pub fn accumulate<I>(indices: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut total = 0u64;
    for i in indices {
        total += triangular_sum(i);
    }
    total
}

pub fn partial_sum(parity: Parity, max: u64) -> u64 {
    accumulate(indices(parity, max))
}
