//! Triangular numbers, computed the slow way.

use std::hint::black_box;

/// Sum of the integers `0..=n`, accumulated one step at a time.
///
/// This loop is the workload being timed. The counter passes through
/// `black_box` so the optimizer cannot collapse it into `n * (n + 1) / 2`.
pub fn triangular_sum(n: u64) -> u64 {
    let mut sum = 0u64;
    for i in 0..=n {
        sum += black_box(i);
    }
    sum
}

/// `n * (n + 1) / 2`, exact for every `u64` input.
pub fn triangular_closed_form(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

/// Sum of `triangular_sum(i)` for `i` in `1..=n`, i.e. `n * (n + 1) * (n + 2) / 6`.
///
/// Returns `None` if the intermediate product does not fit in a `u128`.
pub fn cumulative_closed_form(n: u64) -> Option<u128> {
    let n = n as u128;
    n.checked_mul(n + 1)
        .and_then(|product| product.checked_mul(n + 2))
        .map(|product| product / 6)
}
