//! Small numeric helpers that ship alongside logtally
//!
//! - [`NumberScanner`] pulls whitespace-delimited numbers out of free text and
//!   [`sum_profit`] adds them up.
//! - [`CachingFibonacci`] computes Fibonacci numbers with a per-instance cache.

mod extract;
mod fibonacci;

pub use extract::{NumberScanner, Numbers, generator_numbers, sum_profit};
pub use fibonacci::{CachingFibonacci, FibonacciError, MAX_N, caching_fibonacci};
