use std::collections::HashMap;

use parking_lot::RwLock;

/// Largest `n` whose Fibonacci number fits in a `u128`
pub const MAX_N: i64 = 186;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("fibonacci({0}) does not fit in 128 bits")]
    Overflow(i64),
}

/// Fibonacci numbers with a private cache
///
/// Each instance owns its own cache; two instances never share results.
#[derive(Debug, Default)]
pub struct CachingFibonacci {
    cache: RwLock<HashMap<i64, u128>>,
}

impl CachingFibonacci {
    pub fn new() -> Self {
        Self::default()
    }

    /// `fib(n)`, with `fib(n) = 0` for every `n <= 0`
    pub fn get(&self, n: i64) -> Result<u128, FibonacciError> {
        if n <= 0 {
            return Ok(0);
        }
        if n == 1 {
            return Ok(1);
        }
        if n > MAX_N {
            return Err(FibonacciError::Overflow(n));
        }

        let cached = self.cache.read().get(&n).copied();
        if let Some(value) = cached {
            return Ok(value);
        }

        let value = self.get(n - 1)? + self.get(n - 2)?;
        self.cache.write().insert(n, value);
        Ok(value)
    }

    /// Number of memoized results
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}

/// A Fibonacci function that owns a fresh cache
pub fn caching_fibonacci() -> impl Fn(i64) -> Result<u128, FibonacciError> {
    let fib = CachingFibonacci::new();
    move |n| fib.get(n)
}
