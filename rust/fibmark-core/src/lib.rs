//! Fibonacci workload shared by the benchmark entry points.
//!
//! The whole point of this crate is [`fib`]: a deliberately naive,
//! unmemoized recursion with exponential cost (`O(phi^n)`), used to stress
//! raw call and integer-arithmetic throughput.  Everything else here is the
//! boundary around it — a guarded entry point for untrusted input and an
//! iterative reference implementation for tests and the overflow check.

use thiserror::Error;

/// The fixed input every benchmark entry point uses.
pub const BENCH_N: u32 = 35;

/// `fib(BENCH_N)` — the regression anchor for the whole repository.
pub const BENCH_EXPECTED: u64 = 9_227_465;

/// Largest `n` for which `fib(n)` fits in a `u64`.
pub const MAX_N: u32 = 93;

/// Errors from the checked boundary API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("invalid argument: n must be non-negative, got {0}")]
    InvalidArgument(i64),
    #[error("fib({0}) overflows u64 (max supported n is {MAX_N})")]
    Overflow(i64),
}

/// The nth Fibonacci number by naive recursion.
///
/// `fib(0) = 0`, `fib(1) = 1`, `fib(k) = fib(k-1) + fib(k-2)`.  Exponential
/// time and `O(n)` recursion depth, on purpose.  Callers are expected to
/// stay within [`MAX_N`]; the benchmark itself only ever passes [`BENCH_N`].
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        u64::from(n)
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Iterative reference implementation.
///
/// Returns `None` when `fib(n)` would overflow a `u64` (`n > MAX_N`).  Used
/// by tests as the trusted oracle and by [`fib_checked`] as the range guard.
pub fn fib_iterative(n: u32) -> Option<u64> {
    let mut pair: (u64, u64) = (0, 1);
    for _ in 0..n {
        pair = (pair.1, pair.0.checked_add(pair.1)?);
    }
    Some(pair.0)
}

/// Guarded entry point for caller-supplied `n`.
///
/// Negative `n` is a precondition violation, reported as
/// [`FibError::InvalidArgument`].  In-range values go through the same
/// naive recursion the benchmark measures.
pub fn fib_checked(n: i64) -> Result<u64, FibError> {
    if n < 0 {
        return Err(FibError::InvalidArgument(n));
    }
    let n = u32::try_from(n).map_err(|_| FibError::Overflow(n))?;
    if n > MAX_N {
        return Err(FibError::Overflow(i64::from(n)));
    }
    Ok(fib(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
        assert_eq!(fib(2), 1);
        assert_eq!(fib(10), 55);
    }

    #[test]
    fn benchmark_anchor() {
        assert_eq!(fib(BENCH_N), BENCH_EXPECTED);
    }

    #[test]
    fn recurrence_holds() {
        for k in 2..=25u32 {
            assert_eq!(fib(k), fib(k - 1) + fib(k - 2), "recurrence at k={k}");
        }
    }

    #[test]
    fn matches_iterative_reference() {
        for k in 0..=30u32 {
            assert_eq!(Some(fib(k)), fib_iterative(k), "mismatch at k={k}");
        }
    }

    #[test]
    fn iterative_range_limits() {
        assert_eq!(fib_iterative(MAX_N), Some(12_200_160_415_121_876_738));
        assert_eq!(fib_iterative(MAX_N + 1), None);
    }

    #[test]
    fn checked_rejects_negative() {
        assert_eq!(fib_checked(-1), Err(FibError::InvalidArgument(-1)));
        assert_eq!(fib_checked(i64::MIN), Err(FibError::InvalidArgument(i64::MIN)));
    }

    #[test]
    fn checked_rejects_overflow() {
        assert_eq!(fib_checked(94), Err(FibError::Overflow(94)));
        assert_eq!(fib_checked(i64::MAX), Err(FibError::Overflow(i64::MAX)));
    }

    #[test]
    fn checked_in_range() {
        assert_eq!(fib_checked(0), Ok(0));
        assert_eq!(fib_checked(35), Ok(BENCH_EXPECTED));
    }

    #[test]
    fn error_display() {
        let err = FibError::InvalidArgument(-3);
        assert_eq!(err.to_string(), "invalid argument: n must be non-negative, got -3");
    }
}
