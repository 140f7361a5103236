//! Integer arithmetic helpers.

/// Add two numbers and return the sum.
///
/// Overflow wraps around at `i64` width.
#[must_use]
pub const fn sum(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Whether `n` is divisible by two. Works for negative numbers and zero.
#[must_use]
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}
