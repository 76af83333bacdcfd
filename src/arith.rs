//! Integer helpers behind the Shor-flavoured widgets.

#[cfg(test)]
#[path = "arith_test.rs"]
mod arith_test;

/// Greatest common divisor (Euclid). `gcd(0, 0)` is 0.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `base^exp mod modulus` by square-and-multiply. A modulus of 0 or 1 yields 0.
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut result: u128 = 1;
    let mut b = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    // result < modulus, so it fits back into u64.
    u64::try_from(result).unwrap_or(0)
}

/// Outcome of a classical trial-division search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialDivision {
    /// Smallest non-trivial factor, or `None` when `n` is prime (or < 4).
    pub factor: Option<u64>,
    /// Candidate divisors tested.
    pub steps: u64,
}

/// Search for the smallest factor of `n` by testing 2, 3, 4, ... up to √n.
#[must_use]
pub fn trial_division(n: u64) -> TrialDivision {
    let mut steps = 0;
    let mut d = 2u64;
    while d.checked_mul(d).is_some_and(|sq| sq <= n) {
        steps += 1;
        if n % d == 0 {
            return TrialDivision { factor: Some(d), steps };
        }
        d += 1;
    }
    TrialDivision { factor: None, steps }
}

/// Classical post-processing of Shor's algorithm: given base `a`, its period
/// `r` modulo `n`, return the factors `gcd(a^(r/2) ± 1, n)` when both are
/// non-trivial.
///
/// Returns `None` for odd `r`, for `a^(r/2) ≡ −1 (mod n)`, or whenever the
/// gcds only recover 1 or `n`.
#[must_use]
pub fn shor_factors(a: u64, r: u64, n: u64) -> Option<(u64, u64)> {
    if n < 3 || r == 0 || r % 2 == 1 {
        return None;
    }
    let half = mod_pow(a, r / 2, n);
    if half == n - 1 || half == 0 {
        return None;
    }
    let p = gcd(half.checked_sub(1)?, n);
    let q = gcd(half + 1, n);
    let trivial = |f: u64| f == 1 || f == n;
    if trivial(p) || trivial(q) {
        return None;
    }
    Some((p.min(q), p.max(q)))
}
