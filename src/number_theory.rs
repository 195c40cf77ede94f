//! Number-theoretic helpers on unsigned integers.
//!
//! GCD/LCM, trial-division primality, Fibonacci sequence generation,
//! and factorial/combinatorial counting.
//!
//! # Overflow Policy
//!
//! All arithmetic that can exceed `u64` uses checked operations and
//! returns `None` on overflow — results are exact or absent, never
//! silently wrapped or saturated. Recursions in the textbook
//! definitions (gcd, factorial) are written iteratively so stack depth
//! is never input-dependent.

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(a, 0) = a` and `gcd(0, 0) = 0` by convention.
///
/// # Complexity
/// Time: O(log min(a, b))
///
/// # Examples
/// ```
/// use numkit::number_theory::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(17, 5), 1);
/// assert_eq!(gcd(42, 0), 42);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple: `lcm(a, b) = a·b / gcd(a, b)`.
///
/// Divides before multiplying so the result overflows only when the
/// LCM itself does not fit in `u64`.
///
/// # Returns
/// - `None` if both inputs are 0 (`gcd(0, 0) = 0` would divide by zero)
///   or if the LCM overflows `u64`.
/// - `Some(0)` if exactly one input is 0.
///
/// # Examples
/// ```
/// use numkit::number_theory::lcm;
/// assert_eq!(lcm(4, 6), Some(12));
/// assert_eq!(lcm(0, 5), Some(0));
/// assert_eq!(lcm(0, 0), None);
/// ```
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 && b == 0 {
        return None;
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Primality test by trial division.
///
/// Excludes values below 2 and even values above 2, then divides by odd
/// candidates up to √n.
///
/// # Complexity
/// Time: O(√n)
///
/// # Examples
/// ```
/// use numkit::number_theory::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut candidate = 3;
    // `candidate <= n / candidate` avoids overflowing candidate²
    while candidate <= n / candidate {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// First `n` Fibonacci numbers, starting 0, 1.
///
/// A pure function over `n`, not a stateful iterator: each call
/// produces the full prefix of the sequence from the beginning.
///
/// # Returns
/// - `Some(vec![])` for `n = 0`, `Some(vec![0])` for `n = 1`.
/// - `None` if any requested term exceeds `u64`: F(93) is the last
///   representable term, so `n > 94` always fails.
///
/// # Examples
/// ```
/// use numkit::number_theory::fibonacci;
/// assert_eq!(fibonacci(0), Some(vec![]));
/// assert_eq!(fibonacci(1), Some(vec![0]));
/// assert_eq!(fibonacci(7), Some(vec![0, 1, 1, 2, 3, 5, 8]));
/// assert_eq!(fibonacci(100), None);
/// ```
pub fn fibonacci(n: usize) -> Option<Vec<u64>> {
    let mut terms = Vec::with_capacity(n.min(95));
    if n == 0 {
        return Some(terms);
    }
    terms.push(0);
    if n == 1 {
        return Some(terms);
    }
    terms.push(1);
    for i in 2..n {
        let next = terms[i - 1].checked_add(terms[i - 2])?;
        terms.push(next);
    }
    Some(terms)
}

/// Factorial `n!` with exact integer arithmetic.
///
/// # Returns
/// `None` if `n!` exceeds `u64` (`n > 20`).
///
/// # Examples
/// ```
/// use numkit::number_theory::factorial;
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    let mut acc: u64 = 1;
    for k in 2..=n {
        acc = acc.checked_mul(k)?;
    }
    Some(acc)
}

/// Binomial coefficient `C(n, k)` — the number of k-element subsets.
///
/// # Algorithm
/// Multiplicative form `C(n, k) = Π (n − k + i) / i` over `i = 1..=k`,
/// which stays exact at every step (each partial product is itself a
/// binomial coefficient) and avoids the huge intermediate factorials
/// of the textbook `n! / (k!(n−k)!)` definition.
///
/// # Returns
/// - `Some(0)` when `k > n`.
/// - `None` when an intermediate product exceeds `u64`.
///
/// # Examples
/// ```
/// use numkit::number_theory::combinations;
/// assert_eq!(combinations(5, 2), Some(10));
/// assert_eq!(combinations(52, 5), Some(2_598_960));
/// assert_eq!(combinations(3, 5), Some(0));
/// assert_eq!(combinations(10, 0), Some(1));
/// ```
pub fn combinations(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k); // C(n, k) = C(n, n−k); use the smaller loop
    let mut acc: u64 = 1;
    for i in 1..=k {
        acc = acc.checked_mul(n - k + i)? / i;
    }
    Some(acc)
}

/// Number of ordered k-element arrangements `P(n, k) = n! / (n − k)!`.
///
/// Computed as the falling product `(n − k + 1) · … · n`, never through
/// full factorials.
///
/// # Returns
/// - `Some(0)` when `k > n`.
/// - `None` when the result exceeds `u64`.
///
/// # Examples
/// ```
/// use numkit::number_theory::permutations;
/// assert_eq!(permutations(5, 2), Some(20));
/// assert_eq!(permutations(10, 10), Some(3_628_800));
/// assert_eq!(permutations(3, 5), Some(0));
/// ```
pub fn permutations(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let mut acc: u64 = 1;
    for value in (n - k + 1)..=n {
        acc = acc.checked_mul(value)?;
    }
    Some(acc)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- gcd / lcm ---

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 13), 1);
    }

    #[test]
    fn test_gcd_zero_conventions() {
        assert_eq!(gcd(42, 0), 42);
        assert_eq!(gcd(0, 42), 42);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(21, 6), Some(42));
        assert_eq!(lcm(5, 5), Some(5));
    }

    #[test]
    fn test_lcm_with_zero() {
        assert_eq!(lcm(0, 5), Some(0));
        assert_eq!(lcm(5, 0), Some(0));
        assert_eq!(lcm(0, 0), None);
    }

    #[test]
    fn test_lcm_overflow() {
        // Two large coprime values: LCM is their product, above u64
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    // --- is_prime ---

    #[test]
    fn test_is_prime_small() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(17));
    }

    #[test]
    fn test_is_prime_odd_composites() {
        assert!(!is_prime(9));
        assert!(!is_prime(91)); // 7 × 13
        assert!(!is_prime(7919 * 7919));
    }

    #[test]
    fn test_is_prime_larger() {
        assert!(is_prime(7919)); // 1000th prime
        assert!(is_prime(2_147_483_647)); // Mersenne prime 2³¹ − 1
    }

    // --- fibonacci ---

    #[test]
    fn test_fibonacci_edges() {
        assert_eq!(fibonacci(0), Some(vec![]));
        assert_eq!(fibonacci(1), Some(vec![0]));
        assert_eq!(fibonacci(2), Some(vec![0, 1]));
    }

    #[test]
    fn test_fibonacci_prefix() {
        assert_eq!(
            fibonacci(10),
            Some(vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34])
        );
    }

    #[test]
    fn test_fibonacci_largest_representable() {
        let terms = fibonacci(94).unwrap();
        assert_eq!(terms.len(), 94);
        assert_eq!(terms[92], 7_540_113_804_746_346_429);
        assert_eq!(terms[93], 12_200_160_415_121_876_738);
        assert_eq!(fibonacci(95), None);
    }

    #[test]
    fn test_fibonacci_restartable() {
        // Pure function: repeated calls always start from 0, 1
        assert_eq!(fibonacci(5), fibonacci(5));
        assert_eq!(fibonacci(5).unwrap()[..2], [0, 1]);
    }

    // --- factorial ---

    #[test]
    fn test_factorial_small() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
    }

    #[test]
    fn test_factorial_overflow_boundary() {
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    // --- combinations / permutations ---

    #[test]
    fn test_combinations_known_values() {
        assert_eq!(combinations(5, 2), Some(10));
        assert_eq!(combinations(10, 5), Some(252));
        assert_eq!(combinations(52, 5), Some(2_598_960));
    }

    #[test]
    fn test_combinations_edges() {
        assert_eq!(combinations(7, 0), Some(1));
        assert_eq!(combinations(7, 7), Some(1));
        assert_eq!(combinations(3, 5), Some(0));
    }

    #[test]
    fn test_combinations_beyond_factorial_range() {
        // 62! overflows u64, but C(62, 2) is tiny — the multiplicative
        // form must not overflow through intermediate factorials.
        assert_eq!(combinations(62, 2), Some(1891));
        assert_eq!(combinations(1000, 1), Some(1000));
    }

    #[test]
    fn test_permutations_known_values() {
        assert_eq!(permutations(5, 2), Some(20));
        assert_eq!(permutations(10, 3), Some(720));
        assert_eq!(permutations(10, 10), Some(3_628_800));
    }

    #[test]
    fn test_permutations_edges() {
        assert_eq!(permutations(7, 0), Some(1));
        assert_eq!(permutations(3, 5), Some(0));
    }

    #[test]
    fn test_permutations_overflow() {
        assert_eq!(permutations(100, 50), None);
    }
}
