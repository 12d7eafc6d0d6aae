//! Elementary combinatorics on float-valued arguments.

use crate::traits::FloatScalar;

/// Factorial ⌊x⌋! as an iterative float product.
///
/// Non-integer arguments are truncated with `floor` — no rounding, no
/// error. Returns 1 for any x < 1, including zero and negative input.
/// There is no overflow protection: large arguments run the product to
/// infinity exactly as the arithmetic does.
///
/// # Example
///
/// ```
/// use specfun::factorial;
///
/// assert_eq!(factorial(5.0_f64), 120.0);
/// assert_eq!(factorial(5.9_f64), 120.0);
/// assert_eq!(factorial(0.0_f64), 1.0);
/// assert_eq!(factorial(-3.0_f64), 1.0);
/// ```
pub fn factorial<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let n = x.floor();

    let mut acc = one;
    let mut k = one;
    while k <= n {
        acc = acc * k;
        k = k + one;
    }
    acc
}

/// Number of permutations P(n, r) = n! / (n−r)!.
///
/// Inherits [`factorial`]'s truncation and its value of 1 for arguments
/// below 1, so out-of-range r (negative, or r > n) produces deterministic
/// but meaningless values rather than an error.
///
/// # Example
///
/// ```
/// use specfun::permutations;
///
/// assert_eq!(permutations(5.0_f64, 2.0), 20.0);
/// ```
pub fn permutations<T: FloatScalar>(n: T, r: T) -> T {
    factorial(n) / factorial(n - r)
}

/// Number of combinations C(n, r) = n! / (r!·(n−r)!).
///
/// Built on [`permutations`]; the same non-validation caveats apply.
///
/// # Example
///
/// ```
/// use specfun::combinations;
///
/// assert_eq!(combinations(5.0_f64, 2.0), 10.0);
/// ```
pub fn combinations<T: FloatScalar>(n: T, r: T) -> T {
    permutations(n, r) / factorial(r)
}
