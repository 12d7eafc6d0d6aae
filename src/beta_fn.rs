//! Beta function and log-beta.

use crate::gamma_fn::{gamma, lgamma};
use crate::traits::FloatScalar;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed directly from three [`gamma`] evaluations; overflows for large
/// arguments where the gammas do. Use [`lbeta`] in that regime.
///
/// # Example
///
/// ```
/// use specfun::beta;
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0) - 1.0 / 12.0).abs() < 1e-12);
///
/// // Symmetry
/// assert!((beta(0.5_f64, 1.5) - beta(1.5, 0.5)).abs() < 1e-12);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T) -> T {
    gamma(a) * gamma(b) / gamma(a + b)
}

/// Natural logarithm of the beta function, ln B(a, b), for a, b > 0.
///
/// Computed as `lgamma(a) + lgamma(b) − lgamma(a+b)`, stable where `beta`
/// itself would overflow.
///
/// # Example
///
/// ```
/// use specfun::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-9);
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}
