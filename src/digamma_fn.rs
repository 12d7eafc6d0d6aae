//! Digamma (psi) function via recurrence and asymptotic expansion.

use crate::traits::FloatScalar;

/// Euler–Mascheroni constant γ, at the precision the small-argument asymptote carries.
const EULER_GAMMA: f64 = 0.5772156649;

/// Recurrence threshold: shift x upward until it reaches this value before
/// applying the asymptotic tail.
const ASYMP_THRESHOLD: f64 = 8.5;

/// Digamma function ψ(x) = d/dx ln Γ(x), for x > 0.
///
/// Returns NaN for x ≤ 0. For x ≤ 1e-5 uses the small-argument asymptote
/// ψ(x) ≈ −γ − 1/x. Otherwise shifts x up by the recurrence
/// ψ(x+1) = ψ(x) + 1/x until x ≥ 8.5, then applies
/// ψ(x) ≈ ln(x) − 1/(2x) − (1/12)/x² + (1/120)/x⁴ − (1/252)/x⁶.
///
/// # Example
///
/// ```
/// use specfun::digamma;
///
/// // ψ(1) = −γ (Euler–Mascheroni constant)
/// assert!((digamma(1.0_f64) + 0.5772156649015329).abs() < 1e-9);
///
/// // Poles and the negative axis are out of domain
/// assert!(digamma(0.0_f64).is_nan());
/// assert!(digamma(-2.5_f64).is_nan());
/// ```
pub fn digamma<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x <= zero || x.is_nan() {
        return T::nan();
    }

    // Small-argument asymptote: ψ(x) → −1/x − γ as x → 0⁺
    if x <= T::from(1e-5).unwrap() {
        return -T::from(EULER_GAMMA).unwrap() - one / x;
    }

    // Recurrence: ψ(y+1) = ψ(y) + 1/y, shifted until y ≥ 8.5
    let threshold = T::from(ASYMP_THRESHOLD).unwrap();
    let mut result = zero;
    let mut y = x;
    while y < threshold {
        result = result - one / y;
        y = y + one;
    }

    // Asymptotic tail in 1/y²
    let half = T::from(0.5).unwrap();
    let mut r = one / y;
    result = result + y.ln() - half * r;
    r = r * r;

    let c1 = T::from(1.0 / 12.0).unwrap();
    let c2 = T::from(1.0 / 120.0).unwrap();
    let c3 = T::from(1.0 / 252.0).unwrap();
    result - r * (c1 - r * (c2 - r * c3))
}
