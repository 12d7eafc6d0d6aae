//! Error function, complement, and inverses.
//!
//! Polynomial approximations: a Maclaurin series through x¹¹ for small
//! arguments and the Hastings exponential-polynomial fit elsewhere, with
//! Winitzki-seeded Newton refinement for the inverse.

use crate::traits::FloatScalar;

/// Maclaurin coefficients of erf, highest order first (x¹¹ … x¹), scaled by 2/√π.
const ERF_SERIES: [f64; 6] = [
    -0.0008556239969770373,
    0.005223977625442187,
    -0.026866170645131252,
    0.11283791670955126,
    -0.37612638903183754,
    1.1283791670955126,
];

/// Hastings polynomial coefficients, highest order first.
const ERF_HASTINGS: [f64; 9] = [
    0.17087277,
    -0.82215223,
    1.48851587,
    -1.13520398,
    0.27886807,
    -0.18628806,
    0.09678418,
    0.37409196,
    1.00002368,
];

/// Constant term of the Hastings exponent.
const ERF_HASTINGS_C0: f64 = 1.26551223;

/// Winitzki parameter for the inverse seed.
const WINITZKI_A: f64 = 0.147;

/// Newton refinement steps for the inverse.
const INV_STEPS: usize = 3;

/// Error function erf(x) = (2/√π) ∫₀ˣ e^{−t²} dt.
///
/// Odd in x. For |x| ≤ 0.5 uses the Maclaurin series truncated at x¹¹;
/// otherwise the Hastings polynomial approximation, with maximum absolute
/// error about 1.2e-7.
///
/// # Example
///
/// ```
/// use specfun::erf;
///
/// assert_eq!(erf(0.0_f64), 0.0);
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-6);
/// assert!((erf(-0.3_f64) + erf(0.3)).abs() < 1e-16);
/// ```
pub fn erf<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();

    let ax = x.abs();
    if ax <= half {
        return erf_series(x);
    }
    let sign = if x < T::zero() { -one } else { one };

    // tau = t·exp(−x² + poly(t)), erf = sign·(1 − tau)
    let t = one / (one + half * ax);
    let mut poly = T::from(ERF_HASTINGS[0]).unwrap();
    for &c in &ERF_HASTINGS[1..] {
        poly = poly * t + T::from(c).unwrap();
    }
    let exponent = poly * t + (-ax * ax - T::from(ERF_HASTINGS_C0).unwrap());
    let tau = t * exponent.exp();

    sign * (one - tau)
}

/// Maclaurin series of erf through x¹¹, Horner form in x².
fn erf_series<T: FloatScalar>(x: T) -> T {
    let x2 = x * x;
    let mut poly = T::from(ERF_SERIES[0]).unwrap();
    for &c in &ERF_SERIES[1..] {
        poly = poly * x2 + T::from(c).unwrap();
    }
    x * poly
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// # Example
///
/// ```
/// use specfun::erfc;
///
/// assert_eq!(erfc(0.0_f64), 1.0);
/// assert!(erfc(6.0_f64) < 1e-10);
/// ```
pub fn erfc<T: FloatScalar>(x: T) -> T {
    T::one() - erf(x)
}

/// Inverse error function erf⁻¹(p) for p ∈ (−1, 1).
///
/// Returns NaN for |p| ≥ 1. Seeds with the Winitzki approximation
/// (a ≈ 0.147) and refines with three Newton steps against [`erf`], using
/// the exact derivative (2/√π)·e^{−y²}.
///
/// # Example
///
/// ```
/// use specfun::{erf, erf_inv};
///
/// let y = erf_inv(0.5_f64);
/// assert!((erf(y) - 0.5).abs() < 1e-9);
///
/// assert!(erf_inv(1.0_f64).is_nan());
/// ```
pub fn erf_inv<T: FloatScalar>(p: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();

    if !(p > -one && p < one) {
        return T::nan();
    }
    if p == zero {
        return zero;
    }

    // Winitzki initial guess:
    // erf⁻¹(p) ≈ sign(p)·sqrt(sqrt(t² − ln(1−p²)/a) − t)
    let a = T::from(WINITZKI_A).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();
    let sign = if p < zero { -one } else { one };

    let lnp = (one - p * p).ln();
    let t = two / (pi * a) + lnp / two;
    let inside = (t * t - lnp / a).sqrt() - t;
    let mut y = sign * inside.sqrt();

    // Newton: y ← y − (erf(y) − p) / ((2/√π)·e^{−y²})
    let two_over_sqrt_pi = two / pi.sqrt();
    for _ in 0..INV_STEPS {
        let err = erf(y) - p;
        let deriv = two_over_sqrt_pi * (-y * y).exp();
        y = y - err / deriv;
    }
    y
}

/// Inverse complementary error function erfc⁻¹(p) = erf⁻¹(1 − p), for
/// p ∈ (0, 2). Returns NaN outside that interval.
///
/// # Example
///
/// ```
/// use specfun::erfc_inv;
///
/// assert_eq!(erfc_inv(1.0_f64), 0.0);
/// assert!(erfc_inv(0.0_f64).is_nan());
/// ```
pub fn erfc_inv<T: FloatScalar>(p: T) -> T {
    let zero = T::zero();
    let two = T::from(2.0).unwrap();

    if !(p > zero && p < two) {
        return T::nan();
    }
    erf_inv(T::one() - p)
}
