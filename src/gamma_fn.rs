//! Gamma, log-gamma, and inverse gamma functions.

use crate::traits::FloatScalar;
use crate::lambert_fn::{lambert_w0, lambert_wm1};
use crate::{lanczos_sum, LANCZOS_G};

/// Coefficients for the log-gamma rational series (non-Lanczos).
const LGAMMA_COEFFS: [f64; 6] = [
    76.18009172947146,
    -86.50532032941677,
    24.01409824083091,
    -1.231739572450155,
    0.1208650973866179e-2,
    -0.5395239384953e-5,
];

/// Series seed for [`lgamma`].
const LGAMMA_SER: f64 = 1.000000000190015;

/// √(2π).
const SQRT_TAU: f64 = 2.5066282746310005;

/// Global minimum of Γ on the positive axis, Γ(1.461632…).
const GAMMA_MIN: f64 = 0.885603;

/// Offset constant of the closed-form inverse gamma approximation.
const GAMMA_INV_C: f64 = 0.036534;

/// Gamma function Γ(x).
///
/// Uses the Lanczos approximation (g = 7, n = 9) for x ≥ 0.5 and the
/// reflection formula Γ(x) = π / (sin(πx)·Γ(1−x)) below. The reflection
/// recursion is depth 1: 1−x always lands in the Lanczos branch.
///
/// There is no pole guard: at non-positive integers, sin(πx) vanishes (or
/// nearly vanishes in floating point) and the result diverges through the
/// arithmetic itself. Relative error is on the order of 1e-13 for
/// well-conditioned arguments.
///
/// # Example
///
/// ```
/// use specfun::gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-10);
///
/// // Γ(0.5) = √π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-13);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();

    // Reflection formula for x < 0.5
    if x < half {
        let pi = T::from(core::f64::consts::PI).unwrap();
        return pi / ((pi * x).sin() * gamma(one - x));
    }

    // Lanczos approximation for x >= 0.5
    let z = x - one;
    let g = T::from(LANCZOS_G).unwrap();
    let t = z + g + half;
    let sqrt_2pi = T::from(core::f64::consts::TAU.sqrt()).unwrap();

    sqrt_2pi * t.powf(z + half) * (-t).exp() * lanczos_sum(z)
}

/// Natural logarithm of the gamma function, ln Γ(x), for x > 0.
///
/// Uses a six-coefficient rational series (not Lanczos), numerically stable
/// where `gamma` itself would overflow. No domain guard: non-positive x
/// yields NaN through the logarithm.
///
/// # Example
///
/// ```
/// use specfun::lgamma;
///
/// // ln Γ(1) = 0
/// assert!(lgamma(1.0_f64).abs() < 1e-9);
///
/// // ln Γ(100) — large argument, no overflow
/// assert!((lgamma(100.0_f64) - 359.1342053695754).abs() < 1e-6);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    let half = T::from(0.5).unwrap();

    let t = x + T::from(5.5).unwrap();
    let tmp = t - (x + half) * t.ln();

    let mut y = x;
    let mut ser = T::from(LGAMMA_SER).unwrap();
    for &c in &LGAMMA_COEFFS {
        y = y + T::one();
        ser = ser + T::from(c).unwrap() / y;
    }

    (T::from(SQRT_TAU).unwrap() * ser / x).ln() - tmp
}

/// Inverse gamma on the increasing branch: the x ≥ 1.4616… with Γ(x) = y.
///
/// Returns NaN for y < 0.885603 (the global minimum of Γ on the positive
/// axis). Computed in closed form through the principal Lambert W branch.
/// The approximation is known-poor for y below 10 (absolute error up to a
/// few 1e-2); this is an inherent limitation, not an error condition.
///
/// # Example
///
/// ```
/// use specfun::gamma_inv;
///
/// // Γ(5) = 24
/// assert!((gamma_inv(24.0_f64) - 5.0).abs() < 0.01);
///
/// // Below the minimum of Γ there is no inverse
/// assert!(gamma_inv(0.5_f64).is_nan());
/// ```
pub fn gamma_inv<T: FloatScalar>(y: T) -> T {
    gamma_inv_w(y, true)
}

/// Inverse gamma on the decreasing branch: the 0 < x < 1.4616… with Γ(x) = y.
///
/// Returns NaN for y < 0.885603. Uses the secondary Lambert W branch, whose
/// domain restricts this inverse to y < √(2π) − 0.036534 ≈ 2.47; larger
/// values propagate NaN. Same accuracy caveat as [`gamma_inv`].
pub fn gamma_inv_lower<T: FloatScalar>(y: T) -> T {
    gamma_inv_w(y, false)
}

/// Shared closed form: x = lx / W(lx/e) + 1/2, lx = ln((y + c)/√(2π)).
fn gamma_inv_w<T: FloatScalar>(y: T, principal: bool) -> T {
    let half = T::from(0.5).unwrap();

    if y < T::from(GAMMA_MIN).unwrap() {
        return T::nan();
    }

    let lx = ((y + T::from(GAMMA_INV_C).unwrap()) / T::from(SQRT_TAU).unwrap()).ln();
    let e = T::from(core::f64::consts::E).unwrap();
    let w = if principal {
        lambert_w0(lx / e)
    } else {
        lambert_wm1(lx / e)
    };

    lx / w + half
}
