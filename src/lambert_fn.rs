//! Lambert W function, principal and secondary real branches.

use crate::traits::FloatScalar;

/// Maximum fixed-point iterations.
const MAX_ITER: usize = 150;

/// Convergence tolerance on successive iterates.
const TOL: f64 = 1e-7;

/// −1/e, the branch point of the real Lambert W function.
const NEG_INV_E: f64 = -0.36787944117144233;

/// Lambert W function, principal branch W₀(x): the w ≥ −1 with w·eʷ = x.
///
/// Defined for x > −1/e; returns NaN for x ≤ −1/e. Evaluated by the
/// fixed-point iteration w ← (x·e⁻ʷ + w²)/(w + 1), seeded with
/// ln(x) − ln(ln(x)) for x > 10 and 0 otherwise, capped at 150 iterations
/// with tolerance 1e-7 on successive iterates.
///
/// # Example
///
/// ```
/// use specfun::lambert_w0;
///
/// // W₀(1) = Ω ≈ 0.567143, and W·e^W = 1
/// let w = lambert_w0(1.0_f64);
/// assert!((w * w.exp() - 1.0).abs() < 1e-6);
///
/// assert!(lambert_w0(-1.0_f64).is_nan());
/// ```
pub fn lambert_w0<T: FloatScalar>(x: T) -> T {
    if x <= T::from(NEG_INV_E).unwrap() {
        return T::nan();
    }

    let w0 = if x > T::from(10.0).unwrap() {
        x.ln() - x.ln().ln()
    } else {
        T::zero()
    };
    lambert_iter(x, w0)
}

/// Lambert W function, secondary branch W₋₁(x): the w ≤ −1 with w·eʷ = x.
///
/// Defined for −1/e ≤ x < 0; returns NaN outside that interval. Seeded with
/// −2 for x ≤ −0.1 and ln(−x) − ln(−ln(−x)) for −0.1 < x < 0, then refined
/// by the same fixed-point iteration as [`lambert_w0`].
///
/// # Example
///
/// ```
/// use specfun::lambert_wm1;
///
/// let w = lambert_wm1(-0.2_f64);
/// assert!(w < -1.0);
/// assert!((w * w.exp() + 0.2).abs() < 1e-6);
/// ```
pub fn lambert_wm1<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    if x < T::from(NEG_INV_E).unwrap() || x >= zero || x.is_nan() {
        return T::nan();
    }

    let w0 = if x <= T::from(-0.1).unwrap() {
        T::from(-2.0).unwrap()
    } else {
        (-x).ln() - (-(-x).ln()).ln()
    };
    lambert_iter(x, w0)
}

/// Fixed-point refinement w ← (x·e⁻ʷ + w²)/(w + 1). This is Newton's method
/// on f(w) = w·eʷ − x, so convergence is quadratic away from the branch
/// point; the cap bounds the slow approach near w = −1.
fn lambert_iter<T: FloatScalar>(x: T, mut w: T) -> T {
    let one = T::one();
    let tol = T::from(TOL).unwrap();

    for _ in 0..MAX_ITER {
        let next = (x * (-w).exp() + w * w) / (w + one);
        if (next - w).abs() < tol {
            return next;
        }
        w = next;
    }
    w
}
