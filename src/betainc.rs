//! Regularized incomplete beta function I_x(a, b) and its inverse.

use crate::beta_fn::lbeta;
use crate::gamma_fn::lgamma;
use crate::traits::FloatScalar;

/// Maximum continued-fraction iterations.
const CF_MAX_ITER: usize = 100;

/// Continued-fraction termination tolerance on the relative update.
const CF_TOL: f64 = 3e-7;

/// Floor applied to near-zero denominators in the Lentz recurrence.
const FPMIN: f64 = 1e-30;

/// Maximum Newton iterations for the inverse.
const INV_MAX_ITER: usize = 10;

/// Relative step tolerance for the inverse.
const INV_TOL: f64 = 1e-8;

/// Regularized incomplete beta function I_x(a, b), for a, b > 0 and
/// 0 ≤ x ≤ 1.
///
/// I_x(a, b) = B(x; a, b) / B(a, b), where B(x; a, b) = ∫₀ˣ t^{a−1}(1−t)^{b−1} dt.
///
/// Returns NaN for x outside [0, 1]. (The in-band NaN sentinel replaces the
/// original mixed boolean failure value, so every domain failure in this
/// crate looks the same.) Evaluated as a prefactor times the beta continued
/// fraction, with the symmetry transform I_x(a,b) = 1 − I_{1−x}(b,a) applied
/// when x ≥ (a+1)/(a+b+2) to keep the fraction convergent.
///
/// # Example
///
/// ```
/// use specfun::betainc;
///
/// // Boundaries are exact
/// assert_eq!(betainc(2.0_f64, 3.0, 0.0), 0.0);
/// assert_eq!(betainc(2.0_f64, 3.0, 1.0), 1.0);
///
/// // I_{0.5}(2, 3) = 11/16
/// assert!((betainc(2.0_f64, 3.0, 0.5) - 0.6875).abs() < 1e-6);
///
/// assert!(betainc(2.0_f64, 3.0, -0.1).is_nan());
/// ```
pub fn betainc<T: FloatScalar>(a: T, b: T, x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();

    if x < zero || x > one || x.is_nan() {
        return T::nan();
    }

    // Prefactor x^a·(1−x)^b / B(a,b), zero at the boundaries
    let bt = if x == zero || x == one {
        zero
    } else {
        (a * x.ln() + b * (one - x).ln() - lbeta(a, b)).exp()
    };

    // Continued fraction converges fast only below the symmetry point
    if x < (a + one) / (a + b + two) {
        bt * betacf(x, a, b) / a
    } else {
        one - bt * betacf(one - x, b, a) / b
    }
}

/// Beta continued fraction, evaluated with the modified Lentz algorithm.
///
/// Each iteration applies one even and one odd term of the fraction;
/// denominators with magnitude below `FPMIN` are floored to keep the
/// recurrence finite. Terminates when the relative update satisfies
/// |δ − 1| < 3e-7, or after 100 iterations, returning the accumulated value
/// either way.
fn betacf<T: FloatScalar>(x: T, a: T, b: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let fpmin = T::from(FPMIN).unwrap();
    let tol = T::from(CF_TOL).unwrap();

    let qab = a + b;
    let qap = a + one;
    let qam = a - one;

    // Lentz state: h accumulates the fraction, c and d are the two chains
    let mut c = one;
    let mut d = one - qab * x / qap;
    if d.abs() < fpmin {
        d = fpmin;
    }
    d = one / d;
    let mut h = d;

    for m in 1..=CF_MAX_ITER {
        let mf = T::from(m).unwrap();
        let m2 = two * mf;

        // Even term: a_{2m} = m(b−m)x / ((a+2m−1)(a+2m))
        let mut aa = mf * (b - mf) * x / ((qam + m2) * (a + m2));
        d = one + aa * d;
        if d.abs() < fpmin {
            d = fpmin;
        }
        c = one + aa / c;
        if c.abs() < fpmin {
            c = fpmin;
        }
        d = one / d;
        h = h * d * c;

        // Odd term: a_{2m+1} = −(a+m)(a+b+m)x / ((a+2m)(a+2m+1))
        aa = -(a + mf) * (qab + mf) * x / ((a + m2) * (qap + m2));
        d = one + aa * d;
        if d.abs() < fpmin {
            d = fpmin;
        }
        c = one + aa / c;
        if c.abs() < fpmin {
            c = fpmin;
        }
        d = one / d;
        let del = d * c;
        h = h * del;

        if (del - one).abs() < tol {
            break;
        }
    }
    h
}

/// Inverse regularized incomplete beta: the x with I_x(a, b) = p.
///
/// Returns 0 for p ≤ 0 and 1 for p ≥ 1. Seeds with a normal-approximation
/// guess when a ≥ 1 and b ≥ 1, and a power-law guess otherwise, then runs
/// up to 10 damped Newton steps against [`betainc`] with the beta density
/// as derivative. Iterates escaping (0, 1) are pulled back by step halving;
/// the loop exits once the relative step drops below 1e-8, never before the
/// second iteration.
///
/// # Example
///
/// ```
/// use specfun::{betainc, betainc_inv};
///
/// let p = betainc(2.0_f64, 3.0, 0.3);
/// assert!((betainc_inv(2.0, 3.0, p) - 0.3).abs() < 1e-6);
///
/// assert_eq!(betainc_inv(2.0_f64, 3.0, -1.0), 0.0);
/// assert_eq!(betainc_inv(2.0_f64, 3.0, 2.0), 1.0);
/// ```
pub fn betainc_inv<T: FloatScalar>(a: T, b: T, p: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();

    if p <= zero {
        return zero;
    }
    if p >= one {
        return one;
    }

    let a1 = a - one;
    let b1 = b - one;

    let mut x;
    if a >= one && b >= one {
        // Normal-approximation seed (inverse normal CDF rational fit,
        // pushed through the Wilson-Hilferty-style transform in a, b)
        let pp = if p < half { p } else { one - p };
        let t = (-two * pp.ln()).sqrt();
        let c0 = T::from(2.30753).unwrap();
        let c1 = T::from(0.27061).unwrap();
        let d1 = T::from(0.99229).unwrap();
        let d2 = T::from(0.04481).unwrap();
        let mut xn = (c0 + t * c1) / (one + t * (d1 + t * d2)) - t;
        if p < half {
            xn = -xn;
        }
        let al = (xn * xn - T::from(3.0).unwrap()) / T::from(6.0).unwrap();
        let h = two / (one / (two * a - one) + one / (two * b - one));
        let w = xn * (al + h).sqrt() / h
            - (one / (two * b - one) - one / (two * a - one))
                * (al + T::from(5.0 / 6.0).unwrap() - two / (T::from(3.0).unwrap() * h));
        x = a / (a + b * (two * w).exp());
    } else {
        // Power-law seed from the asymmetry of the two shape parameters
        let lna = (a / (a + b)).ln();
        let lnb = (b / (a + b)).ln();
        let t = (a * lna).exp() / a;
        let u = (b * lnb).exp() / b;
        let w = t + u;
        if p < t / w {
            x = (a * w * p).powf(one / a);
        } else {
            x = one - (b * w * (one - p)).powf(one / b);
        }
    }

    // Newton refinement with the beta density as derivative
    let afac = lgamma(a + b) - lgamma(a) - lgamma(b);
    for j in 0..INV_MAX_ITER {
        if x == zero || x == one {
            return x;
        }

        let err = betainc(a, b, x) - p;
        let t = (a1 * x.ln() + b1 * (one - x).ln() + afac).exp();
        let u = err / t;

        // Halley-style damping of the raw Newton step
        let step = u / (one - half * (u * (a1 / x - b1 / (one - x))).min(one));
        x = x - step;

        if x <= zero {
            x = half * (x + step);
        }
        if x >= one {
            x = half * (x + step + one);
        }

        if step.abs() < T::from(INV_TOL).unwrap() * x && j > 0 {
            break;
        }
    }
    x
}
