//! Lower and upper incomplete gamma functions γ(s,x) and Γ(s,x).

use crate::gamma_fn::gamma;
use crate::traits::FloatScalar;

/// Maximum series terms.
const MAX_ITER: usize = 150;

/// Series termination tolerance on the current term.
const TOL: f64 = 1e-11;

/// Lower incomplete gamma function γ(s, x) = ∫₀ˣ t^{s−1} e^{−t} dt.
///
/// Returns 0 when x = 0. Otherwise evaluated by the alternating power
/// series γ(s,x) = Σₖ (−1)ᵏ x^{s+k} / (k!·(s+k)), up to 150 terms with
/// tolerance 1e-11 on the term magnitude. Not regularized: γ(s,x) → Γ(s)
/// as x → ∞. No domain validation — s ≤ 0 or x < 0 propagate NaN/inf
/// through the arithmetic.
///
/// # Example
///
/// ```
/// use specfun::gamma_inc_lower;
///
/// // γ(s, 0) = 0
/// assert_eq!(gamma_inc_lower(3.0_f64, 0.0), 0.0);
///
/// // γ(1, x) = 1 − e^{−x}
/// let x = 2.0_f64;
/// assert!((gamma_inc_lower(1.0, x) - (1.0 - (-x).exp())).abs() < 1e-10);
/// ```
pub fn gamma_inc_lower<T: FloatScalar>(s: T, x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x == zero {
        return zero;
    }

    let tol = T::from(TOL).unwrap();

    // Leading term x^s / s, in log form
    let mut t = (s * x.ln()).exp() / s;
    let mut v = t;

    let mut k = one;
    for _ in 0..MAX_ITER {
        t = -t * x * (s + k - one) / ((s + k) * k);
        v = v + t;
        if t.abs() < tol {
            break;
        }
        k = k + one;
    }
    v
}

/// Upper incomplete gamma function Γ(s, x) = Γ(s) − γ(s, x).
///
/// # Example
///
/// ```
/// use specfun::{gamma, gamma_inc_lower, gamma_inc_upper};
///
/// let (s, x) = (2.5_f64, 1.2);
/// let total = gamma_inc_lower(s, x) + gamma_inc_upper(s, x);
/// assert!((total - gamma(s)).abs() < 1e-10);
/// ```
pub fn gamma_inc_upper<T: FloatScalar>(s: T, x: T) -> T {
    gamma(s) - gamma_inc_lower(s, x)
}

/// Inverse of the lower incomplete gamma function — **unimplemented stub**.
///
/// Always returns 0 regardless of input. An inversion algorithm has not
/// been selected for this function; callers must not rely on its output.
/// Kept in the API so the gap is explicit rather than silent.
pub fn gamma_inc_lower_inv<T: FloatScalar>(_s: T, _p: T) -> T {
    // TODO: invert via Newton on gamma_inc_lower with a Wilson-Hilferty seed
    T::zero()
}
