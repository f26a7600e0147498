//! Approximate relational comparison of `f64` values.
//!
//! Why this design (short)
//! - `lt`/`gt` subtract the closeness region from the strict mathematical
//!   order, so for any pair of finite operands exactly one of
//!   {`lt`, `eq`, `gt`} holds.
//! - `le`/`ge` are negations of the opposite strict operator. Given the
//!   three-way partition that is the same as the union with `eq`, without
//!   evaluating the closeness predicate twice.
//!
//! Assumptions and conventions
//! - Operands are finite. NaN and infinities are passed through to native
//!   float arithmetic (NaN compares unordered everywhere, `∞ - ∞` is NaN);
//!   callers must not rely on defined verdicts for non-finite inputs.
//! - Tolerances are expected non-negative and are not validated.

use crate::tol::Tol;

#[cfg(test)]
mod tests_props;

/// Closeness predicate: `|a - b| <= max(tol.rel * max(|a|, |b|), tol.abs)`.
///
/// Commutative in `a, b`. The relative bound tracks the larger operand's
/// magnitude, so comparisons near zero are governed by `tol.abs`. With both
/// bounds zero this reduces to exact equality.
#[inline]
pub fn is_close(a: f64, b: f64, tol: Tol) -> bool {
    let diff = (a - b).abs();
    diff <= f64::max(tol.rel * f64::max(a.abs(), b.abs()), tol.abs)
}

/// `a` is approximately equal to `b` within `tol`.
#[inline]
pub fn eq(a: f64, b: f64, tol: Tol) -> bool {
    is_close(a, b, tol)
}

/// `a` differs from `b` by more than `tol`.
#[inline]
pub fn ne(a: f64, b: f64, tol: Tol) -> bool {
    !is_close(a, b, tol)
}

/// `a` is unambiguously less than `b`: strictly below and not within `tol`.
#[inline]
pub fn lt(a: f64, b: f64, tol: Tol) -> bool {
    a < b && !is_close(a, b, tol)
}

/// `a` is unambiguously greater than `b`: strictly above and not within `tol`.
#[inline]
pub fn gt(a: f64, b: f64, tol: Tol) -> bool {
    a > b && !is_close(a, b, tol)
}

/// `a` is less than or approximately equal to `b`.
#[inline]
pub fn le(a: f64, b: f64, tol: Tol) -> bool {
    !gt(a, b, tol)
}

/// `a` is greater than or approximately equal to `b`.
#[inline]
pub fn ge(a: f64, b: f64, tol: Tol) -> bool {
    !lt(a, b, tol)
}
