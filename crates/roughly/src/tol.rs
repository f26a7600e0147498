//! Tolerance configuration for approximate comparisons.
//!
//! Policy
//! - Defaults follow the common isclose convention: relative `1e-9`,
//!   absolute `0.0`. With a zero absolute bound, comparisons near zero stay
//!   exact unless the caller opts in via [`Tol::with_abs`].
//! - `Tol` is a plain `Copy` bundle passed by value as the last argument;
//!   per-call overrides go through the `with_*` builders so the other bound
//!   keeps its default.

/// Default relative tolerance (fraction of the larger operand's magnitude).
pub const DEFAULT_REL_TOL: f64 = 1e-9;
/// Default absolute tolerance.
pub const DEFAULT_ABS_TOL: f64 = 0.0;

/// Tolerance pair used by every comparison.
///
/// Invariants:
/// - Both bounds are expected finite and non-negative. Negative or
///   non-finite bounds are not rejected; the verdict is whatever ordinary
///   float arithmetic yields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tol {
    /// Allowance proportional to the larger operand's magnitude.
    pub rel: f64,
    /// Fixed allowance independent of magnitude; dominant near zero.
    pub abs: f64,
}

impl Default for Tol {
    fn default() -> Self {
        Self {
            rel: DEFAULT_REL_TOL,
            abs: DEFAULT_ABS_TOL,
        }
    }
}

impl Tol {
    #[inline]
    pub fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Both bounds zero: comparisons collapse to exact `==` / `<` / `>`.
    #[inline]
    pub fn exact() -> Self {
        Self { rel: 0.0, abs: 0.0 }
    }

    /// Copy with the relative bound replaced.
    #[inline]
    pub fn with_rel(self, rel: f64) -> Self {
        Self { rel, ..self }
    }

    /// Copy with the absolute bound replaced.
    #[inline]
    pub fn with_abs(self, abs: f64) -> Self {
        Self { abs, ..self }
    }
}
