//! Approximate (tolerance-based) relational comparison of floats.
//!
//! Purpose
//! - Provide one closeness predicate (`is_close`) and six relational
//!   operators (`eq`, `ne`, `lt`, `gt`, `le`, `ge`) derived from it, each
//!   parameterized by a relative and/or absolute tolerance (`Tol`).
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: every
//!   operator is a pure function of its operands and the tolerance pair.
//!
//! Why one predicate
//! - Deriving the strict orders by subtracting the closeness region keeps
//!   the six operators mutually consistent: for any finite pair exactly one
//!   of {`lt`, `eq`, `gt`} holds, and `le`/`ge` are the matching unions.

pub mod cmp;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Flat re-exports: most callers want the operators and `Tol` only.
pub use cmp::{eq, ge, gt, is_close, le, lt, ne};
pub use tol::{Tol, DEFAULT_ABS_TOL, DEFAULT_REL_TOL};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cmp::{eq, ge, gt, is_close, le, lt, ne};
    pub use crate::tol::Tol;
}
