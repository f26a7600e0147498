//! Absolute-tolerance sweep across a fixed gap.
//!
//! Purpose
//! - Show where the three-way verdict for `1 - 10^-6` vs `1.0` flips from a
//!   strict order to approximate equality as the absolute bound grows.

use roughly::{eq, lt, Tol};

fn main() {
    let gap = 1e-6;
    let a = 1.0 - gap;
    let b = 1.0;
    for exp in 0..=12 {
        let tol = Tol::default().with_abs(10f64.powi(-exp));
        let verdict = if lt(a, b, tol) {
            "lt"
        } else if eq(a, b, tol) {
            "eq"
        } else {
            "gt"
        };
        println!("abs_tol=1e-{exp} gap={gap:e} verdict={verdict}");
    }
}
