//! Divisor-function evaluation.
//!
//! A divisor is a pair of polynomials (a, b) with associated bivariate
//! function f(x, y) = a(x) - y * b(x), evaluated at a designated curve
//! point. The on-curve checks for the divisor's witness points live in
//! the check routine, not here.

use crate::bigint::U256;
use crate::field::Field;
use crate::poly;

/// f(x0, y0) = a(x0) - y0 * b(x0).
pub fn evaluate_divisor(
    field: &Field,
    a_coeffs: &[U256],
    b_coeffs: &[U256],
    x0: &U256,
    y0: &U256,
) -> U256 {
    let a_at_x = poly::evaluate(field, a_coeffs, x0);
    let b_at_x = poly::evaluate(field, b_coeffs, x0);
    field.sub(&a_at_x, &field.mul(y0, &b_at_x))
}
