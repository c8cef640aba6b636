//! Dense polynomial arithmetic over a prime field.
//!
//! Coefficients are ordered by ascending power of x. The canonical form of
//! a non-zero polynomial carries no trailing zero coefficient; the
//! canonical zero polynomial is the single coefficient `[0]`.

use crate::bigint::U256;
use crate::errors::OracleError;
use crate::field::Field;

/// Strip trailing zero coefficients down to at least length 1.
fn strip(mut coeffs: Vec<U256>) -> Vec<U256> {
    while coeffs.len() > 1 && coeffs.last().is_some_and(U256::is_zero) {
        coeffs.pop();
    }
    if coeffs.is_empty() {
        coeffs.push(U256::ZERO);
    }
    coeffs
}

/// Monic polynomial with the given roots: prod (x - r_i). Degree n with
/// leading coefficient 1; the empty root list yields `[1]`.
pub fn from_roots(field: &Field, roots: &[U256]) -> Vec<U256> {
    let mut coeffs = vec![field.one()];
    for r in roots {
        let mut next = vec![U256::ZERO; coeffs.len() + 1];
        for (i, c) in coeffs.iter().enumerate() {
            // Multiply by (x - r): shift up one power, subtract r times
            // the current coefficient.
            next[i] = field.sub(&next[i], &field.mul(c, r));
            next[i + 1] = field.add(&next[i + 1], c);
        }
        coeffs = next;
    }
    coeffs
}

/// Horner evaluation from the top coefficient down. The empty polynomial
/// evaluates to 0.
pub fn evaluate(field: &Field, coeffs: &[U256], x: &U256) -> U256 {
    let mut acc = U256::ZERO;
    for c in coeffs.iter().rev() {
        acc = field.muladd(&acc, x, c);
    }
    acc
}

/// Full convolution; result length is len(a) + len(b) - 1. An empty
/// operand yields the zero polynomial `[0]`. No stripping.
pub fn multiply(field: &Field, a: &[U256], b: &[U256]) -> Vec<U256> {
    if a.is_empty() || b.is_empty() {
        return vec![U256::ZERO];
    }
    let mut out = vec![U256::ZERO; a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            out[i + j] = field.muladd(ai, bj, &out[i + j]);
        }
    }
    out
}

/// Coefficient-wise sum, stripped to canonical form.
pub fn add(field: &Field, a: &[U256], b: &[U256]) -> Vec<U256> {
    let mut out = vec![U256::ZERO; a.len().max(b.len())];
    for (o, c) in out.iter_mut().zip(a) {
        *o = field.add(o, c);
    }
    for (o, c) in out.iter_mut().zip(b) {
        *o = field.add(o, c);
    }
    strip(out)
}

/// Coefficient-wise difference, stripped to canonical form.
pub fn subtract(field: &Field, a: &[U256], b: &[U256]) -> Vec<U256> {
    let mut out = vec![U256::ZERO; a.len().max(b.len())];
    for (o, c) in out.iter_mut().zip(a) {
        *o = field.add(o, c);
    }
    for (o, c) in out.iter_mut().zip(b) {
        *o = field.sub(o, c);
    }
    strip(out)
}

/// Schoolbook long division: numerator = quotient * denominator +
/// remainder, with deg(remainder) < deg(denominator). A denominator whose
/// leading coefficient is zero is a precondition violation.
pub fn divmod(
    field: &Field,
    numerator: &[U256],
    denominator: &[U256],
) -> Result<(Vec<U256>, Vec<U256>), OracleError> {
    let lead = denominator.last().ok_or(OracleError::ZeroPolynomialDivision)?;
    let lead_inv = field
        .invert(lead)
        .ok_or(OracleError::ZeroPolynomialDivision)?;

    let db = denominator.len() - 1;
    if numerator.len() <= db {
        // Lower-degree numerator: quotient 0, remainder unchanged.
        return Ok((vec![U256::ZERO], numerator.to_vec()));
    }
    let da = numerator.len() - 1;

    let mut rem = numerator.to_vec();
    let mut quotient = vec![U256::ZERO; da - db + 1];
    for i in (0..=da - db).rev() {
        let q = field.mul(&rem[i + db], &lead_inv);
        quotient[i] = q;
        for (j, d) in denominator.iter().enumerate() {
            rem[i + j] = field.sub(&rem[i + j], &field.mul(&q, d));
        }
    }

    rem.truncate(db.max(1));
    if db == 0 {
        rem = vec![U256::ZERO];
    }
    Ok((strip(quotient), strip(rem)))
}

/// Lagrange interpolation through the samples (x_i, y_i). Callers must
/// pass equally many xs and ys; duplicate x-samples are a precondition
/// violation, not a vector failure.
pub fn interpolate(field: &Field, xs: &[U256], ys: &[U256]) -> Result<Vec<U256>, OracleError> {
    let n = xs.len();
    let mut out = vec![U256::ZERO; n.max(1)];
    for i in 0..n {
        let mut basis = vec![field.one()];
        for j in 0..n {
            if i == j {
                continue;
            }
            let denom = field
                .invert(&field.sub(&xs[i], &xs[j]))
                .ok_or(OracleError::RepeatedInterpolationPoint)?;
            // Degree-1 factor (x - x_j) / (x_i - x_j).
            let factor = [field.neg(&field.mul(&xs[j], &denom)), denom];
            basis = multiply(field, &basis, &factor);
        }
        for (o, c) in out.iter_mut().zip(&basis) {
            *o = field.muladd(&ys[i], c, o);
        }
    }
    Ok(strip(out))
}
