//! Modular square roots for an arbitrary odd prime modulus.
//!
//! Branch selection by p mod 8: the p = 3 (mod 4) exponentiation, the
//! Atkin formula for p = 5 (mod 8), and full Tonelli-Shanks for the rest.
//! Both production moduli land in the fast branches (2^255 - 19 is
//! 5 mod 8, the Helios order is 3 mod 4); Tonelli-Shanks covers any other
//! prime the document might carry.

use crate::bigint::U256;
use crate::field::Field;

/// Square root of `n` mod the field's prime, or `None` if `n` is a
/// non-residue. The returned root is one of the two; callers select a
/// branch by parity.
pub fn sqrt(field: &Field, n: &U256) -> Option<U256> {
    let p = *field.modulus();
    let n = field.reduce(n);
    if n.is_zero() {
        return Some(U256::ZERO);
    }

    // Euler's criterion: n^((p-1)/2) must be 1.
    let half = p.shr(1);
    let minus_one = field.neg(&field.one());
    if field.pow(&n, &half) != field.one() {
        return None;
    }

    if p.0[0] & 3 == 3 {
        // r = n^((p+1)/4); for p = 4k+3 the exponent is (p >> 2) + 1.
        let exp = p.shr(2).add_with_carry(&U256::ONE).0;
        return Some(field.pow(&n, &exp));
    }

    if p.0[0] & 7 == 5 {
        // Atkin: v = (2n)^((p-5)/8), i = 2nv^2, r = nv(i - 1).
        let two_n = field.add(&n, &n);
        let v = field.pow(&two_n, &p.shr(3));
        let i = field.mul(&two_n, &field.square(&v));
        let r = field.mul(&field.mul(&n, &v), &field.sub(&i, &field.one()));
        return Some(r);
    }

    // Tonelli-Shanks: p - 1 = q * 2^s with q odd.
    let p_minus_1 = p.sub_with_borrow(&U256::ONE).0;
    let s = p_minus_1.trailing_zeros();
    let q = p_minus_1.shr(s);

    // First quadratic non-residue, searching from 2. Every odd prime
    // has one below p, so wrapping back to zero means the modulus is
    // composite and no root exists.
    let mut z = U256::from_u64(2);
    while field.pow(&z, &half) != minus_one {
        z = field.add(&z, &U256::ONE);
        if z.is_zero() {
            return None;
        }
    }

    let mut m = s;
    let mut c = field.pow(&z, &q);
    let mut t = field.pow(&n, &q);
    // (q + 1) / 2 for odd q.
    let mut r = field.pow(&n, &q.shr(1).add_with_carry(&U256::ONE).0);

    loop {
        if t == field.one() {
            return Some(r);
        }
        // Least i with t^(2^i) = 1.
        let mut i = 1;
        let mut probe = field.square(&t);
        while probe != field.one() {
            probe = field.square(&probe);
            i += 1;
        }
        let mut b = c;
        for _ in 0..m - i - 1 {
            b = field.square(&b);
        }
        m = i;
        c = field.square(&b);
        t = field.mul(&t, &c);
        r = field.mul(&r, &b);
    }
}
