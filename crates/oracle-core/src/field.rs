//! Prime-field arithmetic with a runtime modulus.
//!
//! A `Field` is just a modulus; elements are canonical `U256` values in
//! `[0, M)`. Operations never fail: inversion of zero is the one undefined
//! point and surfaces as `None`, which callers must special-case.

use crate::bigint::{U256, U512};

/// Modular arithmetic context for a prime modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    modulus: U256,
}

impl Field {
    pub fn new(modulus: U256) -> Field {
        debug_assert!(!modulus.is_zero());
        Field { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    /// Canonical representative of 1.
    pub fn one(&self) -> U256 {
        U256::ONE.rem(&self.modulus)
    }

    /// Reduce an arbitrary 256-bit value into `[0, M)`.
    pub fn reduce(&self, v: &U256) -> U256 {
        v.rem(&self.modulus)
    }

    /// Reduce a 512-bit little-endian byte string into `[0, M)`.
    pub fn reduce_wide(&self, bytes: &[u8; 64]) -> U256 {
        U512::from_le_bytes(bytes).rem(&self.modulus)
    }

    /// Reduce a small signed integer into `[0, M)`. Used for the shared
    /// curve coefficient, which is transported as a signed integer.
    pub fn reduce_signed(&self, v: i64) -> U256 {
        if v >= 0 {
            self.reduce(&U256::from_u64(v as u64))
        } else {
            self.neg(&self.reduce(&U256::from_u64(v.unsigned_abs())))
        }
    }

    /// Parse 32 little-endian bytes as a canonical element; `None` if the
    /// value is not already reduced.
    pub fn element_from_le_bytes(&self, bytes: &[u8; 32]) -> Option<U256> {
        let v = U256::from_le_bytes(bytes);
        if v < self.modulus {
            Some(v)
        } else {
            None
        }
    }

    /// a + b mod M. Operands must be canonical.
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        let (sum, carry) = a.add_with_carry(b);
        if carry || sum >= self.modulus {
            // a + b < 2M, so one wrapping subtraction is enough.
            sum.sub_with_borrow(&self.modulus).0
        } else {
            sum
        }
    }

    /// a - b mod M. Operands must be canonical.
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        if a >= b {
            a.sub_with_borrow(b).0
        } else {
            let diff = b.sub_with_borrow(a).0;
            self.modulus.sub_with_borrow(&diff).0
        }
    }

    /// -a mod M.
    pub fn neg(&self, a: &U256) -> U256 {
        if a.is_zero() {
            U256::ZERO
        } else {
            self.modulus.sub_with_borrow(a).0
        }
    }

    /// a * b mod M.
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        a.widening_mul(b).rem(&self.modulus)
    }

    /// a^2 mod M.
    pub fn square(&self, a: &U256) -> U256 {
        self.mul(a, a)
    }

    /// a * b + c mod M.
    pub fn muladd(&self, a: &U256, b: &U256, c: &U256) -> U256 {
        self.add(&self.mul(a, b), c)
    }

    /// base^exp mod M, square-and-multiply over all 256 exponent bits.
    pub fn pow(&self, base: &U256, exp: &U256) -> U256 {
        let mut result = self.one();
        let mut base_pow = self.reduce(base);
        for i in 0..4 {
            let mut e = exp.0[i];
            for _ in 0..64 {
                if e & 1 == 1 {
                    result = self.mul(&result, &base_pow);
                }
                base_pow = self.square(&base_pow);
                e >>= 1;
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat: a^(M-2). `None` for zero.
    pub fn invert(&self, a: &U256) -> Option<U256> {
        if a.is_zero() {
            return None;
        }
        let exp = self.modulus.sub_with_borrow(&U256::from_u64(2)).0;
        Some(self.pow(a, &exp))
    }

    /// Batch inversion by the Montgomery product trick. A literal zero
    /// input maps to a zero output at that position.
    pub fn batch_invert(&self, inputs: &[U256]) -> Vec<U256> {
        // Running prefix products over the non-zero entries.
        let mut prefix = Vec::with_capacity(inputs.len());
        let mut acc = self.one();
        for v in inputs {
            if !v.is_zero() {
                acc = self.mul(&acc, v);
            }
            prefix.push(acc);
        }

        let mut inv_acc = match self.invert(&acc) {
            Some(inv) => inv,
            // All inputs zero (acc == 1 inverted) never lands here; acc is
            // a product of non-zero elements of a prime field.
            None => return vec![U256::ZERO; inputs.len()],
        };

        let mut out = vec![U256::ZERO; inputs.len()];
        for i in (0..inputs.len()).rev() {
            if inputs[i].is_zero() {
                continue;
            }
            let before = if i == 0 { self.one() } else { prefix[i - 1] };
            out[i] = self.mul(&inv_acc, &before);
            inv_acc = self.mul(&inv_acc, &inputs[i]);
        }
        out
    }
}
