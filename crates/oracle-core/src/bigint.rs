//! Fixed-width big integers for field arithmetic.
//!
//! `U256` is 4 x 64-bit little-endian limbs, `U512` is 8. Everything is
//! schoolbook arithmetic with explicit carries; modular reduction is binary
//! shift-subtract, which stays correct for arbitrary moduli including the
//! tiny primes used in tests.

/// A 256-bit unsigned integer, little-endian limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U256(pub [u64; 4]);

/// A 512-bit unsigned integer, little-endian limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U512(pub [u64; 8]);

impl U256 {
    pub const ZERO: U256 = U256([0; 4]);
    pub const ONE: U256 = U256([1, 0, 0, 0]);

    #[inline]
    pub fn from_u64(v: u64) -> U256 {
        U256([v, 0, 0, 0])
    }

    /// Parse 32 little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> U256 {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            *limb = u64::from_le_bytes(chunk);
        }
        U256(limbs)
    }

    /// Serialize as 32 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 4]
    }

    /// Value of bit `i` (0 = least significant).
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < 256);
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// a + b, returning the carry out of bit 255.
    pub fn add_with_carry(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            let (s1, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (s2, c2) = s1.overflowing_add(carry);
            out[i] = s2;
            carry = (c1 as u64) + (c2 as u64);
        }
        (U256(out), carry > 0)
    }

    /// a - b, returning the borrow out of bit 255. The difference wraps
    /// mod 2^256 when a < b.
    pub fn sub_with_borrow(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0u64;
        for i in 0..4 {
            let (d1, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (d2, b2) = d1.overflowing_sub(borrow);
            out[i] = d2;
            borrow = (b1 as u64) | (b2 as u64);
        }
        (U256(out), borrow > 0)
    }

    /// Full 512-bit product.
    pub fn widening_mul(&self, rhs: &U256) -> U512 {
        let mut wide = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u64;
            for j in 0..4 {
                let (lo, hi) = mac(self.0[j], rhs.0[i], wide[i + j], carry);
                wide[i + j] = lo;
                carry = hi;
            }
            wide[i + 4] = carry;
        }
        U512(wide)
    }

    /// Logical right shift by `n` bits (n < 256).
    pub fn shr(&self, n: u32) -> U256 {
        debug_assert!(n < 256);
        let limb_shift = (n / 64) as usize;
        let bit_shift = n % 64;
        let mut out = [0u64; 4];
        for i in 0..4 - limb_shift {
            out[i] = self.0[i + limb_shift] >> bit_shift;
            if bit_shift > 0 && i + limb_shift + 1 < 4 {
                out[i] |= self.0[i + limb_shift + 1] << (64 - bit_shift);
            }
        }
        U256(out)
    }

    /// Number of trailing zero bits; 256 for zero.
    pub fn trailing_zeros(&self) -> u32 {
        let mut total = 0;
        for limb in self.0 {
            if limb == 0 {
                total += 64;
            } else {
                return total + limb.trailing_zeros();
            }
        }
        total
    }

    /// Remainder mod `m`. `m` must be non-zero.
    pub fn rem(&self, m: &U256) -> U256 {
        if self < m {
            return *self;
        }
        U512::from(*self).rem(m)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for i in (0..4).rev() {
            match self.0[i].cmp(&other.0[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<U256> for U512 {
    fn from(v: U256) -> U512 {
        U512([v.0[0], v.0[1], v.0[2], v.0[3], 0, 0, 0, 0])
    }
}

impl U512 {
    /// Parse 64 little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8; 64]) -> U512 {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            *limb = u64::from_le_bytes(chunk);
        }
        U512(limbs)
    }

    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < 512);
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Remainder mod `m`, by binary shift-subtract over all 512 bits.
    /// `m` must be non-zero.
    pub fn rem(&self, m: &U256) -> U256 {
        debug_assert!(!m.is_zero());
        let mut r = U256::ZERO;
        for i in (0..512).rev() {
            // r = 2r + bit_i; the carry means r + 2^256, which always
            // exceeds m, and the wrapping subtraction below yields the
            // correct residue because 2r + 1 < 2m <= 2^257.
            let (doubled, carry) = r.add_with_carry(&r);
            let (shifted, carry2) = if self.bit(i) {
                doubled.add_with_carry(&U256::ONE)
            } else {
                (doubled, false)
            };
            r = if carry || carry2 || &shifted >= m {
                shifted.sub_with_borrow(m).0
            } else {
                shifted
            };
        }
        r
    }
}

/// a * b + c + carry as (lo, hi).
#[inline]
fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let wide = (a as u128) * (b as u128) + (c as u128) + (carry as u128);
    (wide as u64, (wide >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn to_big(v: &U256) -> BigUint {
        BigUint::from_bytes_le(&v.to_le_bytes())
    }

    fn big512(v: &U512) -> BigUint {
        let mut bytes = [0u8; 64];
        for (i, limb) in v.0.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    fn sample() -> Vec<U256> {
        vec![
            U256::ZERO,
            U256::ONE,
            U256::from_u64(0xffff_ffff_ffff_ffff),
            U256([0x123456789abcdef0, 0xfedcba9876543210, 0x0f0f0f0f0f0f0f0f, 0x7fffffffffffffff]),
            U256([u64::MAX; 4]),
        ]
    }

    #[test]
    fn le_bytes_round_trip() {
        for v in sample() {
            assert_eq!(U256::from_le_bytes(&v.to_le_bytes()), v);
        }
    }

    #[test]
    fn add_sub_match_bigint() {
        for a in sample() {
            for b in sample() {
                let (sum, carry) = a.add_with_carry(&b);
                let expected = to_big(&a) + to_big(&b);
                let mut got = to_big(&sum);
                if carry {
                    got += BigUint::from(1u8) << 256;
                }
                assert_eq!(got, expected);

                let (diff, borrow) = a.sub_with_borrow(&b);
                if !borrow {
                    assert_eq!(to_big(&diff), to_big(&a) - to_big(&b));
                }
            }
        }
    }

    #[test]
    fn widening_mul_matches_bigint() {
        for a in sample() {
            for b in sample() {
                let wide = a.widening_mul(&b);
                assert_eq!(big512(&wide), to_big(&a) * to_big(&b));
            }
        }
    }

    #[test]
    fn rem_matches_bigint() {
        let moduli = [
            U256::from_u64(7),
            U256::from_u64(97),
            U256([0xffffffffffffffed, u64::MAX, u64::MAX, 0x7fffffffffffffff]),
        ];
        for a in sample() {
            for b in sample() {
                let wide = a.widening_mul(&b);
                for m in &moduli {
                    let got = wide.rem(m);
                    assert_eq!(to_big(&got), big512(&wide) % to_big(m));
                }
            }
        }
    }

    #[test]
    fn ordering_is_numeric() {
        let small = U256([u64::MAX, 0, 0, 0]);
        let large = U256([0, 1, 0, 0]);
        assert!(small < large);
        assert!(U256::ZERO < U256::ONE);
        assert_eq!(U256::from_u64(42).cmp(&U256::from_u64(42)), core::cmp::Ordering::Equal);
    }

    #[test]
    fn shr_matches_bigint() {
        let v = U256([0x123456789abcdef0, 0xfedcba9876543210, 0x0f0f0f0f0f0f0f0f, 0x7fffffffffffffff]);
        for n in [1u32, 2, 3, 63, 64, 65, 128, 255] {
            assert_eq!(to_big(&v.shr(n)), to_big(&v) >> n);
        }
    }

    #[test]
    fn trailing_zeros_counts() {
        assert_eq!(U256::ZERO.trailing_zeros(), 256);
        assert_eq!(U256::ONE.trailing_zeros(), 0);
        assert_eq!(U256([0, 1, 0, 0]).trailing_zeros(), 64);
        assert_eq!(U256::from_u64(0b1000).trailing_zeros(), 3);
    }
}
