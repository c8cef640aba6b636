//! Affine curve points and the compressed 32-byte encoding.
//!
//! The encoding is little-endian x with the parity of y in bit 255; the
//! all-zero string is the identity. Decoding needs the curve equation and
//! lives on [`crate::curve::Curve`].

use crate::bigint::U256;

/// A point on a short-Weierstrass curve, or the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffinePoint {
    Identity,
    Affine { x: U256, y: U256 },
}

impl AffinePoint {
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// Compressed encoding: all zeros for identity, else LE(x) with the
    /// parity of y ORed into the top bit of the last byte.
    pub fn to_bytes(&self) -> [u8; 32] {
        match self {
            AffinePoint::Identity => [0u8; 32],
            AffinePoint::Affine { x, y } => {
                let mut bytes = x.to_le_bytes();
                if y.is_odd() {
                    bytes[31] |= 0x80;
                }
                bytes
            }
        }
    }

    /// x-coordinate as LE bytes; all zeros for identity.
    pub fn x_bytes(&self) -> [u8; 32] {
        match self {
            AffinePoint::Identity => [0u8; 32],
            AffinePoint::Affine { x, .. } => x.to_le_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_encodes_to_zeros() {
        assert_eq!(AffinePoint::Identity.to_bytes(), [0u8; 32]);
        assert_eq!(AffinePoint::Identity.x_bytes(), [0u8; 32]);
    }

    #[test]
    fn parity_bit_follows_y() {
        let even = AffinePoint::Affine { x: U256::from_u64(3), y: U256::from_u64(8) };
        let odd = AffinePoint::Affine { x: U256::from_u64(3), y: U256::from_u64(9) };
        assert_eq!(even.to_bytes()[31] & 0x80, 0);
        assert_eq!(odd.to_bytes()[31] & 0x80, 0x80);
        assert_eq!(even.x_bytes(), odd.x_bytes());
    }
}
