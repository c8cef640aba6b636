//! Short-Weierstrass group law in affine coordinates.
//!
//! Deliberately the textbook formulas, variable time, with the identity
//! handled as an explicit case. Correctness over speed: this is the
//! reference the production implementation is checked against.

use crate::bigint::U256;
use crate::field::Field;
use crate::point::AffinePoint;
use crate::sqrt;

/// y^2 = x^3 + a*x + b over a prime base field.
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    field: Field,
    a: U256,
    b: U256,
}

impl Curve {
    pub fn new(field: Field, a: U256, b: U256) -> Curve {
        Curve { field, a, b }
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// x^3 + a*x + b.
    pub fn rhs(&self, x: &U256) -> U256 {
        let f = &self.field;
        let x2 = f.square(x);
        f.add(&f.muladd(&x2, x, &f.mul(&self.a, x)), &self.b)
    }

    /// Identity is on every curve; affine points must satisfy the
    /// curve equation.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => true,
            AffinePoint::Affine { x, y } => self.field.square(y) == self.rhs(x),
        }
    }

    /// Decode a compressed point. All-zero bytes are the identity; other
    /// inputs fail on a non-canonical x or a non-residue right-hand side.
    pub fn decode_point(&self, bytes: &[u8; 32]) -> Option<AffinePoint> {
        if bytes.iter().all(|&b| b == 0) {
            return Some(AffinePoint::Identity);
        }
        let y_parity = bytes[31] >> 7 == 1;
        let mut x_bytes = *bytes;
        x_bytes[31] &= 0x7f;
        let x = self.field.element_from_le_bytes(&x_bytes)?;
        let root = sqrt::sqrt(&self.field, &self.rhs(&x))?;
        let y = if root.is_odd() == y_parity {
            root
        } else {
            self.field.neg(&root)
        };
        Some(AffinePoint::Affine { x, y })
    }

    /// Compressed encoding of a point.
    pub fn encode_point(&self, point: &AffinePoint) -> [u8; 32] {
        point.to_bytes()
    }

    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => AffinePoint::Affine {
                x: *x,
                y: self.field.neg(y),
            },
        }
    }

    /// Group addition, all identity and inverse cases included.
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        let f = &self.field;
        let (x1, y1) = match p {
            AffinePoint::Identity => return *q,
            AffinePoint::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            AffinePoint::Identity => return *p,
            AffinePoint::Affine { x, y } => (x, y),
        };

        let lambda = if x1 == x2 {
            if f.add(y1, y2).is_zero() {
                // Q = -P, including the 2-torsion case y = 0.
                return AffinePoint::Identity;
            }
            // Tangent: (3x^2 + a) / 2y. y1 is non-zero here.
            let x1_sq = f.square(x1);
            let num = f.add(&f.add(&x1_sq, &x1_sq), &f.add(&x1_sq, &self.a));
            let den = f.add(y1, y1);
            match f.invert(&den) {
                Some(inv) => f.mul(&num, &inv),
                None => return AffinePoint::Identity, // unreachable: den != 0
            }
        } else {
            // Chord: (y2 - y1) / (x2 - x1), denominator non-zero by branch.
            let num = f.sub(y2, y1);
            let den = f.sub(x2, x1);
            match f.invert(&den) {
                Some(inv) => f.mul(&num, &inv),
                None => return AffinePoint::Identity, // unreachable: den != 0
            }
        };

        let x3 = f.sub(&f.sub(&f.square(&lambda), x1), x2);
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x1, &x3)), y1);
        AffinePoint::Affine { x: x3, y: y3 }
    }

    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        self.add(point, point)
    }

    /// k * P by double-and-add over all 256 scalar bits. k = 0 yields the
    /// identity; k is taken as a raw integer, not reduced.
    pub fn scalar_mul(&self, k: &U256, point: &AffinePoint) -> AffinePoint {
        let mut acc = AffinePoint::Identity;
        for i in (0..256).rev() {
            acc = self.double(&acc);
            if k.bit(i) {
                acc = self.add(&acc, point);
            }
        }
        acc
    }

    /// Sum of k_i * P_i, accumulated left to right.
    pub fn msm(&self, scalars: &[U256], points: &[AffinePoint]) -> AffinePoint {
        debug_assert_eq!(scalars.len(), points.len());
        let mut acc = AffinePoint::Identity;
        for (k, p) in scalars.iter().zip(points) {
            acc = self.add(&acc, &self.scalar_mul(k, p));
        }
        acc
    }

    /// blinding * H + sum of values_i * generators_i.
    pub fn pedersen_commit(
        &self,
        blinding: &U256,
        h: &AffinePoint,
        values: &[U256],
        generators: &[AffinePoint],
    ) -> AffinePoint {
        debug_assert_eq!(values.len(), generators.len());
        let mut acc = self.scalar_mul(blinding, h);
        for (v, g) in values.iter().zip(generators) {
            acc = self.add(&acc, &self.scalar_mul(v, g));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // Helios: y^2 = x^3 - 3x + b over F_p, p = 2^255 - 19, G = (3, Gy).
    fn helios() -> (Curve, AffinePoint) {
        let field = Field::new(U256::from_le_bytes(&hex!(
            "edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"
        )));
        let a = field.reduce_signed(-3);
        let b = U256::from_le_bytes(&hex!(
            "d43ad7ede19eb42235bf1341386f3f043b7bbb3e6ba794beb870eab039c7e822"
        ));
        let gy = U256::from_le_bytes(&hex!(
            "f43e18e339e643d2dca586c5dd3b0059075f2050836692bd1c72c07ad9747b53"
        ));
        let g = AffinePoint::Affine { x: U256::from_u64(3), y: gy };
        (Curve::new(field, a, b), g)
    }

    // Selene: over F_q (the Helios order), G = (1, Gy).
    fn selene() -> (Curve, AffinePoint) {
        let field = Field::new(U256::from_le_bytes(&hex!(
            "9fc7277972d2b66e586b65b72c787fbfffffffffffffffffffffffffffffff7f"
        )));
        let a = field.reduce_signed(-3);
        let b = U256::from_le_bytes(&hex!(
            "58455acb8309de680e90ae06df4b94f379e2ff95a5bb517fc176586913771270"
        ));
        let gy = U256::from_le_bytes(&hex!(
            "d2fdd3a1a60a1e74379bf0c898b18b935f825c457731c95792ca5cb827d9197a"
        ));
        let g = AffinePoint::Affine { x: U256::ONE, y: gy };
        (Curve::new(field, a, b), g)
    }

    #[test]
    fn generators_on_curve() {
        let (helios, hg) = helios();
        let (selene, sg) = selene();
        assert!(helios.is_on_curve(&hg));
        assert!(selene.is_on_curve(&sg));
    }

    #[test]
    fn identity_is_neutral() {
        let (curve, g) = helios();
        assert_eq!(curve.add(&AffinePoint::Identity, &g), g);
        assert_eq!(curve.add(&g, &AffinePoint::Identity), g);
        assert_eq!(curve.negate(&AffinePoint::Identity), AffinePoint::Identity);
        assert_eq!(curve.double(&AffinePoint::Identity), AffinePoint::Identity);
    }

    #[test]
    fn add_negation_gives_identity() {
        let (curve, g) = helios();
        assert_eq!(curve.add(&g, &curve.negate(&g)), AffinePoint::Identity);
    }

    #[test]
    fn scalar_mul_recursion() {
        let (curve, g) = selene();
        assert_eq!(curve.scalar_mul(&U256::ZERO, &g), AffinePoint::Identity);
        assert_eq!(curve.scalar_mul(&U256::ONE, &g), g);
        let mut acc = AffinePoint::Identity;
        for k in 1..=6u64 {
            acc = curve.add(&acc, &g);
            assert_eq!(curve.scalar_mul(&U256::from_u64(k), &g), acc);
            assert!(curve.is_on_curve(&acc));
        }
    }

    #[test]
    fn double_is_add_self() {
        let (curve, g) = helios();
        assert_eq!(curve.double(&g), curve.add(&g, &g));
    }

    #[test]
    fn addition_commutes_and_associates() {
        let (curve, g) = helios();
        let g2 = curve.double(&g);
        let g3 = curve.add(&g2, &g);
        assert_eq!(curve.add(&g, &g2), curve.add(&g2, &g));
        assert_eq!(curve.add(&curve.add(&g, &g2), &g3), curve.add(&g, &curve.add(&g2, &g3)));
    }

    #[test]
    fn decode_encode_round_trip() {
        let (curve, g) = helios();
        for k in 1..=5u64 {
            let p = curve.scalar_mul(&U256::from_u64(k), &g);
            let encoded = curve.encode_point(&p);
            let decoded = curve.decode_point(&encoded).unwrap();
            assert_eq!(decoded, p);
            assert_eq!(curve.encode_point(&decoded), encoded);
        }
    }

    #[test]
    fn decode_all_zero_is_identity() {
        let (helios, _) = helios();
        let (selene, _) = selene();
        assert_eq!(helios.decode_point(&[0u8; 32]), Some(AffinePoint::Identity));
        assert_eq!(selene.decode_point(&[0u8; 32]), Some(AffinePoint::Identity));
    }

    #[test]
    fn decode_rejects_non_canonical_x() {
        let (curve, _) = helios();
        // p itself, with the parity bit clear: x >= p must fail.
        let bytes = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert_eq!(curve.decode_point(&bytes), None);
    }

    #[test]
    fn decode_selects_parity() {
        let (curve, g) = helios();
        let g2 = curve.double(&g);
        let mut flipped = curve.encode_point(&g2);
        flipped[31] ^= 0x80;
        let decoded = curve.decode_point(&flipped).unwrap();
        assert_eq!(decoded, curve.negate(&g2));
    }

    #[test]
    fn msm_matches_sum() {
        let (curve, g) = selene();
        let g2 = curve.double(&g);
        let scalars = [U256::from_u64(3), U256::from_u64(5)];
        let points = [g, g2];
        // 3G + 5*(2G) = 13G
        assert_eq!(
            curve.msm(&scalars, &points),
            curve.scalar_mul(&U256::from_u64(13), &g)
        );
        assert_eq!(curve.msm(&[], &[]), AffinePoint::Identity);
    }

    #[test]
    fn pedersen_matches_msm() {
        let (curve, g) = helios();
        let h = curve.double(&g);
        let values = [U256::from_u64(7)];
        let generators = [g];
        // 2*H + 7*G = 2*2G + 7G = 11G
        assert_eq!(
            curve.pedersen_commit(&U256::from_u64(2), &h, &values, &generators),
            curve.scalar_mul(&U256::from_u64(11), &g)
        );
    }
}
