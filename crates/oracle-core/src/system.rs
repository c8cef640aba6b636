//! Validated curve system built from the document's parameter block.
//!
//! The two-cycle structure: the Helios scalar field (order q) is the
//! Selene base field, and the Selene scalar field (order p) is the Helios
//! base field. Naming follows the production implementation: `fp` is the
//! field of p = 2^255 - 19 in production, `fq` the field of the Helios
//! order.

use crate::bigint::U256;
use crate::curve::Curve;
use crate::errors::OracleError;
use crate::field::Field;
use crate::point::AffinePoint;
use crate::vectors::Parameters;

#[derive(Debug, Clone)]
pub struct CurveSystem {
    /// Helios base field = Selene scalar field.
    pub fp: Field,
    /// Selene base field = Helios scalar field.
    pub fq: Field,
    pub helios: Curve,
    pub selene: Curve,
    /// Helios group order (the fq modulus).
    pub helios_order: U256,
    /// Selene group order (the fp modulus).
    pub selene_order: U256,
    pub helios_generator: AffinePoint,
    pub selene_generator: AffinePoint,
}

impl CurveSystem {
    /// Build and validate. A generator that is off curve or has
    /// non-canonical coordinates indicates a corrupt corpus and is fatal.
    pub fn from_parameters(params: &Parameters) -> Result<CurveSystem, OracleError> {
        let p = U256::from_le_bytes(&params.selene_order);
        let q = U256::from_le_bytes(&params.helios_order);
        if p.is_zero() || !p.is_odd() {
            return Err(OracleError::InvalidParameters(
                "selene_order must be an odd prime".into(),
            ));
        }
        if q.is_zero() || !q.is_odd() {
            return Err(OracleError::InvalidParameters(
                "helios_order must be an odd prime".into(),
            ));
        }

        let fp = Field::new(p);
        let fq = Field::new(q);
        let helios = Curve::new(
            fp,
            fp.reduce_signed(params.curve_a),
            U256::from_le_bytes(&params.helios_b),
        );
        let selene = Curve::new(
            fq,
            fq.reduce_signed(params.curve_a),
            U256::from_le_bytes(&params.selene_b),
        );

        let helios_generator =
            validate_generator(&helios, &params.helios_gx, &params.helios_gy, "helios")?;
        let selene_generator =
            validate_generator(&selene, &params.selene_gx, &params.selene_gy, "selene")?;

        Ok(CurveSystem {
            fp,
            fq,
            helios,
            selene,
            helios_order: q,
            selene_order: p,
            helios_generator,
            selene_generator,
        })
    }
}

fn validate_generator(
    curve: &Curve,
    gx: &[u8; 32],
    gy: &[u8; 32],
    name: &str,
) -> Result<AffinePoint, OracleError> {
    let x = curve
        .field()
        .element_from_le_bytes(gx)
        .ok_or_else(|| OracleError::InvalidParameters(format!("{name} generator x >= modulus")))?;
    let y = curve
        .field()
        .element_from_le_bytes(gy)
        .ok_or_else(|| OracleError::InvalidParameters(format!("{name} generator y >= modulus")))?;
    let g = AffinePoint::Affine { x, y };
    if !curve.is_on_curve(&g) {
        return Err(OracleError::InvalidParameters(format!(
            "{name} generator is not on the curve"
        )));
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn production_parameters() -> Parameters {
        Parameters {
            helios_order: hex!("9fc7277972d2b66e586b65b72c787fbfffffffffffffffffffffffffffffff7f"),
            selene_order: hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
            curve_a: -3,
            helios_b: hex!("d43ad7ede19eb42235bf1341386f3f043b7bbb3e6ba794beb870eab039c7e822"),
            selene_b: hex!("58455acb8309de680e90ae06df4b94f379e2ff95a5bb517fc176586913771270"),
            helios_gx: hex!("0300000000000000000000000000000000000000000000000000000000000000"),
            helios_gy: hex!("f43e18e339e643d2dca586c5dd3b0059075f2050836692bd1c72c07ad9747b53"),
            selene_gx: hex!("0100000000000000000000000000000000000000000000000000000000000000"),
            selene_gy: hex!("d2fdd3a1a60a1e74379bf0c898b18b935f825c457731c95792ca5cb827d9197a"),
        }
    }

    #[test]
    fn builds_from_production_parameters() {
        let system = CurveSystem::from_parameters(&production_parameters()).unwrap();
        assert!(system.helios.is_on_curve(&system.helios_generator));
        assert!(system.selene.is_on_curve(&system.selene_generator));
        // Two-cycle: each curve's base field is the other's scalar field.
        assert_eq!(system.helios.field().modulus(), &system.selene_order);
        assert_eq!(system.selene.field().modulus(), &system.helios_order);
    }

    #[test]
    fn rejects_generator_off_curve() {
        let mut params = production_parameters();
        params.helios_gx[0] ^= 1;
        assert!(matches!(
            CurveSystem::from_parameters(&params),
            Err(OracleError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_non_canonical_generator() {
        let mut params = production_parameters();
        params.selene_gy = params.helios_order;
        assert!(matches!(
            CurveSystem::from_parameters(&params),
            Err(OracleError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_even_modulus() {
        let mut params = production_parameters();
        params.selene_order = [0u8; 32];
        params.selene_order[0] = 4;
        assert!(matches!(
            CurveSystem::from_parameters(&params),
            Err(OracleError::InvalidParameters(_))
        ));
    }
}
