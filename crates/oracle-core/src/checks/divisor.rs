//! Divisor vector checks: function evaluation at the designated point,
//! the point itself on curve, and every witness point on curve.

use super::{claimed, elem, elems, le_hex};
use crate::curve::Curve;
use crate::divisor::evaluate_divisor;
use crate::errors::OracleError;
use crate::point::AffinePoint;
use crate::report::SectionReport;
use crate::vectors::DivisorSection;

pub fn check_divisor_section(
    curve: &Curve,
    name: &str,
    section: &DivisorSection,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new(name);
    let field = curve.field();

    for v in &section.compute {
        let a_coeffs = elems(field, &v.a_coefficients);
        let b_coeffs = elems(field, &v.b_coefficients);
        let x0 = elem(field, &v.eval_point_x);
        let y0 = elem(field, &v.eval_point_y);

        let label = format!("compute/{} (eval check)", v.label);
        let actual = evaluate_divisor(field, &a_coeffs, &b_coeffs, &x0, &y0);
        if actual == claimed(&v.eval_result) {
            report.pass(label);
        } else {
            report.fail(
                label,
                format!(
                    "expected {}, got {}",
                    hex::encode(v.eval_result),
                    le_hex(&actual)
                ),
            );
        }

        let label = format!("compute/{} (eval point on curve)", v.label);
        if curve.is_on_curve(&AffinePoint::Affine { x: x0, y: y0 }) {
            report.pass(label);
        } else {
            report.fail(label, "evaluation point is not on the curve");
        }

        // Witness points, short-circuiting at the first bad index. A
        // decoded point satisfies the curve equation by construction.
        let mut bad_index = None;
        for (i, bytes) in v.points.iter().enumerate() {
            if curve.decode_point(bytes).is_none() {
                bad_index = Some(i);
                break;
            }
        }
        let label = format!("compute/{} (witness points on curve)", v.label);
        match bad_index {
            None => report.pass(label),
            Some(i) => report.fail(label, format!("point[{i}] does not decode")),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::U256;
    use crate::field::Field;
    use crate::report::CheckStatus;
    use crate::vectors::DivisorVector;

    fn le32(v: u64) -> [u8; 32] {
        U256::from_u64(v).to_le_bytes()
    }

    // y^2 = x^3 + 3 over F_13 with (1, 2) on curve.
    fn tiny() -> Curve {
        Curve::new(Field::new(U256::from_u64(13)), U256::ZERO, U256::from_u64(3))
    }

    #[test]
    fn three_part_check() {
        let curve = tiny();
        let g = AffinePoint::Affine { x: U256::ONE, y: U256::from_u64(2) };
        // a(x) = 5, b(x) = 0: f(1, 2) = 5.
        let section = DivisorSection {
            compute: vec![DivisorVector {
                label: "constant".into(),
                a_coefficients: vec![le32(5)],
                b_coefficients: vec![le32(0)],
                eval_point_x: le32(1),
                eval_point_y: le32(2),
                eval_result: le32(5),
                points: vec![curve.encode_point(&g)],
            }],
        };
        let report = check_divisor_section(&curve, "divisor", &section).unwrap();
        assert_eq!(report.records.len(), 3);
        assert!(report.records.iter().all(|r| r.status == CheckStatus::Pass));
    }

    #[test]
    fn off_curve_eval_point_fails() {
        let curve = tiny();
        let section = DivisorSection {
            compute: vec![DivisorVector {
                label: "off".into(),
                a_coefficients: vec![le32(0)],
                b_coefficients: vec![le32(0)],
                eval_point_x: le32(1),
                eval_point_y: le32(3),
                eval_result: le32(0),
                points: vec![],
            }],
        };
        let report = check_divisor_section(&curve, "divisor", &section).unwrap();
        assert_eq!(report.records[1].status, CheckStatus::Fail);
    }

    #[test]
    fn bad_witness_point_names_index() {
        let curve = tiny();
        let g = AffinePoint::Affine { x: U256::ONE, y: U256::from_u64(2) };
        let mut bad = [0u8; 32];
        bad[0] = 2; // rhs = 11, a non-residue mod 13
        let section = DivisorSection {
            compute: vec![DivisorVector {
                label: "witness".into(),
                a_coefficients: vec![le32(0)],
                b_coefficients: vec![le32(0)],
                eval_point_x: le32(1),
                eval_point_y: le32(2),
                eval_result: le32(0),
                points: vec![curve.encode_point(&g), bad],
            }],
        };
        let report = check_divisor_section(&curve, "divisor", &section).unwrap();
        let witness = &report.records[2];
        assert_eq!(witness.status, CheckStatus::Fail);
        assert!(witness.detail.as_deref().unwrap().contains("point[1]"));
    }
}
