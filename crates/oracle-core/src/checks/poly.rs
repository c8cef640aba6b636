//! Polynomial-ring vector checks, plus the high-degree multiplication
//! category whose operands are rebuilt from a deterministic pattern.

use super::{claimed, claimed_vec, elem, elems, le_hex};
use crate::bigint::U256;
use crate::errors::OracleError;
use crate::field::Field;
use crate::poly;
use crate::report::SectionReport;
use crate::vectors::{HighDegreePolyMulSection, PolynomialSection};

pub fn check_polynomial_section(
    field: &Field,
    name: &str,
    section: &PolynomialSection,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new(name);

    for v in &section.from_roots {
        let label = format!("from_roots/{}", v.label);
        let actual = poly::from_roots(field, &elems(field, &v.roots));
        compare_coeffs(&mut report, label, &actual, &v.coefficients);
    }

    for v in &section.evaluate {
        let label = format!("evaluate/{}", v.label);
        let actual = poly::evaluate(field, &elems(field, &v.coefficients), &elem(field, &v.x));
        if actual == claimed(&v.result) {
            report.pass(label);
        } else {
            report.fail(
                label,
                format!("expected {}, got {}", hex::encode(v.result), le_hex(&actual)),
            );
        }
    }

    for v in &section.mul {
        let label = format!("mul/{}", v.label);
        let actual = poly::multiply(
            field,
            &elems(field, &v.a_coefficients),
            &elems(field, &v.b_coefficients),
        );
        let expected = claimed_vec(&v.coefficients);
        if actual == expected {
            report.pass(label);
        } else {
            report.fail(
                label,
                format!(
                    "coefficient mismatch (degree {} vs {})",
                    actual.len() - 1,
                    expected.len().max(1) - 1
                ),
            );
        }
    }

    for v in &section.add {
        let label = format!("add/{}", v.label);
        let actual = poly::add(
            field,
            &elems(field, &v.a_coefficients),
            &elems(field, &v.b_coefficients),
        );
        compare_coeffs(&mut report, label, &actual, &v.coefficients);
    }

    for v in &section.sub {
        let label = format!("sub/{}", v.label);
        let actual = poly::subtract(
            field,
            &elems(field, &v.a_coefficients),
            &elems(field, &v.b_coefficients),
        );
        compare_coeffs(&mut report, label, &actual, &v.coefficients);
    }

    for v in &section.divmod {
        let label = format!("divmod/{}", v.label);
        let (quotient, remainder) = poly::divmod(
            field,
            &elems(field, &v.numerator),
            &elems(field, &v.denominator),
        )?;
        if quotient != claimed_vec(&v.quotient) {
            report.fail(label, "quotient mismatch");
        } else if remainder != claimed_vec(&v.remainder) {
            report.fail(label, "remainder mismatch");
        } else {
            report.pass(label);
        }
    }

    for v in &section.interpolate {
        let label = format!("interpolate/{}", v.label);
        if v.xs.len() != v.ys.len() {
            return Err(OracleError::MalformedVector {
                label,
                reason: format!("{} xs but {} ys", v.xs.len(), v.ys.len()),
            });
        }
        let actual = poly::interpolate(field, &elems(field, &v.xs), &elems(field, &v.ys))?;
        compare_coeffs(&mut report, label, &actual, &v.coefficients);
    }

    Ok(report)
}

pub fn check_high_degree_section(
    fp: &Field,
    fq: &Field,
    section: &HighDegreePolyMulSection,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new("high_degree_poly_mul");

    for (field_name, field, vectors) in [("fp", fp, &section.fp), ("fq", fq, &section.fq)] {
        for v in vectors {
            let n = v.n_coeffs;

            // Operands follow the documented pattern: a_i = (i+1) mod M,
            // b_i = (i+n+1) mod M.
            let a_coeffs: Vec<U256> = (0..n)
                .map(|i| field.reduce(&U256::from_u64(i as u64 + 1)))
                .collect();
            let b_coeffs: Vec<U256> = (0..n)
                .map(|i| field.reduce(&U256::from_u64((i + n) as u64 + 1)))
                .collect();

            let expected_degree = if n > 0 { (n - 1) * 2 } else { 0 };
            if v.result_degree != expected_degree {
                report.fail(
                    format!("{field_name}/{} (degree)", v.label),
                    format!("expected {}, got {}", expected_degree, v.result_degree),
                );
                continue;
            }

            // Product identity at independent points, each operand
            // evaluation recomputed from scratch.
            for check in &v.eval_checks {
                let x = elem(field, &check.x);
                let a_of_x = claimed(&check.a_of_x);
                let b_of_x = claimed(&check.b_of_x);

                let expected_a = poly::evaluate(field, &a_coeffs, &x);
                if expected_a != a_of_x {
                    report.fail(
                        format!("{field_name}/{} (a({}))", v.label, check.point),
                        format!("expected {}, got {}", le_hex(&expected_a), le_hex(&a_of_x)),
                    );
                    continue;
                }

                let expected_b = poly::evaluate(field, &b_coeffs, &x);
                if expected_b != b_of_x {
                    report.fail(
                        format!("{field_name}/{} (b({}))", v.label, check.point),
                        format!("expected {}, got {}", le_hex(&expected_b), le_hex(&b_of_x)),
                    );
                    continue;
                }

                let product = field.mul(&field.reduce(&a_of_x), &field.reduce(&b_of_x));
                let label = format!("{field_name}/{} (eval@{})", v.label, check.point);
                if product == claimed(&check.result_of_x) {
                    report.pass(label);
                } else {
                    report.fail(
                        label,
                        format!(
                            "a*b = {}, result = {}",
                            le_hex(&product),
                            hex::encode(check.result_of_x)
                        ),
                    );
                }
            }
        }
    }

    Ok(report)
}

fn compare_coeffs(
    report: &mut SectionReport,
    label: String,
    actual: &[U256],
    expected_raw: &[[u8; 32]],
) {
    if actual == claimed_vec(expected_raw) {
        report.pass(label);
    } else {
        report.fail(label, "coefficient mismatch");
    }
}
