//! Scalar-field vector checks, ten categories per curve.

use super::{claimed, elem, le_hex};
use crate::bigint::U256;
use crate::errors::OracleError;
use crate::field::Field;
use crate::report::SectionReport;
use crate::vectors::ScalarSection;

pub fn check_scalar_section(
    field: &Field,
    name: &str,
    section: &ScalarSection,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new(name);

    for v in &section.from_bytes {
        let label = format!("from_bytes/{}", v.label);
        let value = U256::from_le_bytes(&v.input);
        match &v.result {
            None => {
                if &value >= field.modulus() {
                    report.pass(format!("{label} (rejected)"));
                } else {
                    report.fail(label, "expected rejection but input < modulus");
                }
            }
            Some(expected) => {
                if &value < field.modulus() && value == claimed(expected) {
                    report.pass(label);
                } else {
                    report.fail(
                        label,
                        format!("expected {}, got {}", hex::encode(expected), le_hex(&value)),
                    );
                }
            }
        }
    }

    for v in &section.add {
        compare(
            &mut report,
            format!("add/{}", v.label),
            field.add(&elem(field, &v.a), &elem(field, &v.b)),
            &v.result,
        );
    }

    for v in &section.sub {
        compare(
            &mut report,
            format!("sub/{}", v.label),
            field.sub(&elem(field, &v.a), &elem(field, &v.b)),
            &v.result,
        );
    }

    for v in &section.mul {
        compare(
            &mut report,
            format!("mul/{}", v.label),
            field.mul(&elem(field, &v.a), &elem(field, &v.b)),
            &v.result,
        );
    }

    for v in &section.sq {
        compare(
            &mut report,
            format!("sq/{}", v.label),
            field.square(&elem(field, &v.a)),
            &v.result,
        );
    }

    for v in &section.negate {
        compare(
            &mut report,
            format!("negate/{}", v.label),
            field.neg(&elem(field, &v.a)),
            &v.result,
        );
    }

    for v in &section.invert {
        let label = format!("invert/{}", v.label);
        let a = elem(field, &v.a);
        match (&v.result, field.invert(&a)) {
            (None, None) => report.pass(format!("{label} (rejected)")),
            (None, Some(_)) => report.fail(label, "expected rejection but a != 0"),
            (Some(_), None) => report.fail(label, "claimed an inverse of zero"),
            (Some(expected), Some(actual)) => {
                if actual == claimed(expected) {
                    report.pass(label);
                } else {
                    report.fail(
                        label,
                        format!("expected {}, got {}", hex::encode(expected), le_hex(&actual)),
                    );
                }
            }
        }
    }

    for v in &section.reduce_wide {
        compare(
            &mut report,
            format!("reduce_wide/{}", v.label),
            field.reduce_wide(&v.input),
            &v.result,
        );
    }

    for v in &section.muladd {
        compare(
            &mut report,
            format!("muladd/{}", v.label),
            field.muladd(&elem(field, &v.a), &elem(field, &v.b), &elem(field, &v.c)),
            &v.result,
        );
    }

    for v in &section.is_zero {
        let label = format!("is_zero/{}", v.label);
        let actual = U256::from_le_bytes(&v.a).is_zero();
        if actual == v.result {
            report.pass(label);
        } else {
            report.fail(label, format!("expected {}, got {}", v.result, actual));
        }
    }

    Ok(report)
}

fn compare(report: &mut SectionReport, label: String, actual: U256, expected: &[u8; 32]) {
    if actual == claimed(expected) {
        report.pass(label);
    } else {
        report.fail(
            label,
            format!("expected {}, got {}", hex::encode(expected), le_hex(&actual)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;

    fn le32(v: u64) -> [u8; 32] {
        U256::from_u64(v).to_le_bytes()
    }

    fn f7() -> Field {
        Field::new(U256::from_u64(7))
    }

    #[test]
    fn add_pass_and_fail() {
        let section = ScalarSection {
            add: vec![
                crate::vectors::BinaryVector {
                    label: "ok".into(),
                    a: le32(5),
                    b: le32(4),
                    result: le32(2),
                },
                crate::vectors::BinaryVector {
                    label: "bad".into(),
                    a: le32(5),
                    b: le32(4),
                    result: le32(3),
                },
            ],
            ..Default::default()
        };
        let report = check_scalar_section(&f7(), "scalar", &section).unwrap();
        assert_eq!(report.records[0].status, CheckStatus::Pass);
        assert_eq!(report.records[1].status, CheckStatus::Fail);
    }

    #[test]
    fn from_bytes_rejection_both_ways() {
        let section = ScalarSection {
            from_bytes: vec![
                crate::vectors::FromBytesVector {
                    label: "out_of_range".into(),
                    input: le32(9),
                    result: None,
                },
                crate::vectors::FromBytesVector {
                    label: "bogus_rejection".into(),
                    input: le32(3),
                    result: None,
                },
                crate::vectors::FromBytesVector {
                    label: "canonical".into(),
                    input: le32(3),
                    result: Some(le32(3)),
                },
            ],
            ..Default::default()
        };
        let report = check_scalar_section(&f7(), "scalar", &section).unwrap();
        assert_eq!(report.records[0].status, CheckStatus::Pass);
        assert_eq!(report.records[1].status, CheckStatus::Fail);
        assert_eq!(report.records[2].status, CheckStatus::Pass);
    }

    #[test]
    fn invert_zero_rejection() {
        let section = ScalarSection {
            invert: vec![
                crate::vectors::InvertVector {
                    label: "zero".into(),
                    a: le32(0),
                    result: None,
                },
                crate::vectors::InvertVector {
                    label: "three".into(),
                    a: le32(3),
                    result: Some(le32(5)),
                },
            ],
            ..Default::default()
        };
        let report = check_scalar_section(&f7(), "scalar", &section).unwrap();
        assert_eq!(report.records[0].status, CheckStatus::Pass);
        assert_eq!(report.records[1].status, CheckStatus::Pass);
    }
}
