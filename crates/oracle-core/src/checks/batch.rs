//! Batch-inversion vector checks for both fields.

use super::{claimed_vec, elems};
use crate::errors::OracleError;
use crate::field::Field;
use crate::report::SectionReport;
use crate::vectors::BatchInvertSection;

pub fn check_batch_invert_section(
    fp: &Field,
    fq: &Field,
    section: &BatchInvertSection,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new("batch_invert");

    for (field_name, field, vectors) in [("fp", fp, &section.fp), ("fq", fq, &section.fq)] {
        for v in vectors {
            let label = format!("{field_name}/{}", v.label);
            if v.inputs.len() != v.n || v.results.len() != v.n {
                return Err(OracleError::MalformedVector {
                    label,
                    reason: format!(
                        "n = {} but {} inputs and {} results",
                        v.n,
                        v.inputs.len(),
                        v.results.len()
                    ),
                });
            }
            let actual = field.batch_invert(&elems(field, &v.inputs));
            let expected = claimed_vec(&v.results);
            if actual == expected {
                report.pass(label);
            } else {
                let first_diff = actual
                    .iter()
                    .zip(&expected)
                    .position(|(a, e)| a != e)
                    .unwrap_or(0);
                report.fail(label, format!("mismatch at index {first_diff}"));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::U256;
    use crate::report::CheckStatus;
    use crate::vectors::BatchInvertVector;

    fn le32(v: u64) -> [u8; 32] {
        U256::from_u64(v).to_le_bytes()
    }

    fn f7() -> Field {
        Field::new(U256::from_u64(7))
    }

    #[test]
    fn zero_maps_to_zero() {
        let section = BatchInvertSection {
            fp: vec![BatchInvertVector {
                label: "with_zero".into(),
                n: 3,
                inputs: vec![le32(3), le32(0), le32(1)],
                // 3^-1 = 5 mod 7; zero passes through
                results: vec![le32(5), le32(0), le32(1)],
            }],
            fq: vec![],
        };
        let report = check_batch_invert_section(&f7(), &f7(), &section).unwrap();
        assert_eq!(report.records[0].status, CheckStatus::Pass);
    }

    #[test]
    fn mismatch_reports_first_index() {
        let section = BatchInvertSection {
            fp: vec![],
            fq: vec![BatchInvertVector {
                label: "wrong".into(),
                n: 2,
                inputs: vec![le32(3), le32(2)],
                results: vec![le32(5), le32(5)],
            }],
        };
        let report = check_batch_invert_section(&f7(), &f7(), &section).unwrap();
        assert_eq!(report.records[0].status, CheckStatus::Fail);
        assert!(report.records[0].detail.as_deref().unwrap().contains("index 1"));
    }

    #[test]
    fn length_mismatch_is_fatal() {
        let section = BatchInvertSection {
            fp: vec![BatchInvertVector {
                label: "short".into(),
                n: 2,
                inputs: vec![le32(3)],
                results: vec![le32(5), le32(0)],
            }],
            fq: vec![],
        };
        assert!(matches!(
            check_batch_invert_section(&f7(), &f7(), &section),
            Err(OracleError::MalformedVector { .. })
        ));
    }
}
