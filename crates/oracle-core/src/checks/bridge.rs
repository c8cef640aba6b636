//! Wei25519 cross-curve bridge checks.
//!
//! The bridge ingests a raw Wei25519 x-coordinate as an F_p element (an
//! F_p element is also a Selene scalar). Rejection is pure range
//! validation and is checked here; the coordinate transform itself is
//! deferred to the external algebra system.

use super::DEFERRED;
use crate::bigint::U256;
use crate::errors::OracleError;
use crate::field::Field;
use crate::report::SectionReport;
use crate::vectors::Wei25519Section;

pub fn check_wei25519_section(
    fp: &Field,
    section: &Wei25519Section,
) -> Result<SectionReport, OracleError> {
    let mut report = SectionReport::new("wei25519");

    for v in &section.x_to_selene_scalar {
        let label = format!("x_to_selene_scalar/{}", v.label);
        match &v.result {
            None => {
                // Non-canonical input: bit 255 set or x >= p, both of
                // which leave the raw value >= p.
                if &U256::from_le_bytes(&v.input) >= fp.modulus() {
                    report.pass(format!("{label} (rejected)"));
                } else {
                    report.fail(label, "expected rejection but input is canonical");
                }
            }
            Some(_) => report.skip(label, DEFERRED),
        }
    }

    Ok(report)
}
