//! Drives every check over a loaded vector document.

use crate::checks;
use crate::errors::OracleError;
use crate::report::RunReport;
use crate::system::CurveSystem;
use crate::vectors::VectorDocument;

/// Run every present section in a fixed order and collect the reports.
/// Sequential and deterministic; absent sections contribute nothing.
pub fn run_document(doc: &VectorDocument) -> Result<RunReport, OracleError> {
    let system = CurveSystem::from_parameters(&doc.parameters)?;
    log::info!(
        "curve system validated: helios over p = {}..., selene over q = {}...",
        &hex::encode(system.selene_order.to_le_bytes())[..16],
        &hex::encode(system.helios_order.to_le_bytes())[..16],
    );

    let mut sections = Vec::new();

    if let Some(s) = &doc.helios_scalar {
        log::debug!("checking helios scalar");
        sections.push(checks::scalar::check_scalar_section(&system.fq, "helios scalar", s)?);
    }
    if let Some(s) = &doc.selene_scalar {
        log::debug!("checking selene scalar");
        sections.push(checks::scalar::check_scalar_section(&system.fp, "selene scalar", s)?);
    }
    if let Some(s) = &doc.helios_point {
        log::debug!("checking helios point");
        sections.push(checks::point::check_point_section(
            &system.helios,
            &system.helios_order,
            &system.helios_generator,
            "helios point",
            s,
        )?);
    }
    if let Some(s) = &doc.selene_point {
        log::debug!("checking selene point");
        sections.push(checks::point::check_point_section(
            &system.selene,
            &system.selene_order,
            &system.selene_generator,
            "selene point",
            s,
        )?);
    }
    if let Some(s) = &doc.fp_polynomial {
        log::debug!("checking fp polynomial");
        sections.push(checks::poly::check_polynomial_section(&system.fp, "fp polynomial", s)?);
    }
    if let Some(s) = &doc.fq_polynomial {
        log::debug!("checking fq polynomial");
        sections.push(checks::poly::check_polynomial_section(&system.fq, "fq polynomial", s)?);
    }
    if let Some(s) = &doc.batch_invert {
        log::debug!("checking batch_invert");
        sections.push(checks::batch::check_batch_invert_section(&system.fp, &system.fq, s)?);
    }
    if let Some(s) = &doc.helios_divisor {
        log::debug!("checking helios divisor");
        sections.push(checks::divisor::check_divisor_section(&system.helios, "helios divisor", s)?);
    }
    if let Some(s) = &doc.selene_divisor {
        log::debug!("checking selene divisor");
        sections.push(checks::divisor::check_divisor_section(&system.selene, "selene divisor", s)?);
    }
    if let Some(s) = &doc.wei25519 {
        log::debug!("checking wei25519");
        sections.push(checks::bridge::check_wei25519_section(&system.fp, s)?);
    }
    if let Some(s) = &doc.high_degree_poly_mul {
        log::debug!("checking high_degree_poly_mul");
        sections.push(checks::poly::check_high_degree_section(&system.fp, &system.fq, s)?);
    }

    Ok(RunReport { sections })
}
