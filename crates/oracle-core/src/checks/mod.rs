//! Per-category check routines.
//!
//! Every routine is a pure function from a typed document section to a
//! `SectionReport`. Vector-level disagreement is recorded and execution
//! continues; only corpus-level malformation surfaces as `Err`.

pub mod batch;
pub mod bridge;
pub mod divisor;
pub mod point;
pub mod poly;
pub mod scalar;

use crate::bigint::U256;
use crate::field::Field;

/// Reason string attached to every deferred check.
pub(crate) const DEFERRED: &str = "deferred to external algebra system";

/// Little-endian hex of a field element, for report details.
pub(crate) fn le_hex(v: &U256) -> String {
    hex::encode(v.to_le_bytes())
}

/// First half of an encoding, enough to identify a point in a report line.
pub(crate) fn hex_prefix(bytes: &[u8; 32]) -> String {
    format!("{}...", &hex::encode(bytes)[..32])
}

/// Decode a document operand into the field, reducing on the way in.
pub(crate) fn elem(field: &Field, bytes: &[u8; 32]) -> U256 {
    field.reduce(&U256::from_le_bytes(bytes))
}

pub(crate) fn elems(field: &Field, raw: &[[u8; 32]]) -> Vec<U256> {
    raw.iter().map(|b| elem(field, b)).collect()
}

/// Decode claimed outputs without reduction; a non-canonical claim must
/// compare unequal, not be silently normalized.
pub(crate) fn claimed(bytes: &[u8; 32]) -> U256 {
    U256::from_le_bytes(bytes)
}

pub(crate) fn claimed_vec(raw: &[[u8; 32]]) -> Vec<U256> {
    raw.iter().map(claimed).collect()
}
