//! Typed schema of the JSON test-vector document.
//!
//! Hex-string fields decode to byte arrays at load time, so malformed hex
//! is a fatal parse error rather than a vector-level failure. Sections are
//! explicitly optional: an absent section means "no vectors for that
//! category". Unknown top-level keys (provenance strings and the like)
//! are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::errors::OracleError;

/// Serde helpers for fixed-width little-endian hex fields.
mod hex_format {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], String> {
        let raw = hex::decode(s).map_err(|e| format!("invalid hex: {e}"))?;
        raw.try_into()
            .map_err(|raw: Vec<u8>| format!("expected {N} bytes, got {}", raw.len()))
    }

    pub fn bytes32<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        decode_fixed(&String::deserialize(d)?).map_err(D::Error::custom)
    }

    pub fn bytes64<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 64], D::Error> {
        decode_fixed(&String::deserialize(d)?).map_err(D::Error::custom)
    }

    pub fn bytes32_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<[u8; 32]>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(s) => decode_fixed(&s).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }

    pub fn bytes32_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<[u8; 32]>, D::Error> {
        Vec::<String>::deserialize(d)?
            .iter()
            .map(|s| decode_fixed(s).map_err(D::Error::custom))
            .collect()
    }
}

/// The whole vector document.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorDocument {
    pub parameters: Parameters,
    #[serde(default)]
    pub helios_scalar: Option<ScalarSection>,
    #[serde(default)]
    pub selene_scalar: Option<ScalarSection>,
    #[serde(default)]
    pub helios_point: Option<PointSection>,
    #[serde(default)]
    pub selene_point: Option<PointSection>,
    #[serde(default)]
    pub fp_polynomial: Option<PolynomialSection>,
    #[serde(default)]
    pub fq_polynomial: Option<PolynomialSection>,
    #[serde(default)]
    pub batch_invert: Option<BatchInvertSection>,
    #[serde(default)]
    pub helios_divisor: Option<DivisorSection>,
    #[serde(default)]
    pub selene_divisor: Option<DivisorSection>,
    #[serde(default)]
    pub wei25519: Option<Wei25519Section>,
    #[serde(default)]
    pub high_degree_poly_mul: Option<HighDegreePolyMulSection>,
}

impl VectorDocument {
    /// Load and parse a document. Any failure here is corpus-level and
    /// fatal.
    pub fn from_path(path: &Path) -> Result<VectorDocument, OracleError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Global curve parameters. All fields are required; a missing one is a
/// fatal parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameters {
    /// Helios group order q = Selene base field modulus, 32 bytes LE.
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub helios_order: [u8; 32],
    /// Selene group order p = Helios base field modulus, 32 bytes LE.
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub selene_order: [u8; 32],
    /// Shared linear coefficient of both curve equations, as a signed
    /// integer (-3 in production).
    pub curve_a: i64,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub helios_b: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub selene_b: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub helios_gx: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub helios_gy: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub selene_gx: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub selene_gy: [u8; 32],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScalarSection {
    #[serde(default)]
    pub from_bytes: Vec<FromBytesVector>,
    #[serde(default)]
    pub add: Vec<BinaryVector>,
    #[serde(default)]
    pub sub: Vec<BinaryVector>,
    #[serde(default)]
    pub mul: Vec<BinaryVector>,
    #[serde(default)]
    pub sq: Vec<UnaryVector>,
    #[serde(default)]
    pub negate: Vec<UnaryVector>,
    #[serde(default)]
    pub invert: Vec<InvertVector>,
    #[serde(default)]
    pub reduce_wide: Vec<ReduceWideVector>,
    #[serde(default)]
    pub muladd: Vec<MulAddVector>,
    #[serde(default)]
    pub is_zero: Vec<IsZeroVector>,
}

/// Input plus a nullable expected result; null means the input must be
/// rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct FromBytesVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub input: [u8; 32],
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub result: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinaryVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub b: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnaryVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvertVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a: [u8; 32],
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub result: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReduceWideVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes64")]
    pub input: [u8; 64],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct MulAddVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub b: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub c: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct IsZeroVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a: [u8; 32],
    pub result: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointSection {
    /// Reference compressed encoding of the curve generator.
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub generator: Option<[u8; 32]>,
    /// Reference encoding of the identity (all zeros by construction).
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub identity: Option<[u8; 32]>,
    #[serde(default)]
    pub from_bytes: Vec<FromBytesVector>,
    #[serde(default)]
    pub add: Vec<BinaryVector>,
    #[serde(default)]
    pub dbl: Vec<UnaryVector>,
    #[serde(default)]
    pub negate: Vec<UnaryVector>,
    #[serde(default)]
    pub scalar_mul: Vec<ScalarMulVector>,
    #[serde(default)]
    pub msm: Vec<MsmVector>,
    #[serde(default)]
    pub pedersen_commit: Vec<PedersenVector>,
    #[serde(default)]
    pub x_coordinate: Vec<XCoordinateVector>,
    #[serde(default)]
    pub map_to_curve_single: Vec<MapToCurveSingleVector>,
    #[serde(default)]
    pub map_to_curve_double: Vec<MapToCurveDoubleVector>,
}

/// Null result marks an out-of-range scalar that must be rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalarMulVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub scalar: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub point: [u8; 32],
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub result: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MsmVector {
    pub label: String,
    pub n: usize,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub scalars: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub points: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PedersenVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub blinding: [u8; 32],
    #[serde(rename = "H", deserialize_with = "hex_format::bytes32")]
    pub h: [u8; 32],
    pub n: usize,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub values: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub generators: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct XCoordinateVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub point: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub x_bytes: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapToCurveSingleVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub u: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapToCurveDoubleVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub u0: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub u1: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolynomialSection {
    #[serde(default)]
    pub from_roots: Vec<FromRootsVector>,
    #[serde(default)]
    pub evaluate: Vec<EvaluateVector>,
    #[serde(default)]
    pub mul: Vec<PolyBinaryVector>,
    #[serde(default)]
    pub add: Vec<PolyBinaryVector>,
    #[serde(default)]
    pub sub: Vec<PolyBinaryVector>,
    #[serde(default)]
    pub divmod: Vec<DivmodVector>,
    #[serde(default)]
    pub interpolate: Vec<InterpolateVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FromRootsVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub roots: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub coefficients: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub coefficients: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub x: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result: [u8; 32],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolyBinaryVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub a_coefficients: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub b_coefficients: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub coefficients: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DivmodVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub numerator: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub denominator: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub quotient: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub remainder: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterpolateVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub xs: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub ys: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub coefficients: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchInvertSection {
    #[serde(default)]
    pub fp: Vec<BatchInvertVector>,
    #[serde(default)]
    pub fq: Vec<BatchInvertVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchInvertVector {
    pub label: String,
    pub n: usize,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub inputs: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub results: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DivisorSection {
    #[serde(default)]
    pub compute: Vec<DivisorVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DivisorVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub a_coefficients: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub b_coefficients: Vec<[u8; 32]>,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub eval_point_x: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub eval_point_y: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub eval_result: [u8; 32],
    /// Witness points in compressed encoding; every one must decode and
    /// lie on the curve.
    #[serde(deserialize_with = "hex_format::bytes32_vec")]
    pub points: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wei25519Section {
    #[serde(default)]
    pub x_to_selene_scalar: Vec<BridgeVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BridgeVector {
    pub label: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub input: [u8; 32],
    #[serde(default, deserialize_with = "hex_format::bytes32_opt")]
    pub result: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighDegreePolyMulSection {
    #[serde(default)]
    pub fp: Vec<HighDegreeVector>,
    #[serde(default)]
    pub fq: Vec<HighDegreeVector>,
}

/// Inputs are not stored; both operands follow the documented
/// deterministic pattern a_i = (i + 1) mod M, b_i = (i + n + 1) mod M.
#[derive(Debug, Clone, Deserialize)]
pub struct HighDegreeVector {
    pub label: String,
    pub n_coeffs: usize,
    pub result_degree: usize,
    #[serde(default)]
    pub eval_checks: Vec<HighDegreeEvalCheck>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighDegreeEvalCheck {
    /// Name of the evaluation point, used only in report labels.
    pub point: String,
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub x: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub a_of_x: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub b_of_x: [u8; 32],
    #[serde(deserialize_with = "hex_format::bytes32")]
    pub result_of_x: [u8; 32],
}
