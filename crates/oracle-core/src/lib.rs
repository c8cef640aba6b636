//! Independent verification oracle for Helios/Selene test vectors.
//!
//! The Helios/Selene pair is a two-cycle of short-Weierstrass curves: the
//! scalar field of each curve is the base field of the other. A separate
//! production implementation emits a JSON document of labeled input/output
//! vectors for its arithmetic primitives; this crate recomputes every
//! claimed result from first principles, using its own fixed-width big
//! integers, modular arithmetic, square roots, group law, and polynomial
//! ring, and reports agreement or divergence per vector.
//!
//! Nothing here is constant-time or fast, on purpose. The only obligation
//! is exact reference computation and precise fault reporting.
//!
//! Entry point: load a [`vectors::VectorDocument`], hand it to
//! [`harness::run_document`], and inspect the returned [`RunReport`].

pub mod bigint;
pub mod checks;
pub mod curve;
pub mod divisor;
pub mod errors;
pub mod field;
pub mod harness;
pub mod point;
pub mod poly;
pub mod report;
pub mod sqrt;
pub mod system;
pub mod vectors;

pub use bigint::{U256, U512};
pub use curve::Curve;
pub use errors::OracleError;
pub use field::Field;
pub use harness::run_document;
pub use point::AffinePoint;
pub use report::{CheckStatus, RunReport, Tally, Verdict};
pub use system::CurveSystem;
pub use vectors::VectorDocument;
