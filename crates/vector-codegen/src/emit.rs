//! Rust source emission for vector tables.
//!
//! Emission scope matches the embedded-harness needs: parameters, both
//! scalar sections, both point sections, the wei25519 bridge, and
//! batch_invert. Polynomial and divisor vectors stay JSON-only. Fixed-shape
//! categories become record structs with a table; variable-length
//! categories (msm, pedersen, batch_invert) become per-label statics.

use std::fmt::Write;

use helioselene_oracle_core::vectors::{
    BatchInvertSection, Parameters, PointSection, ScalarSection, VectorDocument, Wei25519Section,
};

pub fn emit_document(doc: &VectorDocument) -> String {
    let mut out = String::new();
    out.push_str("// Auto-generated by vector-codegen. DO NOT EDIT.\n");
    out.push_str("// Source: Helios/Selene JSON test-vector document.\n\n");
    out.push_str("#![allow(dead_code)]\n\n");

    emit_parameters(&mut out, &doc.parameters);
    if let Some(s) = &doc.helios_scalar {
        emit_scalar_section(&mut out, "helios_scalar", s);
    }
    if let Some(s) = &doc.selene_scalar {
        emit_scalar_section(&mut out, "selene_scalar", s);
    }
    if let Some(s) = &doc.helios_point {
        emit_point_section(&mut out, "helios_point", s);
    }
    if let Some(s) = &doc.selene_point {
        emit_point_section(&mut out, "selene_point", s);
    }
    if let Some(s) = &doc.wei25519 {
        emit_wei25519_section(&mut out, s);
    }
    if let Some(s) = &doc.batch_invert {
        emit_batch_invert_section(&mut out, s);
    }
    out
}

/// `[0x01, 0x02, ...]` on a single line; generated files are not hand-read.
fn bytes_lit(bytes: &[u8]) -> String {
    let parts: Vec<String> = bytes.iter().map(|b| format!("0x{b:02x}")).collect();
    format!("[{}]", parts.join(", "))
}

/// Uppercase static-name fragment derived from a vector label.
fn label_ident(label: &str) -> String {
    let mut ident: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

fn emit_parameters(out: &mut String, params: &Parameters) {
    out.push_str("pub mod parameters {\n");
    let fields: [(&str, &[u8; 32]); 8] = [
        ("HELIOS_ORDER", &params.helios_order),
        ("SELENE_ORDER", &params.selene_order),
        ("HELIOS_B", &params.helios_b),
        ("SELENE_B", &params.selene_b),
        ("HELIOS_GX", &params.helios_gx),
        ("HELIOS_GY", &params.helios_gy),
        ("SELENE_GX", &params.selene_gx),
        ("SELENE_GY", &params.selene_gy),
    ];
    for (name, bytes) in fields {
        let _ = writeln!(out, "    pub static {name}: [u8; 32] = {};", bytes_lit(bytes));
    }
    let _ = writeln!(out, "    pub static CURVE_A: i64 = {};", params.curve_a);
    out.push_str("}\n\n");
}

fn emit_scalar_section(out: &mut String, name: &str, section: &ScalarSection) {
    let _ = writeln!(out, "pub mod {name} {{");

    if !section.from_bytes.is_empty() {
        out.push_str(
            "    pub struct FromBytesVector { pub label: &'static str, pub input: [u8; 32], pub valid: bool, pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static FROM_BYTES_VECTORS: &[FromBytesVector] = &[\n");
        for v in &section.from_bytes {
            let _ = writeln!(
                out,
                "        FromBytesVector {{ label: {:?}, input: {}, valid: {}, result: {} }},",
                v.label,
                bytes_lit(&v.input),
                v.result.is_some(),
                bytes_lit(&v.result.unwrap_or([0u8; 32])),
            );
        }
        out.push_str("    ];\n\n");
    }

    for (struct_name, table_name, vectors) in [
        ("AddVector", "ADD_VECTORS", &section.add),
        ("SubVector", "SUB_VECTORS", &section.sub),
        ("MulVector", "MUL_VECTORS", &section.mul),
    ] {
        if vectors.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "    pub struct {struct_name} {{ pub label: &'static str, pub a: [u8; 32], pub b: [u8; 32], pub result: [u8; 32] }}",
        );
        let _ = writeln!(out, "    pub static {table_name}: &[{struct_name}] = &[");
        for v in vectors {
            let _ = writeln!(
                out,
                "        {struct_name} {{ label: {:?}, a: {}, b: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                bytes_lit(&v.b),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    for (struct_name, table_name, vectors) in [
        ("SqVector", "SQ_VECTORS", &section.sq),
        ("NegateVector", "NEGATE_VECTORS", &section.negate),
    ] {
        if vectors.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "    pub struct {struct_name} {{ pub label: &'static str, pub a: [u8; 32], pub result: [u8; 32] }}",
        );
        let _ = writeln!(out, "    pub static {table_name}: &[{struct_name}] = &[");
        for v in vectors {
            let _ = writeln!(
                out,
                "        {struct_name} {{ label: {:?}, a: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.invert.is_empty() {
        out.push_str(
            "    pub struct InvertVector { pub label: &'static str, pub a: [u8; 32], pub valid: bool, pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static INVERT_VECTORS: &[InvertVector] = &[\n");
        for v in &section.invert {
            let _ = writeln!(
                out,
                "        InvertVector {{ label: {:?}, a: {}, valid: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                v.result.is_some(),
                bytes_lit(&v.result.unwrap_or([0u8; 32])),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.reduce_wide.is_empty() {
        out.push_str(
            "    pub struct ReduceWideVector { pub label: &'static str, pub input: [u8; 64], pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static REDUCE_WIDE_VECTORS: &[ReduceWideVector] = &[\n");
        for v in &section.reduce_wide {
            let _ = writeln!(
                out,
                "        ReduceWideVector {{ label: {:?}, input: {}, result: {} }},",
                v.label,
                bytes_lit(&v.input),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.muladd.is_empty() {
        out.push_str(
            "    pub struct MuladdVector { pub label: &'static str, pub a: [u8; 32], pub b: [u8; 32], pub c: [u8; 32], pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static MULADD_VECTORS: &[MuladdVector] = &[\n");
        for v in &section.muladd {
            let _ = writeln!(
                out,
                "        MuladdVector {{ label: {:?}, a: {}, b: {}, c: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                bytes_lit(&v.b),
                bytes_lit(&v.c),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.is_zero.is_empty() {
        out.push_str(
            "    pub struct IsZeroVector { pub label: &'static str, pub a: [u8; 32], pub result: bool }\n",
        );
        out.push_str("    pub static IS_ZERO_VECTORS: &[IsZeroVector] = &[\n");
        for v in &section.is_zero {
            let _ = writeln!(
                out,
                "        IsZeroVector {{ label: {:?}, a: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                v.result,
            );
        }
        out.push_str("    ];\n\n");
    }

    out.push_str("}\n\n");
}

fn emit_point_section(out: &mut String, name: &str, section: &PointSection) {
    let _ = writeln!(out, "pub mod {name} {{");

    if let Some(generator) = &section.generator {
        let _ = writeln!(out, "    pub static GENERATOR: [u8; 32] = {};", bytes_lit(generator));
    }
    if let Some(identity) = &section.identity {
        let _ = writeln!(out, "    pub static IDENTITY: [u8; 32] = {};", bytes_lit(identity));
    }
    if section.generator.is_some() || section.identity.is_some() {
        out.push('\n');
    }

    if !section.from_bytes.is_empty() {
        out.push_str(
            "    pub struct FromBytesVector { pub label: &'static str, pub input: [u8; 32], pub valid: bool, pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static FROM_BYTES_VECTORS: &[FromBytesVector] = &[\n");
        for v in &section.from_bytes {
            let _ = writeln!(
                out,
                "        FromBytesVector {{ label: {:?}, input: {}, valid: {}, result: {} }},",
                v.label,
                bytes_lit(&v.input),
                v.result.is_some(),
                bytes_lit(&v.result.unwrap_or([0u8; 32])),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.add.is_empty() {
        out.push_str(
            "    pub struct AddVector { pub label: &'static str, pub a: [u8; 32], pub b: [u8; 32], pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static ADD_VECTORS: &[AddVector] = &[\n");
        for v in &section.add {
            let _ = writeln!(
                out,
                "        AddVector {{ label: {:?}, a: {}, b: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                bytes_lit(&v.b),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    for (struct_name, table_name, vectors) in [
        ("DblVector", "DBL_VECTORS", &section.dbl),
        ("NegateVector", "NEGATE_VECTORS", &section.negate),
    ] {
        if vectors.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "    pub struct {struct_name} {{ pub label: &'static str, pub a: [u8; 32], pub result: [u8; 32] }}",
        );
        let _ = writeln!(out, "    pub static {table_name}: &[{struct_name}] = &[");
        for v in vectors {
            let _ = writeln!(
                out,
                "        {struct_name} {{ label: {:?}, a: {}, result: {} }},",
                v.label,
                bytes_lit(&v.a),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.scalar_mul.is_empty() {
        out.push_str(
            "    pub struct ScalarMulVector { pub label: &'static str, pub scalar: [u8; 32], pub point: [u8; 32], pub valid: bool, pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static SCALAR_MUL_VECTORS: &[ScalarMulVector] = &[\n");
        for v in &section.scalar_mul {
            let _ = writeln!(
                out,
                "        ScalarMulVector {{ label: {:?}, scalar: {}, point: {}, valid: {}, result: {} }},",
                v.label,
                bytes_lit(&v.scalar),
                bytes_lit(&v.point),
                v.result.is_some(),
                bytes_lit(&v.result.unwrap_or([0u8; 32])),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.x_coordinate.is_empty() {
        out.push_str(
            "    pub struct XCoordinateVector { pub label: &'static str, pub point: [u8; 32], pub x_bytes: [u8; 32] }\n",
        );
        out.push_str("    pub static X_COORDINATE_VECTORS: &[XCoordinateVector] = &[\n");
        for v in &section.x_coordinate {
            let _ = writeln!(
                out,
                "        XCoordinateVector {{ label: {:?}, point: {}, x_bytes: {} }},",
                v.label,
                bytes_lit(&v.point),
                bytes_lit(&v.x_bytes),
            );
        }
        out.push_str("    ];\n\n");
    }

    // Variable-length tables get per-label statics.
    for v in &section.msm {
        let ident = label_ident(&v.label);
        let _ = writeln!(out, "    pub static MSM_{ident}_SCALARS: &[[u8; 32]] = &[");
        for s in &v.scalars {
            let _ = writeln!(out, "        {},", bytes_lit(s));
        }
        out.push_str("    ];\n");
        let _ = writeln!(out, "    pub static MSM_{ident}_POINTS: &[[u8; 32]] = &[");
        for p in &v.points {
            let _ = writeln!(out, "        {},", bytes_lit(p));
        }
        out.push_str("    ];\n");
        let _ = writeln!(
            out,
            "    pub static MSM_{ident}_RESULT: [u8; 32] = {};\n",
            bytes_lit(&v.result)
        );
    }

    for v in &section.pedersen_commit {
        let ident = label_ident(&v.label);
        let _ = writeln!(
            out,
            "    pub static PEDERSEN_{ident}_BLINDING: [u8; 32] = {};",
            bytes_lit(&v.blinding)
        );
        let _ = writeln!(
            out,
            "    pub static PEDERSEN_{ident}_H: [u8; 32] = {};",
            bytes_lit(&v.h)
        );
        let _ = writeln!(out, "    pub static PEDERSEN_{ident}_VALUES: &[[u8; 32]] = &[");
        for value in &v.values {
            let _ = writeln!(out, "        {},", bytes_lit(value));
        }
        out.push_str("    ];\n");
        let _ = writeln!(out, "    pub static PEDERSEN_{ident}_GENERATORS: &[[u8; 32]] = &[");
        for generator in &v.generators {
            let _ = writeln!(out, "        {},", bytes_lit(generator));
        }
        out.push_str("    ];\n");
        let _ = writeln!(
            out,
            "    pub static PEDERSEN_{ident}_RESULT: [u8; 32] = {};\n",
            bytes_lit(&v.result)
        );
    }

    if !section.map_to_curve_single.is_empty() {
        out.push_str(
            "    pub struct MapToCurveSingleVector { pub label: &'static str, pub u: [u8; 32], pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static MAP_TO_CURVE_SINGLE_VECTORS: &[MapToCurveSingleVector] = &[\n");
        for v in &section.map_to_curve_single {
            let _ = writeln!(
                out,
                "        MapToCurveSingleVector {{ label: {:?}, u: {}, result: {} }},",
                v.label,
                bytes_lit(&v.u),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    if !section.map_to_curve_double.is_empty() {
        out.push_str(
            "    pub struct MapToCurveDoubleVector { pub label: &'static str, pub u0: [u8; 32], pub u1: [u8; 32], pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static MAP_TO_CURVE_DOUBLE_VECTORS: &[MapToCurveDoubleVector] = &[\n");
        for v in &section.map_to_curve_double {
            let _ = writeln!(
                out,
                "        MapToCurveDoubleVector {{ label: {:?}, u0: {}, u1: {}, result: {} }},",
                v.label,
                bytes_lit(&v.u0),
                bytes_lit(&v.u1),
                bytes_lit(&v.result),
            );
        }
        out.push_str("    ];\n\n");
    }

    out.push_str("}\n\n");
}

fn emit_wei25519_section(out: &mut String, section: &Wei25519Section) {
    out.push_str("pub mod wei25519 {\n");
    if !section.x_to_selene_scalar.is_empty() {
        out.push_str(
            "    pub struct XToScalarVector { pub label: &'static str, pub input: [u8; 32], pub valid: bool, pub result: [u8; 32] }\n",
        );
        out.push_str("    pub static X_TO_SCALAR_VECTORS: &[XToScalarVector] = &[\n");
        for v in &section.x_to_selene_scalar {
            let _ = writeln!(
                out,
                "        XToScalarVector {{ label: {:?}, input: {}, valid: {}, result: {} }},",
                v.label,
                bytes_lit(&v.input),
                v.result.is_some(),
                bytes_lit(&v.result.unwrap_or([0u8; 32])),
            );
        }
        out.push_str("    ];\n");
    }
    out.push_str("}\n\n");
}

fn emit_batch_invert_section(out: &mut String, section: &BatchInvertSection) {
    out.push_str("pub mod batch_invert {\n");
    for (field_name, vectors) in [("FP", &section.fp), ("FQ", &section.fq)] {
        for v in vectors {
            let ident = label_ident(&v.label);
            let _ = writeln!(out, "    pub static {field_name}_{ident}_INPUTS: &[[u8; 32]] = &[");
            for input in &v.inputs {
                let _ = writeln!(out, "        {},", bytes_lit(input));
            }
            out.push_str("    ];\n");
            let _ = writeln!(out, "    pub static {field_name}_{ident}_RESULTS: &[[u8; 32]] = &[");
            for result in &v.results {
                let _ = writeln!(out, "        {},", bytes_lit(result));
            }
            out.push_str("    ];\n\n");
        }
    }
    out.push_str("}\n\n");
}
