//! vector-codegen - embed a JSON vector document as Rust constants
//!
//! Reads the same document the verifier consumes and writes a Rust source
//! file of static tables, one module per section, so a no_std test harness
//! can link the vectors without a JSON parser.

mod emit;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use helioselene_oracle_core::VectorDocument;

/// Generate Rust vector tables from a Helios/Selene JSON vector document
#[derive(Parser)]
#[command(name = "vector-codegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON vector document
    input: PathBuf,

    /// Path of the Rust source file to write
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc = VectorDocument::from_path(&cli.input)
        .with_context(|| format!("failed to load vector document {:?}", cli.input))?;
    let source = emit::emit_document(&doc);
    fs::write(&cli.output, source)
        .with_context(|| format!("failed to write {:?}", cli.output))?;

    println!("Generated {}", cli.output.display());
    Ok(())
}
