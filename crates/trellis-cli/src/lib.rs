//! CLI logic for the Trellis class-model tool.
//!
//! This module contains the core CLI logic for the Trellis class-model tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;

use trellis::{ModelBuilder, TrellisError, snapshot};

/// Hierarchical rendering of the model.
pub const OUTPUT_HIERARCHY: &str = "config.xml";
/// Metadata projection of the model.
pub const OUTPUT_META: &str = "meta.json";
/// Delta between the two snapshots.
pub const OUTPUT_DELTA: &str = "delta.json";
/// Result of reapplying the delta to the base snapshot.
pub const OUTPUT_RESULT: &str = "res_patched_config.json";

/// Run the Trellis CLI application
///
/// This function processes the model file into its hierarchy and metadata
/// artifacts, then diffs the two snapshot files and reapplies the delta,
/// writing all four outputs into the output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - Missing input files and other file I/O errors
/// - Configuration loading errors
/// - Model parsing or rendering errors
/// - Snapshot loading errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(
        model_path = args.model,
        out_dir = args.out_dir;
        "Processing model"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Prepare the output directory and check the inputs up front
    let out_dir = PathBuf::from(&args.out_dir);
    fs::create_dir_all(&out_dir)?;
    check_inputs_exist(&[&args.model, &args.base, &args.patched])?;

    // Process the model
    let markup = fs::read_to_string(&args.model)?;
    let builder = ModelBuilder::new(app_config);
    let graph = builder.parse(&markup)?;

    fs::write(
        out_dir.join(OUTPUT_HIERARCHY),
        builder.render_hierarchy(&graph)?,
    )?;
    fs::write(out_dir.join(OUTPUT_META), builder.meta_json(&graph)?)?;

    info!(out_dir = args.out_dir; "Model artifacts written");

    // Process the snapshots
    let base = snapshot::load(&args.base)?;
    let patched = snapshot::load(&args.patched)?;

    let delta = snapshot::diff(&base, &patched);
    snapshot::save(out_dir.join(OUTPUT_DELTA), &delta)?;

    let result = snapshot::apply(&base, &delta);
    snapshot::save(out_dir.join(OUTPUT_RESULT), &result)?;

    info!(out_dir = args.out_dir; "Snapshot artifacts written");

    Ok(())
}

/// Fails with a single NotFound error naming every missing input, before
/// any output is produced.
fn check_inputs_exist(inputs: &[&str]) -> Result<(), TrellisError> {
    let missing: Vec<&str> = inputs
        .iter()
        .copied()
        .filter(|input| !Path::new(input).exists())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(TrellisError::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("missing input files: {}", missing.join(", ")),
    )))
}
