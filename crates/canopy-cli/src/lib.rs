//! CLI logic for the Canopy tree layout tool.
//!
//! This module contains the core CLI logic: read a node list, lay it out and
//! export the result.

pub mod error_adapter;

mod args;
mod config;
mod input;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use canopy::{CanopyError, export};

/// Run the Canopy CLI application
///
/// This function reads the input file, computes the tree layout and writes
/// the exported layout to the output file, or to stdout when no output path
/// is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CanopyError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input decoding errors
/// - Layout errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), CanopyError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing tree"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }

    let nodes = input::load_nodes(&args.input)?;
    let layout = canopy::layout(nodes)?;

    let exporter = export::exporter_for(app_config.output());
    let rendered = exporter.export(&layout)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(
                output_file = path,
                format:% = app_config.output().format();
                "Layout exported successfully"
            );
        }
        None => {
            io::stdout().lock().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}
