use std::path::{Path, PathBuf};

use log::LevelFilter;
use outline_convert::convert;
use outline_core::init_with_level;

/// Default output path next to the source: `<stem><suffix>`.
fn derived_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "outline".to_string());
    source.with_file_name(format!("{stem}{suffix}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: outline-convert <image_path> [output_path] [square_output_path]");
        return Ok(());
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| derived_path(&source, "-outline.png"));
    let square_output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| derived_path(&source, "-outline-square.png"));

    let report = convert(&source, &output, &square_output)?;

    println!("Original: {}x{}", report.original.0, report.original.1);
    println!("Output: {}x{}", report.output.0, report.output.1);
    println!("Square: {}x{}", report.square.0, report.square.1);
    println!("Done: white outline on transparent background");

    Ok(())
}
