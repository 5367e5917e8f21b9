//! Export one entry of an icon file.
//!
//! Usage:
//!   cargo run --example export_frame -- <input.ico> <WxH> <output.(png|jpg)>

use std::error::Error;

use icoview::{ExportOptions, IconSize, Selection};

fn main() -> Result<(), Box<dyn Error>> {
    let mut arguments = std::env::args().skip(1);
    let input_path = arguments.next().unwrap_or_else(|| "input.ico".to_string());
    let size: IconSize = arguments
        .next()
        .unwrap_or_else(|| "32x32".to_string())
        .parse()?;

    let mut selection = Selection::new();
    let labels = selection.open(&input_path)?;
    println!("Available sizes: {}", labels.join(", "));

    selection.select_size(size)?;
    let output_path = arguments
        .next()
        .unwrap_or_else(|| selection.suggested_file_name());

    selection.export_current(&output_path, &ExportOptions::default())?;
    println!("Saved {size} to {output_path}");

    Ok(())
}
