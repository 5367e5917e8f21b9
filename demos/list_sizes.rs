//! Display the entries of an icon file and how each was obtained.
//!
//! Usage:
//!   cargo run --example list_sizes -- <input.ico>

use std::error::Error;

use icoview::IconFile;

fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.ico".to_string());

    println!("Opening {input_path}...");
    let icon = IconFile::open(&input_path)?;
    let metadata = icon.metadata();

    println!();
    println!("=== Icon Metadata ===");
    println!("Directory read: {}", metadata.directory_read);
    println!("Declared:       {}", metadata.declared_sizes.len());
    println!("Decoded:        {}", metadata.decoded_sizes.len());
    if let Some(largest) = metadata.largest {
        println!("Largest frame:  {largest}");
    }

    println!();
    println!("--- Entries ---");
    for image in &icon.icon_set()? {
        println!(
            "  {:<9} {:>8} bytes  ({})",
            image.label(),
            image.byte_length(),
            image.source().as_str(),
        );
    }

    Ok(())
}
