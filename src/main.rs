//! # vinoteca CLI
//!
//! Command-line interface for the vinoteca library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use vinoteca::cli::Args;
use vinoteca::parser::{CHAT_FILENAME, TranscriptParser};
use vinoteca::render::{GalleryRenderer, OUTPUT_FILENAME};
use vinoteca::{Result, VinotecaError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let chat_file = args.export_dir.join(CHAT_FILENAME);
    if !chat_file.exists() {
        return Err(VinotecaError::missing_transcript(chat_file));
    }

    let output_path = args
        .output
        .unwrap_or_else(|| args.export_dir.join(OUTPUT_FILENAME));

    println!("🍷 vinoteca v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Export:  {}", args.export_dir.display());
    println!("💾 Output:  {}", output_path.display());
    println!();

    println!("⏳ Parsing chat...");
    let parse_start = Instant::now();
    let records = TranscriptParser::new().parse(&chat_file)?;
    println!(
        "   Found {} wines ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("🖼️  Generating HTML...");
    let render_start = Instant::now();
    let html = GalleryRenderer::new().render(&records, &args.export_dir)?;
    println!(
        "   {} bytes rendered ({:.2}s)",
        html.len(),
        render_start.elapsed().as_secs_f64()
    );

    fs::write(&output_path, html)?;

    println!();
    println!("✅ Done! Open {}", output_path.display());
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
