//! # img2rom CLI
//!
//! Command-line front end for the bitmap converter.
//!
//! ## Usage
//!
//! ```bash
//! # Emit the PROGMEM array literal and the Intel-HEX stream
//! img2rom doge.png
//!
//! # Name the generated array
//! img2rom --name DOGE_ROM doge.png
//!
//! # Just the hex records, 16 bytes per record
//! img2rom --ihex-only --rec-size 16 doge.png
//! ```
//!
//! Both encodings go to stdout, array literal first. Diagnostics go through
//! the `log` facade (set `RUST_LOG=debug` to see them on stderr).

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use img2rom::{BinaryImage, Img2RomError, ihex, progmem};

/// img2rom - 1-bit image to PROGMEM / Intel-HEX converter
#[derive(Parser, Debug)]
#[command(name = "img2rom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image file to convert (must be strictly 1-bit, width a multiple of 8)
    file: PathBuf,

    /// Identifier for the generated array
    #[arg(long, default_value = progmem::DEFAULT_ARRAY_NAME)]
    name: String,

    /// Payload bytes per hex record
    #[arg(long, default_value_t = ihex::DEFAULT_REC_SIZE)]
    rec_size: usize,

    /// Emit only the PROGMEM array literal
    #[arg(long, conflicts_with = "ihex_only")]
    array_only: bool,

    /// Emit only the Intel-HEX record stream
    #[arg(long)]
    ihex_only: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Img2RomError> {
    let cli = Cli::parse();

    let decoded = image::open(&cli.file).map_err(|e| {
        Img2RomError::Image(format!("Failed to open {}: {}", cli.file.display(), e))
    })?;
    log::debug!(
        "decoded {} ({}x{} pixels)",
        cli.file.display(),
        decoded.width(),
        decoded.height()
    );

    // Validation happens in full before anything is written, so a bad image
    // never produces partial output.
    let image = BinaryImage::from_dynamic(&decoded)?;
    let packed = image.pack()?;
    log::debug!(
        "packed {} bytes ({} rows x {} bytes)",
        packed.bytes().len(),
        packed.height(),
        packed.width_bytes()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.ihex_only {
        out.write_all(progmem::render(&packed, &cli.name).as_bytes())?;
    }
    if !cli.array_only {
        out.write_all(ihex::render(packed.bytes(), cli.rec_size)?.as_bytes())?;
    }

    Ok(())
}
