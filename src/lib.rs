//! # img2rom - 1-bit Bitmap Converter
//!
//! img2rom converts a 1-bit raster image into two textual encodings of the
//! same pixel data:
//!
//! - **PROGMEM array literal**: a C byte array declaration for embedding the
//!   bitmap in firmware source
//! - **Intel-HEX records**: a checksummed record stream for uploading the
//!   bitmap through a firmware `import` command
//!
//! Pixels are packed row-major, 8 per byte, leftmost pixel in the most
//! significant bit. The packed byte sequence is computed once and both
//! renderers consume it independently.
//!
//! ## Quick Start
//!
//! ```no_run
//! use img2rom::{bitmap::BinaryImage, ihex, progmem};
//!
//! // Decode and validate a strictly binary image
//! let decoded = image::open("doge.png")
//!     .map_err(|e| img2rom::Img2RomError::Image(e.to_string()))?;
//! let image = BinaryImage::from_dynamic(&decoded)?;
//!
//! // Pack once, render twice
//! let packed = image.pack()?;
//! print!("{}", progmem::render(&packed, "DOGE_ROM"));
//! print!("{}", ihex::render(packed.bytes(), ihex::DEFAULT_REC_SIZE)?);
//!
//! # Ok::<(), img2rom::Img2RomError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bitmap`] | Binary image validation and MSB-first bit packing |
//! | [`progmem`] | PROGMEM array literal rendering |
//! | [`ihex`] | Intel-HEX record rendering |
//! | [`error`] | Error types |

pub mod bitmap;
pub mod error;
pub mod ihex;
pub mod progmem;

// Re-exports for convenience
pub use bitmap::{BinaryImage, PackedBitmap};
pub use error::Img2RomError;
