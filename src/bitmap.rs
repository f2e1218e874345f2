//! # Binary Images and Bit Packing
//!
//! This module turns a decoded image into the packed byte sequence that both
//! output encodings are rendered from.
//!
//! ## Bit Packing
//!
//! Pixels are packed row-major, 8 pixels per byte, where each bit represents
//! one pixel:
//! - Bit 7 (MSB) = leftmost pixel of the group
//! - Bit 0 (LSB) = rightmost pixel of the group
//!
//! ```text
//! Pixels 1 1 1 1 0 0 0 0  →  byte 0xF0
//! Pixels 0 0 0 0 1 1 1 1  →  byte 0x0F
//! Pixels 1 0 1 0 1 0 1 0  →  byte 0xAA
//! ```
//!
//! ## Data Layout
//!
//! The packed sequence is organized row-by-row, `width / 8` bytes per row:
//!
//! ```text
//! Row 0:    b[0]          b[1]           ... b[width/8 - 1]
//! Row 1:    b[width/8]    b[width/8 + 1] ...
//! ...
//! Row h-1:  b[(h-1)*width/8]            ... b[h*width/8 - 1]
//! ```
//!
//! ## Pixel Value Domain
//!
//! The converter only handles strictly binary images. Two sample encodings
//! are accepted at the loader boundary:
//!
//! | Samples | Meaning |
//! |---------|---------|
//! | 0 / 1   | raw palette indices (indexed 1-bit images) |
//! | 0 / 255 | decoder-normalized monochrome (255 maps to 1) |
//!
//! Any other sample value means the input is not a 1-bit image (for example
//! a grayscale photo), and construction fails with
//! [`Img2RomError::InvalidPixel`] before anything is emitted.

use image::DynamicImage;

use crate::error::Img2RomError;

/// A validated binary image: every pixel is exactly 0 or 1.
///
/// Construct via [`BinaryImage::from_dynamic`] (decoded files) or
/// [`BinaryImage::from_raw`] (in-memory pixel grids). Both reject anything
/// outside the 1-bit domain, so downstream code never re-validates.
#[derive(Debug, Clone)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    /// Row-major pixel values, each 0 or 1.
    pixels: Vec<u8>,
}

impl BinaryImage {
    /// Validate a decoded image and lift it into the binary domain.
    ///
    /// The image is read through its 8-bit grayscale view. Samples of 0 stay
    /// 0; samples of 1 (palette form) or 255 (luma form) become 1. The two
    /// nonzero forms are mutually exclusive — an image containing both is
    /// rejected, since guessing which convention applies would silently flip
    /// bits. Any other sample fails with [`Img2RomError::InvalidPixel`].
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self, Img2RomError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        let mut saw_palette_one = false;
        let mut saw_luma_white = false;

        for y in 0..height {
            for x in 0..width {
                let value = gray.get_pixel(x, y)[0];
                let bit = match value {
                    0 => 0,
                    1 => {
                        saw_palette_one = true;
                        1
                    }
                    255 => {
                        saw_luma_white = true;
                        1
                    }
                    _ => return Err(Img2RomError::InvalidPixel { value, x, y }),
                };
                pixels.push(bit);
            }
        }

        if saw_palette_one && saw_luma_white {
            return Err(Img2RomError::Image(
                "image mixes sample values 1 and 255; ambiguous 1-bit encoding".to_string(),
            ));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a binary image from a row-major pixel buffer.
    ///
    /// Every value must already be 0 or 1, and the buffer length must be
    /// exactly `width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Img2RomError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Img2RomError::Geometry(format!(
                "pixel buffer length {} does not match {}x{} image ({} expected)",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        for (idx, &value) in pixels.iter().enumerate() {
            if value > 1 {
                return Err(Img2RomError::InvalidPixel {
                    value,
                    x: idx as u32 % width,
                    y: idx as u32 / width,
                });
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel value (0 or 1) at the given coordinates.
    ///
    /// ## Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[(y * self.width + x) as usize]
    }

    /// Pack the image into its byte sequence, 8 pixels per byte, MSB first.
    ///
    /// Each byte is accumulated shift-left-then-OR over ascending x, so the
    /// leftmost pixel of every 8-pixel group lands in bit 7.
    ///
    /// The width must be a multiple of 8. A partial trailing group cannot be
    /// represented without inventing or discarding pixels, so other widths
    /// fail with [`Img2RomError::Geometry`].
    ///
    /// ## Example
    ///
    /// ```
    /// use img2rom::bitmap::BinaryImage;
    ///
    /// let image = BinaryImage::from_raw(8, 1, vec![1, 0, 0, 0, 0, 0, 0, 1])?;
    /// let packed = image.pack()?;
    /// assert_eq!(packed.bytes(), &[0x81]);
    /// # Ok::<(), img2rom::Img2RomError>(())
    /// ```
    pub fn pack(&self) -> Result<PackedBitmap, Img2RomError> {
        if self.width % 8 != 0 {
            return Err(Img2RomError::Geometry(format!(
                "width {} is not a multiple of 8",
                self.width
            )));
        }

        let width_bytes = (self.width / 8) as usize;
        let height = self.height as usize;
        let mut bytes = Vec::with_capacity(width_bytes * height);

        for y in 0..self.height {
            for group in 0..width_bytes as u32 {
                let mut byte = 0u8;
                for bit in 0..8 {
                    byte = (byte << 1) | self.pixel(group * 8 + bit, y);
                }
                bytes.push(byte);
            }
        }

        Ok(PackedBitmap {
            width_bytes,
            height,
            bytes,
        })
    }
}

/// The packed byte sequence of a [`BinaryImage`].
///
/// Computed once, then consumed by both renderers ([`crate::progmem`] and
/// [`crate::ihex`]). Length is always `height * width_bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width_bytes: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    /// Row width in bytes (`width / 8`).
    pub fn width_bytes(&self) -> usize {
        self.width_bytes
    }

    /// Image height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The full packed sequence, row-major.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The bytes of one image row.
    ///
    /// ## Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bytes[y * self.width_bytes..(y + 1) * self.width_bytes]
    }

    /// Iterator over row byte slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(self.width_bytes)
    }
}

// ============================================================================
// TESTS
// ============================================================================
