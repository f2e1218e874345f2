//! # Error Types
//!
//! This module defines error types used throughout the img2rom library.

use thiserror::Error;

/// Main error type for img2rom operations
#[derive(Debug, Error)]
pub enum Img2RomError {
    /// Image decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// A pixel sample outside the accepted 1-bit domain
    #[error("Invalid pixel value {value} at ({x}, {y}): expected 0, 1, or 255")]
    InvalidPixel { value: u8, x: u32, y: u32 },

    /// Image dimensions the packer cannot represent
    #[error("Unsupported geometry: {0}")]
    Geometry(String),

    /// Invalid hex record payload size
    #[error("Invalid record size: {0}")]
    RecordSize(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
