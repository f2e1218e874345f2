//! # PROGMEM Array Literal Rendering
//!
//! Renders a [`PackedBitmap`] as a C byte array declaration suitable for
//! pasting into AVR firmware source, where it lives in program memory:
//!
//! ```text
//! const uint8_t ROM[BITMAP_BYTES] PROGMEM = {
//!   0x80, 0xFF,
//!   0x00, 0x00,
//! };
//! ```
//!
//! One line per image row, each byte rendered as uppercase `0x%02X,`. The
//! array identifier is configurable ([`DEFAULT_ARRAY_NAME`] otherwise); the
//! `BITMAP_BYTES` size macro is part of the fixed grammar.
//!
//! This is a pure renderer — it never touches the output stream, so the
//! exact text can be asserted on directly in tests.

use crate::bitmap::PackedBitmap;

/// Array identifier used when the caller does not supply one.
pub const DEFAULT_ARRAY_NAME: &str = "ROM";

/// Render the packed bitmap as a PROGMEM array literal.
pub fn render(packed: &PackedBitmap, name: &str) -> String {
    // Opening line + one row line + closing line; rows are 7 chars per byte
    // plus the leading space and newline.
    let mut out =
        String::with_capacity(48 + packed.height() * (2 + packed.width_bytes() * 7));

    out.push_str(&format!("const uint8_t {}[BITMAP_BYTES] PROGMEM = {{\n", name));
    for row in packed.rows() {
        out.push(' ');
        for byte in row {
            out.push_str(&format!(" 0x{:02X},", byte));
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

// ============================================================================
// TESTS
// ============================================================================
