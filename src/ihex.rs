//! # Intel-HEX Record Rendering
//!
//! Renders a packed byte sequence as an Intel-HEX record stream, the format
//! the firmware's serial `import` command consumes.
//!
//! ## Record Layout
//!
//! Every data record is one line:
//!
//! ```text
//! :LLAAAATTDD...DDCC
//!  │ │    │ │      └─ checksum, two's complement of the byte sum
//!  │ │    │ └─ data bytes, two uppercase hex digits each
//!  │ │    └─ record type (00 = data)
//!  │ └─ 16-bit load address
//!  └─ payload byte count
//! ```
//!
//! The stream always ends with the end-of-file record `:00000001FF`.
//!
//! ## Addressing
//!
//! The load address starts at 0 and advances by the configured record size
//! after every record, whether or not the final chunk is full. Addresses are
//! formatted as four hex digits; inputs large enough to push the address past
//! 0xFFFF are outside the 16-bit format and the output for them is
//! unspecified.
//!
//! ## Checksum
//!
//! Sum of {count, address high byte, address low byte, every data byte},
//! negated modulo 256:
//!
//! ```text
//! checksum = (-(LL + AA_hi + AA_lo + ΣDD)) & 0xFF
//! ```
//!
//! so a receiver summing every byte of a record, checksum included, gets 0.

use crate::error::Img2RomError;

/// Default payload size per record, in bytes.
pub const DEFAULT_REC_SIZE: usize = 32;

/// The fixed end-of-file record closing every stream.
pub const EOF_RECORD: &str = ":00000001FF";

/// Render a byte sequence as an Intel-HEX record stream.
///
/// The sequence is partitioned into chunks of `rec_size` bytes (the final
/// chunk may be shorter) and each chunk becomes one data record, followed by
/// the end-of-file record. One line per record, `\n` terminated.
///
/// A `rec_size` of 0 cannot make progress through the sequence and is
/// rejected.
pub fn render(bytes: &[u8], rec_size: usize) -> Result<String, Img2RomError> {
    if rec_size == 0 {
        return Err(Img2RomError::RecordSize(
            "record size must be at least 1".to_string(),
        ));
    }

    // 11 framing chars + 2 per data byte, per record, plus the EOF line.
    let record_count = bytes.len().div_ceil(rec_size);
    let mut out = String::with_capacity(record_count * (12 + 2 * rec_size) + 12);

    let mut address = 0usize;
    for chunk in bytes.chunks(rec_size) {
        out.push_str(&data_record(address, chunk));
        out.push('\n');
        address += rec_size;
    }

    out.push_str(EOF_RECORD);
    out.push('\n');
    Ok(out)
}

/// Format a single data record (no trailing newline).
pub fn data_record(address: usize, data: &[u8]) -> String {
    let mut line = format!(":{:02X}{:04X}00", data.len(), address);
    for byte in data {
        line.push_str(&format!("{:02X}", byte));
    }
    line.push_str(&format!("{:02X}", checksum(address, data)));
    line
}

/// Two's-complement checksum over count, address bytes, and payload.
fn checksum(address: usize, data: &[u8]) -> u8 {
    let mut sum = data.len() + (address >> 8) + (address & 0xFF);
    for &byte in data {
        sum += byte as usize;
    }
    (sum as u8).wrapping_neg()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Independent checksum computation for cross-checking record output.
    fn expected_checksum(len: usize, address: usize, data: &[u8]) -> u8 {
        let sum: usize =
            len + (address >> 8) + (address & 0xFF) + data.iter().map(|&b| b as usize).sum::<usize>();
        (sum as u8).wrapping_neg()
    }

    #[test]
    fn test_single_zero_byte() {
        // The 8x1 all-zero image: one data record, then EOF
        let text = render(&[0x00], DEFAULT_REC_SIZE).unwrap();
        assert_eq!(text, ":0100000000FF\n:00000001FF\n");
    }

    #[test]
    fn test_two_byte_record_checksum() {
        // 0x80 0xFF fits one record; compute the checksum independently
        // rather than trusting a hand-derived literal.
        let data = [0x80u8, 0xFF];
        let cksum = expected_checksum(2, 0, &data);
        let text = render(&data, DEFAULT_REC_SIZE).unwrap();
        assert_eq!(text, format!(":0200000080FF{:02X}\n:00000001FF\n", cksum));
    }

    #[test]
    fn test_empty_input_emits_only_eof() {
        let text = render(&[], DEFAULT_REC_SIZE).unwrap();
        assert_eq!(text, ":00000001FF\n");
    }

    #[test]
    fn test_chunking_and_addresses() {
        // 100 bytes at REC_SIZE 32: records of 32/32/32/4 at 0/32/64/96
        let data: Vec<u8> = (0..100).map(|i| i as u8).collect();
        let text = render(&data, 32).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);

        assert!(lines[0].starts_with(":200000"));
        assert!(lines[1].starts_with(":200020"));
        assert!(lines[2].starts_with(":200040"));
        assert!(lines[3].starts_with(":040060"));
        assert_eq!(lines[4], EOF_RECORD);
    }

    #[test]
    fn test_payloads_reassemble_input() {
        // Concatenating record payloads must reproduce the input exactly
        let data: Vec<u8> = (0..77).map(|i| (i * 3) as u8).collect();
        let text = render(&data, 16).unwrap();

        let mut reassembled = Vec::new();
        for line in text.lines() {
            if line == EOF_RECORD {
                continue;
            }
            let len = usize::from_str_radix(&line[1..3], 16).unwrap();
            for i in 0..len {
                let pos = 9 + i * 2;
                reassembled.push(u8::from_str_radix(&line[pos..pos + 2], 16).unwrap());
            }
        }
        assert_eq!(reassembled, data);
    }

    #[test]
    fn test_record_byte_sum_is_zero() {
        // Every record's bytes, checksum included, sum to 0 mod 256
        let data: Vec<u8> = (0..200).map(|i| (i ^ 0x5A) as u8).collect();
        let text = render(&data, 32).unwrap();

        for line in text.lines() {
            let bytes: Vec<u8> = (1..line.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&line[i..i + 2], 16).unwrap())
                .collect();
            let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
            assert_eq!(sum % 256, 0, "record {} does not sum to zero", line);
        }
    }

    #[test]
    fn test_custom_record_size() {
        // REC_SIZE is a parameter, not a constant: 8-byte records
        let data = [0u8; 20];
        let text = render(&data, 8).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(":080000"));
        assert!(lines[1].starts_with(":080008"));
        assert!(lines[2].starts_with(":040010"));
    }

    #[test]
    fn test_zero_record_size_rejected() {
        let err = render(&[1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, Img2RomError::RecordSize(_)));
    }

    #[test]
    fn test_data_record_formatting() {
        let line = data_record(0x1234, &[0xAB, 0xCD]);
        assert!(line.starts_with(":02123400ABCD"));
        assert_eq!(line.len(), 1 + 2 + 4 + 2 + 4 + 2);

        let cksum = expected_checksum(2, 0x1234, &[0xAB, 0xCD]);
        assert!(line.ends_with(&format!("{:02X}", cksum)));
    }
}
