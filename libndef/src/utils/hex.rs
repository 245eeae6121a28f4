//! Hexadecimal formatting for log output of blocks, pages and records.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to uppercase hex with a single space between bytes,
/// the layout tag dumps are usually compared against.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Multi-line dump with an offset column and printable ASCII on the right.
pub fn hex_dump(bytes: &[u8], width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(width).enumerate() {
        if row != 0 {
            out.push('\n');
        }
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        let _ = write!(
            &mut out,
            "{:04x}  {:<w$}  |{}|",
            row * width,
            bytes_to_hex_spaced(chunk),
            ascii,
            w = width * 3 - 1
        );
    }
    out
}
