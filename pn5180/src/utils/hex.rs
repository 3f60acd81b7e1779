// pn5180/src/utils/hex.rs

//! Hex rendering for UIDs, blocks and raw frames in log output.

use std::fmt;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexSlice(bytes).to_string()
}

/// Formats a byte slice as spaced hex without allocating, so frames can be
/// handed straight to `log::trace!`.
pub struct HexSlice<'a>(pub &'a [u8]);

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
