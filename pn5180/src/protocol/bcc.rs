// pn5180/src/protocol/bcc.rs

use crate::{Error, Result};

/// Block check character: XOR over the UID_CLn bytes.
pub fn bcc(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Verify an anti-collision response whose last byte is the BCC.
pub fn check_bcc(frame: &[u8]) -> Result<()> {
    let Some((&actual, data)) = frame.split_last() else {
        return Err(Error::InvalidLength {
            expected: 5,
            actual: 0,
        });
    };
    let expected = bcc(data);
    if expected != actual {
        return Err(Error::BccMismatch { expected, actual });
    }
    Ok(())
}
