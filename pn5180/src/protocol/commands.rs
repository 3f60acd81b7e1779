// pn5180/src/protocol/commands.rs

use crate::constants::{
    HLTA, MIFARE_READ, MIFARE_WRITE, NVB_ANTICOLLISION, NVB_SELECT, SHORT_FRAME_BITS,
};
use crate::types::{ActivationKind, CascadeLevel};

/// ISO14443-A / Mifare frames issued by this crate. Each variant knows its
/// wire encoding and how many bits of its last byte are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// REQA or WUPA short frame
    Request(ActivationKind),
    /// SEL + NVB 0x20
    AntiCollision(CascadeLevel),
    /// SEL + NVB 0x70 + UID_CLn(4) + BCC
    Select {
        /// Cascade level being selected
        level: CascadeLevel,
        /// UID_CLn bytes and BCC from the anti-collision answer
        uid_cln: [u8; 5],
    },
    /// Mifare READ of one 16-byte block
    MifareRead {
        /// Block number
        block: u8,
    },
    /// First phase of a Mifare write; the 16 data bytes follow as a
    /// separate frame once the card has ACKed.
    MifareWrite {
        /// Block number
        block: u8,
    },
    /// HLTA + 0x00
    Halt,
}

impl Command {
    /// Frame bytes as passed to `send_data`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request(kind) => vec![kind.command_byte()],
            Self::AntiCollision(level) => vec![level.sel(), NVB_ANTICOLLISION],
            Self::Select { level, uid_cln } => {
                let mut buf = Vec::with_capacity(2 + uid_cln.len());
                buf.push(level.sel());
                buf.push(NVB_SELECT);
                buf.extend_from_slice(uid_cln);
                buf
            }
            Self::MifareRead { block } => vec![MIFARE_READ, *block],
            Self::MifareWrite { block } => vec![MIFARE_WRITE, *block],
            Self::Halt => vec![HLTA, 0x00],
        }
    }

    /// Valid bits in the last byte; 0 means all 8.
    pub fn valid_bits(&self) -> u8 {
        match self {
            Self::Request(_) => SHORT_FRAME_BITS,
            _ => 0,
        }
    }
}
