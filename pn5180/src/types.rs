// pn5180/src/types.rs

//! Protocol newtypes and enums shared by every layer.

use std::fmt;

use derive_more::Display;

use crate::constants::{
    MIFARE_ACK, MIFARE_BLOCK_LEN, REQA, RF_STATUS_TRANSCEIVE_MASK,
    RF_STATUS_TRANSCEIVE_SHIFT, SAK_CASCADE_BIT, SEL_CL1, SEL_CL2, WUPA,
};
use crate::Error;

/// Which request frame wakes the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationKind {
    /// REQA, reaches cards in IDLE state only
    #[default]
    #[display(fmt = "REQA")]
    Reqa,
    /// WUPA, also reaches cards in HALT state
    #[display(fmt = "WUPA")]
    Wupa,
}

impl ActivationKind {
    /// Request byte put on air.
    pub fn command_byte(&self) -> u8 {
        match self {
            Self::Reqa => REQA,
            Self::Wupa => WUPA,
        }
    }
}

/// Anti-collision cascade level. Level 3 (10-byte UIDs) is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CascadeLevel {
    /// SEL 0x93
    #[display(fmt = "cascade level 1")]
    Level1,
    /// SEL 0x95, second half of a double-size UID
    #[display(fmt = "cascade level 2")]
    Level2,
}

impl CascadeLevel {
    /// SEL byte of the select / anti-collision command family.
    pub fn sel(&self) -> u8 {
        match self {
            Self::Level1 => SEL_CL1,
            Self::Level2 => SEL_CL2,
        }
    }
}

/// ATQA - Answer To Request, Type A (2 bytes, wire order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Wrap two ATQA bytes in wire order.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, wire order
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// ATQA as transmitted LSB first.
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }

    /// An all-ones ATQA is what a floating RX line reads as.
    pub fn is_all_ones(&self) -> bool {
        self.0 == [0xFF, 0xFF]
    }
}

impl TryFrom<&[u8]> for Atqa {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 2] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 2,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// SAK - Select Acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sak(u8);

impl Sak {
    /// Wrap a raw SAK byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw SAK byte
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// True when the UID is not complete and the next cascade level follows.
    pub fn cascade_bit_set(&self) -> bool {
        self.0 & SAK_CASCADE_BIT != 0
    }

    /// Card family according to NXP AN10833 (bit 8 ignored).
    pub fn card_type(&self) -> CardType {
        match self.0 & 0x7F {
            0x04 => CardType::UidIncomplete,
            0x09 => CardType::MifareMini,
            0x08 => CardType::MifareClassic1k,
            0x18 => CardType::MifareClassic4k,
            0x00 => CardType::MifareUltralight,
            0x10 | 0x11 => CardType::MifarePlus,
            0x01 => CardType::Tnp3xxx,
            0x20 => CardType::Iso14443_4,
            0x40 => CardType::Iso18092,
            _ => CardType::Unknown,
        }
    }
}

/// Card family decoded from a SAK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    /// Cascade bit set; the UID continues at the next level
    UidIncomplete,
    /// Mifare Classic Mini (320 bytes)
    MifareMini,
    /// Mifare Classic 1K
    MifareClassic1k,
    /// Mifare Classic 4K
    MifareClassic4k,
    /// Mifare Ultralight / NTAG
    MifareUltralight,
    /// Mifare Plus in SL2
    MifarePlus,
    /// TNP3xxx
    Tnp3xxx,
    /// ISO14443-4 compliant (e.g. DESFire)
    Iso14443_4,
    /// ISO18092 (NFC-DEP)
    Iso18092,
    /// Any other SAK
    Unknown,
}

/// UID size after cascade resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UidSize {
    /// 4 bytes, one cascade level
    Single,
    /// 7 bytes, two cascade levels
    Double,
}

impl UidSize {
    /// Byte count of this size.
    pub fn len(&self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 7,
        }
    }

    /// `None` for anything other than 4 or 7.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            4 => Some(Self::Single),
            7 => Some(Self::Double),
            _ => None,
        }
    }
}

/// Card UID, 4 or 7 bytes. Unused trailing storage is always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 7],
    size: UidSize,
}

impl Uid {
    /// 4-byte UID from cascade level 1.
    pub fn single(bytes: [u8; 4]) -> Self {
        let mut buf = [0u8; 7];
        buf[..4].copy_from_slice(&bytes);
        Self {
            bytes: buf,
            size: UidSize::Single,
        }
    }

    /// 7-byte UID from cascade levels 1 and 2.
    pub fn double(bytes: [u8; 7]) -> Self {
        Self {
            bytes,
            size: UidSize::Double,
        }
    }

    /// Single or double size
    pub fn size(&self) -> UidSize {
        self.size
    }

    /// 4 or 7
    pub fn len(&self) -> usize {
        self.size.len()
    }

    /// Always false: a `Uid` holds 4 or 7 bytes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The meaningful bytes only, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Lowercase hex without separators, e.g. `12345678`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match UidSize::from_len(bytes.len()) {
            Some(size) => {
                let mut buf = [0u8; 7];
                buf[..bytes.len()].copy_from_slice(bytes);
                Ok(Self { bytes: buf, size })
            }
            None => Err(Error::InvalidUid(format!(
                "{} bytes, expected 4 or 7",
                bytes.len()
            ))),
        }
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", crate::utils::HexSlice(self.as_bytes()))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Mifare block (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    /// Wrap 16 raw bytes.
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw block content
    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_LEN] {
        &self.0
    }

    /// Spaced lowercase hex, for display.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: MIFARE_BLOCK_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Raw ACK/NAK byte returned by the second phase of a Mifare write.
/// A NAK is not an error: callers inspect the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteAck(u8);

impl WriteAck {
    /// Wrap the raw ACK/NAK byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw byte as received
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// True for the Mifare ACK (0x0A); any other value is a NAK.
    pub fn is_ack(&self) -> bool {
        self.0 == MIFARE_ACK
    }
}

/// PN5180 registers touched by the ISO14443-A layer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Register {
    /// Command and crypto control
    #[display(fmt = "SYSTEM_CONFIG")]
    SystemConfig = 0x00,
    /// RX CRC enable (bit 0)
    #[display(fmt = "CRC_RX_CONFIG")]
    CrcRxConfig = 0x12,
    /// Received byte count
    #[display(fmt = "RX_STATUS")]
    RxStatus = 0x13,
    /// TX CRC enable (bit 0)
    #[display(fmt = "CRC_TX_CONFIG")]
    CrcTxConfig = 0x19,
    /// Transceive state
    #[display(fmt = "RF_STATUS")]
    RfStatus = 0x1D,
}

/// Transceive state machine as reported in RF_STATUS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransceiveState {
    /// No transceive in progress
    Idle,
    /// Armed; the next SEND_DATA goes on air
    WaitTransmit,
    /// Frame on air
    Transmitting,
    /// Waiting for the card to answer
    WaitReceive,
    /// Waiting for host data
    WaitForData,
    /// Card answer being received
    Receiving,
    /// Loopback test mode
    Loopback,
    /// Undefined encoding
    Reserved,
}

impl TransceiveState {
    /// Decode bits 24..26 of an RF_STATUS value.
    pub fn from_rf_status(rf_status: u32) -> Self {
        match (rf_status >> RF_STATUS_TRANSCEIVE_SHIFT) & RF_STATUS_TRANSCEIVE_MASK {
            0 => Self::Idle,
            1 => Self::WaitTransmit,
            2 => Self::Transmitting,
            3 => Self::WaitReceive,
            4 => Self::WaitForData,
            5 => Self::Receiving,
            6 => Self::Loopback,
            _ => Self::Reserved,
        }
    }
}

/// RF configuration profile loaded with LOAD_RF_CONFIG (TX, RX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfConfig {
    /// TX configuration index
    pub tx: u8,
    /// RX configuration index
    pub rx: u8,
}

impl RfConfig {
    /// ISO14443-A, 106 kbit/s
    pub const ISO14443A_106: Self = Self { tx: 0x00, rx: 0x80 };

    /// Custom TX/RX profile pair.
    pub const fn new(tx: u8, rx: u8) -> Self {
        Self { tx, rx }
    }
}

impl Default for RfConfig {
    fn default() -> Self {
        Self::ISO14443A_106
    }
}
