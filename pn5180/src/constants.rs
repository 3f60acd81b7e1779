// pn5180/src/constants.rs
//! Bit-exact ISO14443-A / Mifare wire constants and PN5180 register masks.

/// REQA: Request Type A, sent as a 7-bit short frame.
pub const REQA: u8 = 0x26;

/// WUPA: Wake-Up Type A, also reaches cards in HALT state. 7-bit short frame.
pub const WUPA: u8 = 0x52;

/// Number of valid bits in the last byte of a short frame.
pub const SHORT_FRAME_BITS: u8 = 0x07;

/// Select / anti-collision command code, cascade level 1.
pub const SEL_CL1: u8 = 0x93;
/// Select / anti-collision command code, cascade level 2.
pub const SEL_CL2: u8 = 0x95;

/// NVB for an anti-collision frame (no UID bits known yet).
pub const NVB_ANTICOLLISION: u8 = 0x20;
/// NVB for a select frame (all 40 UID_CLn bits follow).
pub const NVB_SELECT: u8 = 0x70;

/// Cascade tag: marks that more UID bytes follow in the next level.
pub const CASCADE_TAG: u8 = 0x88;

/// SAK bit signalling "UID not complete".
pub const SAK_CASCADE_BIT: u8 = 0x04;

/// Mifare READ, followed by the block number.
pub const MIFARE_READ: u8 = 0x30;
/// Mifare WRITE (first phase), followed by the block number.
pub const MIFARE_WRITE: u8 = 0xA0;
/// HLTA, always followed by 0x00.
pub const HLTA: u8 = 0x50;

/// 4-bit Mifare ACK as returned after a write phase.
pub const MIFARE_ACK: u8 = 0x0A;

/// ATQA length in bytes
pub const ATQA_LEN: usize = 2;
/// 4 UID_CLn bytes + BCC
pub const ANTICOLLISION_RESPONSE_LEN: usize = 5;
/// Mifare block size
pub const MIFARE_BLOCK_LEN: usize = 16;

/// ATQA(2) + SAK(1) + up to 7 UID bytes
pub const ACTIVATION_RESPONSE_LEN: usize = 10;

// PN5180 register masks

/// AND mask clearing bit 0 of CRC_RX_CONFIG / CRC_TX_CONFIG.
pub const CRC_DISABLE_MASK: u32 = 0xFFFF_FFFE;
/// OR mask setting bit 0 of CRC_RX_CONFIG / CRC_TX_CONFIG.
pub const CRC_ENABLE_MASK: u32 = 0x0000_0001;

/// AND mask on SYSTEM_CONFIG switching the MFC crypto unit off.
pub const CRYPTO_OFF_MASK: u32 = 0xFFFF_FFBF;
/// AND mask on SYSTEM_CONFIG forcing COMMAND to IDLE.
pub const IDLE_MASK: u32 = 0xFFFF_FFF8;
/// OR mask on SYSTEM_CONFIG selecting the TRANSCEIVE command.
pub const TRANSCEIVE_MASK: u32 = 0x0000_0003;

/// Clears every IRQ_STATUS bit.
pub const IRQ_CLEAR_ALL: u32 = 0xFFFF_FFFF;

/// RX_STATUS: lower 9 bits hold the number of received bytes.
pub const RX_STATUS_LEN_MASK: u32 = 0x0000_01FF;

/// RF_STATUS: transceive state lives in bits 24..26.
pub const RF_STATUS_TRANSCEIVE_SHIFT: u32 = 24;
/// Width mask of the transceive state field.
pub const RF_STATUS_TRANSCEIVE_MASK: u32 = 0x07;
