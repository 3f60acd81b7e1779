// pn5180/src/protocol/response.rs

use crate::constants::ACTIVATION_RESPONSE_LEN;
use crate::types::{Atqa, Sak, Uid, UidSize};
use crate::Result;

/// Result of a successful ISO14443-A activation.
///
/// Internally the fields are named; the 10-byte layout
/// `[ATQA(2), SAK(1), UID(up to 7, zero padded)]` only exists at the
/// boundary via [`to_bytes`](Self::to_bytes) / [`from_bytes`](Self::from_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationResponse {
    /// Answer to REQA/WUPA
    pub atqa: Atqa,
    /// SAK of the last select
    pub sak: Sak,
    /// 4 or 7 byte UID
    pub uid: Uid,
}

impl ActivationResponse {
    /// Assemble a response.
    pub fn new(atqa: Atqa, sak: Sak, uid: Uid) -> Self {
        Self { atqa, sak, uid }
    }

    /// 10-byte image, UID zero padded.
    pub fn to_bytes(&self) -> [u8; ACTIVATION_RESPONSE_LEN] {
        let mut buf = [0u8; ACTIVATION_RESPONSE_LEN];
        buf[..2].copy_from_slice(self.atqa.as_bytes());
        buf[2] = self.sak.as_u8();
        let uid = self.uid.as_bytes();
        buf[3..3 + uid.len()].copy_from_slice(uid);
        buf
    }

    /// The layout does not carry the UID length, so the caller supplies it.
    pub fn from_bytes(buf: &[u8; ACTIVATION_RESPONSE_LEN], size: UidSize) -> Result<Self> {
        let atqa = Atqa::from_bytes([buf[0], buf[1]]);
        let sak = Sak::new(buf[2]);
        let uid = Uid::try_from(&buf[3..3 + size.len()])?;
        Ok(Self { atqa, sak, uid })
    }
}
