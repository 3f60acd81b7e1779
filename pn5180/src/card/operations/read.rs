// pn5180/src/card/operations/read.rs

use log::trace;

use crate::constants::MIFARE_BLOCK_LEN;
use crate::protocol::Command;
use crate::reader::Reader;
use crate::types::BlockData;
use crate::utils::HexSlice;
use crate::{Error, Result};

/// Read one 16-byte block (Mifare READ, 0x30). Any other byte count is an
/// `InvalidLength` error.
pub fn read_block(reader: &mut Reader, block: u8) -> Result<BlockData> {
    let settle = reader.config().rx_settle;
    let t = reader.transport_mut();

    let cmd = Command::MifareRead { block };
    t.send_data(&cmd.encode(), cmd.valid_bits())?;
    t.delay(settle);

    let received = t.rx_bytes_received()?;
    if received != MIFARE_BLOCK_LEN {
        return Err(Error::InvalidLength {
            expected: MIFARE_BLOCK_LEN,
            actual: received,
        });
    }

    let data = t.read_data(MIFARE_BLOCK_LEN)?;
    trace!("block {} <- {}", block, HexSlice(&data));
    BlockData::try_from(&data[..])
}
