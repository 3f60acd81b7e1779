// pn5180/src/card/operations/write.rs

use log::{debug, warn};

use crate::constants::{CRC_DISABLE_MASK, CRC_ENABLE_MASK, MIFARE_ACK};
use crate::protocol::Command;
use crate::reader::Reader;
use crate::transport::Transport;
use crate::types::{BlockData, Register, WriteAck};
use crate::Result;

/// Write one 16-byte block (Mifare WRITE, 0xA0).
///
/// The card acknowledges with a 4-bit ACK/NAK that the front end cannot
/// check a CRC on, so RX CRC is switched off for the whole exchange and
/// switched back on afterwards, whether the exchange succeeded or not.
pub fn write_block(reader: &mut Reader, block: u8, data: &BlockData) -> Result<WriteAck> {
    let wait = reader.config().response_wait;
    let t = reader.transport_mut();

    t.write_register_and_mask(Register::CrcRxConfig, CRC_DISABLE_MASK)?;
    let exchange = write_exchange(t, block, data, wait);
    let restore = t.write_register_or_mask(Register::CrcRxConfig, CRC_ENABLE_MASK);

    match (exchange, restore) {
        (Ok(ack), Ok(())) => Ok(ack),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            warn!("RX CRC not re-enabled after failed write: {}", restore_err);
            Err(e)
        }
    }
}

fn write_exchange(
    t: &mut dyn Transport,
    block: u8,
    data: &BlockData,
    wait: std::time::Duration,
) -> Result<WriteAck> {
    let cmd = Command::MifareWrite { block };
    t.send_data(&cmd.encode(), cmd.valid_bits())?;

    // first phase: the card answers the address frame
    let first = read_ack(t)?;
    if !first.is_ack() {
        debug!("block {} address not acknowledged ({:#04x})", block, first.as_u8());
    }

    t.send_data(data.as_bytes(), 0)?;
    t.delay(wait);
    let ack = read_ack(t)?;
    if ack.as_u8() != MIFARE_ACK {
        warn!("block {} write answered with {:#04x}", block, ack.as_u8());
    }
    Ok(ack)
}

fn read_ack(t: &mut dyn Transport) -> Result<WriteAck> {
    let resp = t.read_data(1)?;
    Ok(WriteAck::new(resp.first().copied().unwrap_or(0)))
}
