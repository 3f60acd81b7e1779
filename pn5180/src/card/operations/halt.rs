// pn5180/src/card/operations/halt.rs

use log::warn;

use crate::protocol::Command;
use crate::reader::Reader;

/// HLTA (0x50 0x00). The card does not answer a halt, so nothing is read
/// and the operation cannot fail from the caller's point of view.
pub fn halt(reader: &mut Reader) {
    let cmd = Command::Halt;
    if let Err(e) = reader.transport_mut().send_data(&cmd.encode(), cmd.valid_bits()) {
        warn!("HLTA not sent: {}", e);
    }
}
