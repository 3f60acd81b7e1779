// pn5180/src/transport/traits.rs

use std::time::Duration;

use crate::constants::RX_STATUS_LEN_MASK;
use crate::types::{Register, RfConfig, TransceiveState};
use crate::Result;

/// Transport abstracts the PN5180 host interface (SPI framing, BUSY
/// handshake, reset line) away from the ISO14443-A protocol logic.
///
/// Every primitive is expected to complete in bounded time; the protocol
/// layer only applies its own deadline to the WaitTransmit check.
pub trait Transport {
    /// Hardware/soft reset of the front end
    fn reset(&mut self) -> Result<()>;

    /// LOAD_RF_CONFIG with the given TX/RX profile
    fn load_rf_config(&mut self, config: RfConfig) -> Result<()>;

    /// Switch the RF field on.
    fn rf_on(&mut self) -> Result<()>;

    /// Switch the RF field off.
    fn rf_off(&mut self) -> Result<()>;

    /// WRITE_REGISTER_AND_MASK: `reg &= mask`
    fn write_register_and_mask(&mut self, register: Register, mask: u32) -> Result<()>;

    /// WRITE_REGISTER_OR_MASK: `reg |= mask`
    fn write_register_or_mask(&mut self, register: Register, mask: u32) -> Result<()>;

    /// READ_REGISTER
    fn read_register(&mut self, register: Register) -> Result<u32>;

    /// Clear the IRQ_STATUS bits set in `mask`.
    fn clear_irq_status(&mut self, mask: u32) -> Result<()>;

    /// SEND_DATA. `valid_bits` is the number of valid bits in the last
    /// byte, 0 meaning all 8.
    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()>;

    /// READ_DATA of `len` bytes from the reception buffer. A transport may
    /// yield fewer bytes than requested; callers check the length.
    fn read_data(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Current transceive state, decoded from RF_STATUS.
    fn transceive_state(&mut self) -> Result<TransceiveState> {
        let status = self.read_register(Register::RfStatus)?;
        Ok(TransceiveState::from_rf_status(status))
    }

    /// Number of bytes received by the last transceive, from RX_STATUS.
    fn rx_bytes_received(&mut self) -> Result<usize> {
        let status = self.read_register(Register::RxStatus)?;
        Ok((status & RX_STATUS_LEN_MASK) as usize)
    }

    /// Block for the given duration. Simulated transports override this.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
