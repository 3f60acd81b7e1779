// pn5180/src/reader/activation.rs

//! ISO14443-A activation: REQA/WUPA, anti-collision and select over up to
//! two cascade levels.
//!
//! CRC handling follows the frame type: REQA/WUPA and anti-collision
//! frames go out and come back without CRC, select frames with CRC. The
//! engine toggles CRC_RX_CONFIG / CRC_TX_CONFIG right before the stage
//! that needs it.

use std::time::Instant;

use log::{debug, trace};

use crate::constants::{
    ANTICOLLISION_RESPONSE_LEN, ATQA_LEN, CASCADE_TAG, CRC_DISABLE_MASK, CRC_ENABLE_MASK,
    CRYPTO_OFF_MASK, IDLE_MASK, IRQ_CLEAR_ALL, TRANSCEIVE_MASK,
};
use crate::error::{Stage, StageExt};
use crate::protocol::{ActivationResponse, Command, check_bcc};
use crate::reader::handle::Reader;
use crate::types::{ActivationKind, Atqa, CascadeLevel, Register, Sak, TransceiveState, Uid};
use crate::utils::HexSlice;
use crate::{Error, Result};

impl Reader {
    /// Run one activation attempt.
    ///
    /// Returns `Ok(None)` for benign absence: no answer to REQA/WUPA, a
    /// short ATQA, or a cascade bit without the cascade tag in CL1. Every
    /// other failure is an `Err` naming the stage that broke.
    pub fn activate_type_a(&mut self, kind: ActivationKind) -> Result<Option<ActivationResponse>> {
        let cfg = self.config;
        let t = &mut *self.transport;

        t.reset().at(Stage::Reset)?;
        t.load_rf_config(cfg.rf_config).at(Stage::LoadRfConfig)?;
        t.rf_on().at(Stage::RfOn)?;
        t.delay(cfg.field_settle);

        t.write_register_and_mask(Register::SystemConfig, CRYPTO_OFF_MASK)
            .at(Stage::CryptoOff)?;
        self.set_crc(false)?;

        let t = &mut *self.transport;
        t.write_register_and_mask(Register::SystemConfig, IDLE_MASK)
            .at(Stage::EnterIdle)?;
        t.write_register_or_mask(Register::SystemConfig, TRANSCEIVE_MASK)
            .at(Stage::ArmTransceive)?;

        if let Some(state) = self.wait_transmit()? {
            return Err(Error::NotReadyToTransmit { state });
        }
        self.transport
            .clear_irq_status(IRQ_CLEAR_ALL)
            .at(Stage::ClearIrq)?;

        let Some(atqa) = self.request(kind) else {
            return Ok(None);
        };
        trace!("ATQA {:#06x}", atqa.as_u16());

        if let Some(state) = self.wait_transmit()? {
            return Err(Error::TransmitTimeout { state });
        }
        self.transport
            .clear_irq_status(IRQ_CLEAR_ALL)
            .at(Stage::ClearIrq)?;

        let cl1 = self.anticollision(CascadeLevel::Level1)?;
        self.set_crc(true)?;

        let select = Command::Select {
            level: CascadeLevel::Level1,
            uid_cln: cl1,
        };
        if let Err(e) = self.transport.send_data(&select.encode(), 0) {
            // No select answer: plain single-size UID.
            debug!("select CL1 not answered ({}), assuming 4-byte uid", e);
            let uid = Uid::single([cl1[0], cl1[1], cl1[2], cl1[3]]);
            return Ok(Some(ActivationResponse::new(atqa, Sak::default(), uid)));
        }
        let sak = self.read_sak(CascadeLevel::Level1)?;

        if !sak.cascade_bit_set() {
            let uid = Uid::single([cl1[0], cl1[1], cl1[2], cl1[3]]);
            return Ok(Some(ActivationResponse::new(atqa, sak, uid)));
        }

        if cl1[0] != CASCADE_TAG {
            debug!(
                "SAK {:#04x} announces cascade but CL1 starts with {:#04x}",
                sak.as_u8(),
                cl1[0]
            );
            return Ok(None);
        }

        self.set_crc(false)?;
        // A cascade tag here would announce level 3; the UID validator
        // rejects it, the exchange itself still completes.
        let cl2 = self.anticollision(CascadeLevel::Level2)?;
        self.set_crc(true)?;

        let select = Command::Select {
            level: CascadeLevel::Level2,
            uid_cln: cl2,
        };
        self.transport
            .send_data(&select.encode(), 0)
            .at(Stage::Select(CascadeLevel::Level2))?;
        let sak = self.read_sak(CascadeLevel::Level2)?;

        let uid = Uid::double([cl1[1], cl1[2], cl1[3], cl2[0], cl2[1], cl2[2], cl2[3]]);
        Ok(Some(ActivationResponse::new(atqa, sak, uid)))
    }

    /// Poll the transceive state until WaitTransmit or the deadline passes.
    /// Returns the last observed state on timeout.
    fn wait_transmit(&mut self) -> Result<Option<TransceiveState>> {
        let deadline = Instant::now() + self.config.wait_transmit_timeout;
        loop {
            let state = self
                .transport
                .transceive_state()
                .at(Stage::WaitTransmit)?;
            if state == TransceiveState::WaitTransmit {
                return Ok(None);
            }
            if Instant::now() >= deadline {
                debug!("front end stuck in {} waiting for WaitTransmit", state);
                return Ok(Some(state));
            }
        }
    }

    /// REQA/WUPA followed by a 2-byte ATQA read. `None` when nothing
    /// usable came back.
    fn request(&mut self, kind: ActivationKind) -> Option<Atqa> {
        let cmd = Command::Request(kind);
        if let Err(e) = self.transport.send_data(&cmd.encode(), cmd.valid_bits()) {
            debug!("{} not sent: {}", kind, e);
            return None;
        }
        self.transport.delay(self.config.response_wait);

        match self.transport.read_data(ATQA_LEN) {
            Ok(bytes) => Atqa::try_from(&bytes[..]).ok(),
            Err(e) => {
                trace!("no ATQA: {}", e);
                None
            }
        }
    }

    /// Anti-collision at `level`; exactly 4 UID_CLn bytes + BCC are
    /// accepted, anything else is treated as a collision.
    fn anticollision(&mut self, level: CascadeLevel) -> Result<[u8; 5]> {
        let stage = Stage::AntiCollision(level);
        let cmd = Command::AntiCollision(level);
        self.transport
            .send_data(&cmd.encode(), cmd.valid_bits())
            .at(stage)?;
        self.transport.delay(self.config.rx_settle);

        let received = self.transport.rx_bytes_received().at(stage)?;
        if received != ANTICOLLISION_RESPONSE_LEN {
            return Err(Error::Collision {
                level,
                actual: received,
            });
        }
        let bytes = self
            .transport
            .read_data(ANTICOLLISION_RESPONSE_LEN)
            .at(stage)?;
        let uid_cln: [u8; 5] = bytes.as_slice().try_into().map_err(|_| Error::Collision {
            level,
            actual: bytes.len(),
        })?;
        trace!("{} UID_CLn {}", level, HexSlice(&uid_cln));

        if self.config.verify_bcc {
            check_bcc(&uid_cln).at(stage)?;
        }
        Ok(uid_cln)
    }

    fn read_sak(&mut self, level: CascadeLevel) -> Result<Sak> {
        let stage = Stage::ReadSak(level);
        let bytes = self.transport.read_data(1).at(stage)?;
        match bytes.first() {
            Some(&b) => Ok(Sak::new(b)),
            None => Err(Error::at(
                stage,
                Error::InvalidLength {
                    expected: 1,
                    actual: 0,
                },
            )),
        }
    }

    /// Switch RX and TX CRC together.
    fn set_crc(&mut self, enabled: bool) -> Result<()> {
        let t = &mut *self.transport;
        if enabled {
            t.write_register_or_mask(Register::CrcRxConfig, CRC_ENABLE_MASK)
                .at(Stage::EnableRxCrc)?;
            t.write_register_or_mask(Register::CrcTxConfig, CRC_ENABLE_MASK)
                .at(Stage::EnableTxCrc)?;
        } else {
            t.write_register_and_mask(Register::CrcRxConfig, CRC_DISABLE_MASK)
                .at(Stage::ClearRxCrc)?;
            t.write_register_and_mask(Register::CrcTxConfig, CRC_DISABLE_MASK)
                .at(Stage::ClearTxCrc)?;
        }
        Ok(())
    }
}
