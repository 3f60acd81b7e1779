// pn5180/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same card scripts.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use crate::protocol::bcc;
use crate::reader::ReaderConfig;
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::types::{Register, RfConfig, TransceiveState};
use crate::Result;

/// A MockTransport that stays inspectable after a Reader takes ownership
/// of the boxed handle.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct SharedMock(Rc<RefCell<MockTransport>>);

impl SharedMock {
    /// Empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport handle backed by the shared mock.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(SharedTransport {
            inner: self.0.clone(),
        })
    }

    /// Inspect the mock
    pub fn borrow(&self) -> Ref<'_, MockTransport> {
        self.0.borrow()
    }

    /// Script the mock
    pub fn borrow_mut(&self) -> RefMut<'_, MockTransport> {
        self.0.borrow_mut()
    }
}

// Transport wrapper that delegates into Rc<RefCell<MockTransport>>
struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }
    fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        self.inner.borrow_mut().load_rf_config(config)
    }
    fn rf_on(&mut self) -> Result<()> {
        self.inner.borrow_mut().rf_on()
    }
    fn rf_off(&mut self) -> Result<()> {
        self.inner.borrow_mut().rf_off()
    }
    fn write_register_and_mask(&mut self, register: Register, mask: u32) -> Result<()> {
        self.inner.borrow_mut().write_register_and_mask(register, mask)
    }
    fn write_register_or_mask(&mut self, register: Register, mask: u32) -> Result<()> {
        self.inner.borrow_mut().write_register_or_mask(register, mask)
    }
    fn read_register(&mut self, register: Register) -> Result<u32> {
        self.inner.borrow_mut().read_register(register)
    }
    fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        self.inner.borrow_mut().clear_irq_status(mask)
    }
    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        self.inner.borrow_mut().send_data(data, valid_bits)
    }
    fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_data(len)
    }
    fn transceive_state(&mut self) -> Result<TransceiveState> {
        self.inner.borrow_mut().transceive_state()
    }
    fn rx_bytes_received(&mut self) -> Result<usize> {
        self.inner.borrow_mut().rx_bytes_received()
    }
    fn delay(&mut self, duration: Duration) {
        self.inner.borrow_mut().delay(duration)
    }
}

/// Reader config with every wait and deadline set to zero.
#[doc(hidden)]
pub fn fast_config() -> ReaderConfig {
    ReaderConfig::default()
        .with_wait_transmit_timeout(Duration::ZERO)
        .with_field_settle(Duration::ZERO)
        .with_response_wait(Duration::ZERO)
        .with_rx_settle(Duration::ZERO)
}

/// Queue the card side of a single-size activation: ATQA, CL1
/// anti-collision (with a correct BCC) and SAK.
#[doc(hidden)]
pub fn seed_single_uid(mock: &mut MockTransport, uid: [u8; 4], sak: u8) {
    mock.push_response(vec![0x04, 0x00]);
    let mut cl1 = uid.to_vec();
    cl1.push(bcc(&uid));
    mock.push_response(cl1);
    mock.push_response(vec![sak]);
}

/// Queue the card side of a double-size activation. The CL1 block carries
/// the cascade tag and the first SAK has the cascade bit set.
#[doc(hidden)]
pub fn seed_double_uid(mock: &mut MockTransport, uid: [u8; 7], final_sak: u8) {
    mock.push_response(vec![0x44, 0x00]);

    let cl1 = [0x88, uid[0], uid[1], uid[2]];
    let mut frame = cl1.to_vec();
    frame.push(bcc(&cl1));
    mock.push_response(frame);
    mock.push_response(vec![0x04]);

    let cl2 = [uid[3], uid[4], uid[5], uid[6]];
    let mut frame = cl2.to_vec();
    frame.push(bcc(&cl2));
    mock.push_response(frame);
    mock.push_response(vec![final_sak]);
}
