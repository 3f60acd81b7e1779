// pn5180/src/transport/mock.rs

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::types::{Register, RfConfig, TransceiveState};
use crate::{Error, Result};

/// One recorded Transport primitive. State queries and delays are counted
/// rather than logged so that polling loops do not flood the call log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// `reset`
    Reset,
    /// `load_rf_config`
    LoadRfConfig(RfConfig),
    /// `rf_on`
    RfOn,
    /// `rf_off`
    RfOff,
    /// `write_register_and_mask`
    AndMask(Register, u32),
    /// `write_register_or_mask`
    OrMask(Register, u32),
    /// `read_register`, and `rx_bytes_received` as a RX_STATUS read
    ReadRegister(Register),
    /// `clear_irq_status`
    ClearIrq(u32),
    /// `send_data` with frame and valid bits
    Send(Vec<u8>, u8),
    /// `read_data` with the requested length
    Read(usize),
}

/// Injectable failure. Faults stay armed until [`MockTransport::clear_faults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Fail `reset`
    Reset,
    /// Fail `load_rf_config`
    LoadRfConfig,
    /// Fail `rf_on`
    RfOn,
    /// Fail `rf_off`
    RfOff,
    /// Fail this exact AND mask write
    AndMask(Register, u32),
    /// Fail this exact OR mask write
    OrMask(Register, u32),
    /// Fail `clear_irq_status`
    ClearIrq,
    /// Fail every `send_data` whose frame starts with these bytes
    Send(Vec<u8>),
}

/// Simulated PN5180 for unit tests. Records every primitive, answers
/// `read_data` from a queue of card responses and keeps a register file
/// updated by the AND/OR mask writes.
#[derive(Debug)]
pub struct MockTransport {
    /// Every recorded primitive, in call order
    pub calls: Vec<TransportCall>,
    /// Card responses handed out by `read_data`, oldest first
    pub responses: VecDeque<Vec<u8>>,
    /// Scripted transceive states; `idle_state` once exhausted
    pub states: VecDeque<TransceiveState>,
    /// State reported when `states` is empty
    pub idle_state: TransceiveState,
    /// Register file; unknown registers read as 0
    pub registers: HashMap<Register, u32>,
    /// Field state after the last `rf_on`/`rf_off`/`reset`
    pub rf_enabled: bool,
    /// Number of `transceive_state` calls
    pub state_queries: usize,
    /// Total simulated `delay`
    pub slept: Duration,
    faults: Vec<Fault>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Empty mock: no responses, always WaitTransmit.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            responses: VecDeque::new(),
            states: VecDeque::new(),
            idle_state: TransceiveState::WaitTransmit,
            registers: HashMap::new(),
            rf_enabled: false,
            state_queries: 0,
            slept: Duration::ZERO,
            faults: Vec::new(),
        }
    }

    /// Queue one card answer.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue one transceive state.
    pub fn push_state(&mut self, state: TransceiveState) {
        self.states.push_back(state);
    }

    /// Arm a fault.
    pub fn inject(&mut self, fault: Fault) {
        self.faults.push(fault);
    }

    /// Disarm every fault.
    pub fn clear_faults(&mut self) {
        self.faults.clear();
    }

    /// Current register value.
    pub fn register(&self, register: Register) -> u32 {
        self.registers.get(&register).copied().unwrap_or(0)
    }

    /// Frames passed to `send_data`, in order.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TransportCall::Send(data, _) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, fault: &Fault) -> Result<()> {
        if self.faults.contains(fault) {
            Err(Error::Transport(format!("injected fault: {:?}", fault)))
        } else {
            Ok(())
        }
    }
}

impl Transport for MockTransport {
    fn reset(&mut self) -> Result<()> {
        self.calls.push(TransportCall::Reset);
        self.check(&Fault::Reset)?;
        self.rf_enabled = false;
        Ok(())
    }

    fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        self.calls.push(TransportCall::LoadRfConfig(config));
        self.check(&Fault::LoadRfConfig)
    }

    fn rf_on(&mut self) -> Result<()> {
        self.calls.push(TransportCall::RfOn);
        self.check(&Fault::RfOn)?;
        self.rf_enabled = true;
        Ok(())
    }

    fn rf_off(&mut self) -> Result<()> {
        self.calls.push(TransportCall::RfOff);
        self.check(&Fault::RfOff)?;
        self.rf_enabled = false;
        Ok(())
    }

    fn write_register_and_mask(&mut self, register: Register, mask: u32) -> Result<()> {
        self.calls.push(TransportCall::AndMask(register, mask));
        self.check(&Fault::AndMask(register, mask))?;
        *self.registers.entry(register).or_insert(0) &= mask;
        Ok(())
    }

    fn write_register_or_mask(&mut self, register: Register, mask: u32) -> Result<()> {
        self.calls.push(TransportCall::OrMask(register, mask));
        self.check(&Fault::OrMask(register, mask))?;
        *self.registers.entry(register).or_insert(0) |= mask;
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u32> {
        self.calls.push(TransportCall::ReadRegister(register));
        Ok(self.register(register))
    }

    fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        self.calls.push(TransportCall::ClearIrq(mask));
        self.check(&Fault::ClearIrq)
    }

    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        self.calls.push(TransportCall::Send(data.to_vec(), valid_bits));
        for fault in &self.faults {
            if let Fault::Send(prefix) = fault {
                if data.starts_with(prefix) {
                    return Err(Error::Transport(format!("injected send fault: {:02x?}", prefix)));
                }
            }
        }
        Ok(())
    }

    fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        self.calls.push(TransportCall::Read(len));
        match self.responses.pop_front() {
            Some(mut resp) => {
                resp.truncate(len);
                Ok(resp)
            }
            None => Err(Error::NoResponse),
        }
    }

    fn transceive_state(&mut self) -> Result<TransceiveState> {
        self.state_queries += 1;
        Ok(self.states.pop_front().unwrap_or(self.idle_state))
    }

    /// Length of the next queued response, as RX_STATUS would report it.
    fn rx_bytes_received(&mut self) -> Result<usize> {
        self.calls.push(TransportCall::ReadRegister(Register::RxStatus));
        Ok(self.responses.front().map_or(0, Vec::len))
    }

    fn delay(&mut self, duration: Duration) {
        self.slept += duration;
    }
}
