// pn5180/src/reader/handle.rs

use log::{debug, warn};

use crate::card::{Card, validate_uid};
use crate::error::{Stage, StageExt};
use crate::reader::config::ReaderConfig;
use crate::transport::Transport;
use crate::types::{ActivationKind, Uid};
use crate::Result;

/// ISO14443-A reader bound to one PN5180 front end.
///
/// The reader owns its transport exclusively; callers serialize access
/// (one activation or block exchange at a time).
pub struct Reader {
    pub(super) transport: Box<dyn Transport>,
    pub(super) config: ReaderConfig,
}

impl Reader {
    /// Reader with the default timing.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Reader with explicit timing and RF profile.
    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self { transport, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Direct access to the transport, used by the Mifare block operations.
    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    /// Load the ISO14443-A RF profile and switch the field on without
    /// talking to a card.
    pub fn setup_rf(&mut self) -> Result<()> {
        debug!("loading RF config {:?}", self.config.rf_config);
        self.transport
            .load_rf_config(self.config.rf_config)
            .at(Stage::LoadRfConfig)?;
        self.transport.rf_on().at(Stage::RfOn)?;
        Ok(())
    }

    /// Switch the field off.
    pub fn rf_off(&mut self) -> Result<()> {
        self.transport.rf_off()
    }

    /// Activate with REQA and validate the UID.
    ///
    /// - `Ok(Some(uid))`: a plausible 4 or 7 byte UID
    /// - `Ok(None)`: no card, or a UID rejected by the sanity rules
    /// - `Err(_)`: a stage of the activation failed
    pub fn read_card_serial(&mut self) -> Result<Option<Uid>> {
        Ok(self.select_card(ActivationKind::Reqa)?.map(|card| card.uid()))
    }

    /// Activate with the given request kind and wrap an accepted UID in a
    /// [`Card`] for block I/O.
    pub fn select_card(&mut self, kind: ActivationKind) -> Result<Option<Card>> {
        let Some(resp) = self.activate_type_a(kind)? else {
            return Ok(None);
        };
        match validate_uid(&resp) {
            Some(uid) => {
                debug!("accepted uid {} (sak {:#04x})", uid, resp.sak.as_u8());
                Ok(Some(Card::new(uid, resp.atqa, resp.sak)))
            }
            None => {
                debug!("rejected implausible uid {:?}", resp.uid);
                Ok(None)
            }
        }
    }

    /// True when a valid UID can be read. Faults count as "not present".
    pub fn is_card_present(&mut self) -> bool {
        match self.read_card_serial() {
            Ok(uid) => uid.is_some(),
            Err(e) => {
                warn!("card presence check failed: {}", e);
                false
            }
        }
    }
}
