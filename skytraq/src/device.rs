use std::thread;

use tracing::{debug, warn};

use crate::{
    ack::{AckFrame, AckReceiver},
    codec::PacketCodec,
    commands::{
        Attribute, Command, Constellation, DopMask, FactoryDefault, NmeaTalkerId, PinningParams,
        PositionPinning, PositionRate, PowerMode, QzssConfig, SbasConfig, SetConstellation,
        SystemRestart,
    },
    config::DriverConfig,
    error::{Error, Result},
    Transport,
};

/// SkyTraq receiver behind a [`Transport`].
///
/// Commands are strictly sequential: every method blocks until the
/// receiver answered or the acknowledgment deadline passed.
///
/// The `bool` returning methods collapse every failure to `false`, use
/// [`send`](Skytraq::send) to learn the cause.
pub struct Skytraq<T: Transport> {
    transport: T,
    codec: PacketCodec,
    receiver: AckReceiver,
    config: DriverConfig,
}

impl<T: Transport> Skytraq<T> {
    /// `config.tx_capacity` is raised to the largest command frame if needed
    pub fn new(transport: T, config: DriverConfig) -> Self {
        let config = config.with_tx_capacity(config.tx_capacity);
        Self {
            transport,
            codec: PacketCodec::with_capacity(config.tx_capacity),
            receiver: AckReceiver::new(config.ack_timeout, config.poll_interval),
            config,
        }
    }

    /// Opens the transport
    pub fn begin(&mut self) -> Result<()> {
        self.transport.begin()?;
        Ok(())
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Frames `payload`, sends it and waits for the acknowledgment
    pub fn try_issue(&mut self, payload: &[u8]) -> Result<()> {
        let frame = self.codec.encode(payload)?;
        debug!("Sending {:02x?}", frame);
        self.transport.write_all(frame)?;

        if !self.config.settle_delay.is_zero() {
            thread::sleep(self.config.settle_delay);
        }

        match self.receiver.wait(&mut self.transport)? {
            AckFrame::Ack => Ok(()),
            AckFrame::Nack => Err(Error::Nack),
            AckFrame::Unrecognized(id) => Err(Error::UnexpectedAck(id)),
        }
    }

    /// Same as [`try_issue`](Skytraq::try_issue), `true` if the receiver acknowledged
    pub fn issue(&mut self, payload: &[u8]) -> bool {
        self.try_issue(payload).is_ok()
    }

    /// Validates, serializes and issues `command`
    pub fn send<C: Command>(&mut self, command: &C) -> Result<()> {
        let request = command.request()?;
        debug!("{} ({})", C::NAME, command_persistence(request.persistence()));
        self.try_issue(request.payload())
    }

    fn send_logged<C: Command>(&mut self, command: &C) -> bool {
        match self.send(command) {
            Ok(()) => true,
            Err(e) => {
                warn!("{} failed: {}", C::NAME, e);
                false
            },
        }
    }

    pub fn set_constellation(
        &mut self,
        constellation: Constellation,
        attribute: Attribute,
    ) -> bool {
        self.send_logged(&SetConstellation::new(constellation, attribute))
    }

    pub fn configure_sbas(&mut self, config: &SbasConfig) -> bool {
        self.send_logged(config)
    }

    pub fn configure_qzss(&mut self, enable: u8, channels: u8, attribute: Attribute) -> bool {
        self.send_logged(&QzssConfig::new(enable, channels, attribute))
    }

    pub fn system_restart(&mut self, restart: &SystemRestart) -> bool {
        self.send_logged(restart)
    }

    pub fn factory_default(&mut self) -> bool {
        self.send_logged(&FactoryDefault)
    }

    pub fn set_power_mode(&mut self, mode: u8, attribute: Attribute) -> bool {
        self.send_logged(&PowerMode::new(mode, attribute))
    }

    pub fn set_position_rate(&mut self, rate_hz: u8, attribute: Attribute) -> bool {
        self.send_logged(&PositionRate::new(rate_hz, attribute))
    }

    pub fn configure_pinning_params(&mut self, params: &PinningParams) -> bool {
        self.send_logged(params)
    }

    pub fn set_position_pinning(&mut self, mode: u8, attribute: Attribute) -> bool {
        self.send_logged(&PositionPinning::new(mode, attribute))
    }

    pub fn configure_dop_mask(&mut self, mask: &DopMask) -> bool {
        self.send_logged(mask)
    }

    pub fn set_nmea_talker_id(&mut self, id: u8, attribute: Attribute) -> bool {
        self.send_logged(&NmeaTalkerId::new(id, attribute))
    }
}

fn command_persistence(attribute: Option<Attribute>) -> &'static str {
    match attribute {
        Some(Attribute::Sram) => "update SRAM",
        Some(Attribute::SramAndFlash) => "update SRAM and flash",
        None => "no attribute",
    }
}
