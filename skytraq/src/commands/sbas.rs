use bitflags::bitflags;

use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

bitflags! {
    /// SBAS services the receiver may track
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SbasSubsystem: u8 {
        const WAAS = 0x01;
        const EGNOS = 0x02;
        const MSAS = 0x04;
        const GAGAN = 0x08;
        const SDCM = 0x10;
        const BDSBAS = 0x20;
    }
}

/// Configure SBAS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SbasConfig {
    /// 0: disable, 1: enable
    pub enable: u8,
    /// Use SBAS satellites for ranging. 0: disable, 1: enable, 2: auto
    pub ranging: u8,
    /// Ranging URA mask, 0..=15
    pub ranging_ura: u8,
    /// Apply SBAS corrections. 0: disable, 1: enable
    pub correction: u8,
    /// Channels reserved for SBAS tracking, 0..=3
    pub tracking_channels: u8,
    pub subsystem: SbasSubsystem,
    pub attribute: Attribute,
}

impl Default for SbasConfig {
    fn default() -> Self {
        Self {
            enable: 1,
            ranging: 2,
            ranging_ura: 8,
            correction: 1,
            tracking_channels: 3,
            subsystem: SbasSubsystem::WAAS | SbasSubsystem::EGNOS | SbasSubsystem::MSAS,
            attribute: Attribute::Sram,
        }
    }
}

impl Command for SbasConfig {
    const NAME: &'static str = "CONFIGURE-SBAS";
    const ID: &'static [u8] = &[0x62, 0x01];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "enable", self.enable, 0, 1)?;
        check_range(Self::NAME, "ranging", self.ranging, 0, 2)?;
        check_range(Self::NAME, "ranging_ura", self.ranging_ura, 0, 15)?;
        check_range(Self::NAME, "correction", self.correction, 0, 1)?;
        check_range(Self::NAME, "tracking_channels", self.tracking_channels, 0, 3)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            .u8(self.enable)
            .u8(self.ranging)
            .u8(self.ranging_ura)
            .u8(self.correction)
            .u8(self.tracking_channels)
            .u8(self.subsystem.bits())
            .attribute(self.attribute)
    }
}
