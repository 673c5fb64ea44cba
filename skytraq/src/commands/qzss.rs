use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Configure QZSS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QzssConfig {
    /// 0: disable, 1: enable
    pub enable: u8,
    /// Channels reserved for QZSS tracking, 0..=3
    pub channels: u8,
    pub attribute: Attribute,
}

impl Default for QzssConfig {
    fn default() -> Self {
        Self {
            enable: 1,
            channels: 1,
            attribute: Attribute::Sram,
        }
    }
}

impl QzssConfig {
    pub fn new(enable: u8, channels: u8, attribute: Attribute) -> Self {
        Self {
            enable,
            channels,
            attribute,
        }
    }
}

impl Command for QzssConfig {
    const NAME: &'static str = "CONFIGURE-QZSS";
    const ID: &'static [u8] = &[0x62, 0x03];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "enable", self.enable, 0, 1)?;
        check_range(Self::NAME, "channels", self.channels, 0, 3)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            .u8(self.enable)
            .u8(self.channels)
            .attribute(self.attribute)
    }
}
