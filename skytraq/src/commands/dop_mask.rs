use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Named values of [`DopMask::mode`]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DopMode {
    Disable = 0,
    Auto = 1,
    PdopOnly = 2,
    HdopOnly = 3,
    GdopOnly = 4,
}

impl From<DopMode> for u8 {
    fn from(mode: DopMode) -> u8 {
        mode as u8
    }
}

/// Configure DOP Mask
///
/// Mask values are in units of 0.1, `50` means a DOP of 5.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DopMask {
    pub mode: u8,
    pub pdop: u16,
    pub hdop: u16,
    pub gdop: u16,
    pub attribute: Attribute,
}

impl Default for DopMask {
    fn default() -> Self {
        Self {
            mode: DopMode::Auto.into(),
            pdop: 50,
            hdop: 50,
            gdop: 50,
            attribute: Attribute::Sram,
        }
    }
}

impl DopMask {
    pub const MIN_DOP: u16 = 5;
    pub const MAX_DOP: u16 = 300;
}

impl Command for DopMask {
    const NAME: &'static str = "CONFIGURE-DOP-MASK";
    const ID: &'static [u8] = &[0x2a];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "mode", self.mode, 0, 4)?;
        check_range(Self::NAME, "pdop", self.pdop, Self::MIN_DOP, Self::MAX_DOP)?;
        check_range(Self::NAME, "hdop", self.hdop, Self::MIN_DOP, Self::MAX_DOP)?;
        check_range(Self::NAME, "gdop", self.gdop, Self::MIN_DOP, Self::MAX_DOP)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            .u8(self.mode)
            .u16(self.pdop)
            .u16(self.hdop)
            .u16(self.gdop)
            .attribute(self.attribute)
    }
}
