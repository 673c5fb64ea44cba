use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Named values of [`PositionPinning::mode`]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinningMode {
    Default = 0,
    Enable = 1,
    Disable = 2,
}

impl From<PinningMode> for u8 {
    fn from(mode: PinningMode) -> u8 {
        mode as u8
    }
}

/// Configure Position Pinning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionPinning {
    /// 0: default, 1: enable, 2: disable
    pub mode: u8,
    pub attribute: Attribute,
}

impl PositionPinning {
    pub fn new(mode: impl Into<u8>, attribute: Attribute) -> Self {
        Self {
            mode: mode.into(),
            attribute,
        }
    }
}

impl Command for PositionPinning {
    const NAME: &'static str = "CONFIGURE-POSITION-PINNING";
    const ID: &'static [u8] = &[0x39];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "mode", self.mode, 0, 2)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request.u8(self.mode).attribute(self.attribute)
    }
}

/// Configure Position Pinning Parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinningParams {
    /// Speed below which the position gets pinned (km/h)
    pub pinning_speed: u16,
    /// Seconds the speed must stay below `pinning_speed`
    pub pinning_count: u16,
    /// Speed above which the position gets unpinned (km/h)
    pub unpinning_speed: u16,
    /// Seconds the speed must stay above `unpinning_speed`
    pub unpinning_count: u16,
    /// Distance from the pinned position that unpins it (m)
    pub unpinning_distance: u16,
    pub attribute: Attribute,
}

impl Default for PinningParams {
    fn default() -> Self {
        Self {
            pinning_speed: 2,
            pinning_count: 3,
            unpinning_speed: 3,
            unpinning_count: 3,
            unpinning_distance: 5,
            attribute: Attribute::Sram,
        }
    }
}

impl Command for PinningParams {
    const NAME: &'static str = "CONFIGURE-POSITION-PINNING-PARAMETERS";
    const ID: &'static [u8] = &[0x3b];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            .u16(self.pinning_speed)
            .u16(self.pinning_count)
            .u16(self.unpinning_speed)
            .u16(self.unpinning_count)
            .u16(self.unpinning_distance)
            .attribute(self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinning_payload() {
        let cmd = PositionPinning::new(PinningMode::Disable, Attribute::SramAndFlash);
        assert_eq!(cmd.request().unwrap().payload(), &[0x39, 0x02, 0x01]);
        assert!(PositionPinning::new(3u8, Attribute::Sram).validate().is_err());
    }

    #[test]
    fn params_are_big_endian() {
        let params = PinningParams {
            pinning_speed: 0x0102,
            pinning_count: 3,
            unpinning_speed: 0x0400,
            unpinning_count: 5,
            unpinning_distance: 0xffff,
            attribute: Attribute::Sram,
        };
        assert_eq!(
            params.request().unwrap().payload(),
            &[0x3b, 0x01, 0x02, 0x00, 0x03, 0x04, 0x00, 0x00, 0x05, 0xff, 0xff, 0x00]
        );
    }
}
