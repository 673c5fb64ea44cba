use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Named values of [`PowerMode::mode`]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerSaving {
    Normal = 0,
    PowerSave = 1,
}

impl From<PowerSaving> for u8 {
    fn from(mode: PowerSaving) -> u8 {
        mode as u8
    }
}

/// Configure Power Mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerMode {
    /// 0: normal, 1: power save
    pub mode: u8,
    pub attribute: Attribute,
}

impl PowerMode {
    pub fn new(mode: impl Into<u8>, attribute: Attribute) -> Self {
        Self {
            mode: mode.into(),
            attribute,
        }
    }
}

impl Command for PowerMode {
    const NAME: &'static str = "CONFIGURE-POWER-MODE";
    const ID: &'static [u8] = &[0x0c];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "mode", self.mode, 0, 1)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request.u8(self.mode).attribute(self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_save_payload() {
        let cmd = PowerMode::new(PowerSaving::PowerSave, Attribute::Sram);
        assert_eq!(cmd.request().unwrap().payload(), &[0x0c, 0x01, 0x00]);
    }

    #[test]
    fn mode_out_of_range() {
        assert!(PowerMode::new(2u8, Attribute::Sram).request().is_err());
    }
}
