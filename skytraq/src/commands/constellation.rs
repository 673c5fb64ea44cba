use bitflags::bitflags;

use super::{Attribute, Command, CommandRequest};
use crate::ValidationError;

bitflags! {
    /// GNSS constellations used for navigation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Constellation: u8 {
        const GPS = 0x01;
        const GLONASS = 0x02;
        const GALILEO = 0x04;
        const BEIDOU = 0x08;
        const NAVIC = 0x10;
    }
}

impl Default for Constellation {
    fn default() -> Self {
        Self::GPS
    }
}

/// Configure GNSS Constellation Type for Navigation Solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetConstellation {
    pub constellation: Constellation,
    pub attribute: Attribute,
}

impl SetConstellation {
    pub fn new(constellation: Constellation, attribute: Attribute) -> Self {
        Self {
            constellation,
            attribute,
        }
    }
}

impl Command for SetConstellation {
    const NAME: &'static str = "SET-CONSTELLATION";
    const ID: &'static [u8] = &[0x64, 0x19];

    /// Any mask is sent as given, the receiver decides what it supports
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            // reserved
            .u8(0x00)
            .u8(self.constellation.bits())
            .attribute(self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gps_in_sram() {
        let request = SetConstellation::default().request().unwrap();
        assert_eq!(request.payload(), &[0x64, 0x19, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn gps_navic_to_flash() {
        let cmd = SetConstellation::new(
            Constellation::GPS | Constellation::NAVIC,
            Attribute::SramAndFlash,
        );
        assert_eq!(
            cmd.request().unwrap().payload(),
            &[0x64, 0x19, 0x00, 0x11, 0x01]
        );
    }

    #[test]
    fn unnamed_bits_are_sent_as_given() {
        let cmd = SetConstellation::new(Constellation::from_bits_retain(0x41), Attribute::Sram);
        assert_eq!(cmd.validate(), Ok(()));
        assert_eq!(
            cmd.request().unwrap().payload(),
            &[0x64, 0x19, 0x00, 0x41, 0x00]
        );

        let cmd = SetConstellation::new(Constellation::empty(), Attribute::Sram);
        assert_eq!(
            cmd.request().unwrap().payload(),
            &[0x64, 0x19, 0x00, 0x00, 0x00]
        );
    }
}
