use super::{Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Configure Position Update Rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRate {
    /// Update rate in Hz
    pub rate_hz: u8,
    pub attribute: Attribute,
}

impl Default for PositionRate {
    fn default() -> Self {
        Self {
            rate_hz: 1,
            attribute: Attribute::Sram,
        }
    }
}

impl PositionRate {
    /// Rates accepted by the receiver
    pub const SUPPORTED_RATES_HZ: [u8; 10] = [1, 2, 4, 5, 8, 10, 20, 25, 40, 50];

    pub fn new(rate_hz: u8, attribute: Attribute) -> Self {
        Self { rate_hz, attribute }
    }
}

impl Command for PositionRate {
    const NAME: &'static str = "CONFIGURE-POSITION-RATE";
    const ID: &'static [u8] = &[0x0e];

    fn validate(&self) -> Result<(), ValidationError> {
        if !Self::SUPPORTED_RATES_HZ.contains(&self.rate_hz) {
            return Err(ValidationError::InvalidValue {
                command: Self::NAME,
                field: "rate_hz",
                value: self.rate_hz.into(),
            });
        }
        Ok(())
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request.u8(self.rate_hz).attribute(self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_hz_to_flash() {
        let cmd = PositionRate::new(10, Attribute::SramAndFlash);
        assert_eq!(cmd.request().unwrap().payload(), &[0x0e, 0x0a, 0x01]);
    }

    #[test]
    fn unsupported_rates() {
        for rate in [0, 3, 6, 30, 51, 255] {
            assert!(
                PositionRate::new(rate, Attribute::Sram).validate().is_err(),
                "rate {rate} accepted"
            );
        }
    }
}
