use super::{Command, CommandRequest};
use crate::ValidationError;

/// Set Factory Defaults and reboot the receiver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactoryDefault;

impl FactoryDefault {
    /// Reboot after restoring the defaults
    const REBOOT: u8 = 0x01;
}

impl Command for FactoryDefault {
    const NAME: &'static str = "SET-FACTORY-DEFAULT";
    const ID: &'static [u8] = &[0x04];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request.u8(Self::REBOOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload() {
        let request = FactoryDefault.request().unwrap();
        assert_eq!(request.payload(), &[0x04, 0x01]);
        assert_eq!(request.persistence(), None);
    }
}
