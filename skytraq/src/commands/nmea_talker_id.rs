use super::{check_range, Attribute, Command, CommandRequest};
use crate::ValidationError;

/// Named values of [`NmeaTalkerId::id`]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TalkerId {
    /// `$GP` sentences
    Gp = 0,
    /// `$GN` sentences
    Gn = 1,
    Auto = 2,
}

impl From<TalkerId> for u8 {
    fn from(id: TalkerId) -> u8 {
        id as u8
    }
}

/// Configure NMEA Talker ID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NmeaTalkerId {
    pub id: u8,
    pub attribute: Attribute,
}

impl NmeaTalkerId {
    pub fn new(id: impl Into<u8>, attribute: Attribute) -> Self {
        Self {
            id: id.into(),
            attribute,
        }
    }
}

impl Command for NmeaTalkerId {
    const NAME: &'static str = "CONFIGURE-NMEA-TALKER-ID";
    const ID: &'static [u8] = &[0x4b];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "id", self.id, 0, 2)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request.u8(self.id).attribute(self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gn_payload() {
        let cmd = NmeaTalkerId::new(TalkerId::Gn, Attribute::Sram);
        assert_eq!(cmd.request().unwrap().payload(), &[0x4b, 0x01, 0x00]);
        assert!(NmeaTalkerId::new(3u8, Attribute::Sram).request().is_err());
    }
}
