use crate::{constants::MAX_COMMAND_PAYLOAD_LEN, ValidationError};

pub use constellation::{Constellation, SetConstellation};
pub use dop_mask::{DopMask, DopMode};
pub use factory_default::FactoryDefault;
pub use nmea_talker_id::{NmeaTalkerId, TalkerId};
pub use pinning::{PinningMode, PinningParams, PositionPinning};
pub use position_rate::PositionRate;
pub use power_mode::{PowerMode, PowerSaving};
pub use qzss::QzssConfig;
pub use sbas::{SbasConfig, SbasSubsystem};
pub use system_restart::{RestartMode, SystemRestart};

mod constellation;
mod dop_mask;
mod factory_default;
mod nmea_talker_id;
mod pinning;
mod position_rate;
mod power_mode;
mod qzss;
mod sbas;
mod system_restart;

/// Where the receiver stores a configuration change
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Volatile, lost on power cycle
    #[default]
    Sram = 0,
    /// Also written to flash
    SramAndFlash = 1,
}

impl Attribute {
    pub const fn into_raw(self) -> u8 {
        self as u8
    }
}

/// Serialized command: message id, body and optional persistence attribute.
///
/// Built for a single call and dropped once framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    payload: Vec<u8>,
    attribute: Option<Attribute>,
}

impl CommandRequest {
    pub(crate) fn new(id: &[u8]) -> Self {
        let mut payload = Vec::with_capacity(MAX_COMMAND_PAYLOAD_LEN);
        payload.extend_from_slice(id);
        Self {
            payload,
            attribute: None,
        }
    }

    pub(crate) fn u8(mut self, value: u8) -> Self {
        self.payload.push(value);
        self
    }

    /// Multi-byte fields are sent big endian
    pub(crate) fn u16(mut self, value: u16) -> Self {
        self.payload.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn i16(mut self, value: i16) -> Self {
        self.payload.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Appends the attribute, always the last byte of the payload
    pub(crate) fn attribute(mut self, attribute: Attribute) -> Self {
        self.payload.push(attribute.into_raw());
        self.attribute = Some(attribute);
        self
    }

    /// Bytes to be framed, message id first
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn persistence(&self) -> Option<Attribute> {
        self.attribute
    }
}

/// Configuration command understood by the receiver
pub trait Command {
    /// Name used in logs and errors
    const NAME: &'static str;

    /// Message id, and sub-id for extended messages
    const ID: &'static [u8];

    /// Checks every field against its documented range
    fn validate(&self) -> Result<(), ValidationError>;

    /// Serializes the fields, assumes `validate` succeeded
    fn write_request(&self, request: CommandRequest) -> CommandRequest;

    /// Validates and serializes the command
    fn request(&self) -> Result<CommandRequest, ValidationError> {
        self.validate()?;
        Ok(self.write_request(CommandRequest::new(Self::ID)))
    }
}

pub(crate) fn check_range<T>(
    command: &'static str,
    field: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError>
where
    T: Copy + PartialOrd + Into<i32>,
{
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            command,
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_layout() {
        let request = CommandRequest::new(&[0x62, 0x03])
            .u8(1)
            .u16(0x0102)
            .i16(-2)
            .attribute(Attribute::SramAndFlash);
        assert_eq!(
            request.payload(),
            &[0x62, 0x03, 0x01, 0x01, 0x02, 0xff, 0xfe, 0x01]
        );
        assert_eq!(request.persistence(), Some(Attribute::SramAndFlash));
    }

    #[test]
    fn check_range_bounds() {
        assert!(check_range("cmd", "f", 0u8, 0, 3).is_ok());
        assert!(check_range("cmd", "f", 3u8, 0, 3).is_ok());
        assert_eq!(
            check_range("cmd", "f", 4u8, 0, 3),
            Err(ValidationError::OutOfRange {
                command: "cmd",
                field: "f",
                value: 4,
                min: 0,
                max: 3
            })
        );
        assert!(check_range("cmd", "f", -9001i16, -9000, 9000).is_err());
    }
}
