use std::{fmt, io, time::Duration};

/// Argument of a command outside of its documented range.
///
/// Produced before anything is encoded, so no byte reaches the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    OutOfRange {
        command: &'static str,
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    InvalidValue {
        command: &'static str,
        field: &'static str,
        value: i32,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match *self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange {
                command,
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Field {} of {} out of range, expect {}..={}, got {}",
                field, command, min, max, value
            ),
            ValidationError::InvalidValue {
                command,
                field,
                value,
            } => write!(f, "Invalid value {} for field {} of {}", value, field, command),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to place a frame into the transmit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    Overflow { required: usize, capacity: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Overflow { required, capacity } => write!(
                f,
                "Frame of {} bytes does not fit into {} bytes transmit buffer",
                required, capacity
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error that possible during strict frame decoding
#[derive(Debug, PartialEq, Eq)]
pub enum ParserError {
    InvalidSync,
    InvalidChecksum { expect: u8, got: u8 },
    InvalidPacketLen { expect: usize, got: usize },
    InvalidTrailer,
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidSync => f.write_str("Frame does not start with sync chars"),
            ParserError::InvalidChecksum { expect, got } => write!(
                f,
                "Not valid packet's checksum, expect {:x}, got {:x}",
                expect, got
            ),
            ParserError::InvalidPacketLen { expect, got } => {
                write!(f, "Invalid packet length, expect {}, got {}", expect, got)
            },
            ParserError::InvalidTrailer => f.write_str("Frame does not end with <CR><LF>"),
        }
    }
}

impl std::error::Error for ParserError {}

/// Reason a command was not confirmed by the receiver
#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    EncodingOverflow(EncodeError),
    /// No acknowledgment decoded before the deadline
    Timeout {
        waited: Duration,
    },
    /// Well-formed NACK received
    Nack,
    /// Frame completed but its first payload byte is neither ACK nor NACK
    UnexpectedAck(u8),
    /// The transport was used before `begin()`
    NotInitialized,
    Io(io::Error),
}

impl Error {
    /// Only a broken precondition is unrecoverable, every other failure may be retried
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::NotInitialized)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        Self::EncodingOverflow(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotConnected {
            Self::NotInitialized
        } else {
            Self::Io(e)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::EncodingOverflow(e) => write!(f, "Encoding error: {}", e),
            Error::Timeout { waited } => {
                write!(f, "Timed out waiting for ACK after {} ms", waited.as_millis())
            },
            Error::Nack => f.write_str("Command rejected by receiver (NACK)"),
            Error::UnexpectedAck(id) => write!(f, "Unexpected acknowledgment id {:#04x}", id),
            Error::NotInitialized => f.write_str("Transport not initialized, call begin() first"),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(e) => Some(e),
            Error::EncodingOverflow(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
