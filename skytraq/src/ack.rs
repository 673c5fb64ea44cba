use std::{
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{
    constants::{ACK_ID, END_CHAR_2, NACK_ID, SYNC_CHAR_1, SYNC_CHAR_2},
    error::{Error, Result},
    Transport,
};

/// Default time to wait for the receiver to answer a command
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Default pause between two polls of an idle transport
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Answer of the receiver to a command, taken from the first payload byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AckFrame {
    Ack,
    Nack,
    Unrecognized(u8),
}

impl AckFrame {
    pub fn is_ack(self) -> bool {
        self == AckFrame::Ack
    }
}

impl From<u8> for AckFrame {
    fn from(id: u8) -> Self {
        match id {
            ACK_ID => AckFrame::Ack,
            NACK_ID => AckFrame::Nack,
            _ => AckFrame::Unrecognized(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AckState {
    WaitSync1,
    WaitSync2,
    LenHigh,
    LenLow,
    Payload,
    WaitTrailer,
}

/// Byte-level state machine recognizing an acknowledgment frame.
///
/// Only the first payload byte is interpreted. The checksum and the first
/// trailer byte are skipped without being checked, a frame ends on the
/// first `0x0A` seen after its checksum.
#[derive(Debug)]
pub struct AckParser {
    state: AckState,
    expected_len: u16,
    count: u32,
    discriminator: u8,
}

impl Default for AckParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AckParser {
    pub fn new() -> Self {
        Self {
            state: AckState::WaitSync1,
            expected_len: 0,
            count: 0,
            discriminator: 0,
        }
    }

    /// Feeds one byte, returns the decoded answer once the frame is complete
    pub fn consume(&mut self, byte: u8) -> Option<AckFrame> {
        match self.state {
            AckState::WaitSync1 => {
                if byte == SYNC_CHAR_1 {
                    self.state = AckState::WaitSync2;
                }
            },
            AckState::WaitSync2 => {
                if byte == SYNC_CHAR_2 {
                    self.state = AckState::LenHigh;
                } else {
                    // The mismatched byte is dropped, even if it is another SYNC_CHAR_1
                    trace!("Discarding {:#04x} after sync char", byte);
                    self.state = AckState::WaitSync1;
                }
            },
            AckState::LenHigh => {
                self.expected_len = u16::from(byte) << 8;
                self.state = AckState::LenLow;
            },
            AckState::LenLow => {
                self.expected_len |= u16::from(byte);
                self.count = 0;
                self.state = AckState::Payload;
            },
            AckState::Payload => {
                if self.count == 0 {
                    self.discriminator = byte;
                }
                self.count += 1;
                // +1 for the checksum
                if self.count >= u32::from(self.expected_len) + 1 {
                    self.state = AckState::WaitTrailer;
                }
            },
            AckState::WaitTrailer => {
                if byte == END_CHAR_2 {
                    self.state = AckState::WaitSync1;
                    return Some(AckFrame::from(self.discriminator));
                }
            },
        }
        None
    }
}

/// Waits on a [`Transport`] for the answer to the last command sent
#[derive(Debug, Clone, Copy)]
pub struct AckReceiver {
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for AckReceiver {
    fn default() -> Self {
        Self::new(DEFAULT_ACK_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

impl AckReceiver {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Blocks until an acknowledgment frame is decoded or the deadline passes.
    ///
    /// Every call starts from a fresh [`AckParser`].
    pub fn wait<T: Transport>(&self, transport: &mut T) -> Result<AckFrame> {
        let mut parser = AckParser::new();
        let start = Instant::now();
        while start.elapsed() < self.timeout {
            if transport.available()? == 0 {
                thread::sleep(self.poll_interval);
                continue;
            }
            let Some(byte) = transport.read_byte()? else {
                continue;
            };
            if let Some(frame) = parser.consume(byte) {
                debug!("Received {:?} after {:?}", frame, start.elapsed());
                return Ok(frame);
            }
        }
        Err(Error::Timeout {
            waited: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(parser: &mut AckParser, bytes: &[u8]) -> Option<AckFrame> {
        let mut ret = None;
        for b in bytes {
            if let Some(frame) = parser.consume(*b) {
                assert!(ret.is_none(), "more than one frame decoded");
                ret = Some(frame);
            }
        }
        ret
    }

    #[test]
    fn ack_byte_by_byte() {
        let bytes = [0xa0, 0xa1, 0x00, 0x02, 0x83, 0x00, 0x81, 0x0d, 0x0a];
        let mut parser = AckParser::new();
        for b in &bytes[..bytes.len() - 1] {
            assert_eq!(parser.consume(*b), None);
        }
        assert_eq!(parser.consume(0x0a), Some(AckFrame::Ack));
    }

    #[test]
    fn nack_frame() {
        let mut parser = AckParser::new();
        assert_eq!(
            feed(&mut parser, &[0xa0, 0xa1, 0x00, 0x02, 0x84, 0x00, 0x84, 0x0d, 0x0a]),
            Some(AckFrame::Nack)
        );
    }

    #[test]
    fn unknown_discriminator() {
        let mut parser = AckParser::new();
        let frame = feed(&mut parser, &[0xa0, 0xa1, 0x00, 0x01, 0x50, 0x50, 0x0d, 0x0a]);
        assert_eq!(frame, Some(AckFrame::Unrecognized(0x50)));
        assert!(!frame.unwrap().is_ack());
    }

    #[test]
    fn stray_sync_byte_is_not_reused() {
        // 0xa0 0xa0 0xa1: the second 0xa0 is swallowed by the failed WaitSync2,
        // so 0xa1 does not start a frame
        let mut parser = AckParser::new();
        assert_eq!(
            feed(&mut parser, &[0xa0, 0xa0, 0xa1, 0x00, 0x02, 0x83, 0x00, 0x83, 0x0d, 0x0a]),
            None
        );
        assert_eq!(parser.state, AckState::WaitSync1);
    }

    #[test]
    fn trailer_waits_for_line_feed() {
        let mut parser = AckParser::new();
        assert_eq!(
            feed(&mut parser, &[0xa0, 0xa1, 0x00, 0x02, 0x83, 0x0e, 0x8d, 0x55, 0x0d, 0x00]),
            None
        );
        assert_eq!(parser.state, AckState::WaitTrailer);
        assert_eq!(parser.consume(0x0a), Some(AckFrame::Ack));
    }

    #[test]
    fn zero_length_frame_takes_checksum_as_discriminator() {
        let mut parser = AckParser::new();
        assert_eq!(
            feed(&mut parser, &[0xa0, 0xa1, 0x00, 0x00, 0x83, 0x0d, 0x0a]),
            Some(AckFrame::Ack)
        );
    }

    #[test]
    fn long_length_is_counted() {
        let mut bytes = vec![0xa0, 0xa1, 0x01, 0x00, 0x84];
        bytes.extend(std::iter::repeat(0x0a).take(0x100));
        let mut parser = AckParser::new();
        assert_eq!(feed(&mut parser, &bytes), None);
        assert_eq!(parser.state, AckState::WaitTrailer);
        assert_eq!(parser.consume(0x0a), Some(AckFrame::Nack));
    }
}
