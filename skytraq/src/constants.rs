pub const SYNC_CHAR_1: u8 = 0xa0;
pub const SYNC_CHAR_2: u8 = 0xa1;
pub const END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)

pub(crate) const SYNC_SIZE: usize = 2;
pub(crate) const PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const HEADER_LEN: usize = SYNC_SIZE + PAYLOAD_SIZE_LEN;
pub(crate) const CHECKSUM_LEN: usize = 1;
pub(crate) const TRAILER_LEN: usize = 2;

/// Bytes added around a payload: sync (2) + length (2) + checksum (1) + trailer (2)
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CHECKSUM_LEN + TRAILER_LEN;

pub(crate) const LENGTH_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2
pub(crate) const PAYLOAD_OFFSET: usize = HEADER_LEN;

/// First payload byte of a message the receiver accepted
pub const ACK_ID: u8 = 0x83;
/// First payload byte of a message the receiver rejected
pub const NACK_ID: u8 = 0x84;

/// Largest payload of any supported command (SYSTEM RESTART)
pub const MAX_COMMAND_PAYLOAD_LEN: usize = 15;

/// Frame size of the largest supported command
pub const MAX_FRAME_LEN: usize = MAX_COMMAND_PAYLOAD_LEN + FRAME_OVERHEAD;
