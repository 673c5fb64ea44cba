use crate::{
    constants::{
        CHECKSUM_LEN, END_CHAR_1, END_CHAR_2, FRAME_OVERHEAD, LENGTH_OFFSET, MAX_FRAME_LEN,
        PAYLOAD_OFFSET, SYNC_CHAR_1, SYNC_CHAR_2, TRAILER_LEN,
    },
    EncodeError, ParserError,
};

pub use buffer::TxBuffer;
pub(crate) use checksum::ChecksumCalc;
pub use checksum::xor_checksum;

mod buffer;
mod checksum;

/// Frames payloads into the SkyTraq binary format.
///
/// ```text
/// A0 A1 | LEN_HI LEN_LO | PAYLOAD[LEN] | CS | 0D 0A
/// ```
///
/// The codec owns a single transmit buffer, every call to
/// [`encode`](PacketCodec::encode) reuses it.
#[derive(Debug)]
pub struct PacketCodec {
    buf: TxBuffer,
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self::with_capacity(MAX_FRAME_LEN)
    }
}

impl PacketCodec {
    /// `capacity` is the size of the largest frame, framing included
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: TxBuffer::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest payload this codec is able to frame
    pub fn max_payload_len(&self) -> usize {
        self.capacity()
            .saturating_sub(FRAME_OVERHEAD)
            .min(u16::MAX as usize)
    }

    /// Builds the complete frame for `payload` and returns a view of it.
    ///
    /// On error nothing is left in the buffer.
    pub fn encode(&mut self, payload: &[u8]) -> Result<&[u8], EncodeError> {
        let required = payload.len() + FRAME_OVERHEAD;
        let pack_len = match u16::try_from(payload.len()) {
            Ok(len) => len,
            Err(_) => {
                self.buf.clear();
                return Err(EncodeError::Overflow {
                    required,
                    capacity: self.buf.capacity(),
                });
            },
        };
        self.buf.reserve_allocate(required)?;

        let len_bytes = pack_len.to_be_bytes();
        self.buf
            .write(&[SYNC_CHAR_1, SYNC_CHAR_2, len_bytes[0], len_bytes[1]])?;
        let mut checksum_calc = ChecksumCalc::new();
        checksum_calc.update(payload);
        self.buf.write(payload)?;
        self.buf
            .write(&[checksum_calc.result(), END_CHAR_1, END_CHAR_2])?;
        Ok(self.buf.as_slice())
    }
}

/// Strict inverse of [`PacketCodec::encode`], returns the payload of `frame`.
///
/// `frame` must hold exactly one frame. Unlike the acknowledgment path
/// this validates every framing byte and the checksum.
pub fn decode_frame(frame: &[u8]) -> Result<&[u8], ParserError> {
    if frame.len() < FRAME_OVERHEAD {
        return Err(ParserError::InvalidPacketLen {
            expect: FRAME_OVERHEAD,
            got: frame.len(),
        });
    }
    if frame[0] != SYNC_CHAR_1 || frame[1] != SYNC_CHAR_2 {
        return Err(ParserError::InvalidSync);
    }
    let pack_len =
        u16::from_be_bytes([frame[LENGTH_OFFSET], frame[LENGTH_OFFSET + 1]]) as usize;
    let expect = pack_len + FRAME_OVERHEAD;
    if frame.len() != expect {
        return Err(ParserError::InvalidPacketLen {
            expect,
            got: frame.len(),
        });
    }

    let payload = &frame[PAYLOAD_OFFSET..PAYLOAD_OFFSET + pack_len];
    let trailer_offset = PAYLOAD_OFFSET + pack_len + CHECKSUM_LEN;
    let mut calc = ChecksumCalc::new();
    calc.update(payload);
    calc.validate_result(frame[PAYLOAD_OFFSET + pack_len])?;

    if frame[trailer_offset..trailer_offset + TRAILER_LEN] != [END_CHAR_1, END_CHAR_2] {
        return Err(ParserError::InvalidTrailer);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_set_constellation() {
        let mut codec = PacketCodec::default();
        let frame = codec.encode(&[0x64, 0x19, 0x00, 0x01, 0x00]).unwrap();
        assert_eq!(
            frame,
            &[0xa0, 0xa1, 0x00, 0x05, 0x64, 0x19, 0x00, 0x01, 0x00, 0x7c, 0x0d, 0x0a]
        );
    }

    #[test]
    fn encode_empty_payload() {
        let mut codec = PacketCodec::default();
        let frame = codec.encode(&[]).unwrap();
        assert_eq!(frame, &[0xa0, 0xa1, 0x00, 0x00, 0x00, 0x0d, 0x0a]);
    }

    #[test]
    fn encode_fills_capacity_exactly() {
        let mut codec = PacketCodec::with_capacity(10);
        assert_eq!(codec.max_payload_len(), 3);
        let frame = codec.encode(&[1, 2, 3]).unwrap();
        assert_eq!(frame.len(), 10);
        assert_eq!(
            codec.encode(&[1, 2, 3, 4]),
            Err(EncodeError::Overflow {
                required: 11,
                capacity: 10
            })
        );
    }

    #[test]
    fn encode_reuses_buffer() {
        let mut codec = PacketCodec::default();
        codec.encode(&[0x04, 0x01]).unwrap();
        let frame = codec.encode(&[0x0c, 0x01, 0x00]).unwrap();
        assert_eq!(decode_frame(frame), Ok(&[0x0c, 0x01, 0x00][..]));
    }

    #[test]
    fn decode_rejects_bad_frames() {
        let good = [0xa0, 0xa1, 0x00, 0x02, 0x04, 0x01, 0x05, 0x0d, 0x0a];
        assert_eq!(decode_frame(&good), Ok(&[0x04, 0x01][..]));

        let mut bad_sync = good;
        bad_sync[1] = 0xa2;
        assert_eq!(decode_frame(&bad_sync), Err(ParserError::InvalidSync));

        let mut bad_cs = good;
        bad_cs[6] = 0x06;
        assert_eq!(
            decode_frame(&bad_cs),
            Err(ParserError::InvalidChecksum {
                expect: 0x06,
                got: 0x05
            })
        );

        let mut bad_trailer = good;
        bad_trailer[7] = 0x0a;
        assert_eq!(decode_frame(&bad_trailer), Err(ParserError::InvalidTrailer));

        assert_eq!(
            decode_frame(&good[..8]),
            Err(ParserError::InvalidPacketLen { expect: 9, got: 8 })
        );
        assert_eq!(
            decode_frame(&good[..4]),
            Err(ParserError::InvalidPacketLen { expect: 7, got: 4 })
        );
    }
}
