use crate::ParserError;

/// XOR checksum calculator supporting both streaming and single-shot use.
///
/// Only payload bytes take part in the checksum, sync chars, length and
/// trailer are excluded.
#[derive(Default, Clone, Copy)]
pub(crate) struct ChecksumCalc {
    cs: u8,
}

impl ChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self { cs: 0 }
    }

    /// Update checksum with new bytes
    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub(crate) const fn update_byte(&mut self, byte: u8) {
        self.cs ^= byte;
    }

    /// Get the current checksum result
    pub(crate) const fn result(self) -> u8 {
        self.cs
    }

    /// Validate checksum and return result
    pub(crate) const fn validate_result(self, received: u8) -> Result<(), ParserError> {
        if self.cs == received {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: received,
                got: self.cs,
            })
        }
    }
}

/// XOR-fold of `payload`, the checksum byte of a SkyTraq frame
pub const fn xor_checksum(payload: &[u8]) -> u8 {
    let mut calc = ChecksumCalc::new();
    calc.update(payload);
    calc.result()
}
