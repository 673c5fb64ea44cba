use crate::EncodeError;

/// Transmit buffer with a hard capacity.
///
/// Storage is allocated once, on construction. Every write is checked
/// against the capacity, a frame that does not fit is refused as a whole
/// and leaves the buffer empty.
#[derive(Debug)]
pub struct TxBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl TxBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drops the current contents and makes sure `len` bytes can be written
    pub fn reserve_allocate(&mut self, len: usize) -> Result<(), EncodeError> {
        self.clear();
        if len > self.capacity {
            return Err(EncodeError::Overflow {
                required: len,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let required = self.data.len() + bytes.len();
        if required > self.capacity {
            self.clear();
            return Err(EncodeError::Overflow {
                required,
                capacity: self.capacity,
            });
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txb_write_within_capacity() {
        let mut buf = TxBuffer::with_capacity(4);
        buf.write(&[1, 2]).unwrap();
        buf.write(&[3, 4]).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(buf.len(), buf.capacity());
    }

    #[test]
    fn txb_overflowing_write_is_refused() {
        let mut buf = TxBuffer::with_capacity(4);
        buf.write(&[1, 2, 3]).unwrap();
        assert_eq!(
            buf.write(&[4, 5]),
            Err(EncodeError::Overflow {
                required: 5,
                capacity: 4
            })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn txb_reserve_clears_previous_frame() {
        let mut buf = TxBuffer::with_capacity(8);
        buf.write(&[1, 2, 3]).unwrap();
        buf.reserve_allocate(8).unwrap();
        assert!(buf.is_empty());
        assert!(buf.reserve_allocate(9).is_err());
    }

    #[test]
    fn txb_does_not_reallocate() {
        let mut buf = TxBuffer::with_capacity(16);
        let ptr = buf.as_slice().as_ptr();
        for _ in 0..4 {
            buf.reserve_allocate(16).unwrap();
            buf.write(&[0xaa; 16]).unwrap();
        }
        assert_eq!(ptr, buf.as_slice().as_ptr());
    }
}
