use alloc::vec::Vec;

use crate::{
    error::Result,
    sink::{checked_range, ByteSink},
};

pub const DEFAULT_CAPACITY: usize = 64;

// `storage` is used as a block of backing cells: its len() is the capacity
//  and only storage[..length] is meaningful. Cells past `length` are scratch.
#[derive(Clone)]
pub struct EncodingBuffer {
    storage: Vec<u8>,
    length: usize,
}

impl EncodingBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: alloc::vec![0; capacity],
            length: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.length]
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.storage.truncate(self.length);
        self.storage
    }

    // Keeps the allocated capacity.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    // The tail cell keeps whatever it held; it is outside the committed range now.
    pub(crate) fn truncate_last(&mut self) -> Result<()> {
        if self.length == 0 {
            return Err(crate::EncodingError::Underflow);
        }
        self.length -= 1;
        Ok(())
    }

    fn append(&mut self, bytes: &[u8]) {
        let end = self.length + bytes.len();
        if end > self.storage.len() {
            self.enlarge(bytes.len());
        }
        self.storage[self.length..end].copy_from_slice(bytes);
        self.length = end;
    }

    fn enlarge(&mut self, pending: usize) {
        let old_capacity = self.storage.len();
        let new_capacity = (2 * old_capacity).max(self.length + pending);
        tracing::trace!(old_capacity, new_capacity, "growing encoding buffer");
        self.storage.resize(new_capacity, 0);
    }
}

impl ByteSink for EncodingBuffer {
    fn put_byte(&mut self, byte: u8) -> &mut Self {
        self.append(&[byte]);
        self
    }

    fn put_short(&mut self, short: u16) -> &mut Self {
        self.append(&short.to_be_bytes());
        self
    }

    fn put_int(&mut self, int: u32) -> &mut Self {
        self.append(&int.to_be_bytes());
        self
    }

    fn put_long(&mut self, long: u64) -> &mut Self {
        self.append(&long.to_be_bytes());
        self
    }

    fn put_byte_array(&mut self, source: &[u8], offset: usize, count: usize) -> Result<&mut Self> {
        let bytes = checked_range(source, offset, count)?;
        self.append(bytes);
        Ok(self)
    }

    fn len(&self) -> usize {
        self.length
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.append(bytes);
        self
    }
}

impl Default for EncodingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for EncodingBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for EncodingBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncodingBuffer")
            .field("length", &self.length)
            .field("capacity", &self.storage.len())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::EncodingBuffer;
    use crate::{ByteSink, EncodingError};

    #[test]
    fn test_fixed_widths() {
        let mut buffer = EncodingBuffer::new();
        buffer
            .put_byte(0xAB)
            .put_short(0x0102)
            .put_int(0x0304_0506)
            .put_long(0x0708_090A_0B0C_0D0E);

        assert_eq!(buffer.len(), 15);
        assert_eq!(
            buffer.as_bytes(),
            [0xAB, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
    }

    #[test]
    fn test_big_endian_readback() {
        let mut buffer = EncodingBuffer::new();
        buffer.put_short(0xBEEF).put_int(0xDEAD_BEEF).put_long(u64::MAX - 1);

        let bytes = buffer.as_bytes();
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 0xBEEF);
        assert_eq!(
            u32::from_be_bytes(bytes[2..6].try_into().unwrap()),
            0xDEAD_BEEF
        );
        assert_eq!(
            u64::from_be_bytes(bytes[6..14].try_into().unwrap()),
            u64::MAX - 1
        );
    }

    #[test]
    fn test_compound_writers() {
        let mut buffer = EncodingBuffer::new();
        buffer.put12(0x10, 0x00FF);
        assert_eq!(buffer.as_bytes(), [0x10, 0x00, 0xFF]);

        buffer.clear();
        buffer
            .put11(1, 2)
            .put112(3, 4, 0x0506)
            .put122(7, 0x0809, 0x0A0B);
        assert_eq!(buffer.as_bytes(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_byte_array() {
        let source = [9u8, 8, 7, 6, 5];
        let mut buffer = EncodingBuffer::new();
        buffer.put_byte(1);

        assert!(buffer.put_byte_array(&source, 1, 3).is_ok());
        assert_eq!(buffer.as_bytes(), [1, 8, 7, 6]);

        assert_eq!(
            buffer.put_byte_array(&source, 4, 2).err(),
            Some(EncodingError::OutOfRange {
                offset: 4,
                count: 2,
                len: 5
            })
        );
        // Nothing from the failed copy is visible.
        assert_eq!(buffer.as_bytes(), [1, 8, 7, 6]);

        assert!(buffer.put_byte_array(&source, 5, 0).is_ok());
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_growth_keeps_content() {
        let mut buffer = EncodingBuffer::with_capacity(2);
        buffer.put_short(0x1234);
        assert_eq!(buffer.capacity(), 2);

        buffer.put_byte(0x56);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.as_bytes(), [0x12, 0x34, 0x56]);

        // A write wider than the doubled capacity grows to fit exactly.
        buffer.put_bytes(&[0; 20]);
        assert_eq!(buffer.capacity(), 23);
        assert_eq!(&buffer.as_bytes()[..3], [0x12, 0x34, 0x56]);

        let mut empty = EncodingBuffer::with_capacity(0);
        empty.put_long(42);
        assert_eq!(empty.capacity(), 8);
        assert_eq!(empty.as_bytes(), 42u64.to_be_bytes());
    }

    #[test]
    fn test_growth_is_amortized() {
        let mut buffer = EncodingBuffer::with_capacity(1);
        let mut grows = 0;
        let mut last = buffer.capacity();
        for i in 0..10_000u32 {
            buffer.put_byte(i as u8);
            if buffer.capacity() != last {
                grows += 1;
                last = buffer.capacity();
            }
        }
        assert!(grows <= 14);
        assert!(buffer.as_bytes().iter().enumerate().all(|(i, b)| *b == i as u8));
    }

    #[test]
    fn test_truncate_last() {
        let mut buffer = EncodingBuffer::new();
        assert_eq!(buffer.truncate_last(), Err(EncodingError::Underflow));

        buffer.put11(1, 2);
        assert!(buffer.truncate_last().is_ok());
        assert_eq!(buffer.as_bytes(), [1]);
    }

    #[test]
    fn test_into_vec() {
        let mut buffer = EncodingBuffer::with_capacity(16);
        buffer.put_int(7);
        assert_eq!(buffer.into_vec(), alloc::vec![0, 0, 0, 7]);
    }
}
