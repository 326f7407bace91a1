use crate::error::Result;

// A ByteSink is anything a producer can emit into.
// All widths are fixed and big-endian, and every write either lands completely
//  or, for a failed bulk copy, not at all.
// The compound writers are plain compositions of the primitives, so whatever
//  a sink does to a byte or a short it also does inside put11 and friends.

pub trait ByteSink {
    fn put_byte(&mut self, byte: u8) -> &mut Self;
    fn put_short(&mut self, short: u16) -> &mut Self;
    fn put_int(&mut self, int: u32) -> &mut Self;
    fn put_long(&mut self, long: u64) -> &mut Self;

    /// Appends `count` bytes of `source` starting at `offset`.
    ///
    /// Fails with [`EncodingError::OutOfRange`](crate::EncodingError::OutOfRange)
    /// without touching the sink if the range does not fit in `source`.
    fn put_byte_array(&mut self, source: &[u8], offset: usize, count: usize) -> Result<&mut Self>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        for &b in bytes {
            self.put_byte(b);
        }
        self
    }

    fn put11(&mut self, byte1: u8, byte2: u8) -> &mut Self {
        self.put_byte(byte1).put_byte(byte2)
    }

    fn put12(&mut self, byte: u8, short: u16) -> &mut Self {
        self.put_byte(byte).put_short(short)
    }

    fn put112(&mut self, byte1: u8, byte2: u8, short: u16) -> &mut Self {
        self.put_byte(byte1).put_byte(byte2).put_short(short)
    }

    fn put122(&mut self, byte: u8, short1: u16, short2: u16) -> &mut Self {
        self.put_byte(byte).put_short(short1).put_short(short2)
    }
}

pub(crate) fn checked_range(source: &[u8], offset: usize, count: usize) -> Result<&[u8]> {
    offset
        .checked_add(count)
        .filter(|end| *end <= source.len())
        .map(|end| &source[offset..end])
        .ok_or(crate::EncodingError::OutOfRange {
            offset,
            count,
            len: source.len(),
        })
}
