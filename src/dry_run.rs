use crate::{
    buffer::EncodingBuffer,
    error::Result,
    sink::{checked_range, ByteSink},
};

pub const DRY_RUN_CAPACITY: usize = 128;

// A dry run answers "how many bytes would this produce, and where" without
//  carrying real payloads. Every ordinary write stores zeros of the same width,
//  so its length always matches a committing run of the same calls.
// The real_* writes are the escape hatch for markers that must survive the
//  dry run, and discard undoes the last byte of a speculative marker.

#[derive(Clone, Debug)]
pub struct DryRunBuffer {
    inner: EncodingBuffer,
}

impl DryRunBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DRY_RUN_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: EncodingBuffer::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn as_buffer(&self) -> &EncodingBuffer {
        &self.inner
    }

    pub fn into_inner(self) -> EncodingBuffer {
        self.inner
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn real_byte(&mut self, byte: u8) -> &mut Self {
        self.inner.put_byte(byte);
        self
    }

    pub fn real11(&mut self, byte1: u8, byte2: u8) -> &mut Self {
        self.inner.put11(byte1, byte2);
        self
    }

    pub fn real12(&mut self, byte: u8, short: u16) -> &mut Self {
        self.inner.put12(byte, short);
        self
    }

    /// Removes the most recently written byte.
    pub fn discard(&mut self) -> Result<()> {
        self.inner.truncate_last()?;
        tracing::trace!(length = self.inner.len(), "discarded last byte of dry run");
        Ok(())
    }

    fn zeros(&mut self, width: usize) -> &mut Self {
        for _ in 0..width {
            self.inner.put_byte(0);
        }
        self
    }
}

impl ByteSink for DryRunBuffer {
    fn put_byte(&mut self, _byte: u8) -> &mut Self {
        self.zeros(1)
    }

    fn put_short(&mut self, _short: u16) -> &mut Self {
        self.zeros(2)
    }

    fn put_int(&mut self, _int: u32) -> &mut Self {
        self.zeros(4)
    }

    fn put_long(&mut self, _long: u64) -> &mut Self {
        self.zeros(8)
    }

    fn put_byte_array(&mut self, source: &[u8], offset: usize, count: usize) -> Result<&mut Self> {
        checked_range(source, offset, count)?;
        Ok(self.zeros(count))
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Default for DryRunBuffer {
    fn default() -> Self {
        Self::new()
    }
}
