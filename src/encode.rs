use alloc::vec::Vec;

use crate::{
    buffer::EncodingBuffer, dry_run::DryRunBuffer, error::Result, sink::ByteSink,
};

// Anything that knows how to write itself into a sink gets its size for free:
//  the same encode runs once through a dry-run buffer to measure it.
// Types with a cheaper closed form may override encoded_length, as long as it
//  agrees with what encode actually writes.

pub trait Encode {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()>;

    fn encoded_length(&self) -> Result<usize> {
        let mut dry = DryRunBuffer::new();
        self.encode(&mut dry)?;
        Ok(dry.len())
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = EncodingBuffer::new();
        self.encode(&mut buffer)?;
        Ok(buffer.into_vec())
    }
}

impl Encode for u8 {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        sink.put_byte(*self);
        Ok(())
    }

    fn encoded_length(&self) -> Result<usize> {
        Ok(1)
    }
}

impl Encode for u16 {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        sink.put_short(*self);
        Ok(())
    }

    fn encoded_length(&self) -> Result<usize> {
        Ok(2)
    }
}

impl Encode for u32 {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        sink.put_int(*self);
        Ok(())
    }

    fn encoded_length(&self) -> Result<usize> {
        Ok(4)
    }
}

impl Encode for u64 {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        sink.put_long(*self);
        Ok(())
    }

    fn encoded_length(&self) -> Result<usize> {
        Ok(8)
    }
}

impl Encode for [u8] {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        sink.put_byte_array(self, 0, self.len())?;
        Ok(())
    }

    fn encoded_length(&self) -> Result<usize> {
        Ok(self.len())
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        (**self).encode(sink)
    }

    fn encoded_length(&self) -> Result<usize> {
        (**self).encoded_length()
    }
}
