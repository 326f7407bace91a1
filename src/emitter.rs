use crate::{
    buffer::EncodingBuffer,
    dry_run::DryRunBuffer,
    error::Result,
    sink::ByteSink,
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Committing,
    Counting,
}

// For when the pass kind is only known at runtime; producers that know it
//  statically can take a ByteSink generic instead.
#[derive(Clone, Debug)]
pub enum Emitter {
    Committing(EncodingBuffer),
    Counting(DryRunBuffer),
}

impl Emitter {
    pub fn new(mode: Mode) -> Self {
        match mode {
            Mode::Committing => Emitter::Committing(EncodingBuffer::new()),
            Mode::Counting => Emitter::Counting(DryRunBuffer::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Emitter::Committing(_) => Mode::Committing,
            Emitter::Counting(_) => Mode::Counting,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Emitter::Committing(b) => b.as_bytes(),
            Emitter::Counting(b) => b.as_bytes(),
        }
    }

    pub fn into_buffer(self) -> EncodingBuffer {
        match self {
            Emitter::Committing(b) => b,
            Emitter::Counting(b) => b.into_inner(),
        }
    }

    // On a committing emitter every write is already real.

    pub fn real_byte(&mut self, byte: u8) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_byte(byte);
            }
            Emitter::Counting(b) => {
                b.real_byte(byte);
            }
        }
        self
    }

    pub fn real11(&mut self, byte1: u8, byte2: u8) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put11(byte1, byte2);
            }
            Emitter::Counting(b) => {
                b.real11(byte1, byte2);
            }
        }
        self
    }

    pub fn real12(&mut self, byte: u8, short: u16) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put12(byte, short);
            }
            Emitter::Counting(b) => {
                b.real12(byte, short);
            }
        }
        self
    }

    pub fn discard(&mut self) -> Result<()> {
        match self {
            Emitter::Committing(b) => b.truncate_last(),
            Emitter::Counting(b) => b.discard(),
        }
    }
}

impl ByteSink for Emitter {
    fn put_byte(&mut self, byte: u8) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_byte(byte);
            }
            Emitter::Counting(b) => {
                b.put_byte(byte);
            }
        }
        self
    }

    fn put_short(&mut self, short: u16) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_short(short);
            }
            Emitter::Counting(b) => {
                b.put_short(short);
            }
        }
        self
    }

    fn put_int(&mut self, int: u32) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_int(int);
            }
            Emitter::Counting(b) => {
                b.put_int(int);
            }
        }
        self
    }

    fn put_long(&mut self, long: u64) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_long(long);
            }
            Emitter::Counting(b) => {
                b.put_long(long);
            }
        }
        self
    }

    fn put_byte_array(&mut self, source: &[u8], offset: usize, count: usize) -> Result<&mut Self> {
        match self {
            Emitter::Committing(b) => {
                b.put_byte_array(source, offset, count)?;
            }
            Emitter::Counting(b) => {
                b.put_byte_array(source, offset, count)?;
            }
        }
        Ok(self)
    }

    fn len(&self) -> usize {
        match self {
            Emitter::Committing(b) => b.len(),
            Emitter::Counting(b) => b.len(),
        }
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        match self {
            Emitter::Committing(b) => {
                b.put_bytes(bytes);
            }
            Emitter::Counting(b) => {
                b.put_bytes(bytes);
            }
        }
        self
    }
}
