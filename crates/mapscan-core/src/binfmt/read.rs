use crate::binfmt::error::DecodeError;

/// Sequential cursor over one scene-file buffer.
///
/// All multi-byte integers on the wire are assembled least-significant-byte
/// first, regardless of host endianness. String lengths use unsigned LEB128
/// (7 data bits per byte, MSB is the continuation bit, low group first).
/// Every read is bounds-checked and reports the offset it failed at; the
/// cursor never panics on truncated input.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take exactly `n` raw bytes, or fail without advancing.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    /// 2-byte unsigned integer, low byte first.
    pub fn u16(&mut self) -> Result<u16, DecodeError> {
        let b = self.take(2)?;
        Ok(u16::from(b[0]) | (u16::from(b[1]) << 8))
    }

    /// 2-byte signed integer, low byte first.
    pub fn i16(&mut self) -> Result<i16, DecodeError> {
        Ok(self.u16()? as i16)
    }

    /// 4-byte signed integer, low byte first.
    pub fn i32(&mut self) -> Result<i32, DecodeError> {
        let b = self.take(4)?;
        Ok(i32::from(b[0])
            | (i32::from(b[1]) << 8)
            | (i32::from(b[2]) << 16)
            | (i32::from(b[3]) << 24))
    }

    /// 4 bytes, low byte first, bit-reinterpreted as IEEE-754.
    pub fn f32(&mut self) -> Result<f32, DecodeError> {
        let b = self.take(4)?;
        let bits = u32::from(b[0])
            | (u32::from(b[1]) << 8)
            | (u32::from(b[2]) << 16)
            | (u32::from(b[3]) << 24);
        Ok(f32::from_bits(bits))
    }

    /// Unsigned LEB128, capped at 32 bits.
    pub fn varint(&mut self) -> Result<u32, DecodeError> {
        let start = self.pos;
        let mut value: u32 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.u8()?;
            let group = u32::from(byte & 0x7f);
            if shift >= 32 || (shift > 0 && group > (u32::MAX >> shift)) {
                return Err(DecodeError::LengthOverflow { offset: start });
            }
            value |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    /// Length-prefixed UTF-8 string: LEB128 byte length, then the payload.
    pub fn var_string(&mut self) -> Result<&'a str, DecodeError> {
        let len = self.varint()? as usize;
        let start = self.pos;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { offset: start })
    }

    /// Run-length-encoded string: 2-byte payload length `L`, then `L/2`
    /// `(repeat, value)` byte pairs. The expansion is decoded as Latin-1,
    /// where every byte maps directly to the code point of the same value.
    pub fn run_length_string(&mut self) -> Result<String, DecodeError> {
        let len_offset = self.pos;
        let len = self.u16()? as usize;
        if len % 2 != 0 {
            return Err(DecodeError::OddRunLength {
                offset: len_offset,
                len,
            });
        }
        let payload = self.take(len)?;
        let mut out = String::new();
        for pair in payload.chunks_exact(2) {
            let (repeat, value) = (pair[0], pair[1]);
            for _ in 0..repeat {
                out.push(char::from(value));
            }
        }
        Ok(out)
    }
}
