use crate::Error;
use byteorder::{ByteOrder, LittleEndian};
use glam::Vec3;

/// Sequential little-endian reader over an in-memory VMD buffer.
///
/// Every read is bounds checked; running off the end yields
/// [`Error::TruncatedInput`] instead of zero-filled values.
#[derive(Clone, Debug)]
pub(crate) struct BinaryCursor<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BinaryCursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.cursor)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < n {
            return Err(Error::TruncatedInput {
                offset: self.cursor,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(slice)
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, Error> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub(crate) fn read_f32_le(&mut self) -> Result<f32, Error> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub(crate) fn read_vec3_le(&mut self) -> Result<Vec3, Error> {
        let mut v = [0f32; 3];
        LittleEndian::read_f32_into(self.take(12)?, &mut v);
        Ok(Vec3::from_array(v))
    }

    /// Advances past `n` bytes without interpreting them.
    pub(crate) fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.take(n).map(|_| ())
    }
}
