use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;

/// Bounds-checked little-endian reader over an instruction payload.
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            offset: 0,
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, ByteReaderError> {
        self.check_bounds(1)?;
        let value = self.buffer[self.offset];
        self.offset += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, ByteReaderError> {
        self.check_bounds(2)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 2]);
        let value = cursor
            .read_u16::<LittleEndian>()
            .map_err(ByteReaderError::Io)?;
        self.offset += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, ByteReaderError> {
        self.check_bounds(4)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 4]);
        let value = cursor
            .read_u32::<LittleEndian>()
            .map_err(ByteReaderError::Io)?;
        self.offset += 4;
        Ok(value)
    }

    pub fn read_u64(&mut self) -> Result<u64, ByteReaderError> {
        self.check_bounds(8)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 8]);
        let value = cursor
            .read_u64::<LittleEndian>()
            .map_err(ByteReaderError::Io)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn read_i8(&mut self) -> Result<i8, ByteReaderError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, ByteReaderError> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_i32(&mut self) -> Result<i32, ByteReaderError> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_i64(&mut self) -> Result<i64, ByteReaderError> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_bool(&mut self) -> Result<bool, ByteReaderError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_fixed_array(&mut self, length: usize) -> Result<Vec<u8>, ByteReaderError> {
        self.check_bounds(length)?;
        let slice = self.buffer[self.offset..self.offset + length].to_vec();
        self.offset += length;
        Ok(slice)
    }

    /// Borsh string: u32 length prefix then UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, ByteReaderError> {
        let length = self.read_u32()? as usize;
        self.check_bounds(length)?;
        let bytes = self.buffer[self.offset..self.offset + length].to_vec();
        self.offset += length;
        String::from_utf8(bytes).map_err(ByteReaderError::InvalidString)
    }

    pub fn read_pubkey(&mut self) -> Result<String, ByteReaderError> {
        let bytes = self.read_fixed_array(32)?;
        Ok(bs58::encode(bytes).into_string())
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn skip(&mut self, length: usize) -> Result<(), ByteReaderError> {
        self.check_bounds(length)?;
        self.offset += length;
        Ok(())
    }

    fn check_bounds(&self, length: usize) -> Result<(), ByteReaderError> {
        if self.offset + length > self.buffer.len() {
            return Err(ByteReaderError::BufferOverflow {
                length,
                offset: self.offset,
                buffer_len: self.buffer.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ByteReaderError {
    #[error("buffer overflow: trying to read {length} bytes at offset {offset} from buffer of length {buffer_len}")]
    BufferOverflow {
        length: usize,
        offset: usize,
        buffer_len: usize,
    },
    #[error("failed to read value: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read string: {0}")]
    InvalidString(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let data = [1u8, 0, 0, 0, 0, 0, 0, 0, 0xff];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u64().unwrap(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0xff);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn reads_length_prefixed_strings() {
        let mut data = vec![5u8, 0, 0, 0];
        data.extend_from_slice(b"hello");
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), "hello");
    }

    #[test]
    fn reading_past_the_end_fails() {
        let mut reader = ByteReader::new(&[1, 2]);
        assert!(matches!(
            reader.read_u64(),
            Err(ByteReaderError::BufferOverflow { .. })
        ));
    }
}
