//! Coders for primitive values.

use structural_key_core::{Coder, CoderError, StructuralValue};

use crate::varint;

/// `i32` encoded as 4 big-endian bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndianIntCoder;

impl Coder<i32> for BigEndianIntCoder {
    fn name(&self) -> &str {
        "BigEndianIntCoder"
    }

    fn encode(&self, value: &i32) -> Result<Vec<u8>, CoderError> {
        Ok(value.to_be_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<i32, CoderError> {
        let arr: [u8; 4] = bytes.try_into().map_err(|_| {
            CoderError::Decoding(format!("expected 4 bytes, got {}", bytes.len()))
        })?;
        Ok(i32::from_be_bytes(arr))
    }

    fn structural_value(&self, value: &i32) -> Result<StructuralValue, CoderError> {
        Ok(StructuralValue::new(*value))
    }
}

/// `i64` encoded as unsigned LEB128 of its two's-complement bit pattern.
///
/// Small non-negative values take one byte; negative values always take 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarLongCoder;

impl Coder<i64> for VarLongCoder {
    fn name(&self) -> &str {
        "VarLongCoder"
    }

    fn encode(&self, value: &i64) -> Result<Vec<u8>, CoderError> {
        let mut buf = Vec::with_capacity(varint::MAX_LEN);
        varint::write_u64(&mut buf, *value as u64);
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<i64, CoderError> {
        let (n, used) = varint::read_u64(bytes)?;
        if used != bytes.len() {
            return Err(CoderError::Decoding(format!(
                "{} trailing bytes after varint",
                bytes.len() - used
            )));
        }
        Ok(n as i64)
    }

    fn structural_value(&self, value: &i64) -> Result<StructuralValue, CoderError> {
        Ok(StructuralValue::new(*value))
    }
}

/// `String` encoded as its UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringUtf8Coder;

impl Coder<String> for StringUtf8Coder {
    fn name(&self) -> &str {
        "StringUtf8Coder"
    }

    fn encode(&self, value: &String) -> Result<Vec<u8>, CoderError> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CoderError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| CoderError::Decoding(e.to_string()))
    }

    fn structural_value(&self, value: &String) -> Result<StructuralValue, CoderError> {
        Ok(StructuralValue::new(value.clone()))
    }
}

/// `Vec<u8>` passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteArrayCoder;

impl Coder<Vec<u8>> for ByteArrayCoder {
    fn name(&self) -> &str {
        "ByteArrayCoder"
    }

    fn encode(&self, value: &Vec<u8>) -> Result<Vec<u8>, CoderError> {
        Ok(value.clone())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>, CoderError> {
        Ok(bytes.to_vec())
    }

    fn structural_value(&self, value: &Vec<u8>) -> Result<StructuralValue, CoderError> {
        Ok(StructuralValue::from_bytes(value.clone()))
    }
}
