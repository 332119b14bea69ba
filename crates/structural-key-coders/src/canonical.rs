//! Canonical CBOR encoding for deterministic serialization.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats, no tags
//!
//! Determinism is what makes the encoding usable as a structural value: two
//! logically equal values produce identical bytes, whatever order their map
//! entries were inserted in.

use ciborium::value::{Integer, Value};
use serde::Serialize;
use structural_key_core::CoderError;
use thiserror::Error;

/// Reasons a value has no canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    #[error("floats are not supported in canonical encoding")]
    Float,

    #[error("tags are not supported in canonical encoding")]
    Tag,

    #[error("unsupported CBOR value")]
    Unsupported,

    #[error("nesting exceeds maximum depth of {0}")]
    TooDeep(usize),

    #[error("duplicate map key")]
    DuplicateKey,

    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl From<CanonicalError> for CoderError {
    fn from(e: CanonicalError) -> Self {
        CoderError::Encoding(e.to_string())
    }
}

/// Serialize `value` and encode it canonically.
pub fn canonical_bytes<T: Serialize + ?Sized>(
    value: &T,
    max_depth: usize,
) -> Result<Vec<u8>, CanonicalError> {
    let value = Value::serialized(value).map_err(|e| CanonicalError::Serialize(e.to_string()))?;
    canonical_value_bytes(&value, max_depth)
}

/// Encode a CBOR value canonically.
pub fn canonical_value_bytes(value: &Value, max_depth: usize) -> Result<Vec<u8>, CanonicalError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value, Depth::root(max_depth))?;
    Ok(buf)
}

/// Nesting level of the value being encoded.
#[derive(Debug, Clone, Copy)]
struct Depth {
    level: usize,
    max: usize,
}

impl Depth {
    fn root(max: usize) -> Self {
        Self { level: 0, max }
    }

    /// Level for the children of a container at this level.
    fn nested(self) -> Result<Self, CanonicalError> {
        if self.level >= self.max {
            return Err(CanonicalError::TooDeep(self.max));
        }
        Ok(Self {
            level: self.level + 1,
            max: self.max,
        })
    }
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value, depth: Depth) -> Result<(), CanonicalError> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Array(arr) => encode_array(buf, arr, depth.nested()?)?,
        Value::Map(entries) => encode_map_canonical(buf, entries, depth.nested()?)?,
        Value::Float(_) => return Err(CanonicalError::Float),
        Value::Tag(..) => return Err(CanonicalError::Tag),
        _ => return Err(CanonicalError::Unsupported),
    }
    Ok(())
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

fn encode_array(buf: &mut Vec<u8>, arr: &[Value], depth: Depth) -> Result<(), CanonicalError> {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item, depth)?;
    }
    Ok(())
}

/// Encode a map canonically (major type 5).
///
/// Entries are sorted by their encoded key bytes.
fn encode_map_canonical(
    buf: &mut Vec<u8>,
    entries: &[(Value, Value)],
    depth: Depth,
) -> Result<(), CanonicalError> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k, depth)?;
        pairs.push((key_buf, v));
    }

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if pairs.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(CanonicalError::DuplicateKey);
    }

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value, depth)?;
    }
    Ok(())
}
