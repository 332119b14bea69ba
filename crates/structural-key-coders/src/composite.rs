//! Coders built from other coders.

use structural_key_core::{Coder, CoderError, StructuralValue};

use crate::varint;

const NONE_MARKER: u8 = 0x00;
const SOME_MARKER: u8 = 0x01;

/// `Option<T>` coder wrapping an inner `T` coder.
///
/// `None` encodes as a single `0x00`; `Some(v)` as `0x01` followed by the
/// inner encoding of `v`. Absent values are therefore valid keys.
#[derive(Debug, Clone, Default)]
pub struct NullableCoder<C> {
    inner: C,
}

impl<C> NullableCoder<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C: Coder<T>> Coder<Option<T>> for NullableCoder<C> {
    fn name(&self) -> &str {
        "NullableCoder"
    }

    fn encode(&self, value: &Option<T>) -> Result<Vec<u8>, CoderError> {
        match value {
            None => Ok(vec![NONE_MARKER]),
            Some(v) => {
                let inner = self.inner.encode(v)?;
                let mut buf = Vec::with_capacity(inner.len() + 1);
                buf.push(SOME_MARKER);
                buf.extend_from_slice(&inner);
                Ok(buf)
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Option<T>, CoderError> {
        match bytes.split_first() {
            Some((&NONE_MARKER, [])) => Ok(None),
            Some((&NONE_MARKER, rest)) => Err(CoderError::Decoding(format!(
                "{} trailing bytes after null marker",
                rest.len()
            ))),
            Some((&SOME_MARKER, rest)) => self.inner.decode(rest).map(Some),
            Some((marker, _)) => Err(CoderError::Decoding(format!(
                "invalid nullable marker {:#04x}",
                marker
            ))),
            None => Err(CoderError::Decoding("empty nullable encoding".into())),
        }
    }

    fn structural_value(&self, value: &Option<T>) -> Result<StructuralValue, CoderError> {
        let inner = value
            .as_ref()
            .map(|v| self.inner.structural_value(v))
            .transpose()?;
        Ok(StructuralValue::new(inner))
    }
}

/// `(A, B)` coder from a key coder and a value coder.
///
/// The key encoding is prefixed with its LEB128 length; the value encoding
/// takes the remaining bytes.
#[derive(Debug, Clone, Default)]
pub struct KvCoder<KC, VC> {
    key: KC,
    value: VC,
}

impl<KC, VC> KvCoder<KC, VC> {
    pub fn new(key: KC, value: VC) -> Self {
        Self { key, value }
    }

    pub fn key_coder(&self) -> &KC {
        &self.key
    }

    pub fn value_coder(&self) -> &VC {
        &self.value
    }
}

impl<A, B, KC, VC> Coder<(A, B)> for KvCoder<KC, VC>
where
    KC: Coder<A>,
    VC: Coder<B>,
{
    fn name(&self) -> &str {
        "KvCoder"
    }

    fn encode(&self, value: &(A, B)) -> Result<Vec<u8>, CoderError> {
        let key = self.key.encode(&value.0)?;
        let val = self.value.encode(&value.1)?;
        let mut buf = Vec::with_capacity(varint::MAX_LEN + key.len() + val.len());
        varint::write_u64(&mut buf, key.len() as u64);
        buf.extend_from_slice(&key);
        buf.extend_from_slice(&val);
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<(A, B), CoderError> {
        let (key_len, used) = varint::read_u64(bytes)?;
        let rest = &bytes[used..];
        let key_len = usize::try_from(key_len)
            .ok()
            .filter(|&n| n <= rest.len())
            .ok_or_else(|| {
                CoderError::Decoding(format!(
                    "key length {} exceeds remaining {} bytes",
                    key_len,
                    rest.len()
                ))
            })?;
        let (key, val) = rest.split_at(key_len);
        Ok((self.key.decode(key)?, self.value.decode(val)?))
    }

    fn structural_value(&self, value: &(A, B)) -> Result<StructuralValue, CoderError> {
        Ok(StructuralValue::new((
            self.key.structural_value(&value.0)?,
            self.value.structural_value(&value.1)?,
        )))
    }
}
