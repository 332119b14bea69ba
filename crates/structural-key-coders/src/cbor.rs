//! Coder for serde types, backed by canonical CBOR.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use structural_key_core::{Coder, CoderError};

use crate::canonical::canonical_bytes;

/// Configuration for [`CborCoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CborCoderConfig {
    /// Largest accepted encoding, in bytes, for both encode and decode.
    pub max_encoded_len: Option<usize>,
    /// Maximum nesting of arrays and maps.
    pub max_depth: usize,
}

impl Default for CborCoderConfig {
    fn default() -> Self {
        Self {
            max_encoded_len: None,
            max_depth: 64,
        }
    }
}

/// Deterministic CBOR coder for `T`.
///
/// The structural value is the canonical encoding (the trait default), so
/// values that serialize to the same CBOR data model compare equal, e.g.
/// two maps holding the same entries.
///
/// Map entries are sorted; sequences keep their serialized order. A
/// `HashSet` serializes as a sequence in its own iteration order, so two
/// equal sets can encode differently and make unequal keys. Use
/// `BTreeSet` or a sorted `Vec` for set-valued fields.
pub struct CborCoder<T> {
    config: CborCoderConfig,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CborCoder<T> {
    pub fn new() -> Self {
        Self::with_config(CborCoderConfig::default())
    }

    pub fn with_config(config: CborCoderConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &CborCoderConfig {
        &self.config
    }

    fn check_len(&self, len: usize) -> Option<usize> {
        self.config.max_encoded_len.filter(|&max| len > max)
    }
}

impl<T> Default for CborCoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CborCoder<T> {
    fn clone(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl<T> fmt::Debug for CborCoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CborCoder")
            .field("type", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Coder<T> for CborCoder<T>
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        "CborCoder"
    }

    fn encode(&self, value: &T) -> Result<Vec<u8>, CoderError> {
        let bytes = canonical_bytes(value, self.config.max_depth)?;
        if let Some(max) = self.check_len(bytes.len()) {
            return Err(CoderError::Encoding(format!(
                "encoding of {} bytes exceeds limit of {}",
                bytes.len(),
                max
            )));
        }
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CoderError> {
        if let Some(max) = self.check_len(bytes.len()) {
            return Err(CoderError::Decoding(format!(
                "input of {} bytes exceeds limit of {}",
                bytes.len(),
                max
            )));
        }

        let mut reader = bytes;
        let value: T =
            ciborium::from_reader(&mut reader).map_err(|e| CoderError::Decoding(e.to_string()))?;
        if !reader.is_empty() {
            return Err(CoderError::Decoding(format!(
                "{} trailing bytes after CBOR item",
                reader.len()
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;
    use structural_key_core::StructuralKey;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Shard {
        region: String,
        index: u32,
        tags: HashMap<String, String>,
    }

    fn shard(tags: &[(&str, &str)]) -> Shard {
        Shard {
            region: "eu-west".into(),
            index: 7,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_roundtrip() {
        let coder = CborCoder::<Shard>::new();
        let value = shard(&[("tier", "hot"), ("owner", "ops")]);
        let bytes = coder.encode(&value).unwrap();
        assert_eq!(coder.decode(&bytes).unwrap(), value);
    }

    #[test]
    fn test_keys_equal_regardless_of_map_order() {
        let coder: Arc<dyn Coder<Shard>> = Arc::new(CborCoder::<Shard>::new());
        let a = shard(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let b = shard(&[("c", "3"), ("a", "1"), ("b", "2")]);

        let ka = StructuralKey::of(&a, coder.clone()).unwrap();
        let kb = StructuralKey::of(&b, coder).unwrap();
        assert_eq!(ka, kb);
        assert_eq!(ka.encoded(), kb.encoded());
    }

    #[test]
    fn test_btree_set_keys_equal_regardless_of_insertion_order() {
        let coder: Arc<dyn Coder<BTreeSet<String>>> =
            Arc::new(CborCoder::<BTreeSet<String>>::new());
        let words: Vec<String> = (0..16).map(|i| format!("member-{i}")).collect();
        let forward: BTreeSet<String> = words.iter().cloned().collect();
        let reverse: BTreeSet<String> = words.iter().rev().cloned().collect();

        let kf = StructuralKey::of(&forward, coder.clone()).unwrap();
        let kr = StructuralKey::of(&reverse, coder).unwrap();
        assert_eq!(kf, kr);
        assert_eq!(kf.encoded(), kr.encoded());
        assert_eq!(kr.get_key().unwrap(), forward);
    }

    #[test]
    fn test_sequences_keep_their_order() {
        let coder: Arc<dyn Coder<Vec<u32>>> = Arc::new(CborCoder::<Vec<u32>>::new());
        let ascending = StructuralKey::of(&vec![1u32, 2, 3], coder.clone()).unwrap();
        let descending = StructuralKey::of(&vec![3u32, 2, 1], coder.clone()).unwrap();
        assert_ne!(ascending, descending);

        let mut sorted = vec![3u32, 1, 2];
        sorted.sort_unstable();
        assert_eq!(StructuralKey::of(&sorted, coder).unwrap(), ascending);
    }

    #[test]
    fn test_encode_limit() {
        let coder = CborCoder::<String>::with_config(CborCoderConfig {
            max_encoded_len: Some(4),
            ..Default::default()
        });
        assert_eq!(coder.encode(&"abc".to_string()).unwrap(), vec![0x63, b'a', b'b', b'c']);
        assert_eq!(
            coder.encode(&"abcd".to_string()),
            Err(CoderError::Encoding("encoding of 5 bytes exceeds limit of 4".into()))
        );
        assert!(matches!(
            coder.decode(&[0x64, b'a', b'b', b'c', b'd']),
            Err(CoderError::Decoding(_))
        ));
    }

    #[test]
    fn test_float_is_encoding_error() {
        let coder = CborCoder::<f64>::new();
        assert!(matches!(coder.encode(&0.5), Err(CoderError::Encoding(_))));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let coder = CborCoder::<u32>::new();
        assert_eq!(coder.decode(&[0x01]).unwrap(), 1);
        assert_eq!(
            coder.decode(&[0x01, 0x02]),
            Err(CoderError::Decoding("1 trailing bytes after CBOR item".into()))
        );
    }

    #[test]
    fn test_truncated_input_rejected() {
        let coder = CborCoder::<String>::new();
        assert!(matches!(
            coder.decode(&[0x63, b'a']),
            Err(CoderError::Decoding(_))
        ));
    }

    #[test]
    fn test_debug_names_type() {
        let debug = format!("{:?}", CborCoder::<u32>::new());
        assert!(debug.contains("u32"));
        assert!(debug.contains("max_depth: 64"));
    }
}
