//! The structural key wrapper.
//!
//! A [`StructuralKey`] pairs a value's structural representation with its
//! encoded bytes and the coder that produced both. Equality and hashing use
//! only the structural representation; the bytes exist so the original
//! value can be reconstructed with [`StructuralKey::get_key`].

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bytes::Bytes;

use crate::coder::Coder;
use crate::error::{KeyError, Result};
use crate::structural::StructuralValue;

/// A `(coder, structural value, encoded bytes)` triple usable as a map key.
///
/// Immutable once built. Cloning is cheap: all parts are reference counted.
///
/// # Cross-type equality
///
/// `StructuralKey<K>` can be compared with `StructuralKey<J>` for any `J`.
/// Two keys are equal iff their structural values are equal, regardless of
/// the key type or the coder that built them. Coders for different types
/// that emit equal representations therefore produce equal keys.
pub struct StructuralKey<K> {
    coder: Arc<dyn Coder<K>>,
    structural: StructuralValue,
    encoded: Bytes,
    /// Hash of `structural`, computed once at construction.
    hash: u64,
}

impl<K> StructuralKey<K> {
    /// Build a key for `value` using `coder`.
    ///
    /// Computes the structural value and the encoding of `value`. If either
    /// fails, no key is produced and the coder's error is returned wrapped
    /// in [`KeyError::Construction`].
    pub fn of(value: &K, coder: Arc<dyn Coder<K>>) -> Result<Self> {
        let built = coder
            .structural_value(value)
            .and_then(|structural| coder.encode(value).map(|encoded| (structural, encoded)));

        let (structural, encoded) = match built {
            Ok(parts) => parts,
            Err(e) => {
                tracing::debug!(coder = coder.name(), error = %e, "structural key construction failed");
                return Err(KeyError::Construction {
                    coder: coder.name().to_string(),
                    source: e,
                });
            }
        };

        let hash = structural_hash_of(&structural);
        tracing::trace!(
            coder = coder.name(),
            encoded_len = encoded.len(),
            "structural key constructed"
        );

        Ok(Self {
            coder,
            structural,
            encoded: Bytes::from(encoded),
            hash,
        })
    }

    /// Decode the original value from the stored bytes.
    ///
    /// Every call decodes afresh. Fails with [`KeyError::Decoding`] if the
    /// retained coder rejects the bytes.
    pub fn get_key(&self) -> Result<K> {
        self.coder.decode(&self.encoded).map_err(|e| {
            tracing::debug!(
                coder = self.coder.name(),
                encoded_len = self.encoded.len(),
                error = %e,
                "could not decode structural key"
            );
            KeyError::Decoding {
                coder: self.coder.name().to_string(),
                source: e,
            }
        })
    }

    /// The structural value used for equality and hashing.
    pub fn structural_value(&self) -> &StructuralValue {
        &self.structural
    }

    /// The encoded bytes of the original value.
    pub fn encoded(&self) -> &Bytes {
        &self.encoded
    }

    /// The coder retained for decoding.
    pub fn coder(&self) -> &Arc<dyn Coder<K>> {
        &self.coder
    }

    /// The retained coder's name.
    pub fn coder_name(&self) -> &str {
        self.coder.name()
    }

    /// Hash of the structural value.
    ///
    /// Equal keys always have equal structural hashes. The value is stable
    /// for the lifetime of the process but is not a persistent fingerprint.
    pub fn structural_hash(&self) -> u64 {
        self.hash
    }
}

fn structural_hash_of(structural: &StructuralValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    structural.hash(&mut hasher);
    hasher.finish()
}

impl<K> Clone for StructuralKey<K> {
    fn clone(&self) -> Self {
        Self {
            coder: Arc::clone(&self.coder),
            structural: self.structural.clone(),
            encoded: self.encoded.clone(),
            hash: self.hash,
        }
    }
}

impl<K, J> PartialEq<StructuralKey<J>> for StructuralKey<K> {
    fn eq(&self, other: &StructuralKey<J>) -> bool {
        if std::ptr::eq(
            self as *const Self as *const (),
            other as *const StructuralKey<J> as *const (),
        ) {
            return true;
        }
        self.hash == other.hash && self.structural == other.structural
    }
}

impl<K> Eq for StructuralKey<K> {}

impl<K> Hash for StructuralKey<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<K> fmt::Debug for StructuralKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuralKey")
            .field("coder", &self.coder.name())
            .field("structural", &self.structural)
            .field("encoded", &hex::encode(&self.encoded))
            .finish()
    }
}
