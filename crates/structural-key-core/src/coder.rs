//! The coder capability consumed by structural keys.
//!
//! A coder converts between a logical value and its byte encoding, and
//! produces the [`StructuralValue`] used for equality and hashing. The key
//! wrapper trusts the following laws without being able to check them:
//!
//! - **Round-trip**: `decode(encode(v))` is logically equal to `v`.
//! - **Structural equality**: `structural_value(a) == structural_value(b)`
//!   iff `a` and `b` are logically equal.
//! - **Determinism**: all three operations are pure functions of their input.

use crate::error::CoderError;
use crate::structural::StructuralValue;

/// Encodes, decodes and structurally identifies values of type `K`.
///
/// The trait is object-safe; [`StructuralKey`](crate::StructuralKey) keeps
/// its coder as an `Arc<dyn Coder<K>>`.
pub trait Coder<K>: Send + Sync {
    /// Stable, human-readable name used in error messages and logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Encode `value` to bytes.
    fn encode(&self, value: &K) -> Result<Vec<u8>, CoderError>;

    /// Decode a value from bytes previously produced by [`Coder::encode`].
    fn decode(&self, bytes: &[u8]) -> Result<K, CoderError>;

    /// Produce the structural value of `value`.
    ///
    /// The default wraps the encoded bytes, which is correct for any coder
    /// whose encoding is deterministic and injective on logical values.
    /// Coders whose values already have a meaningful `Eq + Hash` should
    /// override this and return the value itself.
    fn structural_value(&self, value: &K) -> Result<StructuralValue, CoderError> {
        self.encode(value).map(StructuralValue::from_bytes)
    }
}

impl<K, C: Coder<K> + ?Sized> Coder<K> for std::sync::Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&self, value: &K) -> Result<Vec<u8>, CoderError> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<K, CoderError> {
        (**self).decode(bytes)
    }

    fn structural_value(&self, value: &K) -> Result<StructuralValue, CoderError> {
        (**self).structural_value(value)
    }
}
