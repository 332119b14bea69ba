//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// Any `i32`.
pub fn int_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

/// A small `i32`, so that independently drawn values collide often.
pub fn small_int() -> impl Strategy<Value = i32> + Clone {
    -3i32..=3
}

/// Any `i64`.
pub fn long_value() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// A short word over a tiny mixed-case alphabet.
///
/// Independently drawn words are frequently equal ignoring case, which is
/// what the transitivity and grouping properties need.
pub fn mixed_case_word() -> impl Strategy<Value = String> + Clone {
    "[abAB]{0,3}".prop_map(String::from)
}

/// Arbitrary UTF-8 text.
pub fn text() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Byte payload of up to `max_len` bytes.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// An optional small `i32`.
pub fn nullable_int() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(small_int())
}

/// A `(word, long)` pair.
pub fn kv_pair() -> impl Strategy<Value = (String, i64)> {
    (mixed_case_word(), long_value())
}

/// Three values drawn from the same strategy.
pub fn triple<S>(strategy: S) -> impl Strategy<Value = (S::Value, S::Value, S::Value)>
where
    S: Strategy + Clone,
{
    (strategy.clone(), strategy.clone(), strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::Arc;

    use structural_key_coders::{
        BigEndianIntCoder, ByteArrayCoder, KvCoder, NullableCoder, StringUtf8Coder, VarLongCoder,
    };
    use structural_key_core::{Coder, StructuralKey};

    use crate::fixtures::KeyFixture;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    proptest! {
        #[test]
        fn test_reflexive(n in int_value()) {
            let key = KeyFixture::new().int_key(n).unwrap();
            prop_assert!(key == key.clone());
            prop_assert_eq!(hash_of(&key), hash_of(&key.clone()));
        }

        #[test]
        fn test_symmetric(a in mixed_case_word(), b in mixed_case_word()) {
            let fx = KeyFixture::new();
            let (ka, kb) = (fx.folded_key(&a).unwrap(), fx.folded_key(&b).unwrap());
            prop_assert_eq!(ka == kb, kb == ka);
        }

        #[test]
        fn test_transitive((a, b, c) in triple(mixed_case_word())) {
            let fx = KeyFixture::new();
            let ka = fx.folded_key(&a).unwrap();
            let kb = fx.folded_key(&b).unwrap();
            let kc = fx.folded_key(&c).unwrap();
            if ka == kb && kb == kc {
                prop_assert!(ka == kc);
            }
        }

        #[test]
        fn test_hash_consistent_with_eq(a in mixed_case_word(), b in mixed_case_word()) {
            let fx = KeyFixture::new();
            let (ka, kb) = (fx.folded_key(&a).unwrap(), fx.folded_key(&b).unwrap());
            prop_assert_eq!(ka == kb, a.to_lowercase() == b.to_lowercase());
            if ka == kb {
                prop_assert_eq!(hash_of(&ka), hash_of(&kb));
                prop_assert_eq!(ka.structural_hash(), kb.structural_hash());
            }
        }

        #[test]
        fn test_int_roundtrip(n in int_value()) {
            prop_assert_eq!(KeyFixture::new().int_key(n).unwrap().get_key().unwrap(), n);
        }

        #[test]
        fn test_text_roundtrip(s in text()) {
            let key = StructuralKey::of(&s, Arc::new(StringUtf8Coder)).unwrap();
            prop_assert_eq!(key.get_key().unwrap(), s);
        }

        #[test]
        fn test_bytes_roundtrip(b in bytes(64)) {
            let key = StructuralKey::of(&b, Arc::new(ByteArrayCoder)).unwrap();
            prop_assert_eq!(key.get_key().unwrap(), b);
        }

        #[test]
        fn test_nullable_equality(a in nullable_int(), b in nullable_int()) {
            let coder: Arc<dyn Coder<Option<i32>>> =
                Arc::new(NullableCoder::new(BigEndianIntCoder));
            let ka = StructuralKey::of(&a, coder.clone()).unwrap();
            let kb = StructuralKey::of(&b, coder).unwrap();
            prop_assert_eq!(ka == kb, a == b);
            prop_assert_eq!(ka.get_key().unwrap(), a);
        }

        #[test]
        fn test_kv_roundtrip(pair in kv_pair()) {
            let coder: Arc<dyn Coder<(String, i64)>> =
                Arc::new(KvCoder::new(StringUtf8Coder, VarLongCoder));
            let key = StructuralKey::of(&pair, coder).unwrap();
            prop_assert_eq!(key.get_key().unwrap(), pair);
        }
    }
}
