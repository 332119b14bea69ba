//! # Structural Key
//!
//! Use values of any type as hash-map keys, compared by their logical
//! content instead of their identity or in-memory representation.
//!
//! ## Overview
//!
//! A [`StructuralKey`] is built from a value and a [`Coder`]. The coder
//! supplies a [`StructuralValue`] that defines equality and hashing, and a
//! byte encoding from which the value can be reconstructed:
//!
//! - **Equality**: two keys are equal iff their structural values are equal
//! - **Hashing**: consistent with equality, computed once per key
//! - **Reconstruction**: [`StructuralKey::get_key`] decodes the stored bytes
//! - **Immutability**: keys never change after construction and are `Send + Sync`
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use structural_key::{BigEndianIntCoder, Coder, StructuralKey};
//!
//! let coder: Arc<dyn Coder<i32>> = Arc::new(BigEndianIntCoder);
//!
//! let mut counts: HashMap<StructuralKey<i32>, usize> = HashMap::new();
//! for n in [5, 6, 5] {
//!     *counts.entry(StructuralKey::of(&n, coder.clone()).unwrap()).or_default() += 1;
//! }
//!
//! let five = StructuralKey::of(&5, coder).unwrap();
//! assert_eq!(counts[&five], 2);
//! assert_eq!(five.get_key().unwrap(), 5);
//! ```
//!
//! ## Re-exports
//!
//! - `structural_key::core` - The key wrapper, coder trait and errors
//! - `structural_key::coders` - Ready-made coders

pub use structural_key_coders as coders;
pub use structural_key_core as core;

pub use structural_key_core::{
    Coder, CoderError, KeyError, Result, StructuralBytes, StructuralKey, StructuralValue,
};

pub use structural_key_coders::{
    BigEndianIntCoder, ByteArrayCoder, CborCoder, CborCoderConfig, KvCoder, NullableCoder,
    StringUtf8Coder, VarLongCoder,
};
