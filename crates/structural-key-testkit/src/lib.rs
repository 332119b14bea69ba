//! # Structural Key Testkit
//!
//! Testing utilities for structural keys.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Coders with interesting behavior (case-insensitive
//!   structural values, injected failures, decoding that can be broken after
//!   keys were built) and a [`KeyFixture`] bundling the common coders
//! - **Generators**: Proptest strategies for property-based testing
//! - **Golden vectors**: Pinned encodings of the provided coders
//!
//! ## Golden Vectors
//!
//! ```rust
//! use structural_key_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{name}: got {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use structural_key_testkit::{generators::mixed_case_word, KeyFixture};
//!
//! proptest! {
//!     #[test]
//!     fn folded_keys_ignore_case(word in mixed_case_word()) {
//!         let fx = KeyFixture::new();
//!         let upper = fx.folded_key(&word.to_uppercase()).unwrap();
//!         let lower = fx.folded_key(&word.to_lowercase()).unwrap();
//!         prop_assert_eq!(upper, lower);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    init_test_tracing, CaseInsensitiveCoder, FailingCoder, FailureMode, KeyFixture,
    SwappableCoder,
};
pub use vectors::{all_vectors, encode_vector, verify_all_vectors, GoldenVector, VectorValue};
