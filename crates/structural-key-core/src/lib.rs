//! # Structural Key Core
//!
//! Pure primitives for using arbitrary values as hash-map keys by their
//! logical content rather than their identity or in-memory layout.
//!
//! This crate contains no I/O and no concrete serialization formats. The
//! byte encoding and the notion of "logical value" are delegated to a
//! [`Coder`] supplied by the caller.
//!
//! ## Key Types
//!
//! - [`Coder`] - Capability that encodes, decodes and produces structural values
//! - [`StructuralValue`] - Opaque, comparable and hashable representation of a value
//! - [`StructuralKey`] - Immutable `(structural value, encoded bytes, coder)` triple
//!   with equality and hashing defined by the structural value
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use structural_key_core::{Coder, CoderError, StructuralKey, StructuralValue};
//!
//! struct LowercaseCoder;
//!
//! impl Coder<String> for LowercaseCoder {
//!     fn name(&self) -> &str {
//!         "LowercaseCoder"
//!     }
//!
//!     fn encode(&self, value: &String) -> Result<Vec<u8>, CoderError> {
//!         Ok(value.as_bytes().to_vec())
//!     }
//!
//!     fn decode(&self, bytes: &[u8]) -> Result<String, CoderError> {
//!         String::from_utf8(bytes.to_vec()).map_err(|e| CoderError::Decoding(e.to_string()))
//!     }
//!
//!     fn structural_value(&self, value: &String) -> Result<StructuralValue, CoderError> {
//!         Ok(StructuralValue::new(value.to_lowercase()))
//!     }
//! }
//!
//! let coder: Arc<dyn Coder<String>> = Arc::new(LowercaseCoder);
//! let a = StructuralKey::of(&"AB".to_string(), coder.clone()).unwrap();
//! let b = StructuralKey::of(&"ab".to_string(), coder).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.get_key().unwrap(), "AB");
//! ```

pub mod coder;
pub mod error;
pub mod key;
pub mod structural;

pub use coder::Coder;
pub use error::{CoderError, KeyError, Result};
pub use key::StructuralKey;
pub use structural::{StructuralBytes, StructuralRepr, StructuralValue};
