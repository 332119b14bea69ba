//! # Structural Key Coders
//!
//! Ready-made [`Coder`](structural_key_core::Coder) implementations.
//!
//! | Coder | Value | Encoding | Structural value |
//! |---|---|---|---|
//! | [`BigEndianIntCoder`] | `i32` | 4 bytes, big-endian | the integer |
//! | [`VarLongCoder`] | `i64` | LEB128 of the bit pattern | the integer |
//! | [`StringUtf8Coder`] | `String` | UTF-8 bytes | the string |
//! | [`ByteArrayCoder`] | `Vec<u8>` | the bytes | the bytes |
//! | [`NullableCoder`] | `Option<T>` | marker byte + inner | optional inner structural value |
//! | [`KvCoder`] | `(A, B)` | length-prefixed key + value | pair of structural values |
//! | [`CborCoder`] | order-stable serde type | canonical CBOR | canonical bytes |

pub mod canonical;
pub mod cbor;
pub mod composite;
pub mod primitive;
mod varint;

pub use canonical::{canonical_bytes, canonical_value_bytes};
pub use cbor::{CborCoder, CborCoderConfig};
pub use composite::{KvCoder, NullableCoder};
pub use primitive::{BigEndianIntCoder, ByteArrayCoder, StringUtf8Coder, VarLongCoder};
