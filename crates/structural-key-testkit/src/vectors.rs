//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact bytes each provided coder produces, so that
//! keys built by different versions of this workspace stay compatible.

use std::collections::HashMap;

use structural_key_coders::{
    BigEndianIntCoder, ByteArrayCoder, CborCoder, KvCoder, NullableCoder, StringUtf8Coder,
    VarLongCoder,
};
use structural_key_core::{Coder, CoderError};

/// Input value of a golden vector, tagged with the coder that encodes it.
#[derive(Debug, Clone)]
pub enum VectorValue {
    /// [`BigEndianIntCoder`]
    Int(i32),
    /// [`VarLongCoder`]
    Long(i64),
    /// [`StringUtf8Coder`]
    Text(&'static str),
    /// [`ByteArrayCoder`]
    Bytes(&'static [u8]),
    /// [`NullableCoder`] over [`BigEndianIntCoder`]
    NullableInt(Option<i32>),
    /// [`KvCoder`] of [`StringUtf8Coder`] and [`VarLongCoder`]
    TextLong(&'static str, i64),
    /// [`CborCoder`] of a string-to-`u32` map
    CborMap(&'static [(&'static str, u32)]),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Value to encode.
    pub value: VectorValue,
    /// Expected encoding (hex).
    pub expected_hex: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "int 5",
            value: VectorValue::Int(5),
            expected_hex: "00000005",
        },
        GoldenVector {
            name: "int -1",
            value: VectorValue::Int(-1),
            expected_hex: "ffffffff",
        },
        GoldenVector {
            name: "long 0",
            value: VectorValue::Long(0),
            expected_hex: "00",
        },
        GoldenVector {
            name: "long 300",
            value: VectorValue::Long(300),
            expected_hex: "ac02",
        },
        GoldenVector {
            name: "long -1",
            value: VectorValue::Long(-1),
            expected_hex: "ffffffffffffffffff01",
        },
        GoldenVector {
            name: "text hello",
            value: VectorValue::Text("hello"),
            expected_hex: "68656c6c6f",
        },
        GoldenVector {
            name: "empty text",
            value: VectorValue::Text(""),
            expected_hex: "",
        },
        GoldenVector {
            name: "bytes",
            value: VectorValue::Bytes(&[0xde, 0xad, 0xbe, 0xef]),
            expected_hex: "deadbeef",
        },
        GoldenVector {
            name: "nullable none",
            value: VectorValue::NullableInt(None),
            expected_hex: "00",
        },
        GoldenVector {
            name: "nullable some",
            value: VectorValue::NullableInt(Some(1)),
            expected_hex: "0100000001",
        },
        GoldenVector {
            name: "kv user 300",
            value: VectorValue::TextLong("user", 300),
            expected_hex: "0475736572ac02",
        },
        GoldenVector {
            name: "cbor map sorted",
            value: VectorValue::CborMap(&[("b", 2), ("a", 1)]),
            expected_hex: "a2616101616202",
        },
    ]
}

/// Encode a vector's value with its coder.
pub fn encode_vector(vector: &GoldenVector) -> Result<Vec<u8>, CoderError> {
    match &vector.value {
        VectorValue::Int(n) => BigEndianIntCoder.encode(n),
        VectorValue::Long(n) => VarLongCoder.encode(n),
        VectorValue::Text(s) => StringUtf8Coder.encode(&s.to_string()),
        VectorValue::Bytes(b) => ByteArrayCoder.encode(&b.to_vec()),
        VectorValue::NullableInt(n) => NullableCoder::new(BigEndianIntCoder).encode(n),
        VectorValue::TextLong(k, v) => {
            KvCoder::new(StringUtf8Coder, VarLongCoder).encode(&(k.to_string(), *v))
        }
        VectorValue::CborMap(entries) => {
            let map: HashMap<String, u32> =
                entries.iter().map(|(k, v)| (k.to_string(), *v)).collect();
            CborCoder::new().encode(&map)
        }
    }
}

/// Verify all golden vectors against their expected encodings.
///
/// Returns `(name, matches, actual_hex)` per vector. An encoding failure is
/// reported as a mismatch with the error text in place of the hex.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match encode_vector(v) {
            Ok(bytes) => {
                let hex = hex::encode(bytes);
                (v.name.to_string(), hex == v.expected_hex, hex)
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}
