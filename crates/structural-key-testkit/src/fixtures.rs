//! Test fixtures and helpers.
//!
//! Coders with controlled behavior for exercising the key contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use structural_key_coders::{BigEndianIntCoder, StringUtf8Coder};
use structural_key_core::{Coder, CoderError, Result, StructuralKey, StructuralValue};

/// Install a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Strings whose structural value ignores case.
///
/// The encoding keeps the original spelling, so `"AB"` and `"ab"` make
/// equal keys that still decode to different strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveCoder;

impl Coder<String> for CaseInsensitiveCoder {
    fn name(&self) -> &str {
        "CaseInsensitiveCoder"
    }

    fn encode(&self, value: &String) -> std::result::Result<Vec<u8>, CoderError> {
        StringUtf8Coder.encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<String, CoderError> {
        StringUtf8Coder.decode(bytes)
    }

    fn structural_value(&self, value: &String) -> std::result::Result<StructuralValue, CoderError> {
        Ok(StructuralValue::new(value.to_lowercase()))
    }
}

/// Which operation a [`FailingCoder`] rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    Encode,
    StructuralValue,
    Decode,
}

/// Big-endian `i32` coder that fails one operation for every input.
#[derive(Debug, Clone, Copy)]
pub struct FailingCoder {
    mode: FailureMode,
}

impl FailingCoder {
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }
}

impl Coder<i32> for FailingCoder {
    fn name(&self) -> &str {
        "FailingCoder"
    }

    fn encode(&self, value: &i32) -> std::result::Result<Vec<u8>, CoderError> {
        if self.mode == FailureMode::Encode {
            return Err(CoderError::Encoding(format!("refusing to encode {}", value)));
        }
        BigEndianIntCoder.encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<i32, CoderError> {
        if self.mode == FailureMode::Decode {
            return Err(CoderError::Decoding(format!(
                "refusing to decode {}",
                hex::encode(bytes)
            )));
        }
        BigEndianIntCoder.decode(bytes)
    }

    fn structural_value(&self, value: &i32) -> std::result::Result<StructuralValue, CoderError> {
        if self.mode == FailureMode::StructuralValue {
            return Err(CoderError::StructuralValue(format!(
                "no structural value for {}",
                value
            )));
        }
        BigEndianIntCoder.structural_value(value)
    }
}

/// Big-endian `i32` coder whose decoding can be broken at runtime.
///
/// Build keys while it works, then call [`SwappableCoder::break_decoding`]
/// to simulate bytes that no longer decode.
#[derive(Debug, Default)]
pub struct SwappableCoder {
    decode_broken: AtomicBool,
}

impl SwappableCoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_decoding(&self) {
        self.decode_broken.store(true, Ordering::SeqCst);
    }

    pub fn restore_decoding(&self) {
        self.decode_broken.store(false, Ordering::SeqCst);
    }
}

impl Coder<i32> for SwappableCoder {
    fn name(&self) -> &str {
        "SwappableCoder"
    }

    fn encode(&self, value: &i32) -> std::result::Result<Vec<u8>, CoderError> {
        BigEndianIntCoder.encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<i32, CoderError> {
        if self.decode_broken.load(Ordering::SeqCst) {
            return Err(CoderError::Decoding("decoding disabled".into()));
        }
        BigEndianIntCoder.decode(bytes)
    }

    fn structural_value(&self, value: &i32) -> std::result::Result<StructuralValue, CoderError> {
        BigEndianIntCoder.structural_value(value)
    }
}

/// Shared coders for building keys in tests.
pub struct KeyFixture {
    pub ints: Arc<dyn Coder<i32>>,
    pub strings: Arc<dyn Coder<String>>,
    pub folded: Arc<dyn Coder<String>>,
}

impl KeyFixture {
    pub fn new() -> Self {
        Self {
            ints: Arc::new(BigEndianIntCoder),
            strings: Arc::new(StringUtf8Coder),
            folded: Arc::new(CaseInsensitiveCoder),
        }
    }

    /// Key for an `i32` under [`BigEndianIntCoder`].
    pub fn int_key(&self, n: i32) -> Result<StructuralKey<i32>> {
        StructuralKey::of(&n, self.ints.clone())
    }

    /// Key for a string under [`StringUtf8Coder`].
    pub fn string_key(&self, s: &str) -> Result<StructuralKey<String>> {
        StructuralKey::of(&s.to_string(), self.strings.clone())
    }

    /// Key for a string under [`CaseInsensitiveCoder`].
    pub fn folded_key(&self, s: &str) -> Result<StructuralKey<String>> {
        StructuralKey::of(&s.to_string(), self.folded.clone())
    }
}

impl Default for KeyFixture {
    fn default() -> Self {
        Self::new()
    }
}
