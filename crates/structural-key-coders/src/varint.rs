//! Unsigned LEB128 helpers shared by the varint coders.

use structural_key_core::CoderError;

/// Longest LEB128 encoding of a `u64`.
pub(crate) const MAX_LEN: usize = 10;

/// Append `n` as unsigned LEB128.
pub(crate) fn write_u64(buf: &mut Vec<u8>, mut n: u64) {
    while n >= 0x80 {
        buf.push((n as u8) | 0x80);
        n >>= 7;
    }
    buf.push(n as u8);
}

/// Read an unsigned LEB128 value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub(crate) fn read_u64(bytes: &[u8]) -> Result<(u64, usize), CoderError> {
    let mut value = 0u64;
    for (i, &b) in bytes.iter().enumerate().take(MAX_LEN) {
        let low = (b & 0x7f) as u64;
        if i == MAX_LEN - 1 && low > 1 {
            return Err(CoderError::Decoding("varint overflows 64 bits".into()));
        }
        value |= low << (7 * i);
        if b & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    if bytes.len() >= MAX_LEN {
        Err(CoderError::Decoding("varint overflows 64 bits".into()))
    } else {
        Err(CoderError::Decoding("truncated varint".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(n: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        write_u64(&mut buf, n);
        buf
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(127), vec![0x7f]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xac, 0x02]);
        assert_eq!(encode(u64::MAX).len(), MAX_LEN);
    }

    #[test]
    fn test_read_reports_consumed_length() {
        assert_eq!(read_u64(&[0xac, 0x02, 0xff]).unwrap(), (300, 2));
        assert_eq!(read_u64(&encode(u64::MAX)).unwrap(), (u64::MAX, MAX_LEN));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            read_u64(&[0x80]),
            Err(CoderError::Decoding("truncated varint".into()))
        );
        assert!(read_u64(&[]).is_err());
    }

    #[test]
    fn test_overflow() {
        let mut bytes = vec![0xff; 9];
        bytes.push(0x02);
        assert_eq!(
            read_u64(&bytes),
            Err(CoderError::Decoding("varint overflows 64 bits".into()))
        );
        assert!(read_u64(&[0x80; 11]).is_err());
    }
}
