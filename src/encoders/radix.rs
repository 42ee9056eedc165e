//! Positional numeral encoding over an arbitrary alphabet.
//!
//! The input bytes are read as a single unsigned integer which is then
//! written out in base `alphabet.base()`, most-significant digit first.
//! By default the *first* byte is the least significant
//! ([`ByteOrder::LittleEndian`]).
//!
//! Zero bytes on the most-significant end carry no value and are not
//! recovered by [`decode`]. Use [`decode_padded`] with the original length
//! when an exact round-trip is needed.

use crate::core::alphabet::Alphabet;
use crate::encoders::errors::EncodingError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Which end of a byte string is most significant when read as one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Byte `i` contributes `byte << (8 * i)`.
    #[default]
    LittleEndian,
    /// Byte 0 is the most significant.
    BigEndian,
}

impl ByteOrder {
    fn read_integer(self, data: &[u8]) -> BigUint {
        match self {
            ByteOrder::LittleEndian => BigUint::from_bytes_le(data),
            ByteOrder::BigEndian => BigUint::from_bytes_be(data),
        }
    }

    /// Minimal byte representation; zero has none.
    fn write_integer(self, num: &BigUint) -> Vec<u8> {
        if num.is_zero() {
            return Vec::new();
        }
        match self {
            ByteOrder::LittleEndian => num.to_bytes_le(),
            ByteOrder::BigEndian => num.to_bytes_be(),
        }
    }
}

/// Encode `data` with the little-endian convention.
///
/// Empty input is the integer zero and encodes to the zero symbol.
///
/// ```
/// use base_dots::{encoders::radix, BASE36};
///
/// assert_eq!(radix::encode(b"Hello world!", &BASE36), "102iefafi4ncbng8ax4");
/// assert_eq!(radix::encode(b"", &BASE36), "0");
/// ```
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encode_with(data, alphabet, ByteOrder::LittleEndian)
}

pub fn encode_with(data: &[u8], alphabet: &Alphabet, order: ByteOrder) -> String {
    let base = alphabet.base();
    let base_big = BigUint::from(base);
    let mut num = order.read_integer(data);

    // log2(256) / log2(base) digits per byte, plus the final digit
    let max_digits = (data.len() as f64 * 8.0 / (base as f64).log2()) as usize + 1;
    let mut result = Vec::with_capacity(max_digits);

    while num >= base_big {
        let (quotient, remainder) = num.div_rem(&base_big);
        result.push(digit_symbol(alphabet, &remainder));
        num = quotient;
    }
    // At least one digit, even for zero
    result.push(digit_symbol(alphabet, &num));

    result.reverse();
    result.into_iter().collect()
}

fn digit_symbol(alphabet: &Alphabet, digit: &BigUint) -> char {
    // digit < base, so both conversions succeed
    digit
        .to_usize()
        .and_then(|d| alphabet.encode_digit(d))
        .unwrap_or_else(|| alphabet.zero())
}

/// Decode a digit string produced by [`encode`].
///
/// # Errors
///
/// [`EncodingError::InvalidSymbol`] for a symbol outside the alphabet,
/// [`EncodingError::InvalidInput`] for an empty string.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, EncodingError> {
    decode_with(encoded, alphabet, ByteOrder::LittleEndian)
}

pub fn decode_with(
    encoded: &str,
    alphabet: &Alphabet,
    order: ByteOrder,
) -> Result<Vec<u8>, EncodingError> {
    let num = decode_integer(encoded, alphabet)?;
    Ok(order.write_integer(&num))
}

/// Decode and pad back to exactly `len` bytes.
///
/// Zero bytes are restored on the most-significant end, so
/// `decode_padded(&encode_with(b, a, o), a, o, b.len())` returns `b`.
///
/// # Errors
///
/// Same as [`decode`], plus [`EncodingError::InvalidInput`] when the value
/// does not fit in `len` bytes.
pub fn decode_padded(
    encoded: &str,
    alphabet: &Alphabet,
    order: ByteOrder,
    len: usize,
) -> Result<Vec<u8>, EncodingError> {
    let mut bytes = decode_with(encoded, alphabet, order)?;
    if bytes.len() > len {
        return Err(EncodingError::invalid_input(format!(
            "value needs {} bytes but the expected length is {}",
            bytes.len(),
            len
        )));
    }

    match order {
        ByteOrder::LittleEndian => bytes.resize(len, 0),
        ByteOrder::BigEndian => {
            let mut padded = vec![0u8; len - bytes.len()];
            padded.extend_from_slice(&bytes);
            bytes = padded;
        }
    }
    Ok(bytes)
}

fn decode_integer(encoded: &str, alphabet: &Alphabet) -> Result<BigUint, EncodingError> {
    if encoded.is_empty() {
        return Err(EncodingError::invalid_input("cannot decode an empty digit string"));
    }

    let base_big = BigUint::from(alphabet.base());
    let mut num = BigUint::zero();

    for (position, c) in encoded.chars().enumerate() {
        let digit = alphabet.decode_symbol(c).ok_or_else(|| {
            EncodingError::invalid_symbol(c, position, encoded, &alphabet.describe())
        })?;
        num *= &base_big;
        num += digit;
    }

    Ok(num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{BASE2, BASE10, BASE26, BASE36};

    #[test]
    fn test_hello_world_base36() {
        assert_eq!(encode(b"Hello world!", &BASE36), "102iefafi4ncbng8ax4");
    }

    #[test]
    fn test_hello_world_base26() {
        assert_eq!(encode(b"Hello world!", &BASE26), "nmoqgbeyffssrmplfbrs");
    }

    #[test]
    fn test_hello_world_big_endian() {
        assert_eq!(
            encode_with(b"Hello world!", &BASE36, ByteOrder::BigEndian),
            "2678lx5gvn5c0uydr1d"
        );
        assert_eq!(
            encode_with(b"Hello world!", &BASE26, ByteOrder::BigEndian),
            "bdgazjsbmilkupumdjrbl"
        );
    }

    #[test]
    fn test_first_byte_is_least_significant() {
        assert_eq!(encode(&[0x00, 0x01], &BASE10), "256");
        assert_eq!(encode(&[0x01, 0x00], &BASE10), "1");
        assert_eq!(encode(&[0xff, 0xff], &BASE10), "65535");
        assert_eq!(encode(&[0x05], &BASE2), "101");
    }

    #[test]
    fn test_zero_always_has_one_digit() {
        assert_eq!(encode(b"", &BASE36), "0");
        assert_eq!(encode(&[0], &BASE36), "0");
        assert_eq!(encode(&[0, 0, 0], &BASE26), "a");
    }

    #[test]
    fn test_value_equal_to_base_has_two_digits() {
        assert_eq!(encode(&[10], &BASE10), "10");
        assert_eq!(encode(&[9], &BASE10), "9");
        assert_eq!(encode(&[2], &BASE2), "10");
    }

    #[test]
    fn test_no_leading_zero_symbol() {
        for data in [&b"\x01"[..], &b"Hello"[..], &b"\xff\x00\x01"[..]] {
            let encoded = encode(data, &BASE36);
            assert!(!encoded.starts_with('0'), "{:?} -> {}", data, encoded);
        }
    }

    #[test]
    fn test_round_trip() {
        let data = b"Hello world!";
        for alphabet in [&*BASE2, &*BASE10, &*BASE26, &*BASE36] {
            let encoded = encode(data, alphabet);
            assert_eq!(decode(&encoded, alphabet).unwrap(), data);
        }
    }

    #[test]
    fn test_round_trip_big_endian() {
        let data = [1u8, 0, 0, 255, 7];
        let encoded = encode_with(&data, &BASE36, ByteOrder::BigEndian);
        assert_eq!(
            decode_with(&encoded, &BASE36, ByteOrder::BigEndian).unwrap(),
            data
        );
    }

    #[test]
    fn test_most_significant_zero_bytes_are_dropped() {
        // Trailing bytes are the high-order ones under little-endian
        let encoded = encode(&[7, 0, 0], &BASE10);
        assert_eq!(encoded, "7");
        assert_eq!(decode(&encoded, &BASE10).unwrap(), vec![7]);

        let encoded = encode_with(&[0, 0, 7], &BASE10, ByteOrder::BigEndian);
        assert_eq!(
            decode_with(&encoded, &BASE10, ByteOrder::BigEndian).unwrap(),
            vec![7]
        );
    }

    #[test]
    fn test_zero_decodes_to_empty() {
        assert_eq!(decode("0", &BASE36).unwrap(), Vec::<u8>::new());
        assert_eq!(decode("000", &BASE36).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_padded_restores_length() {
        let data = [7u8, 0, 0];
        let encoded = encode(&data, &BASE36);
        assert_eq!(
            decode_padded(&encoded, &BASE36, ByteOrder::LittleEndian, 3).unwrap(),
            data
        );

        let data = [0u8, 0, 7];
        let encoded = encode_with(&data, &BASE36, ByteOrder::BigEndian);
        assert_eq!(
            decode_padded(&encoded, &BASE36, ByteOrder::BigEndian, 3).unwrap(),
            data
        );

        assert_eq!(
            decode_padded("0", &BASE36, ByteOrder::LittleEndian, 0).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_decode_padded_rejects_overflow() {
        let encoded = encode(&[1, 2, 3], &BASE36);
        let err = decode_padded(&encoded, &BASE36, ByteOrder::LittleEndian, 2).unwrap_err();
        assert!(matches!(err, EncodingError::InvalidInput { .. }));
    }

    #[test]
    fn test_decode_invalid_symbol() {
        let err = decode("12x!", &BASE10).unwrap_err();
        match err {
            EncodingError::InvalidSymbol {
                symbol, position, ..
            } => {
                assert_eq!(symbol, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_uppercase_is_not_base36() {
        assert!(matches!(
            decode("ABC", &BASE36),
            Err(EncodingError::InvalidSymbol { symbol: 'A', .. })
        ));
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(
            decode("", &BASE36),
            Err(EncodingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(encode(&data, &BASE26), encode(&data, &BASE26));
    }

    #[test]
    fn test_long_input_round_trip() {
        let mut data: Vec<u8> = (0..4096).map(|i| (i * 31 % 256) as u8).collect();
        // Keep the most significant byte non-zero
        data.push(1);
        let encoded = encode(&data, &BASE36);
        assert_eq!(decode(&encoded, &BASE36).unwrap(), data);
    }
}
