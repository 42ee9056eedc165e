//! One glyph per byte, with the byte's bits permuted before lookup.
//!
//! A [`GlyphBlock`] is 256 contiguous code points starting at `start`. The
//! glyph for a byte is `start + permute(byte)`, where the permutation moves
//! bit `b` of the byte to bit `forward[b]` of the offset.
//!
//! For Braille (`U+2800`) the offset bits are the eight dots, numbered 0-7
//! here as Unicode numbers them 1-8:
//!
//! ```text
//! | 0 3 |      bit 4 -> dot 0   bit 0 -> dot 3
//! | 1 4 |      bit 5 -> dot 1   bit 1 -> dot 4
//! | 2 5 |      bit 6 -> dot 2   bit 2 -> dot 5
//! | 6 7 |      bit 7 -> dot 6   bit 3 -> dot 7
//! ```
//!
//! so the high nibble fills the left column and the low nibble the right
//! column, each top to bottom.

use crate::encoders::errors::EncodingError;

/// First code point of the Unicode Braille Patterns block.
pub const BRAILLE_START: u32 = 0x2800;

const MAX_CODEPOINT: u32 = 0x10FFFF;
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A bijection on the bit positions 0..8 of a byte.
///
/// Only the forward table is ever written down; the inverse is derived from
/// it when the permutation is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPermutation {
    /// `forward[bit]` is the destination position of `bit`.
    forward: [u8; 8],
    /// `inverse[position]` is the source bit that lands on `position`.
    inverse: [u8; 8],
}

impl BitPermutation {
    pub const IDENTITY: Self = Self::new([0, 1, 2, 3, 4, 5, 6, 7]);

    /// Byte bits to Braille dot positions.
    pub const BRAILLE: Self = Self::new([3, 4, 5, 7, 0, 1, 2, 6]);

    /// Builds a permutation from its forward table.
    ///
    /// # Panics
    ///
    /// Panics if `forward` is not a permutation of `0..8`. In a `const`
    /// context this is a compile error; use [`BitPermutation::try_new`] for
    /// tables read at runtime.
    pub const fn new(forward: [u8; 8]) -> Self {
        match invert(&forward) {
            Some(inverse) => Self { forward, inverse },
            None => panic!("bit permutation must be a bijection on 0..8"),
        }
    }

    pub fn try_new(forward: [u8; 8]) -> Result<Self, EncodingError> {
        invert(&forward)
            .map(|inverse| Self { forward, inverse })
            .ok_or_else(|| {
                EncodingError::invalid_alphabet(format!(
                    "bit permutation {:?} is not a bijection on 0..8",
                    forward
                ))
            })
    }

    pub const fn forward(&self) -> [u8; 8] {
        self.forward
    }

    pub const fn inverse(&self) -> [u8; 8] {
        self.inverse
    }

    /// Bit `p` of the result is bit `inverse[p]` of `byte`.
    pub const fn apply(&self, byte: u8) -> u8 {
        gather(byte, &self.inverse)
    }

    /// Bit `b` of the result is bit `forward[b]` of `permuted`.
    pub const fn undo(&self, permuted: u8) -> u8 {
        gather(permuted, &self.forward)
    }
}

impl Default for BitPermutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `None` unless every position 0..8 appears exactly once.
const fn invert(forward: &[u8; 8]) -> Option<[u8; 8]> {
    let mut inverse = [u8::MAX; 8];
    let mut bit = 0;
    while bit < 8 {
        let position = forward[bit] as usize;
        if position >= 8 || inverse[position] != u8::MAX {
            return None;
        }
        inverse[position] = bit as u8;
        bit += 1;
    }
    Some(inverse)
}

/// Output bit `i` takes its value from input bit `sources[i]`.
const fn gather(value: u8, sources: &[u8; 8]) -> u8 {
    let mut out = 0u8;
    let mut i = 0;
    while i < 8 {
        out |= ((value >> sources[i]) & 1) << i;
        i += 1;
    }
    out
}

/// 256 glyphs indexed by input byte; `None` if any code point is not a char.
const fn build_table(start: u32, permutation: &BitPermutation) -> Option<[char; 256]> {
    let mut table = ['\0'; 256];
    let mut byte = 0usize;
    while byte < 256 {
        match char::from_u32(start + permutation.apply(byte as u8) as u32) {
            Some(c) => table[byte] = c,
            None => return None,
        }
        byte += 1;
    }
    Some(table)
}

/// A 256-glyph block and the bit permutation used to index it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBlock {
    start: u32,
    permutation: BitPermutation,
    table: [char; 256],
}

impl GlyphBlock {
    /// Unicode Braille Patterns with dots laid out to match the byte's nibbles.
    pub const BRAILLE: Self = Self::new_const(BRAILLE_START, BitPermutation::BRAILLE);

    const fn new_const(start: u32, permutation: BitPermutation) -> Self {
        match build_table(start, &permutation) {
            Some(table) => Self {
                start,
                permutation,
                table,
            },
            None => panic!("glyph block must be 256 valid code points"),
        }
    }

    /// Creates a block at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidAlphabet`] if `start..=start + 255`
    /// runs past U+10FFFF or crosses the surrogate range.
    pub fn new(start: u32, permutation: BitPermutation) -> Result<Self, EncodingError> {
        let end = start
            .checked_add(255)
            .filter(|&end| end <= MAX_CODEPOINT)
            .ok_or_else(|| {
                EncodingError::invalid_alphabet(format!(
                    "glyph block starting at U+{:04X} runs past U+{:X}",
                    start, MAX_CODEPOINT
                ))
            })?;

        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(EncodingError::invalid_alphabet(format!(
                "glyph block U+{:04X}..U+{:04X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            )));
        }

        let table = build_table(start, &permutation).ok_or_else(|| {
            EncodingError::invalid_alphabet(format!(
                "glyph block starting at U+{:04X} contains invalid code points",
                start
            ))
        })?;

        Ok(Self {
            start,
            permutation,
            table,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn permutation(&self) -> &BitPermutation {
        &self.permutation
    }

    pub fn encode_byte(&self, byte: u8) -> char {
        self.table[byte as usize]
    }

    /// # Errors
    ///
    /// [`EncodingError::InvalidGlyph`] if `glyph` is outside the block.
    pub fn decode_byte(&self, glyph: char) -> Result<u8, EncodingError> {
        self.decode_at(glyph, 0)
    }

    fn decode_at(&self, glyph: char, position: usize) -> Result<u8, EncodingError> {
        let offset = (glyph as u32)
            .checked_sub(self.start)
            .filter(|&offset| offset < 256)
            .ok_or_else(|| EncodingError::invalid_glyph(glyph, position, self.start))?;
        Ok(self.permutation.undo(offset as u8))
    }

    /// One glyph per byte, in order.
    pub fn encode(&self, data: &[u8]) -> String {
        data.iter().map(|&byte| self.encode_byte(byte)).collect()
    }

    /// Like [`GlyphBlock::encode`] with `separator` between glyphs.
    pub fn encode_joined(&self, data: &[u8], separator: &str) -> String {
        let mut result = String::with_capacity(data.len() * (3 + separator.len()));
        for (i, &byte) in data.iter().enumerate() {
            if i > 0 {
                result.push_str(separator);
            }
            result.push(self.encode_byte(byte));
        }
        result
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, EncodingError> {
        encoded
            .chars()
            .enumerate()
            .map(|(position, glyph)| self.decode_at(glyph, position))
            .collect()
    }

    /// Inverse of [`GlyphBlock::encode_joined`].
    ///
    /// # Errors
    ///
    /// [`EncodingError::InvalidGlyph`] for a glyph outside the block, and
    /// [`EncodingError::InvalidInput`] when two glyphs are not separated by
    /// exactly one `separator` or a separator has no glyph after it.
    pub fn decode_joined(&self, encoded: &str, separator: &str) -> Result<Vec<u8>, EncodingError> {
        if separator.is_empty() {
            return self.decode(encoded);
        }
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let separator_len = separator.chars().count();
        let mut result = Vec::with_capacity(encoded.len() / (3 + separator.len()) + 1);
        let mut position = 0;

        for piece in encoded.split(separator) {
            let mut chars = piece.chars();
            match (chars.next(), chars.next()) {
                (Some(glyph), None) => result.push(self.decode_at(glyph, position)?),
                (None, _) => {
                    return Err(EncodingError::invalid_input(format!(
                        "expected a glyph at position {}",
                        position
                    )));
                }
                (Some(glyph), Some(_)) => {
                    // A stray character is reported as a bad glyph first
                    self.decode_at(glyph, position)?;
                    if let Some((i, extra)) = piece
                        .chars()
                        .enumerate()
                        .skip(1)
                        .find(|&(_, c)| self.decode_at(c, 0).is_err())
                    {
                        return Err(EncodingError::invalid_glyph(extra, position + i, self.start));
                    }
                    return Err(EncodingError::invalid_input(format!(
                        "expected separator {:?} at position {}",
                        separator,
                        position + 1
                    )));
                }
            }
            position += piece.chars().count() + separator_len;
        }

        Ok(result)
    }
}

impl Default for GlyphBlock {
    fn default() -> Self {
        Self::BRAILLE
    }
}

static BRAILLE: GlyphBlock = GlyphBlock::BRAILLE;

/// Braille glyph for `byte`.
///
/// ```
/// use base_dots::encoders::glyph;
///
/// assert_eq!(glyph::encode_byte(0x00), '\u{2800}');
/// assert_eq!(glyph::encode_byte(0xff), '⣿');
/// assert_eq!(glyph::encode_byte(0x31), '⠋');
/// ```
pub fn encode_byte(byte: u8) -> char {
    BRAILLE.encode_byte(byte)
}

pub fn decode_byte(glyph: char) -> Result<u8, EncodingError> {
    BRAILLE.decode_byte(glyph)
}

/// Braille glyphs for `data`, one per byte.
pub fn encode(data: &[u8]) -> String {
    BRAILLE.encode(data)
}

pub fn encode_joined(data: &[u8], separator: &str) -> String {
    BRAILLE.encode_joined(data, separator)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, EncodingError> {
    BRAILLE.decode(encoded)
}

pub fn decode_joined(encoded: &str, separator: &str) -> Result<Vec<u8>, EncodingError> {
    BRAILLE.decode_joined(encoded, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_mutual_inverses() {
        for permutation in [BitPermutation::BRAILLE, BitPermutation::IDENTITY] {
            let forward = permutation.forward();
            let inverse = permutation.inverse();
            for i in 0..8 {
                assert_eq!(inverse[forward[i] as usize] as usize, i);
                assert_eq!(forward[inverse[i] as usize] as usize, i);
            }
        }
    }

    #[test]
    fn test_braille_inverse_table() {
        assert_eq!(BitPermutation::BRAILLE.inverse(), [4, 5, 6, 0, 1, 2, 7, 3]);
    }

    #[test]
    fn test_try_new_rejects_non_bijections() {
        for forward in [
            [0, 0, 2, 3, 4, 5, 6, 7],
            [0, 1, 2, 3, 4, 5, 6, 8],
            [7, 7, 7, 7, 7, 7, 7, 7],
            [1, 2, 3, 4, 5, 6, 7, 255],
        ] {
            assert!(matches!(
                BitPermutation::try_new(forward),
                Err(EncodingError::InvalidAlphabet { .. })
            ));
        }
        assert_eq!(
            BitPermutation::try_new([3, 4, 5, 7, 0, 1, 2, 6]).unwrap(),
            BitPermutation::BRAILLE
        );
    }

    #[test]
    fn test_round_trip_all_bytes() {
        for byte in 0..=255u8 {
            assert_eq!(decode_byte(encode_byte(byte)).unwrap(), byte);
        }
    }

    #[test]
    fn test_all_glyphs_distinct_and_in_block() {
        let glyphs: std::collections::HashSet<char> = (0..=255u8).map(encode_byte).collect();
        assert_eq!(glyphs.len(), 256);
        assert!(glyphs.iter().all(|&g| (0x2800..=0x28FF).contains(&(g as u32))));
    }

    #[test]
    fn test_extremes_hit_block_ends() {
        assert_eq!(encode_byte(0x00) as u32, BRAILLE_START);
        assert_eq!(encode_byte(0xff) as u32, BRAILLE_START + 255);
        assert_eq!(encode_byte(0xff), '⣿');
    }

    #[test]
    fn test_single_bits() {
        let single_bits = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];
        assert_eq!(encode_joined(&single_bits, " "), "⠈ ⠐ ⠠ ⢀ ⠁ ⠂ ⠄ ⡀");
        let codepoints: Vec<u32> = single_bits.iter().map(|&b| encode_byte(b) as u32).collect();
        assert_eq!(
            codepoints,
            [0x2808, 0x2810, 0x2820, 0x2880, 0x2801, 0x2802, 0x2804, 0x2840]
        );
    }

    #[test]
    fn test_single_bit_complements() {
        let complements: Vec<u8> = [0x01u8, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]
            .iter()
            .map(|b| !b)
            .collect();
        assert_eq!(encode_joined(&complements, " "), "⣷ ⣯ ⣟ ⡿ ⣾ ⣽ ⣻ ⢿");
    }

    #[test]
    fn test_nibbles_fill_columns() {
        // High nibble: left column, low nibble: right column
        assert_eq!(encode_byte(0xf0), '⡇');
        assert_eq!(encode_byte(0x0f), '⢸');
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(encode(b"Hello world!"), "⢄⠮⢦⢦⢾⠂⠿⢾⠗⢦⠦⠊");
        assert_eq!(encode(b"").len(), 0);
    }

    #[test]
    fn test_one_glyph_per_byte() {
        let data: Vec<u8> = (0..=255).chain(0..=255).collect();
        assert_eq!(encode(&data).chars().count(), data.len());
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_outside_block() {
        match decode("⠁⠂x") {
            Err(EncodingError::InvalidGlyph {
                glyph,
                position,
                block_start,
            }) => {
                assert_eq!(glyph, 'x');
                assert_eq!(position, 2);
                assert_eq!(block_start, BRAILLE_START);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(decode_byte('\u{27FF}').is_err());
        assert!(decode_byte('\u{2900}').is_err());
    }

    #[test]
    fn test_decode_joined() {
        let data = b"Hi!";
        let joined = encode_joined(data, " ");
        assert_eq!(decode_joined(&joined, " ").unwrap(), data);
        assert_eq!(decode_joined("", " ").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_joined(&encode(data), "").unwrap(), data);
    }

    #[test]
    fn test_decode_joined_multichar_separator() {
        let data = [0u8, 127, 255];
        let joined = encode_joined(&data, " | ");
        assert_eq!(decode_joined(&joined, " | ").unwrap(), data);
    }

    #[test]
    fn test_decode_joined_errors() {
        // Doubled separator
        assert!(matches!(
            decode_joined("⠁  ⠂", " "),
            Err(EncodingError::InvalidInput { .. })
        ));
        // Missing separator
        assert!(matches!(
            decode_joined("⠁⠂ ⠄", " "),
            Err(EncodingError::InvalidInput { .. })
        ));
        // Stray character glued to a glyph
        assert!(matches!(
            decode_joined("⠁x ⠄", " "),
            Err(EncodingError::InvalidGlyph {
                glyph: 'x',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_identity_block_is_plain_byte_range() {
        let block = GlyphBlock::new(0x1F3F7, BitPermutation::IDENTITY).unwrap();
        let data: Vec<u8> = (0..=255).collect();
        let encoded = block.encode(&data);
        for (byte, glyph) in data.iter().zip(encoded.chars()) {
            assert_eq!(glyph as u32, 0x1F3F7 + *byte as u32);
        }
        assert_eq!(block.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_block_range_validation() {
        assert!(GlyphBlock::new(0x10FF00, BitPermutation::IDENTITY).is_ok());
        for start in [0x10FF01, 0xD780, 0xD900, u32::MAX] {
            assert!(matches!(
                GlyphBlock::new(start, BitPermutation::IDENTITY),
                Err(EncodingError::InvalidAlphabet { .. })
            ));
        }
    }

    #[test]
    fn test_custom_permutation_round_trip() {
        let reversed = BitPermutation::try_new([7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        let block = GlyphBlock::new(0x100, reversed).unwrap();
        assert_eq!(block.encode_byte(0x01) as u32, 0x100 + 0x80);
        for byte in 0..=255u8 {
            assert_eq!(block.decode_byte(block.encode_byte(byte)).unwrap(), byte);
        }
    }
}
