//! Radix and glyph encodings for arbitrary bytes.
//!
//! Two independent codecs:
//!
//! * [`encoders::radix`] reads the input as one unsigned integer and writes
//!   it in the base of any [`Alphabet`] of two or more symbols.
//! * [`encoders::glyph`] maps each byte to one glyph of a 256 code point
//!   block after permuting its bits, which for Braille lays the high nibble
//!   down the left column of dots and the low nibble down the right.
//!
//! ```
//! use base_dots::{encoders::{glyph, radix}, BASE36};
//!
//! assert_eq!(radix::encode(b"Hello world!", &BASE36), "102iefafi4ncbng8ax4");
//! assert_eq!(glyph::encode(b"Hi"), "⢄⢎");
//! ```

pub mod compare;
mod core;
pub mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{Alphabet, BASE2, BASE10, BASE26, BASE36};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, EncodingMode, Settings};
pub use crate::encoders::errors::{AlphabetNotFoundError, EncodingError, find_closest_alphabet};
pub use crate::encoders::glyph::{BRAILLE_START, BitPermutation, GlyphBlock};
pub use crate::encoders::radix::ByteOrder;

/// A built encoding, ready to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    Radix(Alphabet),
    Glyph(GlyphBlock),
}

impl Encoding {
    pub fn mode(&self) -> EncodingMode {
        match self {
            Encoding::Radix(_) => EncodingMode::Radix,
            Encoding::Glyph(_) => EncodingMode::Glyph,
        }
    }
}

/// Encode `data`. `order` only affects radix encodings.
pub fn encode(data: &[u8], encoding: &Encoding, order: ByteOrder) -> String {
    match encoding {
        Encoding::Radix(alphabet) => encoders::radix::encode_with(data, alphabet, order),
        Encoding::Glyph(block) => block.encode(data),
    }
}

/// Decode `encoded`. `order` only affects radix encodings.
pub fn decode(encoded: &str, encoding: &Encoding, order: ByteOrder) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        Encoding::Radix(alphabet) => encoders::radix::decode_with(encoded, alphabet, order),
        Encoding::Glyph(block) => block.decode(encoded),
    }
}
