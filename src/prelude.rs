//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base_dots::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let base26 = registry.encoding("base26").unwrap();
//! assert_eq!(encode(b"\x01", &base26, ByteOrder::LittleEndian), "b");
//! ```

pub use crate::{
    Alphabet, AlphabetRegistry, BASE10, BASE26, BASE36, BitPermutation, ByteOrder, Encoding,
    EncodingError, EncodingMode, GlyphBlock, decode, encode,
    encoders::{dump::dump, glyph, radix},
};
