pub mod dump;
pub mod errors;
pub mod glyph;
pub mod radix;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, EncodingError, find_closest_alphabet};
