use crate::encoders::errors::EncodingError;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Digits followed by lowercase ASCII letters.
pub static BASE36: LazyLock<Alphabet> =
    LazyLock::new(|| builtin("0123456789abcdefghijklmnopqrstuvwxyz"));

/// Lowercase ASCII letters only.
pub static BASE26: LazyLock<Alphabet> = LazyLock::new(|| builtin("abcdefghijklmnopqrstuvwxyz"));

pub static BASE10: LazyLock<Alphabet> = LazyLock::new(|| builtin("0123456789"));

pub static BASE2: LazyLock<Alphabet> = LazyLock::new(|| builtin("01"));

fn builtin(symbols: &str) -> Alphabet {
    match symbols.parse() {
        Ok(alphabet) => alphabet,
        Err(e) => unreachable!("built-in alphabet {:?} is invalid: {}", symbols, e),
    }
}

/// An ordered set of unique symbols used as the digits of a numeral base.
///
/// The symbol at index 0 is the zero digit. Alphabets are validated on
/// construction and never change afterwards, so a symbol always maps back to
/// exactly one digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    symbol_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from an ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidAlphabet`] if fewer than two symbols
    /// are given or a symbol appears more than once.
    pub fn new(symbols: Vec<char>) -> Result<Self, EncodingError> {
        if symbols.len() < 2 {
            return Err(EncodingError::invalid_alphabet(format!(
                "alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        let mut symbol_to_index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if let Some(first) = symbol_to_index.insert(c, i) {
                return Err(EncodingError::invalid_alphabet(format!(
                    "duplicate symbol '{}' at positions {} and {}",
                    c, first, i
                )));
            }
        }

        Ok(Alphabet {
            symbols,
            symbol_to_index,
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the zero digit.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the alphabet.
    pub fn decode_symbol(&self, c: char) -> Option<usize> {
        self.symbol_to_index.get(&c).copied()
    }

    /// Symbol listing for error hints; large alphabets are summarised.
    pub fn describe(&self) -> String {
        if self.base() <= 64 {
            self.symbols.iter().collect()
        } else {
            format!("{} symbols in alphabet", self.base())
        }
    }
}

impl FromStr for Alphabet {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}
