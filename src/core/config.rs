use crate::core::alphabet::Alphabet;
use crate::encoders::errors::{AlphabetNotFoundError, EncodingError, find_closest_alphabet};
use crate::encoders::glyph::{BitPermutation, GlyphBlock};
use crate::encoders::radix::ByteOrder;
use crate::Encoding;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// How an alphabet turns bytes into symbols.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Whole input read as one integer and written in base `chars.len()`.
    #[default]
    Radix,
    /// One glyph per byte from a 256 code point block.
    Glyph,
}

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    #[serde(default)]
    pub mode: EncodingMode,
    /// Digit symbols, zero digit first (radix mode)
    #[serde(default)]
    pub chars: String,
    /// First code point of the glyph block (glyph mode)
    #[serde(default)]
    pub start_codepoint: Option<u32>,
    /// `permutation[bit]` is the offset bit that byte bit lands on (glyph mode)
    #[serde(default)]
    pub permutation: Option<[u8; 8]>,
}

impl AlphabetConfig {
    /// Validates the entry and builds the encoding it describes.
    pub fn build(&self) -> Result<Encoding, EncodingError> {
        match self.mode {
            EncodingMode::Radix => Ok(Encoding::Radix(self.chars.parse::<Alphabet>()?)),
            EncodingMode::Glyph => {
                let start = self.start_codepoint.ok_or_else(|| {
                    EncodingError::invalid_alphabet("glyph mode requires start_codepoint")
                })?;
                let permutation = match self.permutation {
                    Some(forward) => BitPermutation::try_new(forward)?,
                    None => BitPermutation::IDENTITY,
                };
                Ok(Encoding::Glyph(GlyphBlock::new(start, permutation)?))
            }
        }
    }

    /// Number of distinct symbols the alphabet produces.
    pub fn base(&self) -> usize {
        match self.mode {
            EncodingMode::Radix => self.chars.chars().count(),
            EncodingMode::Glyph => 256,
        }
    }
}

/// Global settings. Unset fields fall back to the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Byte order for radix alphabets
    #[serde(default)]
    pub byte_order: Option<ByteOrder>,
    /// Separator placed between glyphs
    #[serde(default)]
    pub separator: Option<String>,
    /// Sample text for `compare`
    #[serde(default)]
    pub sample: Option<String>,
}

impl Settings {
    pub const DEFAULT_SEPARATOR: &'static str = " ";
    pub const DEFAULT_SAMPLE: &'static str = "Hello world!";

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order.unwrap_or_default()
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(Self::DEFAULT_SEPARATOR)
    }

    pub fn sample(&self) -> &str {
        self.sample.as_deref().unwrap_or(Self::DEFAULT_SAMPLE)
    }

    /// Fields set in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.byte_order.is_some() {
            self.byte_order = other.byte_order;
        }
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.sample.is_some() {
            self.sample = other.sample;
        }
    }
}

/// Named alphabets plus global settings.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct AlphabetRegistry {
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The alphabets built into the binary.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/base-dots/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    /// 4. Override with `extra`, which must load
    pub fn load_with_overrides(extra: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-dots").join("alphabets.toml");
            config.merge_optional(&user_config_path, "user");
        }

        config.merge_optional(Path::new("alphabets.toml"), "local");

        if let Some(path) = extra {
            let overlay = Self::load_from_file(path)
                .map_err(|e| format!("Failed to load config from {:?}: {}", path, e))?;
            config.merge(overlay);
        }

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, label: &str) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overlay) => self.merge(overlay),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {:?}: {}",
                    label, path, e
                );
            }
        }
    }

    /// Merge another config into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        self.settings.merge(other.settings);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Looks up `name` and builds it, suggesting a near miss when absent.
    pub fn encoding(&self, name: &str) -> Result<Encoding, Box<dyn std::error::Error>> {
        let alphabet_config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;
        Ok(alphabet_config.build()?)
    }
}
