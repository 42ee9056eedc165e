use crate::cli::global::GlobalArgs;
use base_dots::{AlphabetRegistry, ByteOrder, Encoding, GlyphBlock};
use std::path::PathBuf;

/// Built-in alphabets plus user, local and `--config` overlays.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let extra = global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));
    AlphabetRegistry::load_with_overrides(extra.as_deref())
}

/// Command-line byte order, falling back to the configured one.
pub fn resolve_byte_order(
    cli: Option<crate::cli::args::ByteOrderCli>,
    config: &AlphabetRegistry,
) -> ByteOrder {
    cli.map(ByteOrder::from)
        .unwrap_or_else(|| config.settings.byte_order())
}

/// `--separator` wins, `--spaced` uses the configured one, otherwise none.
pub fn resolve_separator(
    separator: Option<String>,
    spaced: bool,
    config: &AlphabetRegistry,
) -> Option<String> {
    match separator {
        Some(sep) => Some(sep),
        None if spaced => Some(config.settings.separator().to_string()),
        None => None,
    }
}

/// Looks up a glyph alphabet, rejecting radix ones.
pub fn create_glyph_block(
    config: &AlphabetRegistry,
    name: &str,
) -> Result<GlyphBlock, Box<dyn std::error::Error>> {
    match config.encoding(name)? {
        Encoding::Glyph(block) => Ok(block),
        Encoding::Radix(_) => {
            Err(format!("Alphabet '{}' is a radix alphabet; dump needs a glyph alphabet", name).into())
        }
    }
}
