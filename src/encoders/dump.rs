//! Hex-dump style rendering of bytes as glyphs.
//!
//! Each line covers 16 bytes: the lowercase hex offset of its first byte
//! (at least two digits), a space, then the glyphs joined by single spaces.

use crate::encoders::glyph::GlyphBlock;

/// Bytes per dump line.
pub const LINE_WIDTH: usize = 16;

/// One dump line per 16 bytes; the last line may be shorter.
pub fn dump_lines<'a>(
    data: &'a [u8],
    block: &'a GlyphBlock,
) -> impl Iterator<Item = String> + 'a {
    data.chunks(LINE_WIDTH).enumerate().map(move |(i, chunk)| {
        format!("{:02x} {}", i * LINE_WIDTH, block.encode_joined(chunk, " "))
    })
}

/// The full dump, each line terminated by a newline.
///
/// ```
/// use base_dots::encoders::{dump, glyph::GlyphBlock};
///
/// let out = dump::dump(&[0x01, 0x02, 0x04], &GlyphBlock::BRAILLE);
/// assert_eq!(out, "00 ⠈ ⠐ ⠠\n");
/// ```
pub fn dump(data: &[u8], block: &GlyphBlock) -> String {
    let mut out = String::new();
    for line in dump_lines(data, block) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Column header aligned with [`dump`] lines.
pub fn chart_header() -> String {
    let columns: String = (0..LINE_WIDTH).map(|i| format!("{:2x}", i)).collect();
    format!("  {}", columns)
}

/// Every glyph of the block in byte order, under a column header.
pub fn chart(block: &GlyphBlock) -> String {
    let all_bytes: Vec<u8> = (0..=255).collect();
    format!("{}\n{}", chart_header(), dump(&all_bytes, block))
}
