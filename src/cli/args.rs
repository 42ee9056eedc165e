use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes with a named alphabet
    ///
    /// Radix alphabets treat the whole input as one integer, so encoding
    /// time grows quadratically with input size. Radix inputs over 64 KiB
    /// print a warning; glyph alphabets are linear.
    Encode(EncodeArgs),
    /// Decode text produced by `encode`
    Decode(DecodeArgs),
    /// Hex-dump style glyph view of the input
    Dump(DumpArgs),
    /// Encode a sample with every alphabet and tabulate the results
    Compare(CompareArgs),
    /// List available alphabets
    List(ListArgs),
}

/// Byte order for radix alphabets (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ByteOrderCli {
    /// First byte is least significant
    LittleEndian,
    /// First byte is most significant
    BigEndian,
}

impl From<ByteOrderCli> for base_dots::ByteOrder {
    fn from(cli: ByteOrderCli) -> Self {
        match cli {
            ByteOrderCli::LittleEndian => base_dots::ByteOrder::LittleEndian,
            ByteOrderCli::BigEndian => base_dots::ByteOrder::BigEndian,
        }
    }
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Alphabet to use for encoding
    pub alphabet: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Byte order for radix alphabets (default from settings)
    #[arg(short = 'b', long, value_enum)]
    pub byte_order: Option<ByteOrderCli>,

    /// Separator between glyphs (glyph alphabets only)
    #[arg(short = 's', long, conflicts_with = "spaced")]
    pub separator: Option<String>,

    /// Separate glyphs with the configured separator
    #[arg(long)]
    pub spaced: bool,

    /// Treat the input as hex text
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Alphabet to decode from
    pub alphabet: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Byte order for radix alphabets (default from settings)
    #[arg(short = 'b', long, value_enum)]
    pub byte_order: Option<ByteOrderCli>,

    /// Pad the output to exactly this many bytes (radix alphabets only)
    #[arg(short = 'l', long, value_name = "BYTES")]
    pub length: Option<usize>,

    /// Separator between glyphs (glyph alphabets only)
    #[arg(short = 's', long, conflicts_with = "spaced")]
    pub separator: Option<String>,

    /// Glyphs are separated by the configured separator
    #[arg(long)]
    pub spaced: bool,

    /// Write the decoded bytes as hex text
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the glyph dump
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Print every glyph of the block instead of reading input
    #[arg(long)]
    pub chart: bool,

    /// Glyph alphabet to render with
    #[arg(short = 'a', long, default_value = "braille")]
    pub alphabet: String,
}

/// Arguments for the comparison table
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Sample text (default from settings)
    pub text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
