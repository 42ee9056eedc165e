use crate::cli::{
    args::DecodeArgs,
    commands::{read_text_input, write_output},
    config::{resolve_byte_order, resolve_separator},
    global::GlobalArgs,
};
use base_dots::{AlphabetRegistry, Encoding, encoders::radix};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = config.encoding(&args.alphabet)?;
    let input = read_text_input(args.file.as_ref(), global)?;
    let separator = resolve_separator(args.separator, args.spaced, config);
    let order = resolve_byte_order(args.byte_order, config);

    let decoded = match &encoding {
        Encoding::Radix(alphabet) => {
            if separator.is_some() {
                return Err("--separator and --spaced only apply to glyph alphabets".into());
            }
            match args.length {
                Some(len) => radix::decode_padded(&input, alphabet, order, len)?,
                None => radix::decode_with(&input, alphabet, order)?,
            }
        }
        Encoding::Glyph(block) => {
            if args.length.is_some() {
                return Err("--length only applies to radix alphabets".into());
            }
            match separator {
                Some(sep) => block.decode_joined(&input, &sep)?,
                None => block.decode(&input)?,
            }
        }
    };

    if args.hex {
        write_output(args.output.as_ref(), format!("{}\n", hex::encode(&decoded)).as_bytes())
    } else {
        write_output(args.output.as_ref(), &decoded)
    }
}
