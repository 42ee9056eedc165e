use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::{resolve_byte_order, resolve_separator},
    global::GlobalArgs,
};
use base_dots::{AlphabetRegistry, Encoding};

/// Radix input size above which encoding gets noticeably slow.
const RADIX_WARN_SIZE: usize = 64 * 1024;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = config.encoding(&args.alphabet)?;

    let mut data = read_input(args.file.as_ref(), global)?;
    if args.hex {
        let text = String::from_utf8(data).map_err(|_| "Hex input must be valid UTF-8")?;
        data = hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?;
    }

    if matches!(encoding, Encoding::Radix(_)) && data.len() > RADIX_WARN_SIZE {
        eprintln!(
            "Warning: Radix encoding of {} bytes is slow (time grows quadratically past {} bytes)",
            data.len(),
            RADIX_WARN_SIZE
        );
    }

    let separator = resolve_separator(args.separator, args.spaced, config);
    let encoded = match (&encoding, separator) {
        (Encoding::Glyph(block), Some(sep)) => block.encode_joined(&data, &sep),
        (Encoding::Radix(_), Some(_)) => {
            return Err("--separator and --spaced only apply to glyph alphabets".into());
        }
        (_, None) => {
            let order = resolve_byte_order(args.byte_order, config);
            base_dots::encode(&data, &encoding, order)
        }
    };

    write_output(args.output.as_ref(), format!("{}\n", encoded).as_bytes())
}
