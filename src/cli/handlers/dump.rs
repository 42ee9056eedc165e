use crate::cli::{
    args::DumpArgs,
    commands::{read_input, write_output},
    config::create_glyph_block,
    global::GlobalArgs,
};
use base_dots::{AlphabetRegistry, encoders::dump};

pub fn handle(
    args: DumpArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let block = create_glyph_block(config, &args.alphabet)?;

    let rendered = if args.chart {
        dump::chart(&block)
    } else {
        let data = read_input(args.file.as_ref(), global)?;
        dump::dump(&data, &block)
    };

    write_output(None, rendered.as_bytes())
}
