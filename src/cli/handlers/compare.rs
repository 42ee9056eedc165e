use crate::cli::args::CompareArgs;
use base_dots::{AlphabetRegistry, compare};

pub fn handle(args: CompareArgs, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let sample = args
        .text
        .as_deref()
        .unwrap_or_else(|| config.settings.sample());
    let rows = compare::compare(sample, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", compare::render_table(&rows));
    }
    Ok(())
}
