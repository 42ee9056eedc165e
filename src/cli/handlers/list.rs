use crate::cli::args::ListArgs;
use base_dots::{AlphabetRegistry, EncodingMode};

pub fn handle(args: ListArgs, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();

    if args.json {
        let entries: serde_json::Map<String, serde_json::Value> = names
            .iter()
            .filter_map(|name| config.get_alphabet(name).map(|entry| (name, entry)))
            .map(|(name, entry)| Ok((name.clone(), serde_json::to_value(entry)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for name in names {
        let Some(entry) = config.get_alphabet(&name) else {
            continue;
        };
        let preview: String = match entry.mode {
            EncodingMode::Glyph => match entry.build() {
                Ok(base_dots::Encoding::Glyph(block)) => block.encode(&(0..20).collect::<Vec<u8>>()),
                _ => String::from("(invalid range)"),
            },
            EncodingMode::Radix => entry.chars.chars().take(20).collect(),
        };
        let suffix = if entry.base() > 20 { "..." } else { "" };
        let mode_str = match entry.mode {
            EncodingMode::Radix => "radix",
            EncodingMode::Glyph => "glyph",
        };
        println!(
            "  {:<15} base-{:<3} {:>5}  {}{}",
            name,
            entry.base(),
            mode_str,
            preview,
            suffix
        );
    }
    Ok(())
}
