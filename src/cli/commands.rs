use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Read a file or stdin, honouring --max-size and --force.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let data = if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            check_size(file_size, global)?;
        }
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        if global.max_size > 0 {
            check_size(buffer.len(), global)?;
        }
        buffer
    };
    Ok(data)
}

fn check_size(size: usize, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if size <= global.max_size {
        return Ok(());
    }
    if global.force {
        eprintln!(
            "Warning: Processing large input ({} bytes, limit: {} bytes)",
            size, global.max_size
        );
        Ok(())
    } else {
        Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, global.max_size
        )
        .into())
    }
}

/// Input as text without the line ending `encode` appends.
///
/// Only one trailing `\n` or `\r\n` is removed; other whitespace may be
/// a symbol of the alphabet.
pub fn read_text_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file, global)?;
    let mut text = String::from_utf8(data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    strip_line_ending(&mut text);
    Ok(text)
}

fn strip_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// Write to a file or stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, data)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
    }
    Ok(())
}
