use std::fmt;

/// Errors produced while building alphabets or encoding and decoding data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The alphabet is too short, repeats a symbol, or a permutation is not a bijection
    InvalidAlphabet { reason: String },
    /// The input cannot be represented (empty digit string, value too wide for a fixed length)
    InvalidInput { reason: String },
    /// A digit string contains a symbol that is not in the alphabet
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
        valid_symbols: String,
    },
    /// A glyph string contains a character outside the 256-glyph block
    InvalidGlyph {
        glyph: char,
        position: usize,
        block_start: u32,
    },
}

impl EncodingError {
    pub fn invalid_alphabet(reason: impl Into<String>) -> Self {
        EncodingError::InvalidAlphabet {
            reason: reason.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EncodingError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an InvalidSymbol error with context.
    ///
    /// `position` is a character index into `input`.
    pub fn invalid_symbol(symbol: char, position: usize, input: &str, valid_symbols: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        EncodingError::InvalidSymbol {
            symbol,
            position,
            input: display_input,
            valid_symbols: valid_symbols.to_string(),
        }
    }

    pub fn invalid_glyph(glyph: char, position: usize, block_start: u32) -> Self {
        EncodingError::InvalidGlyph {
            glyph,
            position,
            block_start,
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            EncodingError::InvalidAlphabet { reason } => {
                write_header(f, use_color, &format!("invalid alphabet: {}", reason))?;
                Ok(())
            }
            EncodingError::InvalidInput { reason } => {
                write_header(f, use_color, &format!("invalid input: {}", reason))?;
                Ok(())
            }
            EncodingError::InvalidSymbol {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid symbol '{}' at position {}", symbol, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Caret under the offending symbol, unless it was truncated away
                if *position < 60 {
                    writeln!(f, "  {}", input)?;
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                    writeln!(f)?;
                }

                let hint_symbols = if valid_symbols.chars().count() > 80 {
                    format!("{}...", valid_symbols.chars().take(80).collect::<String>())
                } else {
                    valid_symbols.clone()
                };
                write_hint(f, use_color, &format!("valid symbols: {}", hint_symbols))
            }
            EncodingError::InvalidGlyph {
                glyph,
                position,
                block_start,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "invalid glyph '{}' (U+{:04X}) at position {}",
                        glyph, *glyph as u32, position
                    ),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    &format!(
                        "glyphs must lie in U+{:04X} to U+{:04X}",
                        block_start,
                        block_start.saturating_add(255)
                    ),
                )
            }
        }
    }
}

impl std::error::Error for EncodingError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when an alphabet name is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(
            f,
            use_color,
            &format!("alphabet '{}' not found", self.name),
        )?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base-dots list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base-dots list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
