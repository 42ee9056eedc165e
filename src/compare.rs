//! Side-by-side comparison of every registry alphabet on one sample.

use crate::core::config::AlphabetRegistry;
use crate::encode;
use serde::Serialize;

pub const HEADINGS: [&str; 3] = ["Encoding", "Result", "Length inc"];

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub encoding: String,
    pub result: String,
    /// Characters in `result` minus bytes in the sample
    pub length_increase: i64,
}

impl ComparisonRow {
    fn new(encoding: impl Into<String>, result: String, sample_len: usize) -> Self {
        let length_increase = result.chars().count() as i64 - sample_len as i64;
        Self {
            encoding: encoding.into(),
            result,
            length_increase,
        }
    }
}

/// Encodes `sample` with every alphabet in `registry`, in name order,
/// after a `reference` row holding the sample itself.
///
/// Alphabets that fail to build are skipped with a warning.
pub fn compare(sample: &str, registry: &AlphabetRegistry) -> Vec<ComparisonRow> {
    let data = sample.as_bytes();
    let order = registry.settings.byte_order();

    let mut rows = vec![ComparisonRow::new("reference", sample.to_string(), data.len())];

    for name in registry.names() {
        let Some(alphabet_config) = registry.get_alphabet(&name) else {
            continue;
        };
        match alphabet_config.build() {
            Ok(encoding) => {
                let result = encode(data, &encoding, order);
                rows.push(ComparisonRow::new(name, result, data.len()));
            }
            Err(e) => eprintln!("Warning: Skipping alphabet '{}': {}", name, e),
        }
    }

    rows
}

fn format_line(encoding: &str, result: &str, length_increase: &str) -> String {
    format!("{:<20} {:<24} {:>10}", encoding, result, length_increase)
}

/// Renders the rows under [`HEADINGS`], one line each.
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let mut out = format_line(HEADINGS[0], HEADINGS[1], HEADINGS[2]);
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(
            &row.encoding,
            &row.result,
            &row.length_increase.to_string(),
        ));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> AlphabetRegistry {
        AlphabetRegistry::from_toml(
            r#"
[alphabets.base36]
chars = "0123456789abcdefghijklmnopqrstuvwxyz"

[alphabets.base26]
chars = "abcdefghijklmnopqrstuvwxyz"

[alphabets.braille]
mode = "glyph"
start_codepoint = 0x2800
permutation = [3, 4, 5, 7, 0, 1, 2, 6]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sample_rows() {
        let rows = compare("Hello world!", &sample_registry());
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            ComparisonRow {
                encoding: "reference".to_string(),
                result: "Hello world!".to_string(),
                length_increase: 0,
            }
        );
        assert_eq!(rows[1].encoding, "base26");
        assert_eq!(rows[1].result, "nmoqgbeyffssrmplfbrs");
        assert_eq!(rows[1].length_increase, 8);
        assert_eq!(rows[2].result, "102iefafi4ncbng8ax4");
        assert_eq!(rows[2].length_increase, 7);
        assert_eq!(rows[3].result, "⢄⠮⢦⢦⢾⠂⠿⢾⠗⢦⠦⠊");
        assert_eq!(rows[3].length_increase, 0);
    }

    #[test]
    fn test_registry_rows_are_sorted() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let rows = compare("Hello world!", &registry);
        assert_eq!(rows[0].encoding, "reference");
        let names: Vec<&str> = rows[1..].iter().map(|r| r.encoding.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), registry.alphabets.len());
    }

    #[test]
    fn test_invalid_alphabets_are_skipped() {
        let registry = AlphabetRegistry::from_toml(
            r#"
[alphabets.broken]
chars = "x"

[alphabets.digits]
chars = "0123456789"
"#,
        )
        .unwrap();
        let rows = compare("\u{1}", &registry);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].encoding, "digits");
        assert_eq!(rows[1].result, "1");
    }

    #[test]
    fn test_negative_length_increase() {
        use crate::core::config::{AlphabetConfig, EncodingMode};

        let mut registry = AlphabetRegistry::default();
        registry.alphabets.insert(
            "cjk4096".to_string(),
            AlphabetConfig {
                mode: EncodingMode::Radix,
                chars: (0x4E00..0x4E00 + 4096).filter_map(char::from_u32).collect(),
                start_codepoint: None,
                permutation: None,
            },
        );
        // 0x61616161 needs three base-4096 digits
        let rows = compare("aaaa", &registry);
        assert_eq!(rows[1].result.chars().count(), 3);
        assert_eq!(rows[1].length_increase, -1);
    }

    #[test]
    fn test_render_table() {
        let rows = compare("Hello world!", &sample_registry());
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Encoding             Result                   Length inc"
        );
        assert_eq!(
            lines[3],
            "base36               102iefafi4ncbng8ax4               7"
        );
    }
}
