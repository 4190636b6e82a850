//! Character counting for text input.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::huffman::FreqTable;

/// Counts every character of `text`.
///
/// Line endings are translated first: `"\r\n"` and a lone `'\r'` are each
/// counted as a single `'\n'`.
pub fn count_frequencies(text: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let symbol = if c == '\r' {
            chars.next_if_eq(&'\n');
            '\n'
        } else {
            c
        };
        *freq.entry(symbol).or_insert(0) += 1;
    }
    freq
}

/// Reads a UTF-8 text file and counts its characters.
pub fn read_frequencies(path: impl AsRef<Path>) -> Result<FreqTable> {
    let path = path.as_ref();
    info!("Reading input file: {}", path.display());
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes", text.len());

    let freq = count_frequencies(&text);
    debug!("Counted {} unique symbols", freq.len());
    Ok(freq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_character() {
        let freq = count_frequencies("abracadabra");
        assert_eq!(freq.len(), 5);
        assert_eq!(freq[&'a'], 5);
        assert_eq!(freq[&'b'], 2);
        assert_eq!(freq[&'r'], 2);
        assert_eq!(freq[&'c'], 1);
        assert_eq!(freq[&'d'], 1);
    }

    #[test]
    fn translates_line_endings() {
        let freq = count_frequencies("a\r\nb\rc\n");
        assert_eq!(freq[&'\n'], 3);
        assert!(!freq.contains_key(&'\r'));
    }

    #[test]
    fn counts_multibyte_characters_once() {
        let freq = count_frequencies("héé");
        assert_eq!(freq[&'é'], 2);
        assert_eq!(freq[&'h'], 1);
    }

    #[test]
    fn empty_text_has_no_symbols() {
        assert!(count_frequencies("").is_empty());
    }
}
