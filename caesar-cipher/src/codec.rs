//! Conversion between text and symbol sequences

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// One encoded character of a message.
///
/// Letters live in `0..=25`. Everything else keeps its original character
/// so that decoding restores punctuation, whitespace and control
/// characters exactly, even those whose raw code falls inside `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Letter A-Z as `0..=25`
    Letter(u8),
    /// Non-letter character, never shifted
    Other(char),
    /// Letter value pushed out of the alphabet by the legacy forward wrap
    Stray(i32),
}

impl Symbol {
    /// Untagged integer form: the letter index, the raw character code,
    /// or the out-of-alphabet value.
    pub fn value(&self) -> i64 {
        match *self {
            Symbol::Letter(v) => i64::from(v),
            Symbol::Other(c) => i64::from(u32::from(c)),
            Symbol::Stray(v) => i64::from(v),
        }
    }

    /// Build a symbol from the result of a shift on a letter or stray value.
    pub fn from_shifted(value: i32) -> Self {
        match u8::try_from(value) {
            Ok(v) if usize::from(v) < ALPHABET_LEN => Symbol::Letter(v),
            _ => Symbol::Stray(value),
        }
    }

    /// Returns the letter index if this symbol is a letter
    pub fn letter(&self) -> Option<u8> {
        match *self {
            Symbol::Letter(v) => Some(v),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Symbol::Letter(v) => char::from(b'A' + v),
            Symbol::Other(c) => c,
            Symbol::Stray(v) => render_value(i64::from(v)),
        }
    }
}

/// Uppercase a single character without changing the text length.
fn upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Encodes text into one symbol per character.
pub fn encode(text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|c| {
            let c = upper(c);
            if c.is_ascii_uppercase() {
                Symbol::Letter(c as u8 - b'A')
            } else {
                Symbol::Other(c)
            }
        })
        .collect()
}

/// Decodes symbols back to text, restoring non-letter characters verbatim.
pub fn decode(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}

/// Renders untagged symbol values with the `'A' + value` formula.
///
/// Values that were raw character codes come out shifted by `'A'`, not as
/// the original character. Results outside the Unicode scalar range render
/// as U+FFFD.
pub fn decode_values(values: &[i64]) -> String {
    values.iter().map(|&v| render_value(v)).collect()
}

fn render_value(value: i64) -> char {
    i64::from(b'A')
        .checked_add(value)
        .and_then(|code| u32::try_from(code).ok())
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_letters() {
        let symbols = encode("Hello");
        assert_eq!(
            symbols,
            vec![
                Symbol::Letter(7),
                Symbol::Letter(4),
                Symbol::Letter(11),
                Symbol::Letter(11),
                Symbol::Letter(14),
            ]
        );
    }

    #[test]
    fn test_encode_keeps_raw_codes() {
        let symbols = encode("A, z!");
        let values: Vec<i64> = symbols.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![0, 44, 32, 25, 33]);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode("").is_empty());
        assert_eq!(decode(&[]), "");
    }

    #[test]
    fn test_length_preserved() {
        let text = "straße, naïve\n";
        assert_eq!(encode(text).len(), text.chars().count());
    }

    #[test]
    fn test_round_trip_uppercase() {
        let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn test_round_trip_restores_punctuation() {
        assert_eq!(decode(&encode("Hi, there!\n")), "HI, THERE!\n");
    }

    #[test]
    fn test_control_character_is_not_a_letter() {
        // '\n' has raw code 10, which would collide with 'K' untagged
        assert_eq!(encode("\n"), vec![Symbol::Other('\n')]);
    }

    #[test]
    fn test_untagged_decode_is_lossy() {
        let values: Vec<i64> = encode("A!").iter().map(|s| s.value()).collect();
        // '!' is 33, rendered as 'A' + 33 = 'b'
        assert_eq!(decode_values(&values), "Ab");
    }

    #[test]
    fn test_untagged_decode_invalid_value() {
        assert_eq!(decode_values(&[-100]), "\u{FFFD}");
    }

    #[test]
    fn test_stray_decodes_below_a() {
        assert_eq!(decode(&[Symbol::Stray(-1)]), "@");
        assert_eq!(Symbol::from_shifted(-1), Symbol::Stray(-1));
        assert_eq!(Symbol::from_shifted(25), Symbol::Letter(25));
    }
}
