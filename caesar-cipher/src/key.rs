//! Rotation key

use std::fmt;
use std::str::FromStr;

use crate::error::{CaesarError, Result};

/// Rotation offset in `0..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Key(u8);

impl Key {
    /// Create a key from an offset, rejecting anything above 25
    pub fn new(offset: u8) -> Result<Self> {
        if offset < 26 {
            Ok(Self(offset))
        } else {
            Err(CaesarError::InvalidKey(offset.to_string()))
        }
    }

    /// Create a key from a letter, `A` being 0
    pub fn from_letter(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper as u8 - b'A'))
        } else {
            Err(CaesarError::InvalidKey(letter.to_string()))
        }
    }

    /// Every key in ascending order
    pub fn all() -> impl Iterator<Item = Key> {
        (0..26).map(Key)
    }

    pub fn offset(&self) -> u8 {
        self.0
    }

    pub fn letter(&self) -> char {
        char::from(b'A' + self.0)
    }
}

impl FromStr for Key {
    type Err = CaesarError;

    /// Accepts a single letter or a decimal offset
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Key::from_letter(c),
            _ => s
                .parse::<u8>()
                .map_err(|_| CaesarError::InvalidKey(s.to_string()))
                .and_then(Key::new),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.letter(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter() {
        assert_eq!("D".parse::<Key>().unwrap().offset(), 3);
        assert_eq!("d".parse::<Key>().unwrap().offset(), 3);
        assert_eq!("Z".parse::<Key>().unwrap().offset(), 25);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!("7".parse::<Key>().unwrap().offset(), 7);
        assert_eq!("25".parse::<Key>().unwrap().letter(), 'Z');
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["26", "", "AB", "!", "-1"] {
            assert!(matches!(input.parse::<Key>(), Err(CaesarError::InvalidKey(_))), "{input}");
        }
    }

    #[test]
    fn test_all_keys() {
        let keys: Vec<u8> = Key::all().map(|k| k.offset()).collect();
        assert_eq!(keys, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::new(7).unwrap().to_string(), "H (7)");
    }
}
