//! Encryption and decryption with a known key

use crate::codec::{decode, encode, Symbol};
use crate::key::Key;
use crate::shift::{LegacyShift, ShiftTransform};

/// Caesar cipher over a pluggable rotation
#[derive(Debug, Clone, Copy, Default)]
pub struct CaesarCipher<S = LegacyShift> {
    transform: S,
}

impl<S: ShiftTransform> CaesarCipher<S> {
    pub fn new(transform: S) -> Self {
        Self { transform }
    }

    /// Shifts every letter of `message` forward by `key`
    pub fn encrypt(&self, message: &str, key: Key) -> String {
        let mut symbols = encode(message);
        self.shift_all(&mut symbols, key);
        decode(&symbols)
    }

    /// Shifts every letter of `cipher` backward by `key`
    pub fn decrypt(&self, cipher: &str, key: Key) -> String {
        let mut symbols = encode(cipher);
        self.unshift_all(&mut symbols, key);
        decode(&symbols)
    }

    pub fn shift_all(&self, symbols: &mut [Symbol], key: Key) {
        let offset = i32::from(key.offset());
        apply(symbols, |value| self.transform.shift_forward(value, offset));
    }

    pub fn unshift_all(&self, symbols: &mut [Symbol], key: Key) {
        let offset = i32::from(key.offset());
        apply(symbols, |value| self.transform.shift_backward(value, offset));
    }
}

fn apply(symbols: &mut [Symbol], rotate: impl Fn(i32) -> i32) {
    for symbol in symbols.iter_mut() {
        *symbol = match *symbol {
            Symbol::Letter(v) => Symbol::from_shifted(rotate(i32::from(v))),
            Symbol::Stray(v) => Symbol::from_shifted(rotate(v)),
            other @ Symbol::Other(_) => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::ModularShift;

    fn key(letter: char) -> Key {
        Key::from_letter(letter).unwrap()
    }

    #[test]
    fn test_encrypt_hello() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        assert_eq!(cipher.encrypt("HELLO", key('D')), "KHOOR");
        assert_eq!(cipher.decrypt("KHOOR", key('D')), "HELLO");
    }

    #[test]
    fn test_lowercase_is_normalized() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        assert_eq!(cipher.encrypt("hello", key('D')), "KHOOR");
    }

    #[test]
    fn test_punctuation_preserved() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        assert_eq!(cipher.encrypt("Hello, World!\n", key('D')), "KHOOR, ZRUOG!\n");
        assert_eq!(cipher.decrypt("KHOOR, ZRUOG!\n", key('D')), "HELLO, WORLD!\n");
    }

    #[test]
    fn test_round_trip_without_wrap() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        let text = "ABCDEFGHIJ";
        for offset in 0..=15 {
            let k = Key::new(offset).unwrap();
            assert_eq!(cipher.decrypt(&cipher.encrypt(text, k), k), text);
        }
    }

    #[test]
    fn test_wrapping_letters() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        assert_eq!(cipher.encrypt("XYZ", key('F')), "CDE");
        assert_eq!(cipher.decrypt("CDE", key('F')), "XYZ");
    }

    #[test]
    fn test_legacy_z_by_z() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        assert_eq!(cipher.encrypt("YZ", key('Z')), "X@");
        // '@' re-encodes as a non-letter and is left alone
        assert_eq!(cipher.decrypt("X@", key('Z')), "Y@");
    }

    #[test]
    fn test_modular_z_by_z() {
        let cipher = CaesarCipher::new(ModularShift);
        assert_eq!(cipher.encrypt("YZ", key('Z')), "XY");
        assert_eq!(cipher.decrypt("XY", key('Z')), "YZ");
    }

    #[test]
    fn test_stray_passes_through_unshift() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        let mut symbols = vec![Symbol::Stray(-1), Symbol::Letter(3)];
        cipher.unshift_all(&mut symbols, key('B'));
        assert_eq!(symbols, vec![Symbol::Stray(-1), Symbol::Letter(2)]);
    }

    #[test]
    fn test_length_preserved() {
        let cipher = CaesarCipher::<LegacyShift>::default();
        let text = "Größe: 42 ß!";
        assert_eq!(cipher.encrypt(text, key('K')).chars().count(), text.chars().count());
    }
}
