//! # Caesar Cipher Library
//!
//! This library implements the Caesar substitution cipher together with a
//! letter-frequency attack that recovers an unknown key.
//!
//! ## Components
//!
//! - **Codec** - text to symbols and back, one symbol per character
//! - **Shift** - single-symbol rotation, legacy (mod-25 wrap) or modular
//! - **Frequency** - letter distribution of a symbol sequence and its distance to another
//! - **Dictionary** - reference letter frequencies of a language
//! - **Cracker** - brute force over all 26 keys, keeping the closest match
//!
//! ## Usage
//!
//! ```rust
//! use caesar_cipher::{CaesarCipher, Cracker, Dictionary, FrequencyTable, Key};
//!
//! let cipher: CaesarCipher = CaesarCipher::default();
//! let key: Key = "D".parse()?;
//! assert_eq!(cipher.encrypt("HELLO", key), "KHOOR");
//! assert_eq!(cipher.decrypt("KHOOR", key), "HELLO");
//!
//! // Recover the key from a dictionary that expects mostly E
//! let mut expected = [0.01; 26];
//! expected[4] = 0.75;
//! let cracker = Cracker::new(Dictionary::new(FrequencyTable::new(expected)));
//! let outcome = cracker.crack(&cipher.encrypt("THESE EERIE TREES", key))?;
//! assert_eq!(outcome.key, key);
//! assert_eq!(outcome.plaintext, "THESE EERIE TREES");
//! # Ok::<(), caesar_cipher::CaesarError>(())
//! ```
//!
//! Caesar ciphers offer no confidentiality. This crate is for teaching and
//! for exercising the statistical attack.

// Public modules
pub mod cipher;
pub mod codec;
pub mod cracker;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod key;
pub mod shift;

// Re-exports for easy access
pub use cipher::CaesarCipher;
pub use codec::{decode, decode_values, encode, Symbol, ALPHABET_LEN};
pub use cracker::{crack, CrackOutcome, Cracker};
pub use dictionary::Dictionary;
pub use error::{CaesarError, Result};
pub use frequency::{score, FrequencyTable};
pub use key::Key;
pub use shift::{shift, unshift, LegacyShift, ModularShift, ShiftTransform};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
