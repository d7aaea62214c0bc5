//! Key recovery by letter frequency analysis

use std::io::BufRead;

use tracing::{debug, info};

use crate::cipher::CaesarCipher;
use crate::codec::encode;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::frequency::{score, FrequencyTable};
use crate::key::Key;
use crate::shift::{LegacyShift, ShiftTransform};

/// Result of a brute-force key search
#[derive(Debug, Clone, PartialEq)]
pub struct CrackOutcome {
    /// Cipher text decrypted with the winning key
    pub plaintext: String,
    pub key: Key,
    /// Score of the winning key, lower is closer to the dictionary
    pub score: f64,
    /// Score of every candidate key, in ascending key order
    pub candidates: Vec<(Key, f64)>,
}

/// Brute-force cracker scoring every key against a dictionary
#[derive(Debug, Clone)]
pub struct Cracker<S = LegacyShift> {
    dictionary: Dictionary,
    cipher: CaesarCipher<S>,
}

impl Cracker<LegacyShift> {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_transform(dictionary, LegacyShift)
    }
}

impl<S: ShiftTransform> Cracker<S> {
    pub fn with_transform(dictionary: Dictionary, transform: S) -> Self {
        Self {
            dictionary,
            cipher: CaesarCipher::new(transform),
        }
    }

    /// Tries all 26 keys and keeps the one whose decryption best matches
    /// the dictionary frequencies. Ties keep the lowest key.
    pub fn crack(&self, cipher: &str) -> Result<CrackOutcome> {
        let mut best: Option<(Key, f64)> = None;
        let mut candidates = Vec::with_capacity(26);

        for key in Key::all() {
            let mut symbols = encode(cipher);
            self.cipher.unshift_all(&mut symbols, key);
            let frequencies = FrequencyTable::from_symbols(&symbols)?;
            let key_score = score(self.dictionary.table(), &frequencies);
            debug!(key = key.offset(), score = key_score, "scored candidate key");

            if best.map_or(true, |(_, min)| key_score < min) {
                best = Some((key, key_score));
            }
            candidates.push((key, key_score));
        }

        let (key, min_score) = best.unwrap_or((Key::default(), f64::MAX));
        info!(key = %key, score = min_score, "recovered key");

        Ok(CrackOutcome {
            plaintext: self.cipher.decrypt(cipher, key),
            key,
            score: min_score,
            candidates,
        })
    }
}

/// Loads the dictionary from `dictionary_source` and cracks `cipher` with
/// the legacy rotation.
pub fn crack<R: BufRead>(cipher: &str, dictionary_source: R) -> Result<(String, Key)> {
    let dictionary = Dictionary::from_reader(dictionary_source)?;
    let outcome = Cracker::new(dictionary).crack(cipher)?;
    Ok((outcome.plaintext, outcome.key))
}
