//! Letter frequency analysis and scoring

use std::ops::Index;

use crate::codec::{Symbol, ALPHABET_LEN};
use crate::error::{CaesarError, Result};

/// Relative frequency of each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable([f64; ALPHABET_LEN]);

impl FrequencyTable {
    pub fn new(frequencies: [f64; ALPHABET_LEN]) -> Self {
        Self(frequencies)
    }

    /// Computes letter frequencies of a symbol sequence.
    ///
    /// Each letter count is divided by the full sequence length, so
    /// non-letter symbols lower every frequency without being counted.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CaesarError::EmptySequence);
        }

        let mut counts = [0usize; ALPHABET_LEN];
        for letter in symbols.iter().filter_map(Symbol::letter) {
            counts[usize::from(letter)] += 1;
        }

        let length = symbols.len() as f64;
        Ok(Self(counts.map(|count| count as f64 / length)))
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_LEN] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum of absolute differences against another table
    pub fn distance(&self, other: &FrequencyTable) -> f64 {
        score(self, other)
    }
}

impl Index<usize> for FrequencyTable {
    type Output = f64;

    fn index(&self, letter: usize) -> &f64 {
        &self.0[letter]
    }
}

/// Scores a candidate distribution against a reference one.
///
/// Lower is closer; identical tables score zero.
pub fn score(reference: &FrequencyTable, candidate: &FrequencyTable) -> f64 {
    reference
        .0
        .iter()
        .zip(candidate.0.iter())
        .map(|(expected, observed)| (observed - expected).abs())
        .sum()
}
