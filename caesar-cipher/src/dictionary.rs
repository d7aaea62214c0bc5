//! Reference letter frequencies of a language

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::codec::ALPHABET_LEN;
use crate::error::{CaesarError, Result};
use crate::frequency::FrequencyTable;

/// Expected letter frequencies, read-only once loaded.
///
/// The source holds one record per letter from A to Z. Each record starts
/// with the frequency; whatever follows on the same line is ignored, and
/// blank lines between records are skipped.
///
/// ```text
/// 0.08167 A
/// 0.01492 B
/// ...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    table: FrequencyTable,
}

impl Dictionary {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    /// Reads the first 26 records from `reader`
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut frequencies = [0.0; ALPHABET_LEN];
        let mut record = 0;

        for line in reader.lines() {
            if record == ALPHABET_LEN {
                break;
            }
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => CaesarError::Format {
                    record: record + 1,
                    reason: format!("record is not valid UTF-8 ({e})"),
                },
                _ => CaesarError::Io(e),
            })?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            frequencies[record] = token.parse::<f64>().map_err(|e| CaesarError::Format {
                record: record + 1,
                reason: format!("{token:?} is not a number ({e})"),
            })?;
            record += 1;
        }

        if record < ALPHABET_LEN {
            return Err(CaesarError::Format {
                record: record + 1,
                reason: format!("expected {ALPHABET_LEN} records, found {record}"),
            });
        }

        debug!(total = frequencies.iter().sum::<f64>(), "loaded dictionary frequencies");
        Ok(Self::new(FrequencyTable::new(frequencies)))
    }

    /// Loads a dictionary file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

impl FromStr for Dictionary {
    type Err = CaesarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}
