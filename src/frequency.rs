use std::io::{ErrorKind, Read};

use crate::{error::Result, ALPHABET_SIZE};

/// Occurrence counts of every byte value in a training source.
///
/// Values that never occur are counted once, so every byte gets a code even
/// when the training data does not contain it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Consumes `source` entirely and counts its bytes.
    pub fn from_reader<R: Read>(source: &mut R) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut buf = [0u8; 8192];

        loop {
            match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        counts[byte as usize] += 1;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self::floored(counts))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }
        Self::floored(counts)
    }

    fn floored(mut counts: [u64; ALPHABET_SIZE]) -> Self {
        for count in counts.iter_mut().filter(|c| **c == 0) {
            *count = 1;
        }
        FrequencyTable { counts }
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts, floor included.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(symbol, frequency)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX).map(move |symbol| (symbol, self.counts[symbol as usize]))
    }
}
