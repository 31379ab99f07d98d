use std::io::{self, Write};

use crate::error::{HuffmanError, Result};

pub(crate) const TRAILER_LEN: usize = 8;

/// Symbol count written after a counted stream.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Trailer {
    pub symbols: u64,
}

impl Trailer {
    pub(crate) fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.symbols.to_le_bytes())
    }

    /// Splits `encoded` into the bit stream and its trailer.
    pub(crate) fn split(encoded: &[u8]) -> Result<(&[u8], Trailer)> {
        if encoded.len() < TRAILER_LEN {
            return Err(HuffmanError::MissingTrailer {
                length: encoded.len(),
            });
        }
        let (body, tail) = encoded.split_at(encoded.len() - TRAILER_LEN);

        let mut count = [0u8; TRAILER_LEN];
        count.copy_from_slice(tail);
        let symbols = u64::from_le_bytes(count);

        Ok((body, Trailer { symbols }))
    }
}
