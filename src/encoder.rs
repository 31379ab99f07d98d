use std::io::{ErrorKind, Read, Write};

use crate::{
    bitmanipulation::BitWriter,
    code::CodeTable,
    error::{HuffmanError, Result},
};

/// Totals of one encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Payload bytes consumed.
    pub symbols: u64,
    /// Bit stream bytes produced, flushed byte included.
    pub bytes: u64,
}

pub(crate) struct HuffmanEncoder<'a> {
    codes: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(codes: &'a CodeTable) -> Self {
        HuffmanEncoder { codes }
    }

    /// Writes the code of every byte of `source`, then flushes the last
    /// partial byte.
    pub fn encode<R: Read, W: Write>(&self, source: &mut R, sink: &mut W) -> Result<EncodeSummary> {
        let mut writer = BitWriter::new(sink);
        let mut buf = [0u8; 8192];
        let mut symbols = 0u64;

        loop {
            let n = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                let code = self
                    .codes
                    .get(byte)
                    .ok_or(HuffmanError::UnknownSymbol(byte))?;
                writer.write_code(code)?;
            }
            symbols += n as u64;
        }

        let bytes = writer.bytes_written() + 1;
        writer.finish()?;

        Ok(EncodeSummary { symbols, bytes })
    }
}
