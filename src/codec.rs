use std::io::{Read, Write};

use log::info;

use crate::{
    code::CodeTable,
    config::{CodecConfig, Framing},
    decoder::HuffmanDecoder,
    encoder::{EncodeSummary, HuffmanEncoder},
    error::Result,
    frequency::FrequencyTable,
    trailer::{Trailer, TRAILER_LEN},
    tree::HuffmanTree,
};

/// A tree trained on some sample data, with the codes derived from it.
///
/// Encoded output carries no description of the tree: decoding needs a
/// codec trained on the same data.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: HuffmanTree,
    codes: CodeTable,
    config: CodecConfig,
}

impl Codec {
    /// Reads `training` to the end and builds the code from its byte
    /// frequencies.
    pub fn train<R: Read>(training: &mut R, config: CodecConfig) -> Result<Self> {
        let table = FrequencyTable::from_reader(training)?;
        Self::from_table(&table, config)
    }

    pub fn from_table(table: &FrequencyTable, config: CodecConfig) -> Result<Self> {
        let tree = HuffmanTree::from_table(table)?;
        let codes = CodeTable::build(&tree, config.max_code_length)?;
        Ok(Codec {
            tree,
            codes,
            config,
        })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode<R: Read, W: Write>(&self, source: &mut R, sink: &mut W) -> Result<EncodeSummary> {
        let mut summary = HuffmanEncoder::new(&self.codes).encode(source, sink)?;

        if self.config.framing == Framing::Counted {
            Trailer {
                symbols: summary.symbols,
            }
            .write(sink)?;
            summary.bytes += TRAILER_LEN as u64;
        }
        sink.flush()?;

        info!(
            "encoded {} bytes into {} bytes",
            summary.symbols, summary.bytes
        );
        Ok(summary)
    }

    /// Returns the number of bytes written to `sink`.
    pub fn decode<R: Read, W: Write>(&self, source: &mut R, sink: &mut W) -> Result<u64> {
        let decoder = HuffmanDecoder::new(&self.tree);

        let decoded = match self.config.framing {
            Framing::Raw => decoder.decode(source, sink)?,
            Framing::Counted => {
                let mut encoded = Vec::new();
                source.read_to_end(&mut encoded)?;
                let (body, trailer) = Trailer::split(&encoded)?;
                // nothing reaches the sink unless every symbol decodes
                let mut decoded = Vec::new();
                let n = decoder.decode_exact(body, &mut decoded, trailer.symbols)?;
                sink.write_all(&decoded)?;
                sink.flush()?;
                n
            }
        };

        info!("decoded {} bytes", decoded);
        Ok(decoded)
    }

    pub fn encode_to_vec(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(&mut &payload[..], &mut out)?;
        Ok(out)
    }

    pub fn decode_to_vec(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decode(&mut &encoded[..], &mut out)?;
        Ok(out)
    }
}
