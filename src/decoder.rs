use std::io::{BufWriter, Read, Write};

use log::debug;

use crate::{
    bitmanipulation::BitReader,
    error::{HuffmanError, Result},
    tree::{HuffmanTree, NodeKind},
};

pub(crate) struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        HuffmanDecoder { tree }
    }

    /// Decodes until the source runs out. A symbol is only written if the
    /// source still had data after its last bit, so whatever is being
    /// decoded when the end shows up is dropped. Padding zeros that happen
    /// to spell a whole codeword before that point come out as an extra
    /// symbol.
    pub fn decode<R: Read, W: Write>(&self, source: R, sink: &mut W) -> Result<u64> {
        let mut reader = BitReader::new(source)?;
        let mut writer = BufWriter::new(sink);
        let mut decoded = 0u64;

        'symbols: while !reader.at_end() {
            let mut current = self.tree.root();
            let symbol = loop {
                match self.tree.node(current).kind {
                    NodeKind::Leaf(symbol) => break symbol,
                    NodeKind::Internal { left, right } => {
                        let bit = reader.read_bit()?;
                        if reader.at_end() {
                            debug!(
                                "end of stream after {} symbols, dropping last codeword",
                                decoded
                            );
                            break 'symbols;
                        }
                        current = if bit { right } else { left };
                    }
                }
            };
            writer.write_all(&[symbol])?;
            decoded += 1;
        }

        writer.flush()?;
        Ok(decoded)
    }

    /// Decodes exactly `expected` symbols and ignores any bits left after
    /// them.
    pub fn decode_exact<R: Read, W: Write>(
        &self,
        source: R,
        sink: &mut W,
        expected: u64,
    ) -> Result<u64> {
        let mut reader = BitReader::new(source)?;
        let mut writer = BufWriter::new(sink);
        let mut decoded = 0u64;

        while decoded < expected {
            let mut current = self.tree.root();
            let symbol = loop {
                match self.tree.node(current).kind {
                    NodeKind::Leaf(symbol) => break symbol,
                    NodeKind::Internal { left, right } => {
                        if reader.at_end() {
                            return Err(HuffmanError::TruncatedStream { decoded, expected });
                        }
                        current = if reader.read_bit()? { right } else { left };
                    }
                }
            };
            writer.write_all(&[symbol])?;
            decoded += 1;
        }

        writer.flush()?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::HuffmanDecoder;
    use crate::{error::HuffmanError, frequency::FrequencyTable, tree::HuffmanTree};

    fn abc_tree() -> HuffmanTree {
        HuffmanTree::from_frequencies([(b'a', 3), (b'b', 2), (b'c', 1)]).unwrap()
    }

    #[test]
    fn test_decode() {
        let tree = abc_tree();
        let decoder = HuffmanDecoder::new(&tree);

        let input: [u8; 1] = [0b00001110];
        let mut output: Vec<u8> = Vec::new();

        decoder.decode_exact(&input[..], &mut output, 3).unwrap();

        assert_eq!("abc", std::str::from_utf8(&output).unwrap());
    }

    #[test]
    fn raw_decode_turns_padding_into_symbols() {
        let tree = abc_tree();
        let decoder = HuffmanDecoder::new(&tree);

        // "abc" plus three zero padding bits, each one a whole 'a'. The last
        // of them completes on the final bit and is dropped.
        let input: [u8; 1] = [0b00001110];
        let mut output: Vec<u8> = Vec::new();

        let decoded = decoder.decode(&input[..], &mut output).unwrap();

        assert_eq!(output, b"abcaa");
        assert_eq!(decoded, 5);
    }

    #[test]
    fn raw_decode_of_empty_source_writes_nothing() {
        let tree = abc_tree();
        let decoder = HuffmanDecoder::new(&tree);
        let mut output: Vec<u8> = Vec::new();

        assert_eq!(decoder.decode(&[][..], &mut output).unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn raw_decode_of_flush_byte_on_uniform_tree_writes_nothing() {
        let tree = HuffmanTree::from_table(&FrequencyTable::from_bytes(&[])).unwrap();
        let decoder = HuffmanDecoder::new(&tree);
        let mut output: Vec<u8> = Vec::new();

        // every code is 8 bits, so the lone padding byte ends exactly on
        // the end of stream
        assert_eq!(decoder.decode(&[0x00][..], &mut output).unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn exact_decode_reports_truncation() {
        let tree = abc_tree();
        let decoder = HuffmanDecoder::new(&tree);
        let mut output: Vec<u8> = Vec::new();

        // eight 'a' fit in one byte, the ninth does not
        let result = decoder.decode_exact(&[0x00][..], &mut output, 9);

        assert!(matches!(
            result,
            Err(HuffmanError::TruncatedStream {
                decoded: 8,
                expected: 9
            })
        ));
    }
}
