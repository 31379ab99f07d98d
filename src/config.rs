use clap::ValueEnum;

use crate::MAX_CODE_LENGTH;

/// How the end of the encoded bit stream is marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Framing {
    /// Codewords and the final flushed byte, nothing else. Decoding runs
    /// until the input is exhausted and may turn padding bits into a
    /// trailing symbol.
    Raw,
    /// The raw stream followed by the number of encoded symbols as a
    /// little-endian u64.
    #[default]
    Counted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub framing: Framing,
    pub max_code_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            framing: Framing::default(),
            max_code_length: MAX_CODE_LENGTH,
        }
    }
}

impl CodecConfig {
    pub fn raw() -> Self {
        Self {
            framing: Framing::Raw,
            ..Default::default()
        }
    }
}
