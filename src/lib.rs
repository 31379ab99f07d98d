//! # rhuff
//!
//! Huffman coding of byte streams with a code learned from a training file.
//!
//! The code is never stored: both sides rebuild it from the same training
//! data.
//!
//! ```rust
//! use rhuff::{Codec, CodecConfig};
//!
//! let training = b"the quick brown fox jumps over the lazy dog";
//! let codec = Codec::train(&mut &training[..], CodecConfig::default())?;
//!
//! let encoded = codec.encode_to_vec(b"a lazy fox")?;
//! assert_eq!(codec.decode_to_vec(&encoded)?, b"a lazy fox");
//! # Ok::<(), rhuff::HuffmanError>(())
//! ```

pub mod bitmanipulation;
pub mod code;
pub mod codec;
pub mod config;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;

mod decoder;
mod encoder;
mod trailer;

pub use code::{Code, CodeTable};
pub use codec::Codec;
pub use config::{CodecConfig, Framing};
pub use encoder::EncodeSummary;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, TreeStats};

/// Number of distinct symbols, one per byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Longest code a tree may produce before it is rejected.
pub const MAX_CODE_LENGTH: usize = 32;
