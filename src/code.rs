use std::fmt;

use itertools::Itertools;

use crate::{
    error::{HuffmanError, Result},
    tree::{HuffmanTree, NodeId, NodeKind},
    ALPHABET_SIZE, MAX_CODE_LENGTH,
};

/// Root-to-leaf path of a symbol. Bit `i` of `bits` is the edge taken at
/// depth `i`, 0 for left and 1 for right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    bits: u32,
    len: u8,
}

impl Code {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The path one edge further down. The caller keeps its own copy.
    fn extend(self, bit: bool) -> Code {
        Code {
            bits: self.bits | (u32::from(bit) << self.len),
            len: self.len + 1,
        }
    }

    /// Bits in the order they are written, root edge first.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let bits = self.bits;
        (0..self.len).map(move |i| (bits >> i) & 1 == 1)
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        let mask = if self.len >= 32 {
            u32::MAX
        } else {
            (1u32 << self.len) - 1
        };
        self.len <= other.len && (other.bits & mask) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits().map(|b| if b { '1' } else { '0' }).join(""))
    }
}

/// Code of every symbol of a tree, indexed by byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Assigns codes by walking `tree`. Fails if any leaf sits deeper than
    /// `max_length`, which is itself capped at [`MAX_CODE_LENGTH`].
    pub fn build(tree: &HuffmanTree, max_length: usize) -> Result<Self> {
        let max = max_length.min(MAX_CODE_LENGTH);
        let (symbol, depth) = tree.stats().deepest;
        if depth > max {
            return Err(HuffmanError::CodeTooLong {
                symbol,
                length: depth,
                max,
            });
        }

        let mut table = CodeTable {
            codes: [None; ALPHABET_SIZE],
        };
        match tree.node(tree.root()).kind {
            NodeKind::Internal { left, right } => {
                table.assign(tree, left, Code::default().extend(false));
                table.assign(tree, right, Code::default().extend(true));
            }
            NodeKind::Leaf(_) => return Err(HuffmanError::NotEnoughSymbols(1)),
        }
        Ok(table)
    }

    fn assign(&mut self, tree: &HuffmanTree, id: NodeId, path: Code) {
        match tree.node(id).kind {
            NodeKind::Leaf(symbol) => self.codes[symbol as usize] = Some(path),
            NodeKind::Internal { left, right } => {
                self.assign(tree, left, path.extend(false));
                self.assign(tree, right, path.extend(true));
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Symbols that have a code, in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        (0..=u8::MAX).filter_map(move |s| self.get(s).map(|code| (s, code)))
    }
}
