use log::{debug, log_enabled, trace, Level};

use crate::{
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
    queue::{MinQueue, Weighted},
};

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(u8),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub frequency: u64,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    frequency: u64,
    node: NodeId,
}

impl Weighted for QueueEntry {
    fn weight(&self) -> u64 {
        self.frequency
    }
}

/// Shape summary of a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub leaves: usize,
    pub internal: usize,
    /// Deepest leaf and its depth.
    pub deepest: (u8, usize),
    /// Sum of frequency * depth over all leaves, i.e. the encoded size in
    /// bits of the training data.
    pub weighted_length: u64,
}

/// Huffman tree stored in an arena. Leaves come first, in the order they
/// were given, followed by the merge nodes in creation order; the root is
/// the last node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    pub fn from_table(table: &FrequencyTable) -> Result<Self> {
        Self::from_frequencies(table.iter())
    }

    /// Builds a tree over `(symbol, frequency)` pairs. Each symbol should
    /// appear once.
    pub fn from_frequencies<I>(frequencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut nodes: Vec<Node> = frequencies
            .into_iter()
            .map(|(symbol, frequency)| Node {
                frequency,
                kind: NodeKind::Leaf(symbol),
            })
            .collect();

        if nodes.len() < 2 {
            return Err(HuffmanError::NotEnoughSymbols(nodes.len()));
        }

        let entries = nodes
            .iter()
            .enumerate()
            .map(|(node, n)| QueueEntry {
                frequency: n.frequency,
                node,
            })
            .collect();
        let mut queue = MinQueue::heapify(entries);

        while queue.len() > 1 {
            let left = queue.extract_min()?;
            let right = queue.extract_min()?;
            let frequency = left
                .frequency
                .checked_add(right.frequency)
                .ok_or(HuffmanError::FrequencyOverflow)?;

            trace!(
                "merging nodes {} ({}) and {} ({})",
                left.node,
                left.frequency,
                right.node,
                right.frequency
            );

            nodes.push(Node {
                frequency,
                kind: NodeKind::Internal {
                    left: left.node,
                    right: right.node,
                },
            });
            queue.insert(QueueEntry {
                frequency,
                node: nodes.len() - 1,
            })?;
        }

        let root = queue.extract_min()?.node;
        let tree = HuffmanTree { nodes, root };

        if log_enabled!(Level::Debug) {
            let stats = tree.stats();
            debug!(
                "built tree with {} leaves, {} internal nodes, max depth {}",
                stats.leaves, stats.internal, stats.deepest.1
            );
        }

        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Follows one edge down from `id`. Returns `None` on a leaf.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id].kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some(if bit { right } else { left }),
        }
    }

    /// Walks every leaf with its depth, left subtree first.
    pub fn leaves(&self) -> impl Iterator<Item = (u8, u64, usize)> + '_ {
        let mut stack = vec![(self.root, 0usize)];
        std::iter::from_fn(move || {
            while let Some((id, depth)) = stack.pop() {
                let node = &self.nodes[id];
                match node.kind {
                    NodeKind::Leaf(symbol) => return Some((symbol, node.frequency, depth)),
                    NodeKind::Internal { left, right } => {
                        stack.push((right, depth + 1));
                        stack.push((left, depth + 1));
                    }
                }
            }
            None
        })
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            leaves: 0,
            internal: self.nodes.iter().filter(|n| !n.is_leaf()).count(),
            deepest: (0, 0),
            weighted_length: 0,
        };
        for (symbol, frequency, depth) in self.leaves() {
            stats.leaves += 1;
            stats.weighted_length = stats
                .weighted_length
                .saturating_add(frequency.saturating_mul(depth as u64));
            if stats.leaves == 1 || depth > stats.deepest.1 {
                stats.deepest = (symbol, depth);
            }
        }
        stats
    }
}
