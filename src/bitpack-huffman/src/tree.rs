use std::{cmp::Ordering, collections::BinaryHeap, io};

use bitpack_utils::thiserror::{self, Error};

use crate::node::HuffmanNode;

/// Errors that may occur when building or applying Huffman trees.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The weight table holds an entry which is not a non-negative
    /// real number.
    #[error("invalid weight {weight} at weight table index {index}")]
    InvalidWeight {
        /// The offending index into the weight table.
        index: usize,
        /// The rejected weight value.
        weight: f32,
    },

    /// An operation on the underlying bit buffer failed.
    #[error("bit buffer access failed: {0}")]
    Io(#[from] io::Error),
}

/// The prefix code assigned to a byte value.
///
/// Bit `i` of `mask`, for `i < len`, is the branch taken at depth
/// `i` when descending from the tree root: 0 descends left, 1
/// descends right. Bits at and above `len` are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Code {
    /// The branch pattern, LSB first.
    pub mask: u64,
    /// The number of meaningful bits in `mask`.
    pub len: u32,
}

// An entry in the construction priority queue.
//
// The sequence number breaks ties between equal weights in insertion
// order, so a fixed weight table always produces the same tree.
struct QueueEntry {
    node: HuffmanNode,
    seq: u32,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated to never be NaN, so the total order
        // coincides with the numeric one. Reversed, because
        // `BinaryHeap` is a max-heap and construction wants the
        // lowest weight first.
        self.node
            .weight()
            .total_cmp(&other.node.weight())
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

/// A Huffman coding tree over all 256 possible byte values.
///
/// The tree is built once from a table of occurrence weights and
/// is immutable afterwards; the prefix code for every byte value
/// is precomputed during construction.
///
/// Weight tables are indexed by signed byte value offset by 128:
/// index 0 holds the weight of byte `0x80` (the most negative
/// value) and index 255 the weight of byte `0x7F`.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffmanNode,
    codes: [Code; 256],
}

impl HuffmanTree {
    /// Builds a tree from a table of 256 occurrence weights.
    ///
    /// All 256 byte values become leaves, including those with a
    /// weight of zero, so every value is guaranteed a code of at
    /// least one bit.
    ///
    /// Fails with [`HuffmanError::InvalidWeight`] when the table
    /// holds a negative or NaN entry.
    pub fn new(weights: &[f32; 256]) -> Result<Self, HuffmanError> {
        for (index, &weight) in weights.iter().enumerate() {
            if weight.is_nan() || weight < 0.0 {
                return Err(HuffmanError::InvalidWeight { index, weight });
            }
        }

        Ok(Self::build(weights))
    }

    /// Builds a tree from the byte value occurrences in a sample.
    ///
    /// This is a convenience for callers which do not keep their own
    /// occurrence statistics; the resulting codes are only as good a
    /// fit for other data as the sample is representative of it.
    pub fn from_sample(data: &[u8]) -> Self {
        let mut weights = [0.0; 256];
        for &byte in data {
            weights[byte.wrapping_add(0x80) as usize] += 1.0;
        }

        Self::build(&weights)
    }

    // Constructs the tree for an already validated weight table.
    fn build(weights: &[f32; 256]) -> Self {
        let mut queue = BinaryHeap::with_capacity(weights.len());
        let mut seq = 0;

        for (index, &weight) in weights.iter().enumerate() {
            // Index 0 maps to the most negative signed byte value.
            let value = (index as u8).wrapping_add(0x80);
            let node = HuffmanNode::Leaf { value, weight };

            queue.push(QueueEntry { node, seq });
            seq += 1;
        }

        while queue.len() > 1 {
            if let (Some(a), Some(b)) = (queue.pop(), queue.pop()) {
                let node = HuffmanNode::Internal {
                    weight: a.node.weight() + b.node.weight(),
                    left: Box::new(a.node),
                    right: Box::new(b.node),
                };

                queue.push(QueueEntry { node, seq });
                seq += 1;
            }
        }

        let root = match queue.pop() {
            Some(entry) => entry.node,
            // All 256 leaves were inserted, so a root must remain.
            None => unreachable!(),
        };

        let mut codes = [Code::default(); 256];
        Self::derive_codes(&root, 0, 0, &mut codes);

        Self { root, codes }
    }

    // Walks the tree depth-first, recording the branch pattern that
    // reaches each leaf.
    fn derive_codes(node: &HuffmanNode, mask: u64, len: u32, codes: &mut [Code; 256]) {
        match node {
            HuffmanNode::Leaf { value, .. } => {
                codes[*value as usize] = Code { mask, len };
            }
            HuffmanNode::Internal { left, right, .. } => {
                Self::derive_codes(left, mask, len + 1, codes);
                Self::derive_codes(right, mask | 1 << len, len + 1, codes);
            }
        }
    }

    /// Gets the root node of the tree.
    #[inline]
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Gets the prefix code assigned to a byte value.
    ///
    /// This is a pure table lookup; every byte value has exactly
    /// one code.
    #[inline]
    pub fn code(&self, value: u8) -> Code {
        self.codes[value as usize]
    }
}
