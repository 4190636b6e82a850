use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::error::{Error, Result};

pub type CodeTable = HashMap<char, String>;
pub type FreqTable = HashMap<char, u64>;

/// Code given to the only symbol of a one-leaf tree, which has no path bits.
pub const SINGLE_SYMBOL_CODE: &str = "0";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The leaf symbol, or `None` for an internal node.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

pub type HuffmanTree = Node;

/// Priority key of a queued node.
///
/// Sorts by frequency, then by symbol with internal nodes (`None`) ahead of
/// every leaf, then by creation order. The last key only ever separates two
/// internal nodes of equal frequency.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
struct MergeKey {
    freq: u64,
    symbol: Option<char>,
    seq: usize,
}

struct HeapNode {
    key: MergeKey,
    node: Box<Node>,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapNode {}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        Reverse(self.key).cmp(&Reverse(other.key))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Checks that the table is non-empty and every count is positive.
pub fn validate_frequencies(frequencies: &FreqTable) -> Result<()> {
    if frequencies.is_empty() {
        return Err(Error::NoSymbols);
    }
    match frequencies.iter().find(|&(_, &count)| count == 0) {
        Some((&symbol, &count)) => Err(Error::InvalidFrequency { symbol, count }),
        None => Ok(()),
    }
}

/// Builds a Huffman tree by repeatedly merging the two cheapest nodes.
///
/// The node popped first becomes the left child. Ties are broken as described
/// on [`MergeKey`], so the same table always yields the same tree shape.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    validate_frequencies(frequencies)?;
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap = BinaryHeap::with_capacity(frequencies.len());
    let mut seq = 0usize;
    for (&symbol, &freq) in frequencies {
        heap.push(HeapNode {
            key: MergeKey {
                freq,
                symbol: Some(symbol),
                seq,
            },
            node: Box::new(Node::Leaf { symbol, freq }),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        let freq = left
            .key
            .freq
            .checked_add(right.key.freq)
            .ok_or(Error::FrequencyOverflow)?;
        trace!(
            "Merging {:?} ({}) and {:?} ({}) into {}",
            left.node.symbol(),
            left.key.freq,
            right.node.symbol(),
            right.key.freq,
            freq
        );

        heap.push(HeapNode {
            key: MergeKey {
                freq,
                symbol: None,
                seq,
            },
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }

    let root = heap.pop().ok_or(Error::NoSymbols)?;
    debug!("Tree construction complete, total weight {}", root.key.freq);
    Ok(*root.node)
}

/// Collects the code of every leaf into a newly allocated table.
///
/// A tree made of a single leaf gets [`SINGLE_SYMBOL_CODE`].
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, SINGLE_SYMBOL_CODE.to_string());
        }
        Node::Internal { .. } => assign_codes(root, String::new(), &mut table),
    }
    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?}: '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}
