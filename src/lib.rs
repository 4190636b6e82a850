//! # huffman_cost
//!
//! Estimates how many bits a Huffman code needs for a text, next to a
//! per-symbol logarithmic baseline.
//!
//! ```rust
//! use huffman_cost::{build_code_table, build_huffman_tree, huffman_cost, FreqTable};
//!
//! let freq: FreqTable = [('a', 2), ('b', 2), ('c', 3)].into_iter().collect();
//! let tree = build_huffman_tree(&freq)?;
//! let codes = build_code_table(&tree);
//! assert_eq!(codes[&'c'], "0");
//! assert_eq!(huffman_cost(&codes, &freq)?, 11);
//! # Ok::<(), huffman_cost::Error>(())
//! ```

pub mod cost;
pub mod error;
pub mod frequency;
pub mod huffman;

pub use cost::{CostReport, estimate, fixed_length_cost, huffman_cost};
pub use error::{Error, Result};
pub use frequency::{count_frequencies, read_frequencies};
pub use huffman::{
    CodeTable, FreqTable, HuffmanTree, Node, build_code_table, build_huffman_tree,
    validate_frequencies,
};
