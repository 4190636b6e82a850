//! Bit-cost estimates for a frequency table.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::huffman::{CodeTable, FreqTable, build_code_table, build_huffman_tree};

/// Both estimates for one frequency table, in bits.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CostReport {
    pub fixed_length: u64,
    pub huffman: u64,
}

fn ceil_log2(count: u64) -> u64 {
    match count {
        0 | 1 => 0,
        n => u64::from(u64::BITS - (n - 1).leading_zeros()),
    }
}

/// Sums `ceil(log2(count))` over every symbol.
///
/// This is the baseline the Huffman cost is reported against. It is not the
/// cost of a uniform code over the alphabet. A count of 1 contributes nothing;
/// a count of 0 is rejected.
pub fn fixed_length_cost(frequencies: &FreqTable) -> Result<u64> {
    frequencies
        .iter()
        .try_fold(0u64, |cost, (&symbol, &count)| {
            if count == 0 {
                return Err(Error::InvalidFrequency { symbol, count });
            }
            Ok(cost + ceil_log2(count))
        })
}

/// Sums `count * code length` over symbols present in both tables.
///
/// Codes without a matching frequency add nothing. A total that does not fit
/// in `u64` is reported as [`Error::FrequencyOverflow`].
pub fn huffman_cost(codes: &CodeTable, frequencies: &FreqTable) -> Result<u64> {
    codes.iter().try_fold(0u64, |cost, (symbol, code)| {
        let Some(&count) = frequencies.get(symbol) else {
            warn!("Symbol {:?} has a code but no frequency, skipping", symbol);
            return Ok(cost);
        };
        count
            .checked_mul(code.len() as u64)
            .and_then(|bits| cost.checked_add(bits))
            .ok_or(Error::FrequencyOverflow)
    })
}

/// Builds the tree and code table for `frequencies` and reports both costs.
pub fn estimate(frequencies: &FreqTable) -> Result<CostReport> {
    let fixed_length = fixed_length_cost(frequencies)?;
    let tree = build_huffman_tree(frequencies)?;
    let codes = build_code_table(&tree);
    let huffman = huffman_cost(&codes, frequencies)?;

    debug!(
        "Estimated {} symbols: fixed-length {} bits, huffman {} bits",
        frequencies.len(),
        fixed_length,
        huffman
    );
    Ok(CostReport {
        fixed_length,
        huffman,
    })
}
