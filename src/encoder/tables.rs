use crate::models::{ECLevel, Version};

/// Codeword layout for one (version, EC level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEntry {
    /// All codewords in the symbol, data plus error correction
    pub total_codewords: usize,
    /// Data codewords across all blocks
    pub data_codewords: usize,
    /// Number of Reed-Solomon blocks
    pub num_blocks: usize,
    /// Error correction codewords appended to every block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// Total codewords per version, fixed by the symbol geometry. Index 0 unused.
const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

/// Codeword layout for a (version, EC level) pair.
///
/// Infallible: `Version` guarantees the 1-40 range, and the tables carry an
/// entry for every combination.
pub fn capacity(version: Version, ec_level: ECLevel) -> CapacityEntry {
    let v = version.number() as usize;
    let idx = ec_level.table_index();
    let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[idx][v] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize;
    let total_codewords = TOTAL_CODEWORDS[v] as usize;
    CapacityEntry {
        total_codewords,
        data_codewords: total_codewords - num_blocks * ecc_per_block,
        num_blocks,
        ecc_per_block,
    }
}

impl CapacityEntry {
    /// Data codeword count of each block, short blocks first.
    ///
    /// When `data_codewords` does not divide evenly, the trailing blocks
    /// carry one extra codeword, per the standard's block table.
    pub fn block_data_lengths(&self) -> Vec<usize> {
        let short_len = self.data_codewords / self.num_blocks;
        let num_long = self.data_codewords % self.num_blocks;
        let num_short = self.num_blocks - num_long;
        let mut lengths = vec![short_len; num_short];
        lengths.extend(std::iter::repeat(short_len + 1).take(num_long));
        lengths
    }
}

/// Data capacity in bits for a (version, EC level) pair.
pub fn data_bit_capacity(version: Version, ec_level: ECLevel) -> usize {
    capacity(version, ec_level).data_codewords * 8
}
