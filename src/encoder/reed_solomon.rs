use crate::encoder::galois::Gf256;
use crate::encoder::tables::CapacityEntry;

/// Reed-Solomon encoder over GF(256) for one ECC degree.
///
/// The generator polynomial is the product of `(x - alpha^i)` for i in
/// `0..num_ecc`; its coefficients are computed once per degree and reused
/// across blocks.
pub struct ReedSolomonEncoder {
    /// Divisor coefficients in descending power order, leading 1 omitted
    divisor: Vec<u8>,
    num_ecc: usize,
}

impl ReedSolomonEncoder {
    /// Build the generator polynomial for `num_ecc` error correction
    /// codewords.
    pub fn new(num_ecc: usize) -> Self {
        // Multiply out prod (x + alpha^i); gpoly[j] holds the coefficient
        // of x^j while the product is accumulated.
        let mut gpoly = vec![0u8; num_ecc + 1];
        gpoly[0] = 1;
        for i in 0..num_ecc {
            let root = Gf256::exp(i);
            for j in (1..=i + 1).rev() {
                gpoly[j] = gpoly[j - 1] ^ Gf256::mul(gpoly[j], root);
            }
            gpoly[0] = Gf256::mul(gpoly[0], root);
        }

        let mut divisor: Vec<u8> = gpoly[0..num_ecc].to_vec();
        divisor.reverse();
        Self { divisor, num_ecc }
    }

    /// Remainder of `data * x^num_ecc` divided by the generator polynomial.
    /// The returned coefficients, most significant first, are the block's
    /// ECC codewords.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; self.num_ecc];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[self.num_ecc - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.divisor) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

/// Split data codewords into blocks, append ECC per block, and interleave
/// into the final codeword stream: data codewords round-robin across
/// blocks, then ECC codewords round-robin.
pub fn add_ecc_and_interleave(data: &[u8], entry: &CapacityEntry) -> Vec<u8> {
    debug_assert_eq!(data.len(), entry.data_codewords);

    let encoder = ReedSolomonEncoder::new(entry.ecc_per_block);
    let mut blocks: Vec<&[u8]> = Vec::with_capacity(entry.num_blocks);
    let mut ecc_blocks: Vec<Vec<u8>> = Vec::with_capacity(entry.num_blocks);

    let mut offset = 0;
    for len in entry.block_data_lengths() {
        let block = &data[offset..offset + len];
        blocks.push(block);
        ecc_blocks.push(encoder.remainder(block));
        offset += len;
    }

    let mut result = Vec::with_capacity(entry.total_codewords);
    let max_data_len = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..max_data_len {
        for block in &blocks {
            // Short blocks run out one codeword early; skip the hole.
            if let Some(&cw) = block.get(i) {
                result.push(cw);
            }
        }
    }
    for i in 0..entry.ecc_per_block {
        for ecc in &ecc_blocks {
            result.push(ecc[i]);
        }
    }

    debug_assert_eq!(result.len(), entry.total_codewords);
    result
}
