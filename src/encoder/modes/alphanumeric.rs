use crate::encoder::bitstream::BitBuffer;

/// The 45-symbol alphanumeric alphabet, in table order
pub const CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Table index for a byte, or None if it is outside the alphabet
pub fn char_index(b: u8) -> Option<u32> {
    CHARSET.iter().position(|&c| c == b).map(|i| i as u32)
}

/// Alphanumeric mode encoder (Mode 0010)
/// Pairs of characters = 11 bits (45 * first + second), a lone trailing
/// character = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Pack alphabet characters into the buffer. Callers validate the
    /// payload first; an out-of-alphabet byte here is a logic error.
    pub fn encode(data: &[u8], buf: &mut BitBuffer) {
        for pair in data.chunks(2) {
            let first = char_index(pair[0]).unwrap_or(0);
            debug_assert!(char_index(pair[0]).is_some());
            if pair.len() == 2 {
                let second = char_index(pair[1]).unwrap_or(0);
                debug_assert!(char_index(pair[1]).is_some());
                buf.push_bits(first * 45 + second, 11);
            } else {
                buf.push_bits(first, 6);
            }
        }
    }
}
