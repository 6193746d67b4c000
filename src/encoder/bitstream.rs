/// Append-only bit sequence, MSB-first within each byte.
///
/// The encoder builds the whole data stream in one buffer: mode indicators,
/// count indicators, packed payloads, terminator and pad bits, in that
/// order. Finalizing with [`BitBuffer::into_bytes`] zero-pads the last
/// partial byte.
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits appended so far
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// True if no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Append a single bit
    pub fn push_bit(&mut self, bit: bool) {
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - (self.bit_len % 8));
        }
        self.bit_len += 1;
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// The largest field the encoder writes is a 16-bit count indicator,
    /// so `count` never exceeds 19 in practice; anything above 32 is a
    /// caller bug.
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        debug_assert!(count == 32 || value >> count == 0, "value wider than count");
        for i in (0..count).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
    }

    /// Bit at `index`, MSB-first order
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bit_len);
        (self.bytes[index / 8] >> (7 - (index % 8))) & 1 != 0
    }

    /// Finalize into bytes; a trailing partial byte is zero-padded
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
