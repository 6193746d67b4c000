use crate::encoder::bitstream::BitBuffer;

/// Byte mode encoder (Mode 0100)
/// Eight bits per byte, no transformation
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append every byte verbatim
    pub fn encode(data: &[u8], buf: &mut BitBuffer) {
        for &b in data {
            buf.push_bits(b as u32, 8);
        }
    }
}
