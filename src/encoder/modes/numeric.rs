use crate::encoder::bitstream::BitBuffer;

/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Pack ASCII digits into the buffer. Callers validate the payload
    /// first; a non-digit byte here is a logic error.
    pub fn encode(data: &[u8], buf: &mut BitBuffer) {
        for group in data.chunks(3) {
            let mut value: u32 = 0;
            for &b in group {
                debug_assert!(b.is_ascii_digit());
                value = value * 10 + (b - b'0') as u32;
            }
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buf.push_bits(value, bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_encode_standard_example() {
        // "01234567" from the ISO example: 012 -> 0000001100,
        // 345 -> 0101011001, 67 -> 1000011
        let mut buf = BitBuffer::new();
        NumericEncoder::encode(b"01234567", &mut buf);
        assert_eq!(buf.len(), 27);
        let expected = "000000110001010110011000011";
        for (i, c) in expected.chars().enumerate() {
            assert_eq!(buf.bit(i), c == '1', "bit {}", i);
        }
    }

    #[test]
    fn test_numeric_remainders() {
        let mut buf = BitBuffer::new();
        NumericEncoder::encode(b"7", &mut buf);
        assert_eq!(buf.len(), 4);

        let mut buf = BitBuffer::new();
        NumericEncoder::encode(b"42", &mut buf);
        assert_eq!(buf.len(), 7);

        let mut buf = BitBuffer::new();
        NumericEncoder::encode(b"12345", &mut buf);
        assert_eq!(buf.len(), 17);
    }
}
