use crate::encoder::bitstream::BitBuffer;

/// Kanji mode encoder (Mode 1000)
/// Each Shift-JIS double-byte character packs into 13 bits after the
/// standard offset transform.
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// True if the 16-bit Shift-JIS value falls in an encodable range
    pub fn is_encodable(value: u16) -> bool {
        (0x8140..=0x9FFC).contains(&value) || (0xE040..=0xEBBF).contains(&value)
    }

    /// Pack Shift-JIS double-byte pairs into the buffer. Callers validate
    /// the payload first; an out-of-range pair here is a logic error.
    pub fn encode(data: &[u8], buf: &mut BitBuffer) {
        debug_assert!(data.len() % 2 == 0);
        for pair in data.chunks_exact(2) {
            let value = u16::from_be_bytes([pair[0], pair[1]]);
            debug_assert!(Self::is_encodable(value));
            let offset = if value < 0xE040 {
                value.wrapping_sub(0x8140)
            } else {
                value.wrapping_sub(0xC140)
            };
            let packed = (offset >> 8) as u32 * 0xC0 + (offset & 0xFF) as u32;
            buf.push_bits(packed, 13);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_encode_standard_example() {
        // Shift-JIS 0x935F from the ISO example packs to 0b0110110011111
        let mut buf = BitBuffer::new();
        KanjiEncoder::encode(&[0x93, 0x5F], &mut buf);
        assert_eq!(buf.len(), 13);
        let expected = "0110110011111";
        for (i, c) in expected.chars().enumerate() {
            assert_eq!(buf.bit(i), c == '1', "bit {}", i);
        }
    }

    #[test]
    fn test_kanji_encode_upper_range() {
        // Shift-JIS 0xE4AA from the ISO example packs to 0b1101010101010
        let mut buf = BitBuffer::new();
        KanjiEncoder::encode(&[0xE4, 0xAA], &mut buf);
        let expected = "1101010101010";
        for (i, c) in expected.chars().enumerate() {
            assert_eq!(buf.bit(i), c == '1', "bit {}", i);
        }
    }

    #[test]
    fn test_encodable_ranges() {
        assert!(KanjiEncoder::is_encodable(0x8140));
        assert!(KanjiEncoder::is_encodable(0x9FFC));
        assert!(KanjiEncoder::is_encodable(0xE040));
        assert!(KanjiEncoder::is_encodable(0xEBBF));
        assert!(!KanjiEncoder::is_encodable(0x0041));
        assert!(!KanjiEncoder::is_encodable(0xA000));
        assert!(!KanjiEncoder::is_encodable(0xEC00));
    }
}
