use crate::encoder::bitstream::BitBuffer;
use crate::encoder::modes::{
    AlphanumericEncoder, ByteEncoder, KanjiEncoder, NumericEncoder, alphanumeric,
};
use crate::error::QrError;
use crate::models::Version;

/// Encoding mode of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// The fixed 45-symbol table (digits, upper-case letters, ` $%*+-./:`)
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
    /// Shift-JIS double-byte characters
    Kanji,
}

impl Mode {
    /// 4-bit mode indicator written ahead of every segment
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count indicator at this version.
    /// The width steps up at versions 10 and 27.
    pub fn count_bits(&self, version: Version) -> usize {
        let range = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][range],
            Mode::Alphanumeric => [9, 11, 13][range],
            Mode::Byte => [8, 16, 16][range],
            Mode::Kanji => [8, 10, 12][range],
        }
    }
}

/// One run of input data with a committed mode.
///
/// Immutable once appended to the encoder; segments are emitted into the
/// bit stream in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    data: Vec<u8>,
}

impl Segment {
    /// Create a segment with an explicit mode. Validity of the payload for
    /// the mode is checked at build time, not here.
    pub fn new(mode: Mode, data: Vec<u8>) -> Self {
        Self { mode, data }
    }

    /// Committed mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Raw payload bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Character count as written into the count indicator. Kanji counts
    /// double-byte characters, every other mode counts bytes.
    pub fn char_count(&self) -> usize {
        match self.mode {
            Mode::Kanji => self.data.len() / 2,
            _ => self.data.len(),
        }
    }

    /// Packed payload length in bits, excluding mode and count indicators
    pub fn payload_bits(&self) -> usize {
        let n = self.data.len();
        match self.mode {
            Mode::Numeric => (n / 3) * 10 + [0, 4, 7][n % 3],
            Mode::Alphanumeric => (n / 2) * 11 + (n % 2) * 6,
            Mode::Byte => n * 8,
            Mode::Kanji => (n / 2) * 13,
        }
    }

    /// Full encoded length in bits at a version: indicator + count + payload
    pub fn total_bits(&self, version: Version) -> usize {
        4 + self.mode.count_bits(version) + self.payload_bits()
    }

    /// Check every byte against the committed mode. `index` is the
    /// segment's position in insertion order, reported on failure.
    pub fn validate(&self, index: usize) -> Result<(), QrError> {
        let invalid = |byte| QrError::InvalidCharacter {
            mode: self.mode,
            segment: index,
            byte,
        };
        match self.mode {
            Mode::Numeric => {
                if let Some(&b) = self.data.iter().find(|b| !b.is_ascii_digit()) {
                    return Err(invalid(b));
                }
            }
            Mode::Alphanumeric => {
                if let Some(&b) = self
                    .data
                    .iter()
                    .find(|&&b| alphanumeric::char_index(b).is_none())
                {
                    return Err(invalid(b));
                }
            }
            Mode::Byte => {}
            Mode::Kanji => {
                if self.data.len() % 2 != 0 {
                    return Err(invalid(self.data[self.data.len() - 1]));
                }
                for pair in self.data.chunks_exact(2) {
                    let value = u16::from_be_bytes([pair[0], pair[1]]);
                    if !KanjiEncoder::is_encodable(value) {
                        return Err(invalid(pair[0]));
                    }
                }
            }
        }
        Ok(())
    }

    /// Emit mode indicator, count indicator and packed payload.
    /// The payload must already be validated.
    pub(crate) fn write(&self, version: Version, buf: &mut BitBuffer) {
        buf.push_bits(self.mode.indicator(), 4);
        buf.push_bits(self.char_count() as u32, self.mode.count_bits(version));
        match self.mode {
            Mode::Numeric => NumericEncoder::encode(&self.data, buf),
            Mode::Alphanumeric => AlphanumericEncoder::encode(&self.data, buf),
            Mode::Byte => ByteEncoder::encode(&self.data, buf),
            Mode::Kanji => KanjiEncoder::encode(&self.data, buf),
        }
    }
}

/// Split text into segments run-by-run: digit runs become Numeric,
/// alphabet runs become Alphanumeric, everything else Byte. Kanji is never
/// selected automatically; callers request it through [`Segment::new`].
pub fn make_segments(data: &[u8]) -> Vec<Segment> {
    fn classify(b: u8) -> Mode {
        if b.is_ascii_digit() {
            Mode::Numeric
        } else if alphanumeric::char_index(b).is_some() {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    let mut segments = Vec::new();
    let mut start = 0;
    while start < data.len() {
        let mode = classify(data[start]);
        let mut end = start + 1;
        while end < data.len() && classify(data[end]) == mode {
            end += 1;
        }
        segments.push(Segment::new(mode, data[start..end].to_vec()));
        start = end;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_count_bits_thresholds() {
        assert_eq!(Mode::Numeric.count_bits(v(9)), 10);
        assert_eq!(Mode::Numeric.count_bits(v(10)), 12);
        assert_eq!(Mode::Numeric.count_bits(v(26)), 12);
        assert_eq!(Mode::Numeric.count_bits(v(27)), 14);
        assert_eq!(Mode::Byte.count_bits(v(1)), 8);
        assert_eq!(Mode::Byte.count_bits(v(10)), 16);
        assert_eq!(Mode::Kanji.count_bits(v(40)), 12);
    }

    #[test]
    fn test_total_bits_numeric() {
        // "12345" at version 1: 4 + 10 + (10 + 7) = 31 bits
        let seg = Segment::new(Mode::Numeric, b"12345".to_vec());
        assert_eq!(seg.total_bits(v(1)), 31);
    }

    #[test]
    fn test_make_segments_runs() {
        let segments = make_segments(b"ABC123\x01\x02");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].mode(), Mode::Alphanumeric);
        assert_eq!(segments[0].data(), b"ABC");
        assert_eq!(segments[1].mode(), Mode::Numeric);
        assert_eq!(segments[1].data(), b"123");
        assert_eq!(segments[2].mode(), Mode::Byte);
    }

    #[test]
    fn test_make_segments_lowercase_is_byte() {
        let segments = make_segments(b"hello");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].mode(), Mode::Byte);
    }

    #[test]
    fn test_validate_numeric_rejects_letters() {
        let seg = Segment::new(Mode::Numeric, b"12a4".to_vec());
        let err = seg.validate(3).unwrap_err();
        assert_eq!(
            err,
            QrError::InvalidCharacter {
                mode: Mode::Numeric,
                segment: 3,
                byte: b'a',
            }
        );
    }

    #[test]
    fn test_validate_kanji() {
        let ok = Segment::new(Mode::Kanji, vec![0x93, 0x5F, 0xE4, 0xAA]);
        assert!(ok.validate(0).is_ok());

        let odd = Segment::new(Mode::Kanji, vec![0x93]);
        assert!(odd.validate(0).is_err());

        let out_of_range = Segment::new(Mode::Kanji, vec![0x00, 0x41]);
        assert!(out_of_range.validate(0).is_err());
    }

    #[test]
    fn test_write_char_count_kanji() {
        let seg = Segment::new(Mode::Kanji, vec![0x93, 0x5F, 0xE4, 0xAA]);
        assert_eq!(seg.char_count(), 2);
        let mut buf = BitBuffer::new();
        seg.write(v(1), &mut buf);
        // 4 indicator + 8 count + 2 * 13 payload
        assert_eq!(buf.len(), 38);
    }
}
