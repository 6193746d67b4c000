use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Fixed XOR mask applied to the 15 format bits so an all-zero format
/// can never occur in a symbol
pub const FORMAT_MASK: u16 = 0b101010000010010;

// BCH generator polynomials from the standard: x^10+x^8+x^5+x^4+x^2+x+1
// for format info, x^12+x^11+x^10+x^9+x^8+x^5+x^2+1 for version info.
const FORMAT_GENERATOR: u16 = 0x537;
const VERSION_GENERATOR: u32 = 0x1F25;

/// 15-bit format information: 2-bit EC level code + 3-bit mask id,
/// BCH(15,5)-protected, XOR-masked.
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = (ec_level.format_bits() << 3) | mask.id() as u16;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
    }
    ((data << 10) | rem) ^ FORMAT_MASK
}

/// 18-bit version information: 6-bit version number + 12 BCH(18,6) parity
/// bits, unmasked. Only written for versions 7 and up.
pub fn version_bits(version: Version) -> u32 {
    let number = version.number() as u32;
    let mut rem = number;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
    }
    (number << 12) | rem
}

/// Write format information into both reserved strips.
///
/// Called once per mask candidate before scoring, and again for the
/// committed mask; the strips are reserved, so masking never disturbs
/// them.
pub fn draw_format_info(modules: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let bits = format_bits(ec_level, mask);
    let bit = |i: usize| (bits >> i) & 1 != 0;
    let size = modules.width();

    // First copy, wrapped around the top-left finder
    for i in 0..6 {
        modules.set(8, i, bit(i));
    }
    modules.set(8, 7, bit(6));
    modules.set(8, 8, bit(7));
    modules.set(7, 8, bit(8));
    for i in 9..15 {
        modules.set(14 - i, 8, bit(i));
    }

    // Second copy, split between the top-right and bottom-left finders
    for i in 0..8 {
        modules.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        modules.set(8, size - 15 + i, bit(i));
    }
}

/// Write version information into its two 3x6 reserved blocks
/// (version 7 and up).
pub fn draw_version_info(modules: &mut BitMatrix, version: Version) {
    debug_assert!(version.number() >= 7);
    let bits = version_bits(version);
    let size = modules.width();
    for i in 0..18 {
        let dark = (bits >> i) & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        modules.set(a, b, dark);
        modules.set(b, a, dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_known_vectors() {
        // Data 0b00000 (M, mask 0) has a zero BCH remainder, so the
        // output equals the XOR mask itself.
        assert_eq!(format_bits(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        // L, mask 0 is 0x77C4 in the standard's format table
        assert_eq!(format_bits(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
    }

    #[test]
    fn test_format_bits_self_consistent() {
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask in MaskPattern::ALL {
                let bits = format_bits(level, mask);
                let unmasked = bits ^ FORMAT_MASK;
                // Data bits survive in the top five positions
                let data = unmasked >> 10;
                assert_eq!(data >> 3, level.format_bits());
                assert_eq!((data & 0x07) as u8, mask.id());
            }
        }
    }

    #[test]
    fn test_format_codewords_distinct() {
        let mut seen = std::collections::HashSet::new();
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask in MaskPattern::ALL {
                assert!(seen.insert(format_bits(level, mask)));
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_version_bits_known_vector() {
        // Version 7 is 000111110010010100 in the standard's annex
        let v = Version::new(7).unwrap();
        assert_eq!(version_bits(v), 0b000111110010010100);
    }

    #[test]
    fn test_version_bits_top_bits_are_version() {
        for n in 7..=40u8 {
            let v = Version::new(n).unwrap();
            assert_eq!((version_bits(v) >> 12) as u8, n);
        }
    }

    #[test]
    fn test_format_remainder_is_valid_bch() {
        for mask in MaskPattern::ALL {
            let unmasked = format_bits(ECLevel::Q, mask) ^ FORMAT_MASK;
            // A valid codeword divides the generator exactly
            let mut rem = unmasked as u32;
            for _ in 0..5 {
                if rem >> 14 & 1 != 0 {
                    rem ^= (FORMAT_GENERATOR as u32) << 4;
                }
                rem <<= 1;
            }
            assert_eq!((rem >> 5) & 0x3FF, 0, "mask {}", mask.id());
        }
    }
}
