use crate::models::BitMatrix;

/// Write the interleaved codeword stream into the data area.
///
/// Walks column pairs right to left, alternating upward and downward
/// traversal per pair and skipping the vertical timing column and every
/// reserved module. Bits are taken MSB-first from each codeword.
///
/// The module budget is fixed by the symbol geometry: every bit must land
/// in a module and at most 7 remainder modules may stay unfilled (they
/// remain light). Anything else is a capacity-table or geometry defect,
/// so it panics rather than returning an error.
pub fn place_codewords(modules: &mut BitMatrix, reserved: &BitMatrix, data: &[u8]) {
    let size = modules.width();
    let total_bits = data.len() * 8;
    let mut i = 0usize;
    let mut spare = 0usize;

    let mut right = size as i32 - 1;
    while right >= 1 {
        // The vertical timing pattern sits in column 6; the walk shifts
        // one column left past it.
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            let upward = (right + 1) & 2 == 0;
            let y = if upward { size - 1 - vert } else { vert };
            for j in 0..2 {
                let x = (right - j) as usize;
                if reserved.get(x, y) {
                    continue;
                }
                if i < total_bits {
                    let dark = (data[i >> 3] >> (7 - (i & 7))) & 1 != 0;
                    modules.set(x, y, dark);
                    i += 1;
                } else {
                    spare += 1;
                }
            }
        }
        right -= 2;
    }

    assert_eq!(i, total_bits, "codeword stream does not fit the data area");
    assert!(spare < 8, "{spare} data modules left unfilled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::Template;
    use crate::encoder::tables;
    use crate::models::{ECLevel, Version};

    fn placed_template(version: u8, fill: u8) -> (Template, usize) {
        let version = Version::new(version).unwrap();
        let entry = tables::capacity(version, ECLevel::L);
        let data = vec![fill; entry.total_codewords];
        let mut template = Template::new(version);
        place_codewords(&mut template.modules, &template.reserved, &data);
        (template, entry.total_codewords)
    }

    #[test]
    fn test_all_versions_place_cleanly() {
        for v in 1..=40u8 {
            placed_template(v, 0xA5);
        }
    }

    #[test]
    fn test_all_ones_fill_every_data_module() {
        // With 0xFF codewords every data module ends dark except the
        // remainder modules.
        let (template, codewords) = placed_template(2, 0xFF);
        let size = template.size();
        let mut dark_data = 0;
        for y in 0..size {
            for x in 0..size {
                if !template.reserved.get(x, y) && template.modules.get(x, y) {
                    dark_data += 1;
                }
            }
        }
        assert_eq!(dark_data, codewords * 8);
    }

    #[test]
    fn test_first_codeword_lands_bottom_right() {
        // The walk starts at the bottom-right corner moving up
        let (template, _) = placed_template(1, 0x80);
        let size = template.size();
        // First bit of the first codeword is the corner module
        assert!(template.modules.get(size - 1, size - 1));
        // The next seven bits of 0x80 are zero
        assert!(!template.modules.get(size - 2, size - 1));
        assert!(!template.modules.get(size - 1, size - 2));
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_oversized_stream_panics() {
        let version = Version::new(1).unwrap();
        let mut template = Template::new(version);
        let data = vec![0u8; 27]; // one codeword too many for version 1
        place_codewords(&mut template.modules, &template.reserved, &data);
    }
}
