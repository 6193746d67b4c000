use crate::encoder::format_info;
use crate::models::{BitMatrix, Version};

/// Blank symbol template for one version: function patterns drawn, data
/// area untouched, format strips reserved but not yet written.
///
/// `reserved` marks function modules — true means the module belongs to a
/// finder, separator, timing, alignment, format, version or dark-module
/// area and is off-limits to data placement and masking.
#[derive(Debug, Clone)]
pub struct Template {
    /// Module colors (function patterns dark/light, data area light)
    pub modules: BitMatrix,
    /// Function-module reservation mask
    pub reserved: BitMatrix,
    version: Version,
}

impl Template {
    /// Draw all function patterns for a version.
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut template = Self {
            modules: BitMatrix::new(size, size),
            reserved: BitMatrix::new(size, size),
            version,
        };

        template.draw_timing_patterns();
        template.draw_finder_patterns();
        template.draw_alignment_patterns();
        template.reserve_format_areas();
        if version.number() >= 7 {
            format_info::draw_version_info(&mut template.modules, version);
            template.reserve_version_areas();
        }
        // Dark module, always present below the bottom-left format strip
        template.set_function(8, size - 8, true);

        template
    }

    /// Template version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Symbol side in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Number of modules available for data codewords
    pub fn data_module_count(&self) -> usize {
        let size = self.size();
        size * size - self.reserved.count_ones()
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.reserved.set(x, y, true);
    }

    fn draw_timing_patterns(&mut self) {
        // Row 6 and column 6, alternating starting dark. The ends are
        // overdrawn by the finder areas afterwards.
        for i in 0..self.size() {
            let dark = i % 2 == 0;
            self.set_function(6, i, dark);
            self.set_function(i, 6, dark);
        }
    }

    fn draw_finder_patterns(&mut self) {
        let size = self.size();
        for (cx, cy) in [(3, 3), (size as i32 - 4, 3), (3, size as i32 - 4)] {
            // 9x9 area around the center: dark ring at distance 3 and the
            // 3x3 core, light ring at distance 2 and the separator at 4.
            for dy in -4..=4i32 {
                for dx in -4..=4i32 {
                    let (x, y) = (cx + dx, cy + dy);
                    if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
                        continue;
                    }
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let size = self.size();
        let centers = alignment_pattern_positions(self.version.number());
        let last = centers.len().saturating_sub(1);
        for (i, &cy) in centers.iter().enumerate() {
            for (j, &cx) in centers.iter().enumerate() {
                // Skip the three corners occupied by finder patterns
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                // 5x5: dark ring, light ring, dark center
                for dy in -2..=2i32 {
                    for dx in -2..=2i32 {
                        let x = (cx as i32 + dx) as usize;
                        let y = (cy as i32 + dy) as usize;
                        debug_assert!(x < size && y < size);
                        self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
                    }
                }
            }
        }
    }

    fn reserve_format_areas(&mut self) {
        let size = self.size();
        // Strips adjacent to the top-left finder, skipping the timing
        // row/column which is already reserved
        for i in 0..9 {
            self.reserved.set(8, i, true);
            self.reserved.set(i, 8, true);
        }
        // Mirrored copies under the top-right and left of the bottom-left
        // finders
        for i in 0..8 {
            self.reserved.set(size - 1 - i, 8, true);
            self.reserved.set(8, size - 1 - i, true);
        }
    }

    fn reserve_version_areas(&mut self) {
        let size = self.size();
        for dy in 0..6 {
            for dx in 0..3 {
                self.reserved.set(size - 11 + dx, dy, true);
                self.reserved.set(dy, size - 11 + dx, true);
            }
        }
    }
}

/// Alignment pattern center coordinates for a version. Empty for
/// version 1; otherwise the standard's evenly-stepped list anchored at 6
/// and `size - 7`.
pub fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version == 1 {
        return Vec::new();
    }
    let num_align = (version / 7 + 2) as usize;
    let size = 17 + 4 * version as usize;
    let step = (version as usize * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    // Centers step evenly back from the anchor at size - 7; the gap down
    // to the first anchor at 6 absorbs any remainder.
    let mut positions = vec![6usize];
    for k in (0..num_align - 1).rev() {
        positions.push(size - 7 - k * step);
    }
    positions
}

/// Read-only store of blank templates, shareable across builds.
///
/// Building a template walks the whole grid, so callers doing repeated
/// builds can preload the versions they use and hand the cache to every
/// encoder. Encoders clone a private working copy; the cached instance is
/// never written to.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: Vec<Template>,
}

impl TemplateCache {
    /// Build templates for an inclusive version range
    pub fn preload(first: Version, last: Version) -> Self {
        let templates = (first.number()..=last.number())
            .filter_map(|n| Version::new(n).ok())
            .map(Template::new)
            .collect();
        Self { templates }
    }

    /// Look up a cached template
    pub fn get(&self, version: Version) -> Option<&Template> {
        self.templates.iter().find(|t| t.version() == version)
    }
}
