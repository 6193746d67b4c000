use std::sync::Arc;

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::function_patterns::{Template, TemplateCache};
use crate::encoder::reed_solomon::add_ecc_and_interleave;
use crate::encoder::segment::{Segment, make_segments};
use crate::encoder::{masking, placement, tables, version_fit};
use crate::error::Result;
use crate::models::{ECLevel, QrCode, Version};

// Pad codewords alternate until the data capacity is full
const PAD_CODEWORDS: [u32; 2] = [0xEC, 0x11];

/// Build configuration.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Fixed version, or None to auto-fit the smallest that holds the data
    pub version: Option<u8>,
    /// Error correction level (default M)
    pub ec_level: ECLevel,
    /// Quiet-zone width in modules carried to renderers (default 4, the
    /// standard minimum)
    pub border: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            version: None,
            ec_level: ECLevel::M,
            border: 4,
        }
    }
}

/// Symbol encoder: accumulates segments, then builds finished symbols.
///
/// Segments are appended in order and emitted in order. `build` is
/// side-effect free on the encoder, so one configured instance can
/// produce any number of independent symbols; `clear` starts a new
/// payload without touching previously built codes.
#[derive(Debug)]
pub struct QrEncoder {
    options: EncodeOptions,
    fixed_version: Option<Version>,
    segments: Vec<Segment>,
    templates: Option<Arc<TemplateCache>>,
}

impl QrEncoder {
    /// Create an encoder. An out-of-range fixed version is rejected here,
    /// before any data is accepted.
    pub fn new(options: EncodeOptions) -> Result<Self> {
        let fixed_version = options.version.map(Version::new).transpose()?;
        Ok(Self {
            options,
            fixed_version,
            segments: Vec::new(),
            templates: None,
        })
    }

    /// Create an encoder that takes blank symbol templates from a shared
    /// cache instead of rebuilding them per call. The cache is read-only;
    /// every build works on a private clone.
    pub fn with_templates(options: EncodeOptions, templates: Arc<TemplateCache>) -> Result<Self> {
        let mut encoder = Self::new(options)?;
        encoder.templates = Some(templates);
        Ok(encoder)
    }

    /// Append text, classified run-by-run into Numeric, Alphanumeric and
    /// Byte segments
    pub fn add_text(&mut self, text: &str) {
        self.segments.extend(make_segments(text.as_bytes()));
    }

    /// Append raw bytes as a single Byte-mode segment
    pub fn add_bytes(&mut self, data: &[u8]) {
        self.segments
            .push(Segment::new(crate::encoder::segment::Mode::Byte, data.to_vec()));
    }

    /// Append a segment with a caller-forced mode. The payload is
    /// validated against the mode at build time.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Discard all accumulated segments
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Segments accumulated so far, in insertion order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Encode the accumulated segments into a finished symbol.
    pub fn build(&self) -> Result<QrCode> {
        for (index, segment) in self.segments.iter().enumerate() {
            segment.validate(index)?;
        }

        let ec_level = self.options.ec_level;
        let version = version_fit::select_version(&self.segments, ec_level, self.fixed_version)?;
        let entry = tables::capacity(version, ec_level);

        let data = self.build_data_codewords(version, &entry);
        let codewords = add_ecc_and_interleave(&data, &entry);

        let mut template = self.template_for(version);
        placement::place_codewords(&mut template.modules, &template.reserved, &codewords);

        let (mask, modules) = masking::select_mask(&template.modules, &template.reserved, ec_level);
        Ok(QrCode::new(modules, version, ec_level, mask, self.options.border))
    }

    /// Emit segments, terminator and padding into the full data-codeword
    /// payload for the chosen version.
    fn build_data_codewords(&self, version: Version, entry: &tables::CapacityEntry) -> Vec<u8> {
        let capacity_bits = entry.data_codewords * 8;
        let mut buf = BitBuffer::new();
        for segment in &self.segments {
            segment.write(version, &mut buf);
        }

        // Terminator: up to four zero bits, truncated at exact capacity
        let terminator = (capacity_bits - buf.len()).min(4);
        buf.push_bits(0, terminator);
        // Zero bits up to the next codeword boundary
        let boundary = (8 - buf.len() % 8) % 8;
        buf.push_bits(0, boundary);
        // Alternating pad codewords to the full data capacity
        let mut pad_index = 0;
        while buf.len() < capacity_bits {
            buf.push_bits(PAD_CODEWORDS[pad_index % 2], 8);
            pad_index += 1;
        }

        debug_assert_eq!(buf.len(), capacity_bits);
        buf.into_bytes()
    }

    fn template_for(&self, version: Version) -> Template {
        if let Some(cache) = &self.templates {
            if let Some(template) = cache.get(version) {
                return template.clone();
            }
        }
        Template::new(version)
    }
}
