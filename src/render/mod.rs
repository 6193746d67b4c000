//! Renderers for finished symbols.
//!
//! Every renderer consumes a [`QrCode`](crate::QrCode) through its
//! accessors only — module colors, size and the quiet-zone width — and
//! never recomputes masking or error correction. The encoder has no
//! dependency back into any renderer; callers pick a variant and hand it
//! the finished code.

/// Terminal output with block characters
pub mod ascii;
/// Raster output via the `image` crate
pub mod raster;
/// Vector output as SVG markup
pub mod svg;

pub use ascii::AsciiRenderer;
pub use raster::ImageRenderer;
pub use svg::SvgRenderer;

use crate::models::QrCode;

/// A renderer: consume a finished matrix plus metadata, produce an
/// encoded output.
pub trait Render {
    /// Rendered artifact (image buffer, markup string, ...)
    type Output;

    /// Render the symbol
    fn render(&self, qr: &QrCode) -> Self::Output;
}

/// Quiet-zone width for a symbol: the renderer's own setting if given,
/// otherwise the width requested at build time, clamped to the standard
/// minimum of 4.
pub(crate) fn effective_border(qr: &QrCode, override_border: Option<u32>) -> u32 {
    override_border.unwrap_or_else(|| qr.border()).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::qr_encoder::{EncodeOptions, QrEncoder};

    #[test]
    fn test_effective_border_clamped() {
        let options = EncodeOptions {
            border: 1,
            ..Default::default()
        };
        let mut enc = QrEncoder::new(options).unwrap();
        enc.add_text("BORDER");
        let qr = enc.build().unwrap();
        assert_eq!(effective_border(&qr, None), 4);
        assert_eq!(effective_border(&qr, Some(6)), 6);
        assert_eq!(effective_border(&qr, Some(0)), 4);
    }
}
