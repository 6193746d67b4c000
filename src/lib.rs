//! qrforge - QR code symbol encoder
//!
//! A pure Rust ISO/IEC 18004 QR code generator. Builds the complete
//! symbol — mode analysis, Reed-Solomon error correction, version
//! auto-fitting, pattern placement and mask selection — and hands the
//! finished boolean matrix to any of the bundled renderers (raster, SVG,
//! terminal) or to your own.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, placement, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, ECLevel, MaskPattern)
pub mod models;
/// Renderers consuming finished symbols
pub mod render;

pub use encoder::qr_encoder::{EncodeOptions, QrEncoder};
pub use encoder::segment::{Mode, Segment};
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};
pub use render::{AsciiRenderer, ImageRenderer, Render, SvgRenderer};

/// Encode text into a symbol with auto-fitted version and default options
///
/// # Example
/// ```
/// let qr = qrforge::encode_text("HTTPS://EXAMPLE.COM", qrforge::ECLevel::M).unwrap();
/// assert!(qr.size() >= 21);
/// ```
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QrCode, QrError> {
    let options = EncodeOptions {
        ec_level,
        ..Default::default()
    };
    let mut encoder = QrEncoder::new(options)?;
    encoder.add_text(text);
    encoder.build()
}

/// Encode raw bytes into a symbol with auto-fitted version and default
/// options
pub fn encode_bytes(data: &[u8], ec_level: ECLevel) -> Result<QrCode, QrError> {
    let options = EncodeOptions {
        ec_level,
        ..Default::default()
    };
    let mut encoder = QrEncoder::new(options)?;
    encoder.add_bytes(data);
    encoder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text_numeric() {
        let qr = encode_text("12345", ECLevel::M).unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn test_encode_bytes() {
        let qr = encode_bytes(b"\x00\x01\x02binary", ECLevel::L).unwrap();
        assert_eq!(qr.ec_level(), ECLevel::L);
    }

    #[test]
    fn test_encode_deterministic() {
        let a = encode_text("DETERMINISM", ECLevel::Q).unwrap();
        let b = encode_text("DETERMINISM", ECLevel::Q).unwrap();
        assert_eq!(a, b);
    }
}
