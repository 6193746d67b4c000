//! Core data structures shared by the encoder and renderers.

/// Packed bit matrix used for module grids and reservation masks
pub mod matrix;
/// Symbol types: version, error correction level, mask pattern, finished code
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
