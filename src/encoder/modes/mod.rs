//! Per-mode payload packing.
//!
//! Each encoder turns a validated segment payload into the mode's packed
//! bit representation. Mode indicators and count indicators are written by
//! the segment layer, not here.

/// Alphanumeric packing (2 chars -> 11 bits) and the 45-symbol alphabet
pub mod alphanumeric;
/// Byte packing (8 bits per byte)
pub mod byte;
/// Kanji packing (Shift-JIS double-byte -> 13 bits)
pub mod kanji;
/// Numeric packing (3 digits -> 10 bits)
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use kanji::KanjiEncoder;
pub use numeric::NumericEncoder;
