//! Error types for the encoder.
//!
//! Every failure the engine can report maps to caller input: data that does
//! not fit, an out-of-range version, or a character a forced mode cannot
//! represent. Internal geometry defects are invariant violations and panic
//! instead of surfacing here.

use crate::encoder::segment::Mode;
use crate::models::ECLevel;
use thiserror::Error;

/// Errors produced while configuring or building a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// The bit stream does not fit the version/EC combination. For auto-fit
    /// builds the reported version is 40, the last one tried.
    #[error(
        "data overflow: {bits} bits exceed the {capacity_bits}-bit capacity of version {version} at EC level {ec_level:?}"
    )]
    DataOverflow {
        /// Version the stream was checked against
        version: u8,
        /// Requested error correction level
        ec_level: ECLevel,
        /// Encoded stream length before padding
        bits: usize,
        /// Data-codeword capacity of the (version, EC level) pair in bits
        capacity_bits: usize,
    },

    /// Version outside 1-40, rejected at construction time
    #[error("invalid version {0}, must be 1-40")]
    InvalidVersion(u8),

    /// A caller-forced mode cannot represent a byte of the named segment
    #[error("segment {segment}: byte {byte:#04x} is not representable in {mode:?} mode")]
    InvalidCharacter {
        /// Mode the segment was forced into
        mode: Mode,
        /// Index of the offending segment in insertion order
        segment: usize,
        /// First byte the mode cannot encode
        byte: u8,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrError>;
