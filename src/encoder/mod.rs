//! QR code symbol encoding.
//!
//! This module contains the full encoding pipeline:
//! - Mode analysis and bit-stream construction (segments, modes, padding)
//! - Error correction (Reed-Solomon over GF(256), BCH for format/version)
//! - Version auto-fitting against the capacity tables
//! - Function pattern placement, data placement and mask selection

/// Append-only MSB-first bit buffer
pub mod bitstream;
/// Format and version information (BCH-protected fields)
pub mod format_info;
/// Function patterns, reservation mask and the blank-template cache
pub mod function_patterns;
/// GF(256) log/exp tables and arithmetic
pub mod galois;
/// Candidate masks, penalty scoring and selection
pub mod masking;
/// Per-mode payload packing (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Zig-zag codeword placement
pub mod placement;
/// The encoder front end: options and build pipeline
pub mod qr_encoder;
/// Reed-Solomon ECC generation and block interleaving
pub mod reed_solomon;
/// Segments, modes and run classification
pub mod segment;
/// QR specification tables (codewords, ECC, blocks)
pub mod tables;
/// Version validation and auto-fit
pub mod version_fit;
