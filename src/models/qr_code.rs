use super::BitMatrix;
use crate::error::QrError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol, 21x21 modules
    pub const MIN: Version = Version(1);
    /// Largest symbol, 177x177 modules
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting values outside 1-40
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height), `4 * version + 17`
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Get error correction level from format info bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// 2-bit indicator written into format information
    pub fn format_bits(&self) -> u16 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Row index into the capacity tables
    pub(crate) fn table_index(&self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in ascending id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// Pattern id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (row i, column j) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A finished, immutable QR code symbol.
///
/// Produced by [`crate::QrEncoder::build`]; renderers read modules and
/// metadata through the accessors and never re-run masking or error
/// correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    modules: BitMatrix,
    size: usize,
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    border: u32,
}

impl QrCode {
    pub(crate) fn new(
        modules: BitMatrix,
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        border: u32,
    ) -> Self {
        let size = version.size();
        Self {
            modules,
            size,
            version,
            ec_level,
            mask,
            border,
        }
    }

    /// Module color at (x, y): true = dark. Coordinates outside the symbol
    /// read as light, so renderers can iterate across the quiet zone.
    pub fn module(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.modules.get(x as usize, y as usize)
    }

    /// Symbol side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Committed version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Committed error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Committed mask pattern
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Quiet-zone width requested at build time, in modules
    pub fn border(&self) -> u32 {
        self.border
    }
}
