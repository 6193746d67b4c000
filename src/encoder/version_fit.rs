use crate::encoder::segment::Segment;
use crate::encoder::tables;
use crate::error::QrError;
use crate::models::{ECLevel, Version};

/// Total encoded stream length for a segment list at a version.
/// Count indicator widths depend on the version, so this is recomputed
/// per candidate during auto-fit.
pub fn total_bits(segments: &[Segment], version: Version) -> usize {
    segments.iter().map(|s| s.total_bits(version)).sum()
}

/// Pick the version for a build.
///
/// With a fixed version the stream must fit its capacity, otherwise the
/// call fails with a data overflow. With auto-fit, versions are tried in
/// ascending order and the first fit wins; exhausting version 40 is an
/// overflow. Never downgrades the EC level to make data fit.
pub fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    requested: Option<Version>,
) -> Result<Version, QrError> {
    if let Some(version) = requested {
        return check_fit(segments, ec_level, version);
    }

    for number in 1..=40 {
        let version = Version::new(number)?;
        let bits = total_bits(segments, version);
        if bits <= tables::data_bit_capacity(version, ec_level) {
            return Ok(version);
        }
    }
    check_fit(segments, ec_level, Version::MAX)
}

fn check_fit(
    segments: &[Segment],
    ec_level: ECLevel,
    version: Version,
) -> Result<Version, QrError> {
    let bits = total_bits(segments, version);
    let capacity_bits = tables::data_bit_capacity(version, ec_level);
    if bits > capacity_bits {
        Err(QrError::DataOverflow {
            version: version.number(),
            ec_level,
            bits,
            capacity_bits,
        })
    } else {
        Ok(version)
    }
}
