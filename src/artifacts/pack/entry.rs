//! Entry header of a `.pack` file
//!
//! Every entry starts with a variable-length header. The first byte holds a
//! continuation bit, a 3-bit type and the low 4 bits of the inflated size;
//! each following byte adds 7 more bits of size:
//!
//! ```text
//! 1ttt ssss  1sss ssss  0sss ssss
//! ```
//!
//! Delta entries are followed by the location of their base:
//! - `OFS_DELTA` (6): a distance back from the entry's own offset
//! - `REF_DELTA` (7): the raw 20-byte ID of the base object

use crate::artifacts::objects::object_type::ObjectType;
use byteorder::ReadBytesExt;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackObjectKind {
    /// Object stored in full
    Whole(ObjectType),
    OfsDelta,
    RefDelta,
}

impl TryFrom<u8> for PackObjectKind {
    type Error = anyhow::Error;

    fn try_from(code: u8) -> anyhow::Result<Self> {
        match code {
            1 => Ok(PackObjectKind::Whole(ObjectType::Commit)),
            2 => Ok(PackObjectKind::Whole(ObjectType::Tree)),
            3 => Ok(PackObjectKind::Whole(ObjectType::Blob)),
            4 => Ok(PackObjectKind::Whole(ObjectType::Tag)),
            6 => Ok(PackObjectKind::OfsDelta),
            7 => Ok(PackObjectKind::RefDelta),
            _ => Err(anyhow::anyhow!("Invalid pack entry type: {code}")),
        }
    }
}

/// Read the type and inflated size of the entry under `reader`
pub fn read_entry_header(reader: &mut impl Read) -> anyhow::Result<(PackObjectKind, u64)> {
    let mut byte = reader.read_u8()?;
    let kind = PackObjectKind::try_from((byte >> 4) & 0x07)?;

    let mut size = u64::from(byte & 0x0f);
    let mut shift = 4;
    while byte & 0x80 != 0 {
        if shift > 57 {
            anyhow::bail!("Invalid pack entry: size does not fit in 64 bits");
        }
        byte = reader.read_u8()?;
        size |= u64::from(byte & 0x7f) << shift;
        shift += 7;
    }

    Ok((kind, size))
}

/// Read how far before an `OFS_DELTA` entry its base starts
///
/// Each continuation adds one before shifting, so that every distance has a
/// single encoding.
pub fn read_base_distance(reader: &mut impl Read) -> anyhow::Result<u64> {
    let mut byte = reader.read_u8()?;
    let mut distance = u64::from(byte & 0x7f);

    while byte & 0x80 != 0 {
        byte = reader.read_u8()?;
        distance = distance
            .checked_add(1)
            .and_then(|d| d.checked_mul(1 << 7))
            .ok_or_else(|| anyhow::anyhow!("Invalid pack entry: base distance overflows"))?
            | u64::from(byte & 0x7f);
    }

    Ok(distance)
}
