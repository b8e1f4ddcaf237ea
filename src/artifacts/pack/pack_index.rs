//! Pack index, version 2
//!
//! ## Format
//!
//! All integers are big-endian (network order).
//!
//! ```text
//! \377tOc | version (4 bytes, = 2)
//! fanout:        256 x u32, entry i counts the objects whose first byte <= i
//! names:         N x 20-byte object IDs, sorted
//! crc32:         N x u32
//! offsets:       N x u32, MSB set = index into the large offset table
//! large offsets: M x u64
//! trailer:       pack checksum, index checksum (20 bytes each)
//! ```
//!
//! Version 1 indexes (no magic) are only written by very old git and are not
//! supported.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::pack::RAW_OBJECT_ID_LENGTH;
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use std::cmp::Ordering;

pub const IDX_SIGNATURE: [u8; 4] = [0xff, b't', b'O', b'c'];
pub const IDX_VERSION: u32 = 2;

const FANOUT_START: usize = 8;
const FANOUT_ENTRIES: usize = 256;
const NAMES_START: usize = FANOUT_START + FANOUT_ENTRIES * 4;
const TRAILER_SIZE: usize = 2 * RAW_OBJECT_ID_LENGTH;
const LARGE_OFFSET_FLAG: u32 = 0x8000_0000;

#[derive(Debug, Clone)]
pub struct PackIndex {
    data: Bytes,
    count: usize,
}

impl PackIndex {
    pub fn parse(data: Bytes) -> anyhow::Result<Self> {
        if data.len() < NAMES_START + TRAILER_SIZE {
            anyhow::bail!("Pack index is too short: {} bytes", data.len());
        }
        if data[..4] != IDX_SIGNATURE {
            anyhow::bail!("Unsupported pack index: missing signature");
        }
        let version = NetworkEndian::read_u32(&data[4..8]);
        if version != IDX_VERSION {
            anyhow::bail!("Unsupported pack index version: {version}");
        }

        let mut previous = 0;
        for bucket in 0..FANOUT_ENTRIES {
            let cumulative = Self::fanout_in(&data, bucket);
            if cumulative < previous {
                anyhow::bail!("Corrupt pack index: fanout table is not sorted");
            }
            previous = cumulative;
        }

        let count = previous as usize;
        // names + crc32 + offsets, large offsets come on top
        let tables_end = count
            .checked_mul(RAW_OBJECT_ID_LENGTH + 8)
            .and_then(|size| size.checked_add(NAMES_START + TRAILER_SIZE))
            .ok_or_else(|| anyhow::anyhow!("Corrupt pack index: object count overflows"))?;
        if data.len() < tables_end {
            anyhow::bail!(
                "Corrupt pack index: {} objects do not fit in {} bytes",
                count,
                data.len()
            );
        }

        Ok(PackIndex { data, count })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Offset of the object in the `.pack`, if this index lists it
    pub fn lookup(&self, object_id: &ObjectId) -> anyhow::Result<Option<u64>> {
        let mut key = Vec::with_capacity(RAW_OBJECT_ID_LENGTH);
        object_id.write_h40_to(&mut key)?;

        let first = key[0] as usize;
        let mut low = match first {
            0 => 0,
            _ => Self::fanout_in(&self.data, first - 1) as usize,
        };
        let mut high = Self::fanout_in(&self.data, first) as usize;

        while low < high {
            let middle = low + (high - low) / 2;
            match self.name_at(middle).cmp(key.as_slice()) {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return self.offset_at(middle).map(Some),
            }
        }

        Ok(None)
    }

    fn fanout_in(data: &[u8], bucket: usize) -> u32 {
        let start = FANOUT_START + bucket * 4;
        NetworkEndian::read_u32(&data[start..start + 4])
    }

    fn name_at(&self, position: usize) -> &[u8] {
        let start = NAMES_START + position * RAW_OBJECT_ID_LENGTH;
        &self.data[start..start + RAW_OBJECT_ID_LENGTH]
    }

    fn offset_at(&self, position: usize) -> anyhow::Result<u64> {
        let offsets_start = NAMES_START + self.count * (RAW_OBJECT_ID_LENGTH + 4);
        let start = offsets_start + position * 4;
        let offset = NetworkEndian::read_u32(&self.data[start..start + 4]);

        if offset & LARGE_OFFSET_FLAG == 0 {
            return Ok(u64::from(offset));
        }

        let large_start = offsets_start + self.count * 4;
        let start = large_start + (offset & !LARGE_OFFSET_FLAG) as usize * 8;
        if start + 8 > self.data.len() - TRAILER_SIZE {
            anyhow::bail!("Corrupt pack index: large offset {} is out of range", offset);
        }

        Ok(NetworkEndian::read_u64(&self.data[start..start + 8]))
    }
}
