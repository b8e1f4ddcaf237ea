//! A single packfile and its index
//!
//! Entries stored as deltas are rebuilt by walking back to the first entry
//! stored in full, then applying the deltas on the way back up. `OFS_DELTA`
//! bases are always in the same pack. A `REF_DELTA` base is looked up in this
//! pack first, then anywhere in the database.

use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::pack::PACK_SIGNATURE;
use crate::artifacts::pack::delta::apply_delta;
use crate::artifacts::pack::entry::{PackObjectKind, read_base_distance, read_entry_header};
use crate::artifacts::pack::pack_index::PackIndex;
use anyhow::Context;
use byteorder::{NetworkEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Longest chain of deltas followed for a single object
const MAX_DELTA_CHAIN: usize = 4096;

#[derive(Debug)]
pub struct Pack {
    pack_path: PathBuf,
    index: PackIndex,
}

/// Where the rest of an entry comes from
enum EntryBase {
    Whole(ObjectType),
    Offset(u64),
    Object(ObjectId),
}

struct PackEntry {
    base: EntryBase,
    /// Object payload, or the delta to apply to the base
    data: Vec<u8>,
}

impl Pack {
    /// Open the pack described by `index_path` (`pack-<sha>.idx`)
    pub fn open(index_path: &Path) -> anyhow::Result<Self> {
        let index = std::fs::read(index_path)
            .with_context(|| format!("Unable to read pack index {}", index_path.display()))?;
        let index = PackIndex::parse(index.into())
            .with_context(|| format!("Invalid pack index {}", index_path.display()))?;

        let pack_path = index_path.with_extension("pack");
        let mut pack = File::open(&pack_path)
            .with_context(|| format!("Unable to open pack {}", pack_path.display()))?;

        let mut signature = [0; 4];
        pack.read_exact(&mut signature)?;
        if &signature != PACK_SIGNATURE {
            anyhow::bail!("Invalid pack {}: missing signature", pack_path.display());
        }
        let version = pack.read_u32::<NetworkEndian>()?;
        if version != 2 && version != 3 {
            anyhow::bail!(
                "Unsupported pack version {} in {}",
                version,
                pack_path.display()
            );
        }

        Ok(Pack { pack_path, index })
    }

    pub fn object_count(&self) -> usize {
        self.index.len()
    }

    pub fn path(&self) -> &Path {
        &self.pack_path
    }

    /// Type and payload of an object, or `None` if this pack does not hold it
    pub fn read_object(
        &self,
        object_id: &ObjectId,
        database: &Database,
    ) -> anyhow::Result<Option<(ObjectType, Vec<u8>)>> {
        let Some(offset) = self.index.lookup(object_id)? else {
            return Ok(None);
        };

        let object = self.read_at(offset, database).with_context(|| {
            format!("Unable to read {} from {}", object_id, self.pack_path.display())
        })?;

        Ok(Some(object))
    }

    fn read_at(&self, offset: u64, database: &Database) -> anyhow::Result<(ObjectType, Vec<u8>)> {
        let mut reader = BufReader::new(File::open(&self.pack_path)?);
        let mut deltas = Vec::new();
        let mut offset = offset;

        let (object_type, mut payload) = loop {
            if deltas.len() > MAX_DELTA_CHAIN {
                anyhow::bail!("Delta chain is longer than {} entries", MAX_DELTA_CHAIN);
            }

            let entry = Self::read_entry(&mut reader, offset)?;
            match entry.base {
                EntryBase::Whole(object_type) => break (object_type, entry.data),
                EntryBase::Offset(base_offset) => {
                    deltas.push(entry.data);
                    offset = base_offset;
                }
                EntryBase::Object(base_id) => {
                    deltas.push(entry.data);
                    match self.index.lookup(&base_id)? {
                        Some(base_offset) => offset = base_offset,
                        None => break database.load_payload(&base_id)?,
                    }
                }
            }
        };

        for delta in deltas.iter().rev() {
            payload = apply_delta(&payload, delta)?;
        }

        Ok((object_type, payload))
    }

    fn read_entry(reader: &mut BufReader<File>, offset: u64) -> anyhow::Result<PackEntry> {
        reader.seek(SeekFrom::Start(offset))?;
        let (kind, size) = read_entry_header(reader)?;

        let base = match kind {
            PackObjectKind::Whole(object_type) => EntryBase::Whole(object_type),
            PackObjectKind::OfsDelta => {
                let distance = read_base_distance(reader)?;
                match offset.checked_sub(distance) {
                    Some(base_offset) if distance > 0 => EntryBase::Offset(base_offset),
                    _ => anyhow::bail!("Delta at {} points outside the pack", offset),
                }
            }
            PackObjectKind::RefDelta => EntryBase::Object(ObjectId::read_h40_from(reader)?),
        };

        let data = Self::inflate(reader, size)
            .with_context(|| format!("Unable to decompress pack entry at {}", offset))?;

        Ok(PackEntry { base, data })
    }

    fn inflate(reader: &mut impl BufRead, size: u64) -> anyhow::Result<Vec<u8>> {
        let mut data = Vec::new();
        flate2::bufread::ZlibDecoder::new(reader)
            .take(size.saturating_add(1))
            .read_to_end(&mut data)?;

        if data.len() as u64 != size {
            anyhow::bail!("Entry declares {} bytes but holds {}", size, data.len());
        }

        Ok(data)
    }
}
