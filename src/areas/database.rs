use crate::areas::pack::Pack;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use anyhow::Context;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How many annotated tags may be stacked on top of each other before peeling gives up
const MAX_PEEL_DEPTH: usize = 16;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    packs: Vec<Pack>,
}

impl Database {
    /// Open the object store, loose objects and every pack under `pack/`
    ///
    /// A pack that cannot be opened is skipped with a warning.
    pub fn new(path: Box<Path>) -> Self {
        let packs = Self::open_packs(&path.join("pack"));
        Database { path, packs }
    }

    /// Load the raw (decompressed) object, header included
    ///
    /// Loose objects are looked up first, then packs.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = if object_path.is_file() {
            self.read_object(object_path)?
        } else {
            self.read_packed_object(object_id)?
        };

        Self::verify(object_id, &object_content)?;

        Ok(object_content)
    }

    /// Type and payload of an object, without its header
    pub(crate) fn load_payload(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, Vec<u8>)> {
        let (object_type, mut object_reader) = self.parse_object_as_bytes(object_id)?;
        let mut payload = Vec::new();
        object_reader.read_to_end(&mut payload)?;

        Ok((object_type, payload))
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
            ObjectType::Tag => Ok(ObjectBox::Tag(Box::new(Tag::deserialize(object_reader)?))),
            ObjectType::Blob | ObjectType::Tree => Ok(ObjectBox::Opaque(object_type)),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tag(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tag>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Tag => Ok(Some(Tag::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    /// Follow annotated tags until a commit is reached
    ///
    /// Returns the commit and its object ID, or `None` when the chain ends in a
    /// blob or tree.
    pub fn peel_to_commit(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<Option<(ObjectId, Commit)>> {
        let mut current = object_id.clone();

        for _ in 0..MAX_PEEL_DEPTH {
            match self.parse_object(&current)? {
                ObjectBox::Commit(commit) => return Ok(Some((current, *commit))),
                ObjectBox::Tag(tag) => match tag.target_type() {
                    ObjectType::Commit | ObjectType::Tag => current = tag.target().clone(),
                    ObjectType::Tree | ObjectType::Blob => return Ok(None),
                },
                ObjectBox::Opaque(_) => return Ok(None),
            }
        }

        anyhow::bail!(
            "Tag chain starting at {} is deeper than {} levels",
            object_id,
            MAX_PEEL_DEPTH
        )
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_content = self.load(object_id)?;
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_object_header(&mut object_reader)
            .with_context(|| format!("Invalid object header in {}", object_id))?;

        let payload_len = object_reader.get_ref().len() - object_reader.position() as usize;
        if payload_len != size {
            anyhow::bail!(
                "Object {} declares {} bytes but holds {}",
                object_id,
                size,
                payload_len
            );
        }

        Ok((object_type, object_reader))
    }

    fn open_packs(pack_dir: &Path) -> Vec<Pack> {
        if !pack_dir.is_dir() {
            return Vec::new();
        }

        let index_paths = WalkDir::new(pack_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(error) => {
                    tracing::warn!("skipping pack directory entry: {error}");
                    None
                }
            })
            .filter(|path| path.extension().is_some_and(|ext| ext == "idx"));

        let mut packs = Vec::new();
        for index_path in index_paths {
            match Pack::open(&index_path) {
                Ok(pack) => {
                    tracing::debug!(
                        pack = %pack.path().display(),
                        objects = pack.object_count(),
                        "opened pack"
                    );
                    packs.push(pack);
                }
                Err(error) => tracing::warn!("skipping pack: {error:#}"),
            }
        }

        packs
    }

    /// Rebuild the loose form (`<type> <size>\0<payload>`) of a packed object
    fn read_packed_object(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        for pack in &self.packs {
            if let Some((object_type, payload)) = pack.read_object(object_id, self)? {
                let mut content = format!("{} {}\0", object_type, payload.len()).into_bytes();
                content.extend_from_slice(&payload);
                return Ok(content.into());
            }
        }

        anyhow::bail!("Object {} not found", object_id)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    /// The object name is the SHA-1 of the uncompressed content, header included
    fn verify(object_id: &ObjectId, content: &[u8]) -> anyhow::Result<()> {
        let mut hasher = Sha1::new();
        hasher.update(content);
        let actual = format!("{:x}", hasher.finalize());

        if actual != object_id.as_ref() {
            anyhow::bail!(
                "Object {} is corrupt: content hashes to {}",
                object_id,
                actual
            );
        }

        Ok(())
    }
}
