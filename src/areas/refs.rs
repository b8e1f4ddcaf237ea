//! Git references (HEAD, branches, tags)
//!
//! References are human-readable names pointing to objects. taglog only ever
//! reads them:
//! - `HEAD`, usually a symbolic reference to the current branch
//! - Branches: `refs/heads/*`
//! - Tags: `refs/tags/*`, pointing either at a commit (lightweight tag) or at
//!   an annotated tag object
//!
//! ## File Format
//!
//! Loose references are text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references
//!
//! After `git pack-refs` (or `git gc`) references move into `.git/packed-refs`:
//!
//! ```text
//! # pack-refs with: peeled fully-peeled sorted
//! <sha> refs/heads/master
//! <sha> refs/tags/v1.0.0
//! ^<sha of the commit the annotated tag points to>
//! ```
//!
//! A loose reference always wins over a packed one with the same name.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::SymRefName;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

const PACKED_REFS_FILE: &str = "packed-refs";

/// Symbolic references are followed at most this many times
const MAX_SYMREF_DEPTH: usize = 5;

/// A resolved reference
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RefEntry {
    name: SymRefName,
    oid: ObjectId,
    /// Target of an annotated tag, when packed-refs recorded it
    peeled: Option<ObjectId>,
}

impl RefEntry {
    pub fn name(&self) -> &SymRefName {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn peeled(&self) -> Option<&ObjectId> {
        self.peeled.as_ref()
    }
}

/// Internal representation of a reference value
#[derive(Debug, Clone)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef { sym_ref_name: SymRefName },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].trim().to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Resolve HEAD to the commit it ultimately points at
    ///
    /// Returns `None` for an unborn branch (a repository without commits).
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_oid(&SymRefName::new(HEAD_REF_NAME.to_string()))
    }

    /// Read the object ID a reference points to, following symbolic references
    pub fn read_oid(&self, sym_ref_name: &SymRefName) -> anyhow::Result<Option<ObjectId>> {
        self.resolve(sym_ref_name, 0)
    }

    fn resolve(&self, sym_ref_name: &SymRefName, depth: usize) -> anyhow::Result<Option<ObjectId>> {
        if depth > MAX_SYMREF_DEPTH {
            anyhow::bail!("symbolic ref {} is nested too deeply", sym_ref_name);
        }

        let ref_path = self.path.join(sym_ref_name.as_ref_path());
        match SymRefOrOid::read_symref_or_oid(&ref_path)? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => self.resolve(&sym_ref_name, depth + 1),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(self
                .packed_refs()?
                .into_iter()
                .find(|entry| entry.name() == sym_ref_name)
                .map(|entry| entry.oid)),
        }
    }

    /// All tag references, sorted by name
    pub fn list_tags(&self) -> anyhow::Result<Vec<RefEntry>> {
        Ok(self
            .list_all_refs()?
            .into_iter()
            .filter(|entry| entry.name().is_tag())
            .collect())
    }

    /// Every reference under `refs/`, loose and packed, sorted by name
    pub fn list_all_refs(&self) -> anyhow::Result<Vec<RefEntry>> {
        let mut refs = BTreeMap::new();

        for entry in self.packed_refs()? {
            refs.insert(entry.name().clone(), entry);
        }
        for entry in self.loose_refs()? {
            refs.insert(entry.name().clone(), entry);
        }

        Ok(refs.into_values().collect())
    }

    fn loose_refs(&self) -> anyhow::Result<Vec<RefEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(self.refs_path())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
        {
            let Ok(relative_path) = entry.path().strip_prefix(self.path.as_ref()) else {
                continue;
            };
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let name = SymRefName::new(name);

            match self.read_oid(&name) {
                Ok(Some(oid)) => entries.push(RefEntry::new(name, oid, None)),
                Ok(None) => tracing::debug!(reference = %name, "skipping empty reference"),
                Err(error) => {
                    tracing::warn!(reference = %name, "skipping unreadable reference: {error:#}")
                }
            }
        }

        Ok(entries)
    }

    fn packed_refs(&self) -> anyhow::Result<Vec<RefEntry>> {
        let packed_refs_path = self.packed_refs_path();
        if !packed_refs_path.is_file() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&packed_refs_path)
            .with_context(|| format!("failed to read {:?}", packed_refs_path))?;

        Self::parse_packed_refs(&content)
    }

    fn parse_packed_refs(content: &str) -> anyhow::Result<Vec<RefEntry>> {
        let mut entries: Vec<RefEntry> = Vec::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(peeled) = line.strip_prefix('^') {
                let last = entries
                    .last_mut()
                    .context("packed-refs: peeled line without a preceding ref")?;
                last.peeled = Some(ObjectId::try_parse(peeled.to_string())?);
                continue;
            }

            let (oid, name) = line
                .split_once(' ')
                .with_context(|| format!("packed-refs: malformed line '{line}'"))?;
            entries.push(RefEntry::new(
                SymRefName::new(name.trim().to_string()),
                ObjectId::try_parse(oid.to_string())?,
                None,
            ));
        }

        Ok(entries)
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn packed_refs_path(&self) -> Box<Path> {
        self.path.join(PACKED_REFS_FILE).into_boxed_path()
    }
}
