//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! taglog reads them for three things only: the parents, to walk history; the
//! author timestamp, which places the commit in a release window; and the
//! message, which is both filtered and displayed.
//!
//! ## Format
//!
//! On disk (after the `commit <size>\0` header):
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//! [gpgsig / encoding / mergetag ...]
//!
//! <commit message>
//! ```
//!
//! Only `parent` lines are required to be well formed. A commit whose author
//! line cannot be read still links to its parents, it just has no timestamp.

use crate::artifacts::objects::object::{ObjectHeaders, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::io::{BufRead, Read};

/// Author (or tagger) line: `name <email> <unix-seconds> <timezone>`
///
/// Only the moment is kept, with the offset recorded in the object.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Author {
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Parse a `+hhmm` / `-hhmm` timezone into a fixed offset
    fn parse_offset(timezone: &str) -> anyhow::Result<FixedOffset> {
        let invalid = || anyhow::anyhow!("Invalid timezone: {timezone}");

        let (sign, digits) = match timezone.split_at_checked(1) {
            Some(("+", digits)) => (1, digits),
            Some(("-", digits)) => (-1, digits),
            _ => return Err(invalid()),
        };
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours = digits[..2].parse::<i32>().map_err(|_| invalid())?;
        let minutes = digits[2..].parse::<i32>().map_err(|_| invalid())?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Split from the right: the name may contain spaces
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format"));
        }

        let offset = Self::parse_offset(parts[0])?;
        let timestamp = parts[1]
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid timestamp"))?;

        let name_email_part = parts[2];
        match (name_email_part.find('<'), name_email_part.rfind('>')) {
            (Some(start), Some(end)) if start < end => {}
            _ => return Err(anyhow::anyhow!("Invalid author format: bad <email>")),
        }

        // the unix timestamp is the instant; the offset only changes how it reads
        let timestamp = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid timestamp"))?
            .with_timezone(&offset);

        Ok(Author { timestamp })
    }
}

/// Git commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for initial commit, multiple for merge commits)
    parents: Vec<ObjectId>,
    /// `None` when the author line is missing or unreadable
    author: Option<Author>,
    message: String,
}

impl Commit {
    pub fn new(parents: Vec<ObjectId>, author: Option<Author>, message: String) -> Self {
        Commit {
            parents,
            author,
            message,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Author time, which is what release windows are computed from
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.author.map(|author| author.timestamp())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        let content = String::from_utf8_lossy(&content);

        let headers = ObjectHeaders::parse(&content)?;

        let parents = headers
            .get_all("parent")
            .map(|parent| ObjectId::try_parse(parent.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()
            .context("Invalid commit object: bad parent line")?;

        let author = headers
            .get("author")
            .and_then(|author| Author::try_from(author).ok());

        Ok(Self::new(parents, author, headers.into_message()))
    }
}
