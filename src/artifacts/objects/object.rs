use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use anyhow::Result;
use std::io::BufRead;

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

#[derive(Debug)]
pub enum ObjectBox {
    Commit(Box<Commit>),
    Tag(Box<Tag>),
    /// Blobs and trees, whose payload taglog never decodes
    Opaque(ObjectType),
}

/// Header block shared by commit and tag objects
///
/// Both formats are a list of `key value` lines, terminated by an empty line,
/// followed by a free-form message. A header value may span several lines:
/// every continuation line starts with a single space (e.g. `gpgsig`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectHeaders {
    entries: Vec<(String, String)>,
    message: String,
}

impl ObjectHeaders {
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut rest = content;

        loop {
            let (line, remainder) = match rest.split_once('\n') {
                Some((line, remainder)) => (line, remainder),
                None => (rest, ""),
            };

            if line.is_empty() {
                rest = remainder;
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                let (_, value) = entries
                    .last_mut()
                    .ok_or_else(|| anyhow::anyhow!("Invalid object: continuation before any header"))?;
                value.push('\n');
                value.push_str(continuation);
            } else {
                let (key, value) = line
                    .split_once(' ')
                    .ok_or_else(|| anyhow::anyhow!("Invalid object header line: {line}"))?;
                entries.push((key.to_string(), value.to_string()));
            }

            rest = remainder;
            if rest.is_empty() {
                break;
            }
        }

        Ok(ObjectHeaders {
            entries,
            message: rest.to_string(),
        })
    }

    /// First value recorded under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded under `key`, in order
    pub fn get_all<'h>(&'h self, key: &'h str) -> impl Iterator<Item = &'h str> + 'h {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
