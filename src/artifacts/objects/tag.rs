//! Annotated tag object
//!
//! Lightweight tags are plain refs to a commit. Annotated tags are objects of
//! their own that point at another object, usually a commit:
//!
//! ```text
//! object <target-sha>
//! type commit
//! tag v1.0.0
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <tag message>
//! ```
//!
//! taglog dates a tag by the commit it leads to, so only `object` and `type`
//! are read.

use crate::artifacts::objects::object::{ObjectHeaders, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::io::{BufRead, Read};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    target: ObjectId,
    target_type: ObjectType,
}

impl Tag {
    pub fn target(&self) -> &ObjectId {
        &self.target
    }

    pub fn target_type(&self) -> ObjectType {
        self.target_type
    }
}

impl Unpackable for Tag {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        let content = String::from_utf8_lossy(&content);

        let headers = ObjectHeaders::parse(&content)?;

        let target = headers
            .get("object")
            .context("Invalid tag object: missing object line")?;
        let target = ObjectId::try_parse(target.to_string())?;

        let target_type = headers
            .get("type")
            .context("Invalid tag object: missing type line")?;
        let target_type = ObjectType::try_from(target_type)?;

        Ok(Tag {
            target,
            target_type,
        })
    }
}
