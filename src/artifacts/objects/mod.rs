//! Git object types read by taglog
//!
//! Git stores all content as objects identified by SHA-1 hashes. taglog only
//! needs to understand two of them:
//!
//! - **Commit**: Snapshot metadata (author, message, parent commits, tree)
//! - **Tag**: Annotated reference to another object
//!
//! Blobs and trees are recognised by their header so that a tag pointing at
//! them can be reported, but their payload is never decoded.
//!
//! All objects share the loose object format: `<type> <size>\0<content>`

pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tag;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
