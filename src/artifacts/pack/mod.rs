//! Packfile formats
//!
//! `git gc`, `git clone` and `git fetch` store objects in packs instead of
//! loose files. A pack lives in `.git/objects/pack/` as a pair of files:
//!
//! - `pack-<sha>.pack`: the objects, each one zlib-compressed, many of them
//!   stored as a delta against another object
//! - `pack-<sha>.idx`: a sorted table from object ID to offset in the pack
//!
//! Modules:
//! - `pack_index`: Lookup in a version 2 `.idx`
//! - `entry`: Header of a single entry in the `.pack`
//! - `delta`: Reconstruction of an object from its base and a delta

pub mod delta;
pub mod entry;
pub mod pack_index;

/// `.pack` files start with this signature, then a version and an object count
pub const PACK_SIGNATURE: &[u8; 4] = b"PACK";

/// Length of a raw (binary) SHA-1
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
