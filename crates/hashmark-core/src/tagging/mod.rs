//! Tagging module: Hash-tag filename format and content digests
//!
//! A tagged filename carries a fixed-width base-36 digest of the file's
//! bytes between two sentinels: `<stem>._.M<hash>._.<ext>`. Other tools
//! match the sentinel literally, so the format must not drift.

pub mod base36;
mod digest;
mod name;

pub use digest::{ContentDigest, DEFAULT_CHUNK_SIZE};
pub use name::{
    HashedFilename, TAG_CLOSE, TAG_OPEN, is_hidden, is_tagged, split_extension, strip_tag,
};
