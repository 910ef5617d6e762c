//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They uniquely identify all objects in Git (blobs, trees, commits).
//!
//! ## Format
//!
//! - Full: 40 lowercase hex characters (e.g., "abc123...def")
//! - Raw: 20 bytes, as stored inside tree entries
//! - Short: First 7 characters (e.g., "abc1234")
//!
//! ## Storage
//!
//! Objects are stored in `objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::{ObjectError, ObjectResult};
use std::io;
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// Holds a validated, lowercase, 40-character hexadecimal string. Whether the
/// object actually exists is only known once it is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are accepted and normalised to lowercase.
    pub fn try_parse(id: impl AsRef<str>) -> ObjectResult<Self> {
        let id = id.as_ref().trim();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from the 20 raw bytes stored in a tree entry
    ///
    /// Every byte becomes exactly two hex digits, so `0x0a` encodes as `"0a"`.
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Decode back to the 20 raw bytes.
    pub fn to_raw(&self) -> ObjectResult<[u8; RAW_OBJECT_ID_LENGTH]> {
        let mut raw = [0; RAW_OBJECT_ID_LENGTH];
        hex::decode_to_slice(&self.0, &mut raw)
            .map_err(|_| ObjectError::InvalidObjectId(self.0.clone()))?;
        Ok(raw)
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Used when re-serializing tree entries.
    pub fn write_raw_to<W: io::Write>(&self, writer: &mut W) -> ObjectResult<()> {
        writer.write_all(&self.to_raw()?)?;
        Ok(())
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
