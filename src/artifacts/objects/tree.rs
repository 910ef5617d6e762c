//! Git tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`, with no delimiter after the
//! last entry.
//!
//! Entries are kept in the order they were stored. Duplicate names are not
//! rejected.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectHeader;
use crate::artifacts::objects::token_reader::TokenReader;
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::errors::{ObjectError, ObjectResult};
use derive_new::new;
use std::io::{BufRead, Write};

/// Mode recorded for subdirectory entries.
pub const DIRECTORY_MODE: &str = "40000";

/// A single `(mode, name, oid)` triple of a tree.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileEntry {
    pub permission_bits: String,
    pub name: String,
    pub entry_hash: ObjectId,
}

impl FileEntry {
    pub fn is_tree(&self) -> bool {
        self.permission_bits == DIRECTORY_MODE
    }

    fn from_token(token: Vec<u8>, raw_oid: &[u8; RAW_OBJECT_ID_LENGTH]) -> ObjectResult<Self> {
        let token = String::from_utf8(token)?;

        // the name keeps any further spaces verbatim
        let (permission_bits, name) = token.split_once(' ').unwrap_or((token.as_str(), ""));

        Ok(FileEntry::new(
            permission_bits.to_string(),
            name.to_string(),
            ObjectId::from_raw(raw_oid),
        ))
    }
}

impl std::fmt::Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.permission_bits, self.entry_hash, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Tree {
    header: ObjectHeader,
    oid: ObjectId,
    entries: Vec<FileEntry>,
}

impl Tree {
    /// Decode every `"<mode> <name>\0" + <20 bytes>` pair until the stream ends.
    ///
    /// Running out of bytes before a token's null delimiter ends the listing
    /// with the entries read so far. Running out after a token but before its
    /// object id is a [`ObjectError::TruncatedEntry`].
    pub fn decode_entries(reader: &mut TokenReader<impl BufRead>) -> ObjectResult<Vec<FileEntry>> {
        let mut entries = Vec::new();

        while !reader.is_exhausted()? {
            let token = match reader.read_token() {
                Ok(token) => token,
                Err(ObjectError::UnexpectedEndOfStream) => break,
                Err(err) => return Err(err),
            };

            let raw_oid = reader
                .read_fixed::<RAW_OBJECT_ID_LENGTH>()
                .map_err(|err| match err {
                    ObjectError::UnexpectedEndOfStream => {
                        ObjectError::TruncatedEntry(String::from_utf8_lossy(&token).into_owned())
                    }
                    other => other,
                })?;

            entries.push(FileEntry::from_token(token, &raw_oid)?);
        }

        Ok(entries)
    }

    /// Re-encode the entries into their on-disk payload (without the header).
    pub fn serialize_entries(entries: &[FileEntry]) -> ObjectResult<Vec<u8>> {
        let mut payload = Vec::new();

        for entry in entries {
            write!(payload, "{} {}", entry.permission_bits, entry.name)?;
            payload.push(0);
            entry.entry_hash.write_raw_to(&mut payload)?;
        }

        Ok(payload)
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<FileEntry> {
        self.entries
    }
}

impl Object for Tree {
    fn header(&self) -> &ObjectHeader {
        &self.header
    }

    fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn display(&self) -> String {
        std::iter::once("*TREE*".to_string())
            .chain(self.entries.iter().map(FileEntry::to_string))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
