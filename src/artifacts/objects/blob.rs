//! Git blob object
//!
//! Blobs store file content. The payload is read as text: invalid UTF-8 is
//! replaced lossily and every embedded `\0` byte becomes a newline. Genuinely
//! binary content is therefore not preserved byte for byte.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectHeader;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    header: ObjectHeader,
    oid: ObjectId,
    content: String,
}

impl Blob {
    /// Build a blob from its raw payload, normalising null bytes to newlines.
    pub fn from_payload(header: ObjectHeader, oid: ObjectId, payload: &[u8]) -> Self {
        let content = String::from_utf8_lossy(payload).replace('\0', "\n");
        Self::new(header, oid, content)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Object for Blob {
    fn header(&self) -> &ObjectHeader {
        &self.header
    }

    fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn display(&self) -> String {
        format!("*BLOB*\n{}", self.content)
    }
}
