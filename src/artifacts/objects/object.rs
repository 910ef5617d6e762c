use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectHeader, ObjectType};
use crate::artifacts::objects::token_reader::TokenReader;
use crate::artifacts::objects::tree::Tree;
use crate::errors::ObjectResult;
use std::io::BufRead;

/// Behaviour shared by every decoded object.
pub trait Object {
    fn header(&self) -> &ObjectHeader;

    fn oid(&self) -> &ObjectId;

    /// Human readable rendering used by `cat-file`.
    fn display(&self) -> String;

    fn object_type(&self) -> ObjectType {
        self.header().kind
    }
}

/// A fully decoded loose object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitObject {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl GitObject {
    /// Decode a whole decompressed object: header token, then payload.
    pub fn parse(oid: ObjectId, reader: impl BufRead) -> ObjectResult<Self> {
        let mut reader = TokenReader::new(reader);
        let header = ObjectHeader::parse(&mut reader)?;

        Self::assemble(header, oid, &mut reader)
    }

    /// Build the typed object for `header.kind` from the rest of the stream.
    pub fn assemble(
        header: ObjectHeader,
        oid: ObjectId,
        reader: &mut TokenReader<impl BufRead>,
    ) -> ObjectResult<Self> {
        match header.kind {
            ObjectType::Blob => {
                let payload = reader.read_remaining()?;
                Ok(GitObject::Blob(Blob::from_payload(header, oid, &payload)))
            }
            ObjectType::Tree => {
                let entries = Tree::decode_entries(reader)?;
                Ok(GitObject::Tree(Tree::new(header, oid, entries)))
            }
            ObjectType::Commit => {
                let body = String::from_utf8(reader.read_remaining()?)?;
                Ok(GitObject::Commit(Commit::parse(header, oid, &body)?))
            }
        }
    }

    fn as_object(&self) -> &dyn Object {
        match self {
            GitObject::Blob(blob) => blob,
            GitObject::Tree(tree) => tree,
            GitObject::Commit(commit) => commit,
        }
    }
}

impl Object for GitObject {
    fn header(&self) -> &ObjectHeader {
        self.as_object().header()
    }

    fn oid(&self) -> &ObjectId {
        self.as_object().oid()
    }

    fn display(&self) -> String {
        self.as_object().display()
    }
}
