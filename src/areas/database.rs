use crate::artifacts::log::ObjectResolver;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{GitObject, Object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use derive_new::new;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Read-only view of the loose objects under `objects/`.
///
/// Nothing is cached: each lookup reads, inflates and parses the file again.
#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read objects from packfiles once loose lookups miss
impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Decompressed bytes of an object, header included.
    pub fn load(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> ObjectResult<GitObject> {
        let object_content = self.load(object_id)?;

        GitObject::parse(object_id.clone(), Cursor::new(object_content))
    }

    /// Resolve `object_id` and require it to be a commit.
    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> ObjectResult<Commit> {
        match self.parse_object(object_id)? {
            GitObject::Commit(commit) => Ok(commit),
            other => Err(ObjectError::UnexpectedObjectKind {
                oid: object_id.to_string(),
                found: other.object_type(),
            }),
        }
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> ObjectResult<Bytes> {
        trace!(path = %object_path.display(), "reading loose object");

        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectError::ObjectNotFound(object_id.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Self::decompress(object_content.into())
    }

    fn decompress(data: Bytes) -> ObjectResult<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}

impl ObjectResolver for Database {
    fn resolve(&self, oid: &ObjectId) -> ObjectResult<GitObject> {
        self.parse_object(oid)
    }
}
