//! Object decoding and traversal errors
//!
//! Every parsing stage returns [`ObjectError`] to its caller as soon as a
//! grammar element does not match. Nothing is retried and no partial object
//! is produced. The command layer wraps these in `anyhow` context before they
//! reach the user.

use crate::artifacts::objects::object_type::ObjectType;
use thiserror::Error;

/// Result alias for the object parsers and graph walkers.
pub type ObjectResult<T> = Result<T, ObjectError>;

#[derive(Debug, Error)]
pub enum ObjectError {
    /// No null delimiter (or not enough raw bytes) before the stream ended.
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("malformed object header: {0:?}")]
    MalformedHeader(String),

    #[error("unrecognized object type: {0:?}")]
    UnrecognizedObjectType(String),

    /// A tree entry token was read but its 20 hash bytes were not.
    #[error("truncated tree entry {0:?}: missing object id bytes")]
    TruncatedEntry(String),

    #[error("commit is missing its tree field, found {0:?}")]
    MissingTreeField(String),

    #[error("second parent {0} recorded without a first parent")]
    SecondParentWithoutFirst(String),

    #[error("malformed {label} line {line:?}: {reason}")]
    MalformedAuthorLine {
        label: &'static str,
        line: String,
        reason: String,
    },

    #[error("expected tree object {oid}, found {found}")]
    ExpectedTreeGotOther { oid: String, found: ObjectType },

    #[error("expected commit object {oid}, found {found}")]
    UnexpectedObjectKind { oid: String, found: ObjectType },

    #[error("reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("invalid object id {0:?}")]
    InvalidObjectId(String),

    #[error("object {0} not found in the object database")]
    ObjectNotFound(String),

    #[error("object payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
