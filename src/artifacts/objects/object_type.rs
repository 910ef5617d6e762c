use crate::artifacts::objects::token_reader::TokenReader;
use crate::errors::{ObjectError, ObjectResult};
use std::io::BufRead;

const OBJECT_TYPES: phf::Map<&'static str, ObjectType> = phf::phf_map! {
    "blob" => ObjectType::Blob,
    "tree" => ObjectType::Tree,
    "commit" => ObjectType::Commit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> ObjectResult<Self> {
        OBJECT_TYPES
            .get(value)
            .copied()
            .ok_or_else(|| ObjectError::UnrecognizedObjectType(value.to_string()))
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The leading `"<type> <length>\0"` token of every object.
///
/// `declared_length` is kept as recorded by the writer; it is not checked
/// against the number of payload bytes actually consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub kind: ObjectType,
    pub declared_length: usize,
}

impl ObjectHeader {
    pub fn parse(reader: &mut TokenReader<impl BufRead>) -> ObjectResult<Self> {
        let token = reader.read_token()?;
        let header = String::from_utf8_lossy(&token);

        let (type_word, length_word) = header
            .split_once(' ')
            .ok_or_else(|| ObjectError::MalformedHeader(header.to_string()))?;

        let kind = ObjectType::try_from(type_word)?;
        let declared_length = length_word
            .parse::<usize>()
            .map_err(|_| ObjectError::MalformedHeader(header.to_string()))?;

        Ok(ObjectHeader {
            kind,
            declared_length,
        })
    }
}
