//! Null-delimited token scanner
//!
//! Decompressed objects interleave text tokens terminated by a `\0` byte
//! (`"<type> <size>\0"`, `"<mode> <name>\0"`) with fixed-width raw fields
//! (the 20-byte object ids of tree entries). [`TokenReader`] is the single-pass
//! cursor every object parser consumes its bytes through.

use crate::errors::{ObjectError, ObjectResult};
use std::io::BufRead;

const TOKEN_DELIMITER: u8 = b'\0';

/// Forward-only reader over a decompressed object stream.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader { reader }
    }

    /// Consume bytes up to and including the next `\0`, returning the bytes before it.
    pub fn read_token(&mut self) -> ObjectResult<Vec<u8>> {
        let mut token = Vec::new();
        self.reader.read_until(TOKEN_DELIMITER, &mut token)?;

        match token.pop() {
            Some(TOKEN_DELIMITER) => Ok(token),
            _ => Err(ObjectError::UnexpectedEndOfStream),
        }
    }

    /// Consume exactly `N` raw bytes.
    pub fn read_fixed<const N: usize>(&mut self) -> ObjectResult<[u8; N]> {
        let mut field = [0; N];
        self.reader.read_exact(&mut field).map_err(|err| match err.kind() {
            std::io::ErrorKind::UnexpectedEof => ObjectError::UnexpectedEndOfStream,
            _ => ObjectError::Io(err),
        })?;

        Ok(field)
    }

    /// Whether the stream has no bytes left.
    pub fn is_exhausted(&mut self) -> ObjectResult<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }

    /// Consume everything left in the stream.
    pub fn read_remaining(&mut self) -> ObjectResult<Vec<u8>> {
        let mut remaining = Vec::new();
        self.reader.read_to_end(&mut remaining)?;

        Ok(remaining)
    }
}
