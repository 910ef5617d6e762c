//! Git object types and decoding
//!
//! Loose objects decompress to `<type> <size>\0<payload>`. Decoding happens
//! in layers, each built on the one before:
//!
//! - `token_reader`: null-delimited tokens and fixed-width raw fields
//! - `object_type`: the `<type> <size>` header
//! - `tree`: `<mode> <name>\0<20 bytes>` entries
//! - `commit`: the ordered commit field grammar (root, simple, merge)
//! - `object`: dispatch on the header kind into a typed [`object::GitObject`]

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod token_reader;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
