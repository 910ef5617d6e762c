//! Git data structures and algorithms
//!
//! - `branch`: branch names and ref file conventions
//! - `log`: history and tree traversal over resolved objects
//! - `objects`: object decoding (blob, tree, commit)

pub mod branch;
pub mod log;
pub mod objects;
