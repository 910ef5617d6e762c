//! Command implementations
//!
//! Each command is an `impl Repository` block that writes its output to the
//! repository's writer. Errors are returned with context and only turned into
//! a message by the binary.
//!
//! - `plumbing`: object level commands (cat-file, commit-tree)
//! - `porcelain`: branch level commands (list-branches, log)

pub mod plumbing;
pub mod porcelain;
