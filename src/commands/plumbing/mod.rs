//! Plumbing commands (low-level object inspection)
//!
//! - `cat-file`: render a single object of any kind
//! - `commit-tree`: list the files recorded in a commit's tree

pub mod cat_file;
pub mod commit_tree;
