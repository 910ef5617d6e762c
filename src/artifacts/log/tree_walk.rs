//! Tree flattening
//!
//! Turns a tree and all of its subtrees into the list of file paths they
//! record, in the order `commit-tree` prints them.

use crate::artifacts::log::ObjectResolver;
use crate::artifacts::objects::object::{GitObject, Object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectError, ObjectResult};
use tracing::trace;

/// Flatten the tree `oid` into slash-separated file paths.
///
/// Paths come out depth-first in stored entry order, each directory expanded
/// in place. There is no cycle detection: a tree that (through corruption)
/// contains one of its own ancestors recurses until the stack runs out.
pub fn walk_tree<R: ObjectResolver + ?Sized>(
    resolver: &R,
    oid: &ObjectId,
) -> ObjectResult<Vec<String>> {
    let tree = match resolver.resolve(oid)? {
        GitObject::Tree(tree) => tree,
        other => {
            return Err(ObjectError::ExpectedTreeGotOther {
                oid: oid.to_string(),
                found: other.object_type(),
            });
        }
    };
    trace!(%oid, entries = tree.entries().len(), "walking tree");

    let mut paths = Vec::new();
    for entry in tree.into_entries() {
        if entry.is_tree() {
            let nested = walk_tree(resolver, &entry.entry_hash)?;
            paths.extend(nested.into_iter().map(|path| format!("{}/{path}", entry.name)));
        } else {
            paths.push(entry.name);
        }
    }

    Ok(paths)
}
