//! Object graph traversal
//!
//! Both walkers only see objects through an [`ObjectResolver`], so they run the
//! same against the on-disk database and against in-memory fixtures.
//!
//! - `history`: first-parent commit history with inline merged parents
//! - `tree_walk`: recursive flattening of a tree into file paths

use crate::artifacts::objects::object::GitObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ObjectResult;

pub mod history;
pub mod tree_walk;

/// Turns an object id into a freshly decoded object.
pub trait ObjectResolver {
    fn resolve(&self, oid: &ObjectId) -> ObjectResult<GitObject>;
}
