//! First-parent commit history
//!
//! Starting from a commit, history follows `parent` links until it reaches a
//! root commit. For a merge commit the second parent is emitted right after
//! the merge itself, marked as merged, but its own ancestors are never
//! visited: the walk always continues along the first parent only.

use crate::artifacts::log::ObjectResolver;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{GitObject, Object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectError, ObjectResult};
use tracing::{debug, trace};

const MERGED_ANNOTATION: &str = "(merged)";

/// One commit as emitted by the history walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub commit: Commit,
    /// The commit is the second parent of the merge emitted just before it.
    pub merged: bool,
}

impl LogEntry {
    pub fn render(&self) -> String {
        self.commit
            .to_log_entry(self.merged.then_some(MERGED_ANNOTATION))
    }
}

/// Lazy history iterator, see [`walk_history`].
pub struct History<'r, R: ObjectResolver + ?Sized> {
    resolver: &'r R,
    next: Option<ObjectId>,
    merged: Option<ObjectId>,
}

/// Walk the first-parent chain starting at `start`.
///
/// The iterator yields an error once and then stops. Lookups happen one at a
/// time, so nothing past a root commit is ever resolved.
pub fn walk_history<R: ObjectResolver + ?Sized>(resolver: &R, start: ObjectId) -> History<'_, R> {
    History {
        resolver,
        next: Some(start),
        merged: None,
    }
}

impl<R: ObjectResolver + ?Sized> History<'_, R> {
    fn resolve_commit(&self, oid: &ObjectId) -> ObjectResult<Commit> {
        match self.resolver.resolve(oid)? {
            GitObject::Commit(commit) => Ok(commit),
            other => Err(ObjectError::UnexpectedObjectKind {
                oid: oid.to_string(),
                found: other.object_type(),
            }),
        }
    }

    fn step(&mut self) -> Option<ObjectResult<LogEntry>> {
        if let Some(merged) = self.merged.take() {
            trace!(oid = %merged, "resolving merged parent");
            return Some(self.resolve_commit(&merged).map(|commit| LogEntry {
                commit,
                merged: true,
            }));
        }

        let oid = self.next.take()?;
        trace!(%oid, "resolving commit");

        let commit = match self.resolve_commit(&oid) {
            Ok(commit) => commit,
            Err(err) => return Some(Err(err)),
        };

        match &commit {
            Commit::Root(_) => debug!(oid = oid.to_short_oid(), "reached root commit"),
            Commit::Simple { parent, .. } => self.next = Some(parent.clone()),
            Commit::Merge {
                parent,
                merged_parent,
                ..
            } => {
                debug!(
                    oid = oid.to_short_oid(),
                    merged_parent = merged_parent.to_short_oid(),
                    "merge commit, second parent shown inline"
                );
                self.next = Some(parent.clone());
                self.merged = Some(merged_parent.clone());
            }
        }

        Some(Ok(LogEntry {
            commit,
            merged: false,
        }))
    }
}

impl<R: ObjectResolver + ?Sized> Iterator for History<'_, R> {
    type Item = ObjectResult<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.step();

        if matches!(item, Some(Err(_))) {
            self.next = None;
            self.merged = None;
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::log::fixtures::{oid, MemoryStore};
    use pretty_assertions::assert_eq;

    fn ids(entries: &[LogEntry]) -> Vec<(String, bool)> {
        entries
            .iter()
            .map(|entry| (entry.commit.oid().to_string(), entry.merged))
            .collect()
    }

    #[test]
    fn linear_chain_stops_at_root() {
        let mut store = MemoryStore::default();
        store.commit("01", &[], "first");
        store.commit("02", &["01"], "second");
        let head = store.commit("03", &["02"], "third");

        let entries = walk_history(&store, head)
            .collect::<ObjectResult<Vec<_>>>()
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            ids(&entries),
            vec![
                (oid("03").to_string(), false),
                (oid("02").to_string(), false),
                (oid("01").to_string(), false),
            ]
        );
        assert_eq!(store.lookups.borrow().len(), 3);
    }

    #[test]
    fn merged_parent_is_shown_but_not_followed() {
        let mut store = MemoryStore::default();
        store.commit("01", &[], "root");
        store.commit("b1", &["01"], "side one");
        store.commit("b2", &["b1"], "side two");
        store.commit("02", &["01"], "main");
        store.commit("03", &["02", "b2"], "merge side");
        let head = store.commit("04", &["03"], "after merge");

        let entries = walk_history(&store, head)
            .collect::<ObjectResult<Vec<_>>>()
            .unwrap();

        assert_eq!(
            ids(&entries),
            vec![
                (oid("04").to_string(), false),
                (oid("03").to_string(), false),
                (oid("b2").to_string(), true),
                (oid("02").to_string(), false),
                (oid("01").to_string(), false),
            ]
        );
        assert!(!store.lookups.borrow().contains(&oid("b1")));
    }

    #[test]
    fn merged_entry_is_annotated() {
        let mut store = MemoryStore::default();
        store.commit("01", &[], "root");
        store.commit("b1", &["01"], "side");
        let head = store.commit("02", &["01", "b1"], "merge");

        let entries = walk_history(&store, head)
            .collect::<ObjectResult<Vec<_>>>()
            .unwrap();

        assert!(entries[1]
            .render()
            .starts_with(&format!("Commit: {} (merged)\n", oid("b1"))));
        assert!(entries[0]
            .render()
            .starts_with(&format!("Commit: {}\n", oid("02"))));
    }

    #[test]
    fn tree_in_the_chain_is_an_unexpected_kind() {
        let mut store = MemoryStore::default();
        store.tree("0a", &[]);
        let head = store.commit("02", &["0a"], "points at a tree");
        let tree_id = oid("0a").to_string();

        let result = walk_history(&store, head).collect::<ObjectResult<Vec<_>>>();

        assert!(matches!(
            result,
            Err(ObjectError::UnexpectedObjectKind { oid, .. }) if oid == tree_id
        ));
    }

    #[test]
    fn dangling_parent_fails_once_and_stops() {
        let mut store = MemoryStore::default();
        let head = store.commit("02", &["99"], "orphan");

        let mut history = walk_history(&store, head);

        assert!(history.next().unwrap().is_ok());
        assert!(matches!(
            history.next(),
            Some(Err(ObjectError::ObjectNotFound(_)))
        ));
        assert!(history.next().is_none());
    }
}
