//! Git references (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - `refs/heads/<branch>`: a single line holding a 40-character hash
//! - `HEAD`: `ref: refs/heads/<branch>` while a branch is checked out, or a
//!   raw hash when detached
//!
//! Only reading is supported.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{REF_PREFIX, SYMREF_REGEX};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectError, ObjectResult};
use derive_new::new;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

static SYMREF: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(SYMREF_REGEX).expect("symref pattern is a valid regex"));

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory
    path: Box<Path>,
}

impl Refs {
    /// Branch that `HEAD` points to, or `None` for a detached HEAD.
    pub fn current_branch(&self) -> ObjectResult<Option<BranchName>> {
        let head = self.read_ref_file(&self.path.join(HEAD_REF_NAME), HEAD_REF_NAME)?;

        match SYMREF.captures(&head) {
            Some(captures) => Ok(Some(BranchName::try_parse(&captures[1])?)),
            None => {
                ObjectId::try_parse(&head).map_err(|_| {
                    ObjectError::ReferenceNotFound(format!("malformed HEAD content {head:?}"))
                })?;
                debug!(head = %head, "HEAD is detached");
                Ok(None)
            }
        }
    }

    /// Commit hash stored in `refs/heads/<branch>`.
    pub fn read_branch(&self, branch: &BranchName) -> ObjectResult<ObjectId> {
        let ref_path = branch.ref_path();
        let content = self.read_ref_file(&self.path.join(&ref_path), &ref_path)?;

        ObjectId::try_parse(&content).map_err(|_| {
            ObjectError::ReferenceNotFound(format!("{ref_path} does not hold an object id"))
        })
    }

    /// Every file under `refs/heads`, sorted lexicographically.
    ///
    /// Nested directories produce hierarchical names such as `feature/login`.
    /// Names are listed as found on disk, lock files included.
    pub fn list_branches(&self) -> ObjectResult<Vec<String>> {
        let heads = self.path.join(REF_PREFIX);
        if !heads.is_dir() {
            return Ok(Vec::new());
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&heads).min_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry
                .path()
                .strip_prefix(&heads)
                .map_err(|err| ObjectError::ReferenceNotFound(err.to_string()))?
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            branches.push(name);
        }

        branches.sort();
        Ok(branches)
    }

    fn read_ref_file(&self, path: &Path, name: &str) -> ObjectResult<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(content.trim().to_string()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ObjectError::ReferenceNotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
