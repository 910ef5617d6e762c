use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{ObjectError, ObjectResult};
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name pattern is a valid regex")
});

/// A branch name relative to `refs/heads/`, e.g. `main` or `feature/login`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a user supplied branch name
    ///
    /// Names that could never be stored under `refs/heads` (empty, `..`,
    /// leading `/`, control characters, ...) resolve to no reference at all.
    pub fn try_parse(name: impl Into<String>) -> ObjectResult<Self> {
        let name = name.into();

        if name.is_empty() || INVALID_BRANCH_NAME.is_match(&name) {
            return Err(ObjectError::ReferenceNotFound(format!(
                "invalid branch name {name:?}"
            )));
        }

        Ok(Self(name))
    }

    /// Path of the ref file relative to the git directory.
    pub fn ref_path(&self) -> String {
        format!("{}{}", super::REF_PREFIX, self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
