pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Directory (relative to the git directory) holding branch refs.
pub const REF_PREFIX: &str = "refs/heads/";

/// Symbolic ref line stored in `HEAD` when a branch is checked out.
pub const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
