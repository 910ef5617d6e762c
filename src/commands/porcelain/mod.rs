//! Porcelain commands (branch-level views)
//!
//! - `list-branches`: list branches, marking the one HEAD points to
//! - `log`: first-parent history of a branch

pub mod branch;
pub mod log;
