//! Read-only inspection of a git object database.
//!
//! Loose objects are inflated and decoded into typed blobs, trees and
//! commits without calling any git tooling. On top of those sit the branch
//! listing, first-parent history and flattened tree views.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
