//! On-disk repository components
//!
//! - `database`: loose object lookup and decompression
//! - `refs`: HEAD and branch references
//! - `repository`: ties both to the directory being inspected and the output writer

pub mod database;
pub mod refs;
pub mod repository;
