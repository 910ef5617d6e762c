#![allow(dead_code)]

pub mod command;
pub mod repository;

pub const AUTHOR_LINE: &str = "Kate <kate@example.com> 1585491500 +0300";
pub const COMMITTER_LINE: &str = "Kate <kate@example.com> 1585492000 +0300";
pub const AUTHOR_TIMESTAMP: &str = "2020-03-29 17:18:20 +03:00";
pub const COMMITTER_TIMESTAMP: &str = "2020-03-29 17:26:40 +03:00";
