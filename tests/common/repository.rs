use assert_fs::TempDir;
use assert_fs::prelude::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

use super::{AUTHOR_LINE, COMMITTER_LINE};

/// Writes loose objects and refs into a bare `.git`-style directory.
pub struct GitDirBuilder<'d> {
    dir: &'d TempDir,
}

impl<'d> GitDirBuilder<'d> {
    pub fn new(dir: &'d TempDir) -> Self {
        dir.child("objects").create_dir_all().expect("Failed to create objects dir");
        dir.child("refs/heads").create_dir_all().expect("Failed to create refs dir");
        GitDirBuilder { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Compress and store `<kind> <len>\0<payload>`, returning its hash.
    pub fn object(&self, kind: &str, payload: &[u8]) -> String {
        let mut raw = format!("{kind} {}\0", payload.len()).into_bytes();
        raw.extend_from_slice(payload);
        self.raw_object(&raw)
    }

    /// Store already formatted object bytes (header included).
    pub fn raw_object(&self, raw: &[u8]) -> String {
        let hash = format!("{:x}", Sha1::digest(raw));

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(raw).expect("Failed to compress object");
        let compressed = encoder.finish().expect("Failed to finish compression");

        self.dir
            .child("objects")
            .child(&hash[..2])
            .child(&hash[2..])
            .write_binary(&compressed)
            .expect("Failed to write object");

        hash
    }

    pub fn blob(&self, content: &str) -> String {
        self.object("blob", content.as_bytes())
    }

    /// `entries` are `(mode, name, hash)` triples, stored in the given order.
    pub fn tree(&self, entries: &[(&str, &str, &str)]) -> String {
        let mut payload = Vec::new();
        for (mode, name, hash) in entries {
            payload.extend(format!("{mode} {name}\0").into_bytes());
            payload.extend(hex::decode(hash).expect("Invalid hash in tree entry"));
        }
        self.object("tree", &payload)
    }

    pub fn commit(&self, tree: &str, parents: &[&str], message: &str) -> String {
        let mut body = format!("tree {tree}\n");
        for parent in parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str(&format!("author {AUTHOR_LINE}\n"));
        body.push_str(&format!("committer {COMMITTER_LINE}\n"));
        body.push_str(&format!("\n{message}\n"));

        self.object("commit", body.as_bytes())
    }

    pub fn branch(&self, name: &str, hash: &str) {
        self.dir
            .child("refs/heads")
            .child(name)
            .write_str(&format!("{hash}\n"))
            .expect("Failed to write branch ref");
    }

    pub fn head(&self, branch: &str) {
        self.dir
            .child("HEAD")
            .write_str(&format!("ref: refs/heads/{branch}\n"))
            .expect("Failed to write HEAD");
    }
}
