use crate::areas::repository::Repository;
use crate::artifacts::log::tree_walk::walk_tree;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

impl Repository {
    /// Print every file path in the tree of a commit.
    pub fn commit_tree(&self, commit_sha: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(commit_sha)?;

        let commit = self
            .database()
            .parse_object_as_commit(&oid)
            .with_context(|| format!("{oid} is not a readable commit"))?;

        let paths = walk_tree(self.database(), commit.tree())
            .with_context(|| format!("Unable to walk tree {}", commit.tree()))?;

        let mut writer = self.writer();
        for path in paths {
            writeln!(writer, "{path}")?;
        }

        Ok(())
    }
}
