use crate::areas::repository::Repository;
use colored::Colorize;
use tracing::debug;

const CURRENT_BRANCH_MARKER: &str = "*";

impl Repository {
    /// List branches in name order, marking the one HEAD points to.
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let branches = self.refs().list_branches()?;
        let current = self.refs().current_branch()?;
        debug!(current = ?current, count = branches.len(), "listing branches");

        let mut writer = self.writer();
        for branch in branches {
            if current.as_ref().is_some_and(|current| current.as_ref() == branch) {
                writeln!(writer, "{} {}", CURRENT_BRANCH_MARKER, branch.green())?;
            } else {
                writeln!(writer, "  {branch}")?;
            }
        }

        Ok(())
    }
}
