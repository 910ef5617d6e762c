use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::history::walk_history;
use crate::errors::ObjectResult;
use anyhow::Context;

impl Repository {
    /// Print the first-parent history of `branch`, newest first.
    ///
    /// The whole history is resolved before anything is written, so a broken
    /// chain prints nothing.
    pub fn log(&self, branch: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(branch)?;
        let tip = self.refs().read_branch(&branch)?;

        let entries = walk_history(self.database(), tip)
            .collect::<ObjectResult<Vec<_>>>()
            .with_context(|| format!("Unable to walk the history of {branch}"))?;

        let rendered = entries
            .iter()
            .map(|entry| entry.render())
            .collect::<Vec<_>>()
            .join("\n\n");

        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }
}
