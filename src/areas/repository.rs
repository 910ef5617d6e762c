use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tracing::debug;

/// A git directory opened for inspection, plus the sink command output goes to.
pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the git directory at `path` (the `.git` directory itself).
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Unable to open git directory {path}"))?;

        if !path.join("objects").is_dir() {
            anyhow::bail!("{} is not a git directory", path.display());
        }

        let database = Database::new(path.join("objects").into_boxed_path());
        let refs = Refs::new(path.into_boxed_path());
        debug!(objects = %database.objects_path().display(), "opened repository");

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
