use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

impl Repository {
    /// Print any object in its kind-specific form.
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;

        let object = self
            .database()
            .parse_object(&oid)
            .with_context(|| format!("Unable to read object {oid}"))?;

        writeln!(self.writer(), "{}", object.display())?;

        Ok(())
    }
}
