//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! Depending on how many `parent` lines they carry they come in three shapes:
//! root (none), simple (one) and merge (two).
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>          (0, 1 or 2 times)
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The body is parsed by threading a [`CommitBuilder`] through each field of
//! that grammar in order. Each step either consumes its line or leaves it for
//! the next one.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectHeader;
use crate::errors::{ObjectError, ObjectResult};
use chrono::{DateTime, FixedOffset};

const TREE_LABEL: &str = "tree";
const PARENT_LABEL: &str = "parent";
const AUTHOR_LABEL: &str = "author";
const COMMITTER_LABEL: &str = "committer";

/// Author or committer of a commit
///
/// `timestamp` is the recorded instant already shifted into the recorded
/// `timezone`, so formatting it yields the wall-clock time of the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
    timezone: String,
}

impl Signature {
    /// Parse `"<name> <<email>> <epoch-seconds> <+HHMM>"`
    ///
    /// Splits from the right so names may contain spaces.
    fn parse(label: &'static str, line: &str, value: &str) -> ObjectResult<Self> {
        let malformed = |reason: &str| ObjectError::MalformedAuthorLine {
            label,
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        let &[timezone, epoch_seconds, identity] = parts.as_slice() else {
            return Err(malformed("expected name, email, timestamp and timezone"));
        };

        let email_start = identity.find('<').ok_or_else(|| malformed("missing '<'"))?;
        let email_end = identity.rfind('>').ok_or_else(|| malformed("missing '>'"))?;
        if email_end < email_start {
            return Err(malformed("email brackets out of order"));
        }

        let name = identity[..email_start].trim().to_string();
        let email = identity[email_start + 1..email_end].to_string();

        let epoch_seconds = epoch_seconds
            .parse::<i64>()
            .map_err(|_| malformed("timestamp is not a number of seconds"))?;
        let offset = parse_offset(timezone).ok_or_else(|| malformed("invalid timezone offset"))?;
        let timestamp = DateTime::from_timestamp(epoch_seconds, 0)
            .ok_or_else(|| malformed("timestamp out of range"))?
            .with_timezone(&offset);

        Ok(Signature {
            name,
            email,
            timestamp,
            timezone: timezone.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// The offset token exactly as recorded (e.g. `+0300`).
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Name and email without angle brackets.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.email)
    }

    /// Local wall-clock time, e.g. `2020-03-29 17:18:20 +03:00`.
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S %:z").to_string()
    }
}

/// Accepts `+HHMM`, `-HHMM` and `+HH:MM`.
fn parse_offset(timezone: &str) -> Option<FixedOffset> {
    let (sign, digits) = match timezone.split_at_checked(1)? {
        ("+", digits) => (1, digits),
        ("-", digits) => (-1, digits),
        _ => return None,
    };

    let digits = digits.replacen(':', "", 1);
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours = digits[..2].parse::<i32>().ok()?;
    let minutes = digits[2..].parse::<i32>().ok()?;
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Fields shared by every commit shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub header: ObjectHeader,
    pub oid: ObjectId,
    pub tree: ObjectId,
    pub author: Signature,
    pub committer: Signature,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Root(CommitInfo),
    Simple {
        info: CommitInfo,
        parent: ObjectId,
    },
    Merge {
        info: CommitInfo,
        parent: ObjectId,
        merged_parent: ObjectId,
    },
}

impl Commit {
    /// Parse the commit body (everything after the header token).
    pub fn parse(header: ObjectHeader, oid: ObjectId, body: &str) -> ObjectResult<Self> {
        let lines = body.lines().collect::<Vec<_>>();

        let builder = CommitBuilder::tree(&lines)?
            .first_parent()?
            .second_parent()?
            .author()?
            .committer()?
            .message();

        Ok(builder.finish(header, oid))
    }

    pub fn info(&self) -> &CommitInfo {
        match self {
            Commit::Root(info) | Commit::Simple { info, .. } | Commit::Merge { info, .. } => info,
        }
    }

    pub fn tree(&self) -> &ObjectId {
        &self.info().tree
    }

    /// First parent, followed when walking history.
    pub fn parent(&self) -> Option<&ObjectId> {
        match self {
            Commit::Root(_) => None,
            Commit::Simple { parent, .. } | Commit::Merge { parent, .. } => Some(parent),
        }
    }

    pub fn merged_parent(&self) -> Option<&ObjectId> {
        match self {
            Commit::Merge { merged_parent, .. } => Some(merged_parent),
            Commit::Root(_) | Commit::Simple { .. } => None,
        }
    }

    pub fn author(&self) -> &Signature {
        &self.info().author
    }

    pub fn committer(&self) -> &Signature {
        &self.info().committer
    }

    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Three-part log entry: id line, committer line, message.
    ///
    /// `annotation` is appended to the id, e.g. `(merged)`.
    pub fn to_log_entry(&self, annotation: Option<&str>) -> String {
        let committer = self.committer();
        let id = match annotation {
            Some(annotation) => format!("{} {annotation}", self.oid()),
            None => self.oid().to_string(),
        };

        format!(
            "Commit: {id}\n{} commit timestamp: {}\n{}",
            committer.display_name(),
            committer.readable_timestamp(),
            self.message()
        )
    }
}

impl Object for Commit {
    fn header(&self) -> &ObjectHeader {
        &self.info().header
    }

    fn oid(&self) -> &ObjectId {
        &self.info().oid
    }

    fn display(&self) -> String {
        let mut lines = vec!["*COMMIT*".to_string(), format!("tree: {}", self.tree())];

        match self {
            Commit::Root(_) => {}
            Commit::Simple { parent, .. } => lines.push(format!("parents: {parent}")),
            Commit::Merge {
                parent,
                merged_parent,
                ..
            } => lines.push(format!("parents: {parent} | {merged_parent}")),
        }

        let (author, committer) = (self.author(), self.committer());
        lines.push(format!(
            "author: {} original timestamp: {}",
            author.display_name(),
            author.readable_timestamp()
        ));
        lines.push(format!(
            "committer: {} commit timestamp: {}",
            committer.display_name(),
            committer.readable_timestamp()
        ));
        lines.push("commit message:".to_string());
        lines.push(self.message().to_string());

        lines.join("\n")
    }
}

/// Partially parsed commit carried through the field grammar.
///
/// `tail` holds the lines not yet consumed. Every step takes the builder by
/// value and returns the next one.
#[derive(Debug, Clone)]
struct CommitBuilder<'l> {
    tree: ObjectId,
    parent: Option<ObjectId>,
    merged_parent: Option<ObjectId>,
    author: Option<Signature>,
    committer: Option<Signature>,
    message: Option<String>,
    tail: &'l [&'l str],
}

impl<'l> CommitBuilder<'l> {
    fn tree(lines: &'l [&'l str]) -> ObjectResult<Self> {
        let (line, tail) = lines
            .split_first()
            .ok_or_else(|| ObjectError::MissingTreeField(String::new()))?;

        let tree = match split_label(line) {
            (TREE_LABEL, hash) => ObjectId::try_parse(hash)?,
            _ => return Err(ObjectError::MissingTreeField(line.to_string())),
        };

        Ok(CommitBuilder {
            tree,
            parent: None,
            merged_parent: None,
            author: None,
            committer: None,
            message: None,
            tail,
        })
    }

    fn first_parent(self) -> ObjectResult<Self> {
        match self.next_labelled(PARENT_LABEL) {
            Some((hash, tail)) => Ok(CommitBuilder {
                parent: Some(ObjectId::try_parse(hash)?),
                tail,
                ..self
            }),
            None => Ok(self),
        }
    }

    fn second_parent(self) -> ObjectResult<Self> {
        match self.next_labelled(PARENT_LABEL) {
            Some((hash, tail)) => {
                if self.parent.is_none() {
                    return Err(ObjectError::SecondParentWithoutFirst(hash.to_string()));
                }

                Ok(CommitBuilder {
                    merged_parent: Some(ObjectId::try_parse(hash)?),
                    tail,
                    ..self
                })
            }
            None => Ok(self),
        }
    }

    fn author(self) -> ObjectResult<Self> {
        let (author, tail) = self.signature(AUTHOR_LABEL)?;

        Ok(CommitBuilder {
            author: Some(author),
            tail,
            ..self
        })
    }

    fn committer(self) -> ObjectResult<Self> {
        let (committer, tail) = self.signature(COMMITTER_LABEL)?;

        Ok(CommitBuilder {
            committer: Some(committer),
            tail,
            ..self
        })
    }

    /// Everything left is the message, minus the one blank separator line.
    fn message(self) -> Self {
        let body = match self.tail.split_first() {
            Some((first, rest)) if first.is_empty() => rest,
            _ => self.tail,
        };

        CommitBuilder {
            message: Some(body.join("\n")),
            tail: &[],
            ..self
        }
    }

    fn finish(self, header: ObjectHeader, oid: ObjectId) -> Commit {
        const INCOMPLETE: &str = "commit grammar completed without every required field";

        let info = CommitInfo {
            header,
            oid,
            tree: self.tree,
            author: self.author.expect(INCOMPLETE),
            committer: self.committer.expect(INCOMPLETE),
            message: self.message.expect(INCOMPLETE),
        };

        match (self.parent, self.merged_parent) {
            (None, None) => Commit::Root(info),
            (Some(parent), None) => Commit::Simple { info, parent },
            (Some(parent), Some(merged_parent)) => Commit::Merge {
                info,
                parent,
                merged_parent,
            },
            (None, Some(_)) => unreachable!("merged parent recorded without a first parent"),
        }
    }

    /// The value of the next line when it carries `label`, with the remaining tail.
    fn next_labelled(&self, label: &str) -> Option<(&'l str, &'l [&'l str])> {
        let tail: &'l [&'l str] = self.tail;
        let (line, tail) = tail.split_first()?;

        match split_label(*line) {
            (found, value) if found == label => Some((value, tail)),
            _ => None,
        }
    }

    fn signature(&self, label: &'static str) -> ObjectResult<(Signature, &'l [&'l str])> {
        let line = self.tail.first().copied().unwrap_or_default();

        match self.next_labelled(label) {
            Some((value, tail)) => Ok((Signature::parse(label, line, value)?, tail)),
            None => Err(ObjectError::MalformedAuthorLine {
                label,
                line: line.to_string(),
                reason: format!("expected a line starting with '{label}'"),
            }),
        }
    }
}

fn split_label(line: &str) -> (&str, &str) {
    line.split_once(' ').unwrap_or((line, ""))
}
