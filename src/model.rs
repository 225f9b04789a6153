//! Core data model.
//!
//! A request is identified by the pair (base public key, normalized prefix).
//! Each identity maps to exactly one job, which moves from `Pending` to a
//! terminal state once and is never mutated again.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::Result;
use crate::validate;

/// Identity of a mining request: the validated base public key plus the
/// normalized prefix. The two-field struct keys the job store directly, so
/// distinct (key, prefix) pairs can never alias the way a concatenated
/// string key could.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId {
    base_key: String,
    prefix: String,
}

impl RequestId {
    /// Validate and normalize the raw caller inputs into an identity.
    ///
    /// Fails with `InvalidBaseKey` / `InvalidPrefix`; the bit-budget check is
    /// deliberately not here — it depends on pool configuration.
    pub fn checked(base_key: &str, prefix: &str) -> Result<Self> {
        validate::validate_base_key(base_key)?;
        let prefix = validate::normalize_prefix(prefix);
        validate::validate_prefix(&prefix)?;
        Ok(Self {
            base_key: base_key.to_string(),
            prefix,
        })
    }

    pub fn base_key(&self) -> &str {
        &self.base_key
    }

    /// The normalized prefix (wildcards are `.`).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: prefix plus the first 8 chars of the base key
        write!(f, "{}:{}", self.prefix, &self.base_key[..8])
    }
}

/// State of a job in the store.
///
/// Terminal states are immutable: once a poller has observed `Completed` or
/// `Failed` for an identity, every later poll returns the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Created and queued (or running); carries no result yet.
    Pending,
    /// Mining succeeded; holds the 64-hex result key.
    Completed { result: String },
    /// Mining failed; holds a generic caller-safe description.
    Failed { error: String },
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Pending)
    }
}

/// Wire projection: `{}` while pending, `{"result": ...}` or
/// `{"error": ...}` once terminal.
impl Serialize for JobState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            JobState::Pending => serializer.serialize_map(Some(0))?.end(),
            JobState::Completed { result } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("result", result)?;
                map.end()
            }
            JobState::Failed { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
