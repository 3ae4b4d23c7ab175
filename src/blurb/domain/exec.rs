//! Execution state attached to revisions for display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Execution status data shown next to a revision link.
///
/// The status keyword is host vocabulary (`"started"`, `"success"`, ...)
/// and is not validated here; templates branch on it directly. Revisions
/// without execution data display the [`ExecState::INACTIVE`] placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecState {
    /// Display status keyword.
    #[serde(default = "ExecState::inactive_keyword")]
    pub status: String,
    /// Remaining task fields, carried through for templates.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ExecState {
    /// Status keyword for revisions with no execution data.
    pub const INACTIVE: &'static str = "inactive";

    /// Creates an execution state with the given status keyword.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Creates the placeholder state for revisions without execution data.
    #[must_use]
    pub fn inactive() -> Self {
        Self::new(Self::INACTIVE)
    }

    /// Adds a carried task field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns `true` when the state holds real execution data rather than
    /// the inactive placeholder.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != Self::INACTIVE
    }

    fn inactive_keyword() -> String {
        Self::INACTIVE.to_owned()
    }
}

impl Default for ExecState {
    fn default() -> Self {
        Self::inactive()
    }
}

impl fmt::Display for ExecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status)
    }
}
