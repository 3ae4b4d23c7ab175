//! The externally owned revision record and its normalization rule.

use super::ExecState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A versioned entity shown in the drawer.
///
/// The record is owned by the host application; this crate only reads the
/// optional task execution data and derives a normalized `exec` state from
/// it. Host fields outside the modeled shape are carried through
/// [`Revision::fields`] so templates can still reach them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Execution data for the associated task, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<ExecState>,
    /// Normalized execution state; defined after [`Revision::normalize_exec`]
    /// runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecState>,
    /// Remaining revision fields, carried through for templates.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Revision {
    /// Creates an empty revision record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches task execution data.
    #[must_use]
    pub fn with_task(mut self, task: ExecState) -> Self {
        self.task = Some(task);
        self
    }

    /// Adds a carried revision field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns the execution state to display: a snapshot of the task data
    /// when present, the inactive placeholder otherwise.
    #[must_use]
    pub fn display_exec(&self) -> ExecState {
        self.task.clone().unwrap_or_default()
    }

    /// Rewrites `exec` so it always holds a defined state.
    ///
    /// Any pre-existing `exec` value is overwritten: the task data wins when
    /// present, the inactive placeholder otherwise. The stored state is a
    /// snapshot; mutating `task` afterwards does not change it.
    pub fn normalize_exec(&mut self) {
        self.exec = Some(self.display_exec());
    }
}
