//! Navigation target types for drawer links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category segment of a drawer navigation path.
///
/// Kinds are host-defined path vocabulary (`"task"`, `"version"`, ...) and
/// are never validated; unknown values pass through to the generated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkKind(String);

impl LinkKind {
    /// Well-known kind for links that point at task pages.
    pub const TASK: &'static str = "task";

    /// Creates a link kind from a host-supplied value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the kind as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the link points at a task page.
    #[must_use]
    pub fn is_task(&self) -> bool {
        self.0 == Self::TASK
    }
}

impl From<&str> for LinkKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier segment of a drawer navigation path.
///
/// Hosts supply ids either as free-form text (revision hashes, task keys) or
/// as numbers; both render verbatim into the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkId {
    /// Identifier supplied as free-form text.
    Text(String),
    /// Identifier supplied as a number.
    Number(u64),
}

impl LinkId {
    /// Creates a text identifier.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a numeric identifier.
    #[must_use]
    pub const fn number(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for LinkId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Supplies the optional `#fragment` appended to a drawer link.
///
/// The source is invoked every time a href is computed, so fragments that
/// depend on host state stay current without an explicit update path.
pub trait FragmentSource {
    /// Returns the fragment value, without the leading `#`.
    fn fragment(&self) -> String;
}

impl<F> FragmentSource for F
where
    F: Fn() -> String,
{
    fn fragment(&self) -> String {
        self()
    }
}

/// Describes how to construct a drawer navigation target.
///
/// A spec lives for the component's render lifecycle and owns its fragment
/// source; the kind and id are bound once at construction.
pub struct LinkSpec {
    kind: LinkKind,
    id: LinkId,
    fragment: Option<Box<dyn FragmentSource + Send + Sync>>,
}

impl LinkSpec {
    /// Creates a spec without a fragment source.
    #[must_use]
    pub const fn new(kind: LinkKind, id: LinkId) -> Self {
        Self {
            kind,
            id,
            fragment: None,
        }
    }

    /// Binds a fragment source invoked at href-computation time.
    #[must_use]
    pub fn with_fragment(mut self, source: impl FragmentSource + Send + Sync + 'static) -> Self {
        self.fragment = Some(Box::new(source));
        self
    }

    /// Returns the link kind.
    #[must_use]
    pub const fn kind(&self) -> &LinkKind {
        &self.kind
    }

    /// Returns the link id.
    #[must_use]
    pub const fn id(&self) -> &LinkId {
        &self.id
    }

    /// Computes the navigation path: `/{kind}/{id}`, plus `#{fragment}` when
    /// a fragment source is bound.
    ///
    /// Pure with respect to the current bindings; safe to call repeatedly.
    /// Empty kind or id segments produce a malformed path rather than an
    /// error.
    #[must_use]
    pub fn href(&self) -> String {
        let mut href = format!("/{}/{}", self.kind, self.id);
        if let Some(source) = &self.fragment {
            href.push('#');
            href.push_str(&source.fragment());
        }
        href
    }
}

impl fmt::Debug for LinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkSpec")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("fragment", &self.fragment.as_ref().map(|_| "<source>"))
            .finish()
    }
}
