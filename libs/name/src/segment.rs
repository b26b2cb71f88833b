//! Segment matchers: the per-position variants of a compiled format.

use crate::error::NameError;
use crate::grammar;
use crate::id::CollectionId;

/// One position in a compiled name format.
///
/// A literal matches exactly its collection id. A variable matches any
/// syntactically valid resource id and captures it under the variable
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fixed collection segment, e.g. `stores`.
    Literal(CollectionId),
    /// A resource-id capture, e.g. `{store}`.
    Variable(String),
}

impl Segment {
    /// Compiles one raw template segment.
    ///
    /// `stores` compiles to a literal and `{store}` to a variable;
    /// anything else is an invalid segment. The two shapes are mutually
    /// exclusive, since a collection id never contains braces.
    pub(crate) fn compile(raw: &str) -> Result<Self, NameError> {
        if let Ok(id) = CollectionId::new(raw) {
            return Ok(Segment::Literal(id));
        }
        if let Some(var) = variable_name(raw) {
            return Ok(Segment::Variable(var.to_string()));
        }
        Err(NameError::InvalidSegment(raw.to_string()))
    }

    /// Returns true iff `s` matches this segment.
    pub fn matches(&self, s: &str) -> bool {
        match self {
            Segment::Literal(id) => id == s,
            Segment::Variable(_) => grammar::is_resource_id(s),
        }
    }

    /// Returns the variable name if this is a variable segment.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Segment::Variable(var) => Some(var),
            Segment::Literal(_) => None,
        }
    }

    /// Returns true if this is a literal collection segment.
    pub(crate) fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal(id) => write!(f, "{}", id),
            Segment::Variable(var) => write!(f, "{{{}}}", var),
        }
    }
}

/// Extracts the variable name from a `{name}` segment, if well-formed.
///
/// Variable names use the collection-id charset.
fn variable_name(raw: &str) -> Option<&str> {
    let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
    grammar::is_collection_id(inner).then_some(inner)
}
