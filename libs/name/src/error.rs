//! Error types for name-format compilation, parsing, and generation.

use thiserror::Error;

/// Errors that can occur when compiling name formats or handling names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The format template is empty.
    #[error("empty name format template")]
    EmptyTemplate,

    /// A template segment is neither a collection id nor a `{variable}`.
    #[error("invalid format segment: '{0}'")]
    InvalidSegment(String),

    /// A template segment breaks the collection/resource pairing.
    #[error("segment '{0}' breaks collection/resource pairing")]
    UnpairedSegment(String),

    /// Two composed formats bind the same variable name.
    #[error("duplicate variable '{0}' in composed format")]
    DuplicateVariable(String),

    /// The string is not a valid collection id.
    #[error("invalid collection id: '{0}'")]
    InvalidCollectionId(String),

    /// The string is not a valid resource id.
    #[error("invalid resource id: '{0}'")]
    InvalidResourceId(String),

    /// The name has the wrong number of `/`-separated segments.
    #[error("expected {expected} name segments, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A fixed collection segment does not match the format.
    #[error("expected collection '{expected}', got '{actual}'")]
    LiteralMismatch { expected: String, actual: String },

    /// Generation needed a variable with no bound value.
    #[error("missing binding for variable '{0}'")]
    MissingBinding(String),
}

impl NameError {
    /// Returns true if this error indicates a programming error rather
    /// than malformed user input.
    ///
    /// Templates and generation bindings are code-owned; names come from
    /// callers. Non-defects map to an invalid-argument response at the
    /// RPC boundary.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            NameError::EmptyTemplate
                | NameError::InvalidSegment(_)
                | NameError::UnpairedSegment(_)
                | NameError::DuplicateVariable(_)
                | NameError::MissingBinding(_)
        )
    }
}
