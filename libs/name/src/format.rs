//! Compiled name formats: parsing, generation, and composition.

use crate::bindings::Bindings;
use crate::error::NameError;
use crate::id::ResourceId;
use crate::segment::Segment;

/// A compiled resource-name template.
///
/// A format is an ordered list of segment matchers compiled from a
/// template such as `stores/{store}/products/{product}`. Segments pair
/// up as collection/resource: even positions hold literals, odd
/// positions hold variables, and the total count is even. A format is
/// immutable once compiled; every operation borrows it read-only, so a
/// shared reference is safe across threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    segments: Vec<Segment>,
}

impl Format {
    /// Compiles a template string into a format.
    ///
    /// Fails on the first invalid segment. Empty templates and empty
    /// segments (from leading, trailing, or doubled slashes) are compile
    /// errors, as is any segment that breaks collection/resource
    /// pairing.
    pub fn compile(template: &str) -> Result<Self, NameError> {
        if template.is_empty() {
            return Err(NameError::EmptyTemplate);
        }
        let mut segments = Vec::new();
        for raw in template.split('/') {
            segments.push(Segment::compile(raw)?);
        }
        Self::check_pairing(&segments)?;
        Ok(Self { segments })
    }

    /// Every collection literal must be followed by exactly one variable.
    fn check_pairing(segments: &[Segment]) -> Result<(), NameError> {
        for (idx, segment) in segments.iter().enumerate() {
            let wants_literal = idx % 2 == 0;
            if wants_literal != segment.is_literal() {
                return Err(NameError::UnpairedSegment(segment.to_string()));
            }
        }
        if let Some(last) = segments.last() {
            if segments.len() % 2 != 0 {
                return Err(NameError::UnpairedSegment(last.to_string()));
            }
        }
        Ok(())
    }

    /// Parses a concrete name, capturing one id per variable segment.
    ///
    /// All-or-nothing: the first mismatch fails the whole parse with the
    /// reason (wrong segment count, wrong collection word, or a segment
    /// that is not a valid resource id).
    pub fn parse(&self, name: &str) -> Result<Bindings, NameError> {
        let parts: Vec<&str> = name.split('/').collect();
        if parts.len() != self.segments.len() {
            return Err(NameError::LengthMismatch {
                expected: self.segments.len(),
                actual: parts.len(),
            });
        }
        let mut bindings = Bindings::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(id) => {
                    if id != part {
                        return Err(NameError::LiteralMismatch {
                            expected: id.as_str().to_string(),
                            actual: part.to_string(),
                        });
                    }
                }
                Segment::Variable(var) => {
                    let id = ResourceId::parse(part)?;
                    bindings.set(var.clone(), id);
                }
            }
        }
        Ok(bindings)
    }

    /// Validates a name against this format, discarding the bindings.
    pub fn validate(&self, name: &str) -> Result<(), NameError> {
        self.parse(name).map(|_| ())
    }

    /// Renders a name from bindings: literals verbatim, variables from
    /// their bound ids in canonical form.
    ///
    /// Bindings not named by this format are ignored, which lets a
    /// parent format regenerate a prefix from a child's full binding
    /// set.
    pub fn generate(&self, bindings: &Bindings) -> Result<String, NameError> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(id) => parts.push(id.as_str().to_string()),
                Segment::Variable(var) => {
                    let id = bindings
                        .get(var)
                        .ok_or_else(|| NameError::MissingBinding(var.clone()))?;
                    parts.push(id.to_string());
                }
            }
        }
        Ok(parts.join("/"))
    }

    /// Extends this format with additional trailing segments.
    ///
    /// The suffix must itself be a valid template (so it begins with a
    /// collection literal), and must not rebind a variable this format
    /// already names.
    pub fn append(&self, suffix: &str) -> Result<Self, NameError> {
        let tail = Self::compile(suffix)?;
        for var in tail.variables() {
            if self.has_variable(var) {
                return Err(NameError::DuplicateVariable(var.to_string()));
            }
        }
        let mut segments = self.segments.clone();
        segments.extend(tail.segments);
        Ok(Self { segments })
    }

    /// Derives the parent name of `name` by parsing it fully against
    /// this (child) format and regenerating through `parent`.
    ///
    /// The whole name is validated, including the trailing child
    /// segments; a name that does not belong to this format fails
    /// instead of producing a truncated parent.
    pub fn parent(&self, name: &str, parent: &Format) -> Result<String, NameError> {
        let bindings = self.parse(name)?;
        parent.generate(&bindings)
    }

    /// Returns the number of segments, counting collections and
    /// variables both.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the compiled segments in order.
    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the variable names in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments().iter().filter_map(Segment::variable)
    }

    /// Returns true if this format binds `var`.
    pub fn has_variable(&self, var: &str) -> bool {
        self.variables().any(|v| v == var)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Format {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}
