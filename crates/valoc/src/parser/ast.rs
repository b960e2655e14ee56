//! Public AST types for message templates.
//!
//! These types are public to enable external tooling (translation linters,
//! coverage checkers) to inspect parsed templates.

/// A parsed message template containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over the placeholder segments of this template.
    pub fn placeholders(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder { .. }))
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text (no substitution).
    Literal(String),
    /// A placeholder token: `{field}`, `{min}`, `{0}`, or `0:{min}`.
    Placeholder {
        /// Zero-based positional index, when the token carries one.
        ///
        /// `Some` for `{0}` and for the prefixed form `0:{min}`; `None`
        /// for plain named tokens.
        position: Option<usize>,
        /// The lookup name. For a bare numeric token this is the digit
        /// text itself, so `{0}` can match a literal `"0"` key when the
        /// rule parameters are a named mapping.
        name: String,
        /// The token exactly as it appeared in the source, used to
        /// restore unresolved placeholders verbatim.
        raw: String,
    },
}
