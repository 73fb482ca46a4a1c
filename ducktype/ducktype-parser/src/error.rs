//! Error type for the type-string grammar.

/// Error returned when no grammar production consumes the full input.
///
/// Parsing is all-or-nothing: there are no partial results and no recovery.
/// Callers attach the offending catalog-reported type string themselves when
/// surfacing the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no type production matched at byte offset {offset} (near {near:?})")]
pub struct ParseError {
    /// Byte offset into the original text where the grammar stopped.
    pub offset: usize,
    /// Short snippet of the unconsumed input.
    pub near: String,
}

impl ParseError {
    pub(crate) fn from_unconsumed(text: &str, remaining: &str) -> Self {
        let offset = text.len() - remaining.len();
        let near = remaining.chars().take(24).collect();
        Self { offset, near }
    }
}
