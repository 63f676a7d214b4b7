use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Grammar error inside one directive string.
pub struct DirectiveError {
    /// Byte offset into the (trimmed) directive.
    pub offset: usize,
    /// What went wrong.
    pub message: String,
}

impl DirectiveError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for DirectiveError {}
