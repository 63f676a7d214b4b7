use std::{fmt, path::PathBuf};

/// Result alias used across the crate.
pub type FlowdeckResult<T> = Result<T, FlowdeckError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which flow directive an error refers to.
pub enum DirectiveKind {
    /// Viewport pan/zoom directive (`focus`).
    Focus,
    /// Outlined rectangle directive (`highlight`).
    Highlight,
}

impl DirectiveKind {
    /// Field name of the directive in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Highlight => "highlight",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Coarse error taxonomy: user input problems vs. broken internal invariants.
pub enum ErrorKind {
    /// The source document or its assets need fixing.
    Input,
    /// An invariant the compiler itself maintains was violated.
    Internal,
}

#[derive(thiserror::Error, Debug)]
/// Error type for every fallible flowdeck operation.
pub enum FlowdeckError {
    /// Document shape problem.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed `focus` / `highlight` directive.
    #[error("{kind} error in flow '{flow}': {message}")]
    Directive {
        /// Qualified id of the offending flow.
        flow: String,
        /// Directive that failed.
        kind: DirectiveKind,
        /// Parser message.
        message: String,
    },

    /// Directive animation ends before it starts.
    #[error("{kind} error in flow '{flow}': end time {end}s is before start time {start}s")]
    NegativeDuration {
        /// Qualified id of the offending flow.
        flow: String,
        /// Directive that failed.
        kind: DirectiveKind,
        /// Start time in seconds.
        start: f64,
        /// End time in seconds.
        end: f64,
    },

    /// One or more referenced assets do not exist.
    #[error("missing asset files: {}", display_paths(.0))]
    MissingAssets(Vec<PathBuf>),

    /// Asset file exists but holds no embeddable `<svg>` element.
    #[error("asset '{}' has no <svg>...</svg> body", .asset.display())]
    MissingBody {
        /// Path of the asset file.
        asset: PathBuf,
    },

    /// Two flows share a qualified id.
    #[error("internal error: duplicate qualified flow id '{0}'")]
    DuplicateFlowId(String),

    /// YAML / JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// IO and anything else, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowdeckError {
    /// Build a [`FlowdeckError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowdeckError::Directive`].
    pub fn directive(flow: impl Into<String>, kind: DirectiveKind, msg: impl Into<String>) -> Self {
        Self::Directive {
            flow: flow.into(),
            kind,
            message: msg.into(),
        }
    }

    /// Build a [`FlowdeckError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateFlowId(_) => ErrorKind::Internal,
            _ => ErrorKind::Input,
        }
    }

    /// Flow or asset the error names, when there is exactly one.
    pub fn subject(&self) -> Option<String> {
        match self {
            Self::Directive { flow, .. } | Self::NegativeDuration { flow, .. } => {
                Some(flow.clone())
            }
            Self::DuplicateFlowId(flow) => Some(flow.clone()),
            Self::MissingBody { asset } => Some(asset.display().to_string()),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for FlowdeckError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::serde(e.to_string())
    }
}

impl From<serde_json::Error> for FlowdeckError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
