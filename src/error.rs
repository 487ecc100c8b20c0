//! Library error type.
//!
//! The regression and matching engines never fail: "no result" is a defined
//! outcome and is returned as `None`. `AeroError` covers everything else, such
//! as bad configuration values or a wake survey with too few stations.

/// Broad category of an [`AeroError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A configuration value is missing, unparsable or out of range.
    InvalidConfig,
    /// Not enough usable input to perform the computation.
    InsufficientData,
    /// Input values that cannot be used (e.g. a zero reference area).
    InvalidInput,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::InvalidConfig => "invalid config",
            ErrorKind::InsufficientData => "insufficient data",
            ErrorKind::InvalidInput => "invalid input",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AeroError {
    kind: ErrorKind,
    message: String,
}

impl AeroError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

impl std::fmt::Debug for AeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeroError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AeroError {}
