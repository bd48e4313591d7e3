use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Input that is not a 6-digit hex color.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color {input:?}: {reason}")]
pub struct FormatError {
    pub input: String,
    pub reason: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(input: &str, reason: FormatErrorKind) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Digit count after stripping `#`.
    WrongLength(usize),
    InvalidDigit,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::WrongLength(n) => write!(f, "expected 6 hex digits, found {n}"),
            FormatErrorKind::InvalidDigit => f.write_str("not a base-16 digit"),
        }
    }
}
