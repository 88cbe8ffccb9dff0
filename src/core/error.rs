//! Error types for ladder construction and search

/// Failures of a word-ladder run.
///
/// Every variant is terminal for the current run; no partial path is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("source and target word sizes should be equal (got {source_len} and {target_len})")]
    LengthMismatch {
        source_len: usize,
        target_len: usize,
    },

    #[error("source and target words must not be empty")]
    EmptyWord,

    #[error("word index {index} is outside a dictionary of {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("dictionary should contain source and target words: '{word}' not found")]
    WordNotFound { word: String },

    #[error("no sequence between '{from}' and '{to}'")]
    NoPath { from: String, to: String },

    #[error("maximum iterations count reached ({limit})")]
    IterationLimitExceeded { limit: usize },

    #[error("no predecessor for '{word}' at wave {wave}")]
    ReconstructionInvariantViolation { word: String, wave: usize },
}

/// Coarse classification of a [`LadderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input pair cannot be searched at all
    InvalidInput,
    WordNotFound,
    NoPath,
    IterationLimitExceeded,
    /// Internal invariant broken during path reconstruction
    ReconstructionInvariantViolation,
}

impl LadderError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } | Self::EmptyWord | Self::IndexOutOfRange { .. } => {
                ErrorKind::InvalidInput
            }
            Self::WordNotFound { .. } => ErrorKind::WordNotFound,
            Self::NoPath { .. } => ErrorKind::NoPath,
            Self::IterationLimitExceeded { .. } => ErrorKind::IterationLimitExceeded,
            Self::ReconstructionInvariantViolation { .. } => {
                ErrorKind::ReconstructionInvariantViolation
            }
        }
    }

    /// Whether the error describes bad input rather than a failed search
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidInput | ErrorKind::WordNotFound
        )
    }
}
