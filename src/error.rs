// src/error.rs
//
// Errors raised at the API boundary. Matching itself is total over strings
// and never fails; only malformed caller input ends up here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// A request field is missing or is not a string.
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A mode name that is neither `pass` nor `score`.
    #[error("unknown match mode `{0}` (expected `pass` or `score`)")]
    InvalidMode(String),
}

impl VerifyError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        VerifyError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type VerifyResult<T> = std::result::Result<T, VerifyError>;
