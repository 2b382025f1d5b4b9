use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was missing or malformed. Detected before any arithmetic runs.
    InvalidArgument,
    /// The inputs were present but semantically unusable together.
    IllegalState,
}

/// Errors returned when building parameters, creating shares or recovering secrets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter builder was finished without setting a required field.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A parameter was set to a value the scheme cannot work with.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The share collection contained an empty slot.
    #[error("share at position {position} is missing")]
    MissingShare { position: usize },

    /// The secret is not an element of the field, i.e. not strictly less than the prime.
    #[error("secret must be strictly less than the prime")]
    SecretOutOfRange,

    /// Two shares claimed the same evaluation point.
    #[error("duplicate share index {index}")]
    DuplicateShareIndex { index: u32 },

    /// Fewer distinct shares than the threshold were supplied.
    #[error("not enough shares to recover (need {required}, got {provided})")]
    NotEnoughShares { required: usize, provided: usize },

    /// A share index is zero or not a distinct non-zero element of the field.
    #[error("share index {index} is not a valid evaluation point")]
    InvalidShareIndex { index: u32 },

    /// The difference of two share indices has no inverse modulo the prime,
    /// so the prime is not actually prime.
    #[error("share indices are not invertible modulo the prime")]
    NonInvertibleIndices,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingParameter(_) | Error::InvalidParameter(_) | Error::MissingShare { .. } => {
                ErrorKind::InvalidArgument
            }
            Error::SecretOutOfRange
            | Error::DuplicateShareIndex { .. }
            | Error::NotEnoughShares { .. }
            | Error::InvalidShareIndex { .. }
            | Error::NonInvertibleIndices => ErrorKind::IllegalState,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn kinds_are_split_by_detection_stage() {
        assert_eq!(Error::MissingParameter("prime").kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::MissingShare { position: 3 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::InvalidParameter("prime must be at least 2").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::SecretOutOfRange.kind(), ErrorKind::IllegalState);
        assert_eq!(Error::InvalidShareIndex { index: 0 }.kind(), ErrorKind::IllegalState);
        assert_eq!(Error::NonInvertibleIndices.kind(), ErrorKind::IllegalState);
        assert_eq!(Error::DuplicateShareIndex { index: 1 }.kind(), ErrorKind::IllegalState);
        assert_eq!(
            Error::NotEnoughShares {
                required: 3,
                provided: 2
            }
            .kind(),
            ErrorKind::IllegalState
        );
    }

    #[test]
    fn display_includes_context() {
        let err = Error::NotEnoughShares {
            required: 10,
            provided: 9,
        };
        assert_eq!(err.to_string(), "not enough shares to recover (need 10, got 9)");
    }
}
