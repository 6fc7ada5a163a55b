use thiserror::Error;

/// Canonical result for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The only way an operator reports failure.
///
/// Shape checks that can run without touching the source fail when the
/// operator is constructed. Checks that need to observe an element fail when
/// that element is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        crate::log::debug!(op, %reason, "invalid argument");
        Error::InvalidArgument { op, reason }
    }

    /// Name of the operation that rejected its arguments.
    pub fn op(&self) -> &'static str {
        match self {
            Error::InvalidArgument { op, .. } => op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation() {
        let err = Error::invalid("aperture", "size must be positive, got 0");
        assert_eq!(err.op(), "aperture");
        assert_eq!(err.to_string(), "aperture: size must be positive, got 0");
    }
}
