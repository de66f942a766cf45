use thiserror::Error;

/// Errors raised by the simulation primitives.
///
/// Everything here is a configuration mistake caught at the call site; there is
/// no I/O and nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
