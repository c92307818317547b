use thiserror::Error;

/// The core's only error kind. Raised before any state change, so a failed
/// call leaves the model exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument: {reason}")]
pub struct InvalidArgument {
    reason: String,
}

impl InvalidArgument {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
