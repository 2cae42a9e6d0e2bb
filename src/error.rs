use thiserror::Error;

/// Constructor argument rejected during validation.
///
/// Carries the name of the offending field and a human-readable reason.
/// This is the only error the library produces; derived accessors never
/// fail once a `Screen` exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid parameter `{field}`: {reason}")]
pub struct InvalidParameter {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidParameter {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
