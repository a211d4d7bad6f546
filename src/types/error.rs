use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The chain rejected the input at its first unmet active condition.
    #[error("{message}")]
    Unmet {
        message: String,
        original_input: Option<String>,
        last_transformed_input: String,
    },

    /// A condition failed but produced no usable message while messages are
    /// required. This is a defect in how the chain was built.
    #[error("condition unmet but no error message is configured")]
    NoMessage,

    #[error("no input has been set")]
    NullInput,
}

impl RuleError {
    /// The failure message, for [`RuleError::Unmet`] only.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unmet { message, .. } => Some(message),
            Self::NoMessage | Self::NullInput => None,
        }
    }
}
