use std::fmt;

use super::entry::ErrorMessage;

/// One point in the chain where the running input was overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRecord {
    pub index: usize,
    pub input: String,
}

/// Outcome of evaluating a [`RuleChain`](super::RuleChain) once.
///
/// Returned by [`RuleChain::evaluate()`](super::RuleChain::evaluate). Holds the
/// first failing entry (if any), the original input the chain evaluated, and
/// every transform applied up to the point evaluation stopped.
#[derive(Debug, Clone)]
#[must_use]
pub struct ValidationStatus {
    failed: Option<(usize, ErrorMessage)>,
    input: Option<String>,
    transforms: Vec<TransformRecord>,
}

impl ValidationStatus {
    pub(crate) fn new(
        failed: Option<(usize, ErrorMessage)>,
        input: Option<String>,
        transforms: Vec<TransformRecord>,
    ) -> Self {
        Self {
            failed,
            input,
            transforms,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_none()
    }

    /// Index of the first unmet entry. Index 0 is the chain's initial entry.
    #[must_use]
    pub fn failed_index(&self) -> Option<usize> {
        self.failed.as_ref().map(|(index, _)| *index)
    }

    /// Message producer of the first unmet entry, as it was when evaluated.
    #[must_use]
    pub fn error_message(&self) -> Option<&ErrorMessage> {
        self.failed.as_ref().map(|(_, message)| message)
    }

    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    #[must_use]
    pub fn transforms(&self) -> &[TransformRecord] {
        &self.transforms
    }

    /// The most recent transform, falling back to the original input.
    #[must_use]
    pub fn last_transformed_input(&self) -> Option<&str> {
        self.transforms
            .last()
            .map(|record| record.input.as_str())
            .or(self.input.as_deref())
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failed_index() {
            Some(index) => write!(f, "status: unmet at {index}")?,
            None => write!(f, "status: valid")?,
        }
        let transforms: Vec<String> = self
            .transforms
            .iter()
            .map(|t| format!("{}={:?}", t.index, t.input))
            .collect();
        write!(f, ", transforms: [{}]", transforms.join(", "))?;
        Ok(())
    }
}
