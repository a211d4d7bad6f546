use std::fmt;
use std::rc::Rc;

use super::entry::{ConditionEntry, ErrorMessage};
use super::error::RuleError;
use super::status::ValidationStatus;

/// Passed to message producers when neither an input nor a transformed input
/// exists at the time of failure.
pub const UNDEFINED_INPUT: &str = "UNDEFINED INPUT";

/// An ordered chain of text conditions evaluated against a single input.
///
/// Every chain starts with an always-true initial entry. Builder methods append
/// entries or mutate the most recently appended one; terminal methods evaluate
/// the chain once and cache the outcome for the current input.
///
/// # Example
///
/// ```
/// use text_rules::RuleChain;
///
/// let mut chain = RuleChain::with_input(" ab ")
///     .hint("Nama")
///     .transform_input(|s| s.trim().to_owned())
///     .add_condition(
///         |input| input.is_some_and(|s| s.len() >= 3),
///         text_rules::message(|input, hint| {
///             Some(format!("{} '{input}' terlalu pendek", hint.unwrap_or_default()))
///         }),
///     );
///
/// let err = chain.validate().unwrap_err();
/// assert_eq!(err.to_string(), "Nama 'ab' terlalu pendek");
/// ```
pub struct RuleChain {
    original_input: Option<String>,
    hint: Option<String>,
    entries: Vec<ConditionEntry>,
    require_message: bool,
    cache: Option<CachedStatus>,
}

#[derive(Debug)]
struct CachedStatus {
    input: Option<String>,
    status: Rc<ValidationStatus>,
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::from_parts(None, std::iter::empty())
    }
}

impl RuleChain {
    /// An empty chain with no input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain whose initial entry anchors `input` as its first transformed
    /// value.
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        Self::from_parts(Some(input.into()), std::iter::empty())
    }

    /// A chain over `input` pre-populated with `conditions`.
    #[must_use]
    pub fn with_conditions(
        input: Option<String>,
        conditions: impl IntoIterator<Item = ConditionEntry>,
    ) -> Self {
        Self::from_parts(input, conditions)
    }

    fn from_parts(
        input: Option<String>,
        conditions: impl IntoIterator<Item = ConditionEntry>,
    ) -> Self {
        let mut entries = vec![ConditionEntry::initial(input.clone())];
        entries.extend(conditions);
        Self {
            original_input: input,
            hint: None,
            entries,
            require_message: true,
            cache: None,
        }
    }

    /// Replace the original input. Entries are left untouched.
    #[must_use]
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.original_input = Some(input.into());
        self
    }

    /// Replace the original input on an existing chain.
    ///
    /// A cached outcome is only reused while the input stays equal to the one
    /// it was computed for.
    pub fn set_input(&mut self, input: Option<&str>) {
        self.original_input = input.map(str::to_owned);
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn add_condition(
        self,
        predicate: impl Fn(Option<&str>) -> bool + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.push(ConditionEntry::new(predicate, message))
    }

    /// Append a condition that is only evaluated while `guard` returns `true`.
    #[must_use]
    pub fn add_condition_depends_on(
        self,
        guard: impl Fn() -> bool + 'static,
        predicate: impl Fn(Option<&str>) -> bool + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.push(ConditionEntry::new(predicate, message).depends_on(guard))
    }

    #[must_use]
    pub fn push(mut self, entry: ConditionEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replace the message of the last entry.
    #[must_use]
    pub fn change_error_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.last_entry().message = message.into();
        self
    }

    /// Attach an activation guard to the last entry.
    #[must_use]
    pub fn depends_on(mut self, guard: impl Fn() -> bool + 'static) -> Self {
        self.last_entry().guard = Some(Box::new(guard));
        self
    }

    /// Remove the activation guard from the last entry.
    #[must_use]
    pub fn clear_depends_on(mut self) -> Self {
        self.last_entry().guard = None;
        self
    }

    /// Derive a new running input from the latest one and attach it to the last
    /// entry. It stays in effect for every later entry until overridden.
    ///
    /// The latest input is the last transform recorded on any entry, else the
    /// original input, else `""`.
    #[must_use]
    pub fn transform_input(mut self, transform: impl FnOnce(&str) -> String) -> Self {
        let current = self
            .entries
            .iter()
            .rev()
            .find_map(ConditionEntry::transformed_input)
            .or(self.original_input.as_deref())
            .unwrap_or_default();
        let next = transform(current);
        self.last_entry().transformed_input = Some(next);
        self
    }

    /// Revert the running input to the original input from the last entry on.
    #[must_use]
    pub fn transform_to_original_input(mut self) -> Self {
        let original = self.original_input.clone();
        self.last_entry().transformed_input = original;
        self
    }

    #[must_use]
    pub fn require_message(mut self, required: bool) -> Self {
        self.require_message = required;
        self
    }

    #[must_use]
    pub fn enable_error_message(self) -> Self {
        self.require_message(true)
    }

    #[must_use]
    pub fn disable_error_message(self) -> Self {
        self.require_message(false)
    }

    #[must_use]
    pub fn original_input(&self) -> Option<&str> {
        self.original_input.as_deref()
    }

    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// All entries, including the initial one at index 0.
    #[must_use]
    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    /// Evaluate the chain, reusing the previous outcome when the input is
    /// unchanged and not blank.
    pub fn evaluate(&mut self) -> Rc<ValidationStatus> {
        let input = self.original_input.as_deref();
        if let Some(cached) = &self.cache {
            if cached.input.as_deref() == input && !is_blank(input) {
                tracing::debug!("reusing cached validation status");
                return Rc::clone(&cached.status);
            }
        }

        let status = Rc::new(crate::evaluate::evaluate(&self.entries, input));
        self.cache = Some(CachedStatus {
            input: self.original_input.clone(),
            status: Rc::clone(&status),
        });
        status
    }

    /// Evaluate the chain and fail at the first unmet condition.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Unmet`] with the resolved message, or
    /// [`RuleError::NoMessage`] when the message is blank and messages are
    /// required.
    pub fn validate(&mut self) -> Result<(), RuleError> {
        self.finalize().map(|_| ())
    }

    /// Like [`validate()`](Self::validate), with every failure kind mapped to
    /// `false`.
    #[must_use]
    pub fn is_valid(&mut self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(_) => false,
        }
    }

    /// Evaluate the chain and return the original input when it passes.
    ///
    /// # Errors
    ///
    /// Same as [`validate()`](Self::validate), plus [`RuleError::NullInput`]
    /// when the chain passes but no input was ever set.
    pub fn value(&mut self) -> Result<String, RuleError> {
        let status = self.finalize()?;
        status
            .input()
            .map(str::to_owned)
            .ok_or(RuleError::NullInput)
    }

    /// Like [`value()`](Self::value), with every failure kind mapped to `None`.
    #[must_use]
    pub fn value_or_none(&mut self) -> Option<String> {
        match self.value() {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    fn finalize(&mut self) -> Result<Rc<ValidationStatus>, RuleError> {
        let status = self.evaluate();
        if status.is_valid() {
            return Ok(status);
        }

        let last_input = status
            .last_transformed_input()
            .unwrap_or(UNDEFINED_INPUT)
            .to_owned();
        let message = status
            .error_message()
            .and_then(|producer| producer.resolve(&last_input, self.hint.as_deref()))
            .filter(|m| !m.trim().is_empty());

        match message {
            None if self.require_message => {
                tracing::debug!(index = status.failed_index(), "unmet condition has no message");
                Err(RuleError::NoMessage)
            }
            message => {
                let message = message.unwrap_or_default();
                tracing::debug!(index = status.failed_index(), %message, "validation failed");
                Err(RuleError::Unmet {
                    message,
                    original_input: self.original_input.clone(),
                    last_transformed_input: last_input,
                })
            }
        }
    }

    fn last_entry(&mut self) -> &mut ConditionEntry {
        match self.entries.last_mut() {
            Some(entry) => entry,
            None => unreachable!("a rule chain always holds its initial entry"),
        }
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("original_input", &self.original_input)
            .field("hint", &self.hint)
            .field("entries", &self.entries)
            .field("require_message", &self.require_message)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleChain({} conditions, input: {:?})",
            self.entries.len() - 1,
            self.original_input,
        )
    }
}

/// `None`, empty, or whitespace only.
pub(crate) fn is_blank(input: Option<&str>) -> bool {
    input.map_or(true, |s| s.trim().is_empty())
}
