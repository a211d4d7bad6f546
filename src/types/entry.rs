use std::fmt;
use std::rc::Rc;

/// Predicate over the running input. Returns `true` when the input is valid.
pub type Predicate = Box<dyn Fn(Option<&str>) -> bool>;

/// Guard deciding whether an entry takes part in evaluation at all.
pub type Guard = Box<dyn Fn() -> bool>;

type Producer = dyn Fn(&str, Option<&str>) -> Option<String>;

/// Produces the failure message for an entry.
///
/// The producer receives the resolved input (the last transformed input, the
/// original input, or [`UNDEFINED_INPUT`](crate::UNDEFINED_INPUT) when neither
/// exists) and the chain's hint. Literal messages convert via `From`:
///
/// ```
/// use text_rules::ErrorMessage;
///
/// let literal = ErrorMessage::from("must not be empty");
/// assert_eq!(literal.resolve("", None).as_deref(), Some("must not be empty"));
///
/// let dynamic = ErrorMessage::from_fn(|input, hint| {
///     Some(format!("{} '{input}' is too short", hint.unwrap_or("value")))
/// });
/// assert_eq!(
///     dynamic.resolve("ab", Some("Name")).as_deref(),
///     Some("Name 'ab' is too short"),
/// );
/// ```
#[derive(Clone)]
pub struct ErrorMessage(Rc<Producer>);

impl ErrorMessage {
    pub fn from_fn(f: impl Fn(&str, Option<&str>) -> Option<String> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A producer that never yields a message.
    #[must_use]
    pub fn none() -> Self {
        Self::from_fn(|_, _| None)
    }

    #[must_use]
    pub fn resolve(&self, input: &str, hint: Option<&str>) -> Option<String> {
        (self.0)(input, hint)
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        Self::from(message.to_owned())
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::from_fn(move |_, _| Some(message.clone()))
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorMessage(..)")
    }
}

/// Shorthand for [`ErrorMessage::from_fn`].
pub fn message(f: impl Fn(&str, Option<&str>) -> Option<String> + 'static) -> ErrorMessage {
    ErrorMessage::from_fn(f)
}

/// One position in a [`RuleChain`](super::RuleChain).
///
/// Entries are appended by the chain's builder methods; only the most recently
/// appended entry is ever mutated afterwards.
pub struct ConditionEntry {
    pub(crate) predicate: Predicate,
    pub(crate) message: ErrorMessage,
    pub(crate) guard: Option<Guard>,
    pub(crate) transformed_input: Option<String>,
}

impl ConditionEntry {
    pub fn new(
        predicate: impl Fn(Option<&str>) -> bool + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
            guard: None,
            transformed_input: None,
        }
    }

    /// The always-true entry every chain starts with. It anchors `input` as
    /// the first transformed value.
    pub(crate) fn initial(input: Option<String>) -> Self {
        Self {
            transformed_input: input,
            ..Self::new(|_| true, "initial condition")
        }
    }

    #[must_use]
    pub fn depends_on(mut self, guard: impl Fn() -> bool + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Whether the entry participates in evaluation right now.
    pub(crate) fn is_active(&self) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard())
    }

    pub(crate) fn is_met(&self, input: Option<&str>) -> bool {
        (self.predicate)(input)
    }

    #[must_use]
    pub fn transformed_input(&self) -> Option<&str> {
        self.transformed_input.as_deref()
    }

    #[must_use]
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }
}

impl fmt::Debug for ConditionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionEntry")
            .field("guarded", &self.guard.is_some())
            .field("transformed_input", &self.transformed_input)
            .finish_non_exhaustive()
    }
}
