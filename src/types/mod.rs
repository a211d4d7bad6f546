mod chain;
mod entry;
mod error;
mod status;

pub(crate) use chain::is_blank;
pub use chain::{RuleChain, UNDEFINED_INPUT};
pub use entry::{ConditionEntry, ErrorMessage, Guard, Predicate, message};
pub use error::RuleError;
pub use status::{TransformRecord, ValidationStatus};
