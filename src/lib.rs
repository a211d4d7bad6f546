mod conditions;
mod evaluate;
mod types;

pub use conditions::TextRulesExt;
pub use types::{
    ConditionEntry, ErrorMessage, Guard, Predicate, RuleChain, RuleError, TransformRecord,
    UNDEFINED_INPUT, ValidationStatus, message,
};
