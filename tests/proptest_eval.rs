use proptest::prelude::*;
use rust_decimal::Decimal;
use text_rules::{RuleChain, RuleError, TextRulesExt};

/// Text with a mix of letters, digits and spaces.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,16}"
}

fn non_space_len(s: &str) -> usize {
    s.chars().filter(|&c| c != ' ').count()
}

proptest! {
    /// Evaluation never panics, whatever the input.
    #[test]
    fn eval_never_panics(input in any::<Option<String>>()) {
        let mut chain = input
            .clone()
            .text_rules()
            .min_len(2, false)
            .max_len(10, true)
            .alpha_or_numeric(true)
            .email();
        let _ = chain.validate();
        let _ = chain.value_or_none();
    }

    /// The length conditions agree with a plain character count.
    #[test]
    fn length_conditions_match_model(input in arb_text(), min in 0usize..8, span in 0usize..8) {
        let max = min + span;
        let len = non_space_len(&input);

        let mut chain = RuleChain::new().input(input.as_str()).between_len(min..=max, false);
        prop_assert_eq!(chain.is_valid(), (min..=max).contains(&len));

        let mut chain = RuleChain::new().input(input.as_str()).min_len(min, false);
        prop_assert_eq!(chain.is_valid(), len >= min);

        let mut chain = RuleChain::new().input(input.as_str()).max_len(max, false);
        prop_assert_eq!(chain.is_valid(), len <= max);

        let mut chain = RuleChain::new().input(input.as_str()).exact_len(min, true);
        prop_assert_eq!(chain.is_valid(), input.chars().count() == min);
    }

    /// Amount conditions compare numerically.
    #[test]
    fn amount_conditions_match_model(value in -1_000i64..1_000, min in -500i64..500, span in 0i64..500) {
        let (lo, hi) = (Decimal::from(min), Decimal::from(min + span));
        let v = Decimal::from(value);
        let text = value.to_string();

        let mut chain = RuleChain::new().input(text.as_str()).between_amount(lo, hi);
        prop_assert_eq!(chain.is_valid(), v >= lo && v <= hi);

        let mut chain = RuleChain::new().input(text.as_str()).min_amount(lo);
        prop_assert_eq!(chain.is_valid(), v > lo);

        let mut chain = RuleChain::new().input(text.as_str()).max_amount(hi);
        prop_assert_eq!(chain.is_valid(), v <= hi);
    }

    /// The safe variants are exactly the throwing ones with errors discarded.
    #[test]
    fn safe_variants_mirror_throwing(input in any::<Option<String>>(), require in any::<bool>()) {
        let build = |input: Option<String>| {
            input.text_rules().min_len(3, false).require_message(require)
        };
        let thrown = build(input.clone()).validate();
        prop_assert_eq!(build(input.clone()).is_valid(), thrown.is_ok());

        let value = build(input.clone()).value();
        prop_assert_eq!(build(input.clone()).value_or_none(), value.clone().ok());
        if value.is_ok() {
            prop_assert_eq!(value, input.ok_or(RuleError::NullInput));
        }
    }
}
