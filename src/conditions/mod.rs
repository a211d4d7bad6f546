//! Ready-made text conditions.
//!
//! Each method appends one entry to a [`RuleChain`]. Predicates reject an
//! absent input. Messages are Indonesian and prefixed with the chain's hint
//! when one is set, e.g. `"Nama diisi minimum 3 karakter tanpa spasi"`.

mod amount;
mod pattern;

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use self::amount::Amount;
use crate::types::{ErrorMessage, RuleChain, is_blank};

/// Start a chain over a value with the `required` condition already in place.
///
/// ```
/// use text_rules::TextRulesExt;
///
/// assert!("budi".text_rules().min_len(3, false).is_valid());
/// assert!(!"   ".text_rules().is_valid());
/// assert!(!None::<&str>.text_rules().is_valid());
/// ```
pub trait TextRulesExt {
    /// Equivalent to `text_rules_with(true)`.
    fn text_rules(self) -> RuleChain
    where
        Self: Sized,
    {
        self.text_rules_with(true)
    }

    fn text_rules_with(self, include_whitespace: bool) -> RuleChain;
}

impl TextRulesExt for Option<String> {
    fn text_rules_with(self, include_whitespace: bool) -> RuleChain {
        let chain = match self {
            Some(input) => RuleChain::new().input(input),
            None => RuleChain::new(),
        };
        chain.required(include_whitespace)
    }
}

impl TextRulesExt for Option<&str> {
    fn text_rules_with(self, include_whitespace: bool) -> RuleChain {
        self.map(str::to_owned).text_rules_with(include_whitespace)
    }
}

impl TextRulesExt for &str {
    fn text_rules_with(self, include_whitespace: bool) -> RuleChain {
        Some(self).text_rules_with(include_whitespace)
    }
}

impl TextRulesExt for String {
    fn text_rules_with(self, include_whitespace: bool) -> RuleChain {
        Some(self).text_rules_with(include_whitespace)
    }
}

fn with_hint(hint: Option<&str>, target: &str) -> String {
    match hint {
        Some(hint) if !hint.trim().is_empty() => format!("{hint} {target}"),
        _ => target.to_owned(),
    }
}

fn hinted(target: String) -> ErrorMessage {
    ErrorMessage::from_fn(move |_, hint| Some(with_hint(hint, &target)))
}

fn whitespace_label(include_whitespace: bool) -> &'static str {
    if include_whitespace {
        "dengan spasi"
    } else {
        "tanpa spasi"
    }
}

/// Character count, ignoring ASCII spaces unless `include_whitespace`.
fn text_len(input: &str, include_whitespace: bool) -> usize {
    if include_whitespace {
        input.chars().count()
    } else {
        input.chars().filter(|&c| c != ' ').count()
    }
}

/// Letters and ASCII decimal digits. Other numeric characters such as `½`
/// or `Ⅻ` are rejected.
fn is_letter_or_digit(c: char) -> bool {
    c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

/// Lift a predicate over present input; absent input never satisfies it.
fn present(check: impl Fn(&str) -> bool + 'static) -> impl Fn(Option<&str>) -> bool + 'static {
    move |input: Option<&str>| input.is_some_and(&check)
}

impl RuleChain {
    /// Reject absent input.
    ///
    /// With `include_whitespace`, whitespace-only input is rejected as well.
    /// Without it, whitespace counts as content and only `""` is rejected, so
    /// `"  "` passes.
    #[must_use]
    pub fn required(self, include_whitespace: bool) -> Self {
        self.add_condition(
            move |input: Option<&str>| {
                if include_whitespace {
                    !is_blank(input)
                } else {
                    input.is_some_and(|s| !s.is_empty())
                }
            },
            hinted("dibutuhkan".to_owned()),
        )
    }

    #[must_use]
    pub fn between_len(self, range: RangeInclusive<usize>, include_whitespace: bool) -> Self {
        let message = format!(
            "diisi minimum {} dan maximum {} karakter {}",
            range.start(),
            range.end(),
            whitespace_label(include_whitespace),
        );
        self.add_condition(
            present(move |s| range.contains(&text_len(s, include_whitespace))),
            hinted(message),
        )
    }

    #[must_use]
    pub fn min_len(self, min: usize, include_whitespace: bool) -> Self {
        let message = format!(
            "diisi minimum {min} karakter {}",
            whitespace_label(include_whitespace)
        );
        self.add_condition(
            present(move |s| text_len(s, include_whitespace) >= min),
            hinted(message),
        )
    }

    #[must_use]
    pub fn exact_len(self, len: usize, include_whitespace: bool) -> Self {
        let message = format!(
            "diisi harus {len} karakter {}",
            whitespace_label(include_whitespace)
        );
        self.add_condition(
            present(move |s| text_len(s, include_whitespace) == len),
            hinted(message),
        )
    }

    #[must_use]
    pub fn max_len(self, max: usize, include_whitespace: bool) -> Self {
        let message = format!(
            "diisi maximum {max} karakter {}",
            whitespace_label(include_whitespace)
        );
        self.add_condition(
            present(move |s| text_len(s, include_whitespace) <= max),
            hinted(message),
        )
    }

    /// Numeric value within `min..=max`. Text that is not a plain decimal
    /// number (`[+-]digits[.digits][e[+-]digits]`) counts as zero.
    #[must_use]
    pub fn between_amount(self, min: Decimal, max: Decimal) -> Self {
        self.add_condition(
            present(move |s| {
                let value = Amount::read(s);
                value.cmp_to(min) != Ordering::Less && value.cmp_to(max) != Ordering::Greater
            }),
            hinted(format!("diisi sejumlah minimum {min} atau maximum {max}")),
        )
    }

    #[must_use]
    pub fn max_amount(self, max: Decimal) -> Self {
        self.add_condition(
            present(move |s| Amount::read(s).cmp_to(max) != Ordering::Greater),
            hinted(format!("diisi maximum sejumlah {max}")),
        )
    }

    /// Numeric value strictly greater than `min`.
    #[must_use]
    pub fn min_amount(self, min: Decimal) -> Self {
        self.add_condition(
            present(move |s| Amount::read(s).cmp_to(min) == Ordering::Greater),
            hinted(format!("diisi minimal sejumlah {min}")),
        )
    }

    #[must_use]
    pub fn alpha_or_numeric(self, include_whitespace: bool) -> Self {
        self.add_condition(
            present(move |s| {
                s.chars()
                    .all(|c| is_letter_or_digit(c) || (include_whitespace && c.is_whitespace()))
            }),
            hinted("hanya boleh diisi huruf atau kombinasi huruf dan angka".to_owned()),
        )
    }

    #[must_use]
    pub fn number_only(self, include_whitespace: bool) -> Self {
        self.add_condition(
            present(move |s| {
                s.chars()
                    .all(|c| c.is_ascii_digit() || (include_whitespace && c.is_whitespace()))
            }),
            hinted("hanya boleh diisi angka".to_owned()),
        )
    }

    #[must_use]
    pub fn email(self) -> Self {
        self.add_condition(
            present(|s| pattern::EMAIL_ADDRESS.is_match(s)),
            "Email tidak valid",
        )
    }

    #[must_use]
    pub fn indonesia_phone_number(self) -> Self {
        self.add_condition(
            present(|s| pattern::INDONESIA_PHONE_NUMBER.is_match(s)),
            "Nomor telepone tidak valid",
        )
    }
}
