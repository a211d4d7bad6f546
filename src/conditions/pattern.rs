use std::sync::LazyLock;

use regex::Regex;

const EMAIL_ADDRESS_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9+._%\-]{1,256}",
    "@",
    r"[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
);

/// Mobile (`08xx`, `+628xx`) and landline (`(021)`, `0361`) numbers.
const INDONESIA_PHONE_NUMBER_PATTERN: &str =
    r"^(?:\+62|\(0[0-9]{2,3}\)|0)\s?(?:361|8[17]\s?[0-9]?)?(?:[ \-]?[0-9]{3,4}){2,3}$";

/// Plain decimal notation: optional sign, digits with an optional fraction,
/// optional exponent. At least one digit must appear before the exponent.
/// Groups: sign, integer digits, fraction digits (`1.5` or `.5` form), exponent.
const DECIMAL_NUMBER_PATTERN: &str =
    r"^([+-])?(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))(?:[eE]([+-]?[0-9]+))?$";

pub(crate) static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_ADDRESS_PATTERN).expect("valid email regex"));

pub(crate) static INDONESIA_PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INDONESIA_PHONE_NUMBER_PATTERN).expect("valid phone number regex")
});

pub(crate) static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DECIMAL_NUMBER_PATTERN).expect("valid decimal regex"));
