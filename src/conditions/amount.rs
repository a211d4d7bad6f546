//! Numeric reading of text for the amount conditions.
//!
//! Text that is not a plain decimal number reads as zero. Numbers outside what
//! [`Decimal`] can hold still compare correctly against any bound: values too
//! large saturate away from zero, values too small sit just beside zero, and
//! digits beyond 28 decimal places are cut but remembered.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::pattern::DECIMAL_NUMBER;

const MAX_SCALE: i64 = 28;
/// Significant digits a `Decimal` mantissa can carry.
const MAX_DIGITS: i64 = 29;
/// Largest power of ten below `Decimal::MAX` (~7.9e28).
const MAX_ORDER: i64 = 28;
/// Stand-in for exponents too long to parse; far past any representable order.
const SATURATED_EXPONENT: i64 = i64::MAX / 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Amount {
    Exact(Decimal),
    /// Nonzero digits were cut; the real value lies strictly beyond this one,
    /// away from zero, by less than one unit in the last kept digit.
    Truncated(Decimal),
    /// Magnitude above `Decimal::MAX`.
    Overflow { negative: bool },
    /// Nonzero magnitude below `1e-28`.
    Underflow { negative: bool },
}

impl Amount {
    /// Read `input`; anything outside the decimal grammar is zero.
    pub(crate) fn read(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::Exact(Decimal::ZERO))
    }

    pub(crate) fn parse(input: &str) -> Option<Self> {
        let caps = DECIMAL_NUMBER.captures(input)?;
        let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
        let int = caps.get(2).map_or("", |m| m.as_str());
        let frac = caps.get(3).or(caps.get(4)).map_or("", |m| m.as_str());
        let exp = caps.get(5).map_or(0, |m| {
            m.as_str().parse::<i64>().unwrap_or(if m.as_str().starts_with('-') {
                -SATURATED_EXPONENT
            } else {
                SATURATED_EXPONENT
            })
        });

        let digits = format!("{int}{frac}");
        let leading = digits.trim_start_matches('0');
        let sig = leading.trim_end_matches('0');
        if sig.is_empty() {
            return Some(Self::Exact(Decimal::ZERO));
        }

        // Value is `sig * 10^exponent`.
        let trailing_zeros = (leading.len() - sig.len()) as i64;
        let exponent = exp
            .saturating_sub(frac.len() as i64)
            .saturating_add(trailing_zeros);
        let order = exponent.saturating_add(sig.len() as i64 - 1);
        if order > MAX_ORDER {
            return Some(Self::Overflow { negative });
        }
        if order < -MAX_SCALE {
            return Some(Self::Underflow { negative });
        }

        let len = sig.len() as i64;
        let mut cut = (-MAX_SCALE - exponent).max(len - MAX_DIGITS).max(0);
        let value = loop {
            let kept = &sig[..(len - cut) as usize];
            match to_decimal(kept, exponent + cut) {
                Some(value) => break value,
                // A 29-digit fraction above the 96-bit mantissa loses its last digit.
                None if exponent + cut < 0 => cut += 1,
                None => return Some(Self::Overflow { negative }),
            }
        };

        let value = if negative { -value } else { value };
        Some(if cut > 0 {
            Self::Truncated(value)
        } else {
            Self::Exact(value)
        })
    }

    /// Order of the real value relative to `bound`.
    pub(crate) fn cmp_to(self, bound: Decimal) -> Ordering {
        match self {
            Self::Exact(value) => value.cmp(&bound),
            Self::Truncated(value) => match value.cmp(&bound) {
                Ordering::Equal if value.is_sign_negative() => Ordering::Less,
                Ordering::Equal => Ordering::Greater,
                other => other,
            },
            Self::Overflow { negative: true } => Ordering::Less,
            Self::Overflow { negative: false } => Ordering::Greater,
            Self::Underflow { negative: true } => {
                if bound >= Decimal::ZERO {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            Self::Underflow { negative: false } => {
                if bound <= Decimal::ZERO {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

/// `digits * 10^exponent`, if it fits a `Decimal`.
fn to_decimal(digits: &str, exponent: i64) -> Option<Decimal> {
    let mantissa: i128 = digits.parse().ok()?;
    if exponent >= 0 {
        let scaled = mantissa.checked_mul(10_i128.checked_pow(u32::try_from(exponent).ok()?)?)?;
        Decimal::try_from_i128_with_scale(scaled, 0).ok()
    } else {
        Decimal::try_from_i128_with_scale(mantissa, u32::try_from(-exponent).ok()?).ok()
    }
}
