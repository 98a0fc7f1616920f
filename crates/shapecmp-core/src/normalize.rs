//! Value-mode normalization.
//!
//! In value mode, numbers and basic scalars are compared by their canonical
//! decimal text, so `Float(1.50)`, `Decimal(1.5)` and `Str("1.5")` all meet
//! at `"1.5"`.

use std::borrow::Cow;

use rust_decimal::Decimal;

use crate::value::Value;

/// Largest scale a `Decimal` can hold.
const MAX_DECIMAL_SCALE: usize = 28;

/// Converts `value` into the form used for equality comparison.
///
/// With `by_value == false` the value is returned as is. Otherwise floats and
/// decimals become their exact plain decimal text with trailing fractional
/// zeros removed, other basic scalars and big integers become their default
/// string form, and everything else is left unchanged.
///
/// # Examples
///
/// ```
/// use shapecmp_core::{to_comparable_value, Value};
///
/// assert_eq!(*to_comparable_value(&Value::Float(2.50), true), Value::from("2.5"));
/// assert_eq!(*to_comparable_value(&Value::Int(2), true), Value::from("2"));
/// assert_eq!(*to_comparable_value(&Value::Float(2.50), false), Value::Float(2.5));
/// ```
pub fn to_comparable_value(value: &Value, by_value: bool) -> Cow<'_, Value> {
    if !by_value {
        return Cow::Borrowed(value);
    }
    match value {
        Value::Float(x) => Cow::Owned(Value::from(plain_float(*x))),
        Value::Decimal(d) => Cow::Owned(Value::from(plain_decimal(*d))),
        Value::BigInt(i) => Cow::Owned(Value::from(i.to_string())),
        v if v.is_basic_scalar() => Cow::Owned(Value::from(v.to_string())),
        _ => Cow::Borrowed(value),
    }
}

/// Plain text of a decimal without trailing fractional zeros. `-0` becomes `0`.
pub fn plain_decimal(d: Decimal) -> String {
    d.normalize().to_string()
}

/// Plain text of a float without trailing fractional zeros.
///
/// The float is first rendered as its shortest round-trip decimal, then read
/// back as an exact decimal, so no binary artifacts leak into the result.
/// Values outside the decimal range keep the textual path. NaN and the
/// infinities render as `NaN`, `inf` and `-inf`.
pub fn plain_float(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let repr = x.to_string();
    let scale = repr.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if scale > MAX_DECIMAL_SCALE {
        return strip_fraction_zeros(&repr);
    }
    match Decimal::from_str_exact(&repr) {
        Ok(d) => plain_decimal(d),
        Err(_) => strip_fraction_zeros(&repr),
    }
}

fn strip_fraction_zeros(repr: &str) -> String {
    let stripped = if repr.contains('.') {
        repr.trim_end_matches('0').trim_end_matches('.')
    } else {
        repr
    };
    if stripped == "-0" {
        "0".to_owned()
    } else {
        stripped.to_owned()
    }
}
