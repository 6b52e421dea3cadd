//! The `format` operator.
//!
//! A pattern is a single printf-style conversion without the leading `%`:
//!
//! ```text
//! [flags][width][.precision]verb
//! flags: - + space 0 #
//! verbs: d x X o b       Integer
//!        f F e E g G     Float
//!        s q             Text
//!        v               any kind, rendered like `string`
//! ```

use crate::evaluator::RuntimeError;
use crate::operators::{BinaryOp, Operator, type_mismatch};
use crate::syntax::escape_string;
use crate::values::{Value, float_to_string};

/// Width and precision above this are rejected.
const MAX_FIELD: usize = 1024;

#[derive(Debug, Default, PartialEq, Eq)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Format `value` according to `pattern`.
///
/// ```
/// use scalc_core::operators::format_value;
/// use scalc_core::values::Value;
///
/// assert_eq!(format_value("05d", &Value::Int(42)).unwrap(), "00042");
/// assert_eq!(format_value(".2f", &Value::Float(3.14159)).unwrap(), "3.14");
/// assert!(format_value("%d", &Value::Int(1)).is_err());
/// ```
pub fn format_value(pattern: &str, value: &Value) -> Result<String, RuntimeError> {
    let spec = parse_spec(pattern)?;

    match (spec.verb, value) {
        ('d', Value::Int(v)) => Ok(integer(&spec, *v, 10, "")),
        ('x', Value::Int(v)) => Ok(integer(&spec, *v, 16, "0x")),
        ('X', Value::Int(v)) => Ok(integer(&spec, *v, 16, "0X")),
        ('o', Value::Int(v)) => Ok(integer(&spec, *v, 8, "0")),
        ('b', Value::Int(v)) => Ok(integer(&spec, *v, 2, "0b")),
        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Value::Float(v)) => Ok(float(&spec, *v)),
        ('s', Value::Str(s)) => {
            let text = match spec.precision {
                Some(limit) => s.chars().take(limit).collect(),
                None => s.clone(),
            };
            Ok(pad(&spec, "", &text, false))
        }
        ('q', Value::Str(s)) => {
            let mut quoted = String::new();
            escape_string(&mut quoted, s).map_err(RuntimeError::pattern)?;
            Ok(pad(&spec, "", &quoted, false))
        }
        ('v', value) => Ok(pad(&spec, "", &value.to_string(), false)),
        _ => Err(type_mismatch(
            Operator::Binary(BinaryOp::Format),
            &[&Value::str(pattern), value],
        )),
    }
}

fn parse_spec(pattern: &str) -> Result<Spec, RuntimeError> {
    let invalid = || RuntimeError::pattern(format!("invalid format specification {:?}", pattern));
    let mut spec = Spec::default();
    let mut chars = pattern.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            '-' => spec.minus = true,
            '+' => spec.plus = true,
            ' ' => spec.space = true,
            '0' => spec.zero = true,
            '#' => spec.sharp = true,
            _ => break,
        }
        chars.next();
    }

    spec.width = number(&mut chars).map_err(|_| invalid())?;
    if chars.next_if_eq(&'.').is_some() {
        spec.precision = Some(number(&mut chars).map_err(|_| invalid())?.unwrap_or(0));
    }

    spec.verb = match chars.next() {
        Some(verb @ ('d' | 'x' | 'X' | 'o' | 'b' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 's' | 'q' | 'v')) => verb,
        _ => return Err(invalid()),
    };
    if chars.next().is_some() {
        return Err(invalid());
    }
    Ok(spec)
}

/// Reads a run of decimal digits. `Err` if it is larger than `MAX_FIELD`.
fn number(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> Result<Option<usize>, ()> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        let next = value.unwrap_or(0) * 10 + digit as usize;
        if next > MAX_FIELD {
            return Err(());
        }
        value = Some(next);
    }
    Ok(value)
}

fn sign(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(spec: &Spec, value: i64, radix: u32, alternate: &str) -> String {
    let magnitude = value.unsigned_abs();
    let mut digits = match radix {
        16 if spec.verb == 'X' => format!("{:X}", magnitude),
        16 => format!("{:x}", magnitude),
        8 => format!("{:o}", magnitude),
        2 => format!("{:b}", magnitude),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = spec.precision {
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let mut prefix = String::from(sign(spec, value < 0));
    if spec.sharp {
        prefix.push_str(alternate);
    }
    // An explicit precision disables zero padding.
    let zero_pad = spec.precision.is_none();
    pad(spec, &prefix, &digits, zero_pad)
}

fn float(spec: &Spec, value: f64) -> String {
    if !value.is_finite() {
        let body = if value.is_nan() {
            format!("{}NaN", sign(spec, false))
        } else if value > 0.0 {
            let lead = if spec.space && !spec.plus { " " } else { "+" };
            format!("{}Inf", lead)
        } else {
            "-Inf".to_string()
        };
        return pad(spec, "", &body, false);
    }

    let magnitude = value.abs();
    let mut digits = match spec.verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        'e' | 'E' => exponent_form(magnitude, spec.precision.unwrap_or(6)),
        _ => general_form(magnitude, spec.precision, spec.sharp),
    };
    if spec.verb.is_ascii_uppercase() {
        digits = digits.to_ascii_uppercase();
    }
    pad(spec, sign(spec, value.is_sign_negative()), &digits, true)
}

/// `d.ddde±XX` with `precision` fractional digits.
fn exponent_form(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}

/// `%g`: shortest representation without a precision, otherwise `precision`
/// significant digits with trailing zeros removed unless `#` is set.
fn general_form(value: f64, precision: Option<usize>, keep_zeros: bool) -> String {
    let Some(precision) = precision else {
        return float_to_string(value);
    };
    let significant = precision.max(1);

    let rounded = format!("{:.*e}", significant - 1, value);
    let exponent: i32 = rounded
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0);

    let mut out = if exponent < -4 || exponent >= significant as i32 {
        exponent_form(value, significant - 1)
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    };
    if !keep_zeros {
        trim_fraction_zeros(&mut out);
    }
    out
}

fn trim_fraction_zeros(number: &mut String) {
    let exponent_at = number.find('e').unwrap_or(number.len());
    let (mantissa, exponent) = number.split_at(exponent_at);
    if !mantissa.contains('.') {
        return;
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    *number = format!("{}{}", trimmed, exponent);
}

/// Pad `prefix + body` to the field width.
fn pad(spec: &Spec, prefix: &str, body: &str, numeric: bool) -> String {
    let len = prefix.chars().count() + body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);
    let mut out = String::with_capacity(len + fill);

    if spec.minus {
        out.push_str(prefix);
        out.push_str(body);
        out.extend(core::iter::repeat_n(' ', fill));
    } else if spec.zero && numeric {
        out.push_str(prefix);
        out.extend(core::iter::repeat_n('0', fill));
        out.push_str(body);
    } else {
        out.extend(core::iter::repeat_n(' ', fill));
        out.push_str(prefix);
        out.push_str(body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(pattern: &str, value: impl Into<Value>) -> String {
        format_value(pattern, &value.into()).unwrap()
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt("d", 42), "42");
        assert_eq!(fmt("5d", -42), "  -42");
    }

    #[test]
    fn test_integer_flags() {
        assert_eq!(fmt("05d", -42), "-0042");
        assert_eq!(fmt("+d", 7), "+7");
        assert_eq!(fmt(" d", 7), " 7");
        assert_eq!(fmt("-4d", 7), "7   ");
        assert_eq!(fmt(".3d", 7), "007");
        assert_eq!(fmt("x", 255), "ff");
        assert_eq!(fmt("#X", 255), "0XFF");
        assert_eq!(fmt("#o", 8), "010");
        assert_eq!(fmt("b", 5), "101");
        assert_eq!(fmt("x", -255), "-ff");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("f", 1.5), "1.500000");
        assert_eq!(fmt(".2f", -3.14159), "-3.14");
        assert_eq!(fmt("8.3f", 2.5), "   2.500");
        assert_eq!(fmt("08.3f", -2.5), "-002.500");
        assert_eq!(fmt("e", 1234.5678), "1.234568e+03");
        assert_eq!(fmt(".2E", 0.000123), "1.23E-04");
        assert_eq!(fmt("g", 1e6), "1e+06");
        assert_eq!(fmt("g", 0.5), "0.5");
        assert_eq!(fmt(".3g", 1234.5), "1.23e+03");
        assert_eq!(fmt(".3g", 1.5), "1.5");
        assert_eq!(fmt("#.3g", 1.5), "1.50");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(fmt("f", f64::INFINITY), "+Inf");
        assert_eq!(fmt("f", f64::NEG_INFINITY), "-Inf");
        assert_eq!(fmt("6f", f64::NAN), "   NaN");
        assert_eq!(fmt("06f", f64::INFINITY), "  +Inf");
    }

    #[test]
    fn test_text() {
        assert_eq!(fmt("s", "abc"), "abc");
        assert_eq!(fmt("5s", "abc"), "  abc");
        assert_eq!(fmt("-5s", "abc"), "abc  ");
        assert_eq!(fmt(".2s", "héllo"), "hé");
        assert_eq!(fmt("q", "a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_any_value() {
        assert_eq!(fmt("v", 3), "3");
        assert_eq!(fmt("v", 1e6), "1e+06");
        assert_eq!(fmt("4v", "x"), "   x");
    }

    #[test]
    fn test_kind_mismatch() {
        let err = format_value("d", &Value::str("x")).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { operator: "format", .. }));
        let err = format_value("s", &Value::Int(1)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_invalid_patterns() {
        for pattern in ["", "5", "%d", "dd", "y", "5.2", "99999d"] {
            assert!(
                matches!(
                    format_value(pattern, &Value::Int(1)),
                    Err(RuntimeError::InvalidPattern { .. })
                ),
                "{:?} should be rejected",
                pattern
            );
        }
    }
}
