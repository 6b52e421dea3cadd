//! Textual rendering of floats.
//!
//! Produces the shortest digit string that round-trips, switching to
//! exponent notation (`1e+06`, `1.5e-05`) when the decimal exponent is below
//! -4 or at least 6. Non-finite values render as `+Inf`, `-Inf` and `NaN`.

use core::fmt;

/// Exponents at or above this use exponent notation.
const EXPONENT_THRESHOLD: i32 = 6;

pub fn write_float(f: &mut impl fmt::Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "+Inf" } else { "-Inf" });
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "-1.2345e6".
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return f.write_str(&scientific),
    };

    if exponent < -4 || exponent >= EXPONENT_THRESHOLD {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        // Display never uses exponent notation and is also shortest round-trip.
        write!(f, "{}", value)
    }
}

pub fn float_to_string(value: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_float(&mut out, value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_range() {
        assert_eq!(float_to_string(-1.25), "-1.25");
        assert_eq!(float_to_string(1000.0), "1000");
        assert_eq!(float_to_string(0.0), "0");
        assert_eq!(float_to_string(0.0001), "0.0001");
        assert_eq!(float_to_string(123456.0), "123456");
    }

    #[test]
    fn test_exponent_range() {
        assert_eq!(float_to_string(1e6), "1e+06");
        assert_eq!(float_to_string(1234567.0), "1.234567e+06");
        assert_eq!(float_to_string(1.5e-5), "1.5e-05");
        assert_eq!(float_to_string(-3e120), "-3e+120");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(float_to_string(f64::INFINITY), "+Inf");
        assert_eq!(float_to_string(f64::NEG_INFINITY), "-Inf");
        assert_eq!(float_to_string(f64::NAN), "NaN");
    }
}
