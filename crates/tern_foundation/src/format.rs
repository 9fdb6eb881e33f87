//! Number formatting shared by `toString` and output rendering.

/// Default number of significant digits used when formatting numbers.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats a number in the general (`%g`) style.
///
/// Uses fixed notation when the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise. Trailing zeros and a
/// trailing decimal point are removed. A precision of zero is treated as one.
///
/// ```
/// use tern_foundation::format_general;
///
/// assert_eq!(format_general(3.0, 6), "3");
/// assert_eq!(format_general(0.1 + 0.2, 6), "0.3");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
pub fn format_general(n: f64, precision: usize) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // The exponent after rounding to `precision` digits decides the notation.
    let scientific = format!("{:.*e}", precision - 1, n);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map_or((scientific.as_str(), 0), |(m, e)| (m, e.parse::<i32>().unwrap_or(0)));

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{n:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
