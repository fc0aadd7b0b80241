//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Display formatting for resolved cell values.
//! CONTEXT: Values are printed in "general" notation with six significant
//! digits, the same text a default C-style `%g` conversion produces:
//! fixed notation while the decimal exponent is in -4..6, scientific
//! notation (`1.5e+07`) outside it, trailing zeros removed in both cases.

/// Significant digits shown for every value.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a resolved value for display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the shown precision can carry into the next power of ten
    // (999999.5 -> 1e+06), so the exponent is taken from the rounded form.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Drops trailing zeros after the decimal point, and the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
