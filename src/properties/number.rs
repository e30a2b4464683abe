//! Legacy number display
//!
//! Derived values (percent scaling, per-level rates, repair intervals) are
//! printed the way the legacy client prints numbers: no trailing `.0`,
//! `Infinity` for division by zero, exponent form only at the extremes.

/// Format a number the way the legacy client's text layer does
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", value);
        // Positive exponents carry an explicit sign
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", value)
}

/// Parse a free-text parameter column as a number; blank or garbage is 0.
///
/// Used by the per-level variants of templates 6 and 8.
pub fn parse_parameter(parameter: &str) -> f64 {
    parameter.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse a parameter column without the garbage-to-0 fallback.
///
/// Blank is 0, anything unparsable is NaN. Prefixed template 7 and
/// suffixed template 9 convert their parameter this way, so bad content
/// shows up as `NaN` in the rendered text.
pub fn parse_parameter_strict(parameter: &str) -> f64 {
    let trimmed = parameter.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
