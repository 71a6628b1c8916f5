//! Centralized value formatting.
//!
//! CSS values written onto elements (delays, heights) and the counts printed
//! by the validator all go through here so the web frontend and the CLI agree
//! on the exact text.

/// Render a float with at most `decimals` places, dropping trailing zeros.
fn trim_decimal(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a millisecond delay as a CSS time in seconds.
///
/// # Examples
/// ```
/// use zenith_types::formatting::format_delay;
/// assert_eq!(format_delay(0), "0s");
/// assert_eq!(format_delay(50), "0.05s");
/// assert_eq!(format_delay(150), "0.15s");
/// assert_eq!(format_delay(1_250), "1.25s");
/// ```
pub fn format_delay(ms: u32) -> String {
    format!("{}s", trim_decimal(ms as f64 / 1000.0, 3))
}

/// Format a height as a CSS pixel length.
///
/// # Examples
/// ```
/// use zenith_types::formatting::format_px;
/// assert_eq!(format_px(0.0), "0px");
/// assert_eq!(format_px(120.0), "120px");
/// assert_eq!(format_px(33.3333), "33.33px");
/// ```
pub fn format_px(height: f64) -> String {
    format!("{}px", trim_decimal(height, 2))
}

/// Format a count with the right noun form.
///
/// # Examples
/// ```
/// use zenith_types::formatting::format_count;
/// assert_eq!(format_count(1, "hero", "heroes"), "1 hero");
/// assert_eq!(format_count(3, "hero", "heroes"), "3 heroes");
/// ```
pub fn format_count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format a millisecond timestamp for frame traces (`t=450ms`).
pub fn format_millis(ms: f64) -> String {
    format!("{}ms", trim_decimal(ms, 1))
}
