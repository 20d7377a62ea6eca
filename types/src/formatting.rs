//! Centralized number formatting utilities.
//!
//! All stat counter display formatting goes through this module so the
//! animation engine and any static rendering agree on output, character for
//! character. Counter round-tripping depends on that: the final animation
//! frame must reproduce the authored text exactly.

/// Format a plain count: floored integer with an optional `+` suffix.
///
/// # Examples
/// ```
/// use verdant_types::formatting::format_count;
/// assert_eq!(format_count(500.0, true), "500+");
/// assert_eq!(format_count(499.7, false), "499");
/// assert_eq!(format_count(0.0, false), "0");
/// ```
pub fn format_count(n: f64, plus: bool) -> String {
    format!("{}{}", n.floor() as i64, if plus { "+" } else { "" })
}

/// Format a percentage: rounded integer with a `%` suffix.
///
/// # Examples
/// ```
/// use verdant_types::formatting::format_pct;
/// assert_eq!(format_pct(98.0), "98%");
/// assert_eq!(format_pct(42.7), "43%");
/// ```
pub fn format_pct(n: f64) -> String {
    format!("{:.0}%", n)
}

/// Format a thousands-scaled value with a `K` suffix and optional `+`.
///
/// Takes the full-scale value and divides by 1000 for display; decimals are
/// dropped, matching the one-decimal precision loss inherent in the `K`
/// convention.
///
/// # Examples
/// ```
/// use verdant_types::formatting::format_compact;
/// assert_eq!(format_compact(5000.0, true), "5K+");
/// assert_eq!(format_compact(2600.0, false), "3K");
/// assert_eq!(format_compact(0.0, false), "0K");
/// ```
pub fn format_compact(n: f64, plus: bool) -> String {
    format!("{:.0}K{}", n / 1000.0, if plus { "+" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0, false), "0");
        assert_eq!(format_count(500.0, false), "500");
        assert_eq!(format_count(500.0, true), "500+");
        assert_eq!(format_count(123.9, false), "123");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.0), "0%");
        assert_eq!(format_pct(98.0), "98%");
        assert_eq!(format_pct(100.0), "100%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(5000.0, false), "5K");
        assert_eq!(format_compact(5000.0, true), "5K+");
        assert_eq!(format_compact(12000.0, true), "12K+");
        assert_eq!(format_compact(0.0, false), "0K");
    }
}
