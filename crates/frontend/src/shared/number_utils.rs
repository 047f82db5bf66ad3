//! Utilities for parsing numeric form input.

/// Parse a price bound out of filter input. Returns `None` for
/// malformed or negative input, which callers treat as "no constraint".
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price(" 40 "), Some(40.0));
    }

    #[test]
    fn test_malformed_price_input_means_no_constraint() {
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("inf"), None);
    }
}
