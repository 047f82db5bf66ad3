//! Number formatting utilities for table cells

/// Format a number with a thousands separator (comma) and the given
/// number of decimal places
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Format a money value with a dollar sign and 2 decimal places
///
/// ```
/// let formatted = frontend::shared::components::table::number_format::format_money(1234.5);
/// assert_eq!(formatted, "$1,234.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50.0), "$50.00");
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.89), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }
}
