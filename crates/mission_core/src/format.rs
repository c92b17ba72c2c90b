//! Human-readable number formatting for bounties.
//!
//! Digits of the integer part are grouped in threes with `.`; a decimal part,
//! when present in the input, follows after a `,`.

/// Group separator between clusters of three digits.
pub const GROUP_SEPARATOR: char = '.';

/// Separator written before the decimal part.
pub const DECIMAL_SEPARATOR: char = ',';

/// Format a plain decimal number string such as `"30000"` or `"1234.5"`.
///
/// The input is split on the first `.`: everything before it is grouped,
/// everything after it is appended verbatim. The function is meant to be
/// applied once to a raw number; feeding it its own output reinterprets the
/// group separator as a decimal point.
///
/// # Example
///
/// ```
/// use mission_core::format::format_number;
///
/// assert_eq!(format_number("30000"), "30.000");
/// assert_eq!(format_number("1234.5"), "1.234,5");
/// ```
#[must_use]
pub fn format_number(raw: &str) -> String {
    let (integer, decimals) = match raw.split_once('.') {
        Some((integer, decimals)) => (integer, Some(decimals)),
        None => (raw, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(*digit);
    }

    match decimals {
        Some(decimals) if !decimals.is_empty() => {
            grouped.push(DECIMAL_SEPARATOR);
            grouped.push_str(decimals);
            grouped
        }
        _ => grouped,
    }
}

/// Format a bounty in ISK.
#[must_use]
pub fn format_bounty(bounty: u64) -> String {
    format_number(&bounty.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_bounty(30_000), "30.000");
        assert_eq!(format_bounty(4_875), "4.875");
        assert_eq!(format_bounty(138_750), "138.750");
        assert_eq!(format_bounty(1_234_567), "1.234.567");
    }

    #[test]
    fn test_short_numbers_unchanged() {
        assert_eq!(format_bounty(0), "0");
        assert_eq!(format_bounty(999), "999");
    }

    #[test]
    fn test_decimal_part_kept() {
        assert_eq!(format_number("12345.75"), "12.345,75");
        assert_eq!(format_number("100.5"), "100,5");
    }

    #[test]
    fn test_trailing_point_has_no_decimal_separator() {
        assert_eq!(format_number("1000."), "1.000");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_number(""), "");
    }
}
