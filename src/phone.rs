//! Input mask for Brazilian phone numbers.

/// Digits kept from the input: two for the area code, up to nine for the line
const MAX_DIGITS: usize = 11;

/// Mask raw keystrokes as `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
///
/// The mask grows with the input so partial numbers render sensibly while
/// typing. Anything past the eleventh digit is dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
