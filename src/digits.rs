//! Numeral-script normalization for phone entry.
//!
//! Arabic-Indic (٠١٢٣٤٥٦٧٨٩) and Eastern Arabic (۰۱۲۳۴۵۶۷۸۹) numerals are
//! mapped to ASCII so typed input is always handled as `0-9`.

const ARABIC_INDIC_ZERO: u32 = 0x0660;
const EASTERN_ARABIC_ZERO: u32 = 0x06F0;

/// Map a single numeral to its ASCII digit, if it belongs to one of the
/// supported scripts.
fn ascii_digit(c: char) -> Option<char> {
    let code = c as u32;
    let offset = if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
        code - ARABIC_INDIC_ZERO
    } else if (EASTERN_ARABIC_ZERO..EASTERN_ARABIC_ZERO + 10).contains(&code) {
        code - EASTERN_ARABIC_ZERO
    } else {
        return None;
    };
    char::from_digit(offset, 10)
}

/// Replace Arabic-Indic and Eastern Arabic numerals with ASCII digits.
/// All other characters pass through unchanged.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect()
}

/// Keep only ASCII digits, after normalizing numerals from other scripts.
pub fn extract_digits(text: &str) -> String {
    text.chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .filter(char::is_ascii_digit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digits_arabic_indic() {
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_normalize_digits_eastern_arabic() {
        assert_eq!(normalize_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_normalize_digits_keeps_other_chars() {
        assert_eq!(normalize_digits("+٩٢ (300)"), "+92 (300)");
        assert_eq!(normalize_digits("abc"), "abc");
        assert_eq!(normalize_digits(""), "");
    }

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("٠١٢٣"), "0123");
        assert_eq!(extract_digits("۰۱۲۳"), "0123");
        assert_eq!(extract_digits("a1b2c3"), "123");
        assert_eq!(extract_digits("+1 (301) 555-1234"), "13015551234");
        assert_eq!(extract_digits("٣٠١-۵۵۵"), "301555");
        assert_eq!(extract_digits(""), "");
    }

    #[test]
    fn test_extract_digits_drops_other_unicode_digits() {
        // Devanagari and fullwidth digits are not part of the mapping
        assert_eq!(extract_digits("१२३"), "");
        assert_eq!(extract_digits("１２３"), "");
    }
}
