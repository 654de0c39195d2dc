// src/utils.rs

/// Number of characters of the description echoed back to the caller
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
pub const TRUNCATION_MARKER: &str = "...";

/// First 100 characters of the description followed by the marker. The
/// marker is appended whatever the length, so clients can always tell the
/// echo is a preview.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str(TRUNCATION_MARKER);
    preview
}

/// Whole-dollar amount with thousands separators, e.g. `$124,800`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_description() {
        let description = "a".repeat(150);
        let echoed = truncate_description(&description);

        assert_eq!(echoed, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let description = "é".repeat(120);
        let echoed = truncate_description(&description);

        assert_eq!(echoed.chars().count(), 103);
        assert!(echoed.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn test_short_description_still_gets_marker() {
        assert_eq!(truncate_description("Short posting"), "Short posting...");
        assert_eq!(
            truncate_description(&"b".repeat(100)),
            format!("{}...", "b".repeat(100))
        );
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(41_600), "$41,600");
        assert_eq!(format_usd(124_800), "$124,800");
        assert_eq!(format_usd(1_000_000), "$1,000,000");
    }
}
