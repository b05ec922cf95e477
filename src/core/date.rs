use regex::Regex;
use std::sync::LazyLock;

pub const DATE_UNSPECIFIED: &str = "Date Unspecified";

/// Abbreviated or full month name followed by a day number ("Jan. 8", "September 26").
static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2}")
        .unwrap()
});

/// Rightmost month-day token in the sentence.
pub fn find_last_date(text: &str) -> Option<&str> {
    MONTH_DAY_RE.find_iter(text).last().map(|m| m.as_str())
}

pub fn extract_date(text: &str) -> String {
    find_last_date(text)
        .unwrap_or(DATE_UNSPECIFIED)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_last_date() {
        assert_eq!(
            extract_date("Departed Norfolk on Jan. 8 and arrived Mayport September 26."),
            "September 26"
        );
    }

    #[test]
    fn test_abbreviations_and_case() {
        assert_eq!(extract_date("moored at pier 12 on sept. 3"), "sept. 3");
        assert_eq!(extract_date("DEC 14 underway"), "DEC 14");
    }

    #[test]
    fn test_month_without_day_is_not_a_date() {
        assert_eq!(extract_date("February arrived Bahrain."), DATE_UNSPECIFIED);
        assert_eq!(find_last_date("January transited Red Sea."), None);
    }

    #[test]
    fn test_only_first_two_digits_of_day() {
        assert_eq!(extract_date("On March 2025 arrived Guam"), "March 20");
    }
}
