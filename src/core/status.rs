use crate::core::temporal::{AnnotatedText, YearWindow};
use crate::domain::model::{AnnotatedLine, StatusResult, YearTag};

/// Picks the latest line that reads like a movement event.
#[derive(Debug, Clone)]
pub struct StatusSelector {
    vocabulary: Vec<String>,
    window: YearWindow,
}

impl StatusSelector {
    pub fn new<I, S>(vocabulary: I, window: YearWindow) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vocabulary: vocabulary
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            window,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Scans bottom-up in the primary window, then in the secondary year.
    pub fn select(&self, annotated: &AnnotatedText<'_>) -> StatusResult {
        let window = self.window;

        self.latest_where(&annotated.lines, |year| window.is_primary(year))
            .or_else(|| {
                tracing::debug!(
                    "No status in {:?}, falling back to {}",
                    window.primary(),
                    window.secondary()
                );
                self.latest_where(&annotated.lines, |year| window.is_secondary(year))
            })
            .map(|line| StatusResult {
                year: line.year,
                status_text: line.text.to_string(),
            })
            .unwrap_or_else(|| StatusResult::not_found(annotated.current_year))
    }

    fn latest_where<'a, 'l>(
        &self,
        lines: &'l [AnnotatedLine<'a>],
        year_allowed: impl Fn(YearTag) -> bool,
    ) -> Option<&'l AnnotatedLine<'a>> {
        lines
            .iter()
            .rev()
            .find(|line| year_allowed(line.year) && self.qualifies(line.text))
    }

    fn qualifies(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.vocabulary.iter().any(|k| lower.contains(k.as_str())) && !is_range_caption(&lower)
    }
}

/// "From Jan. 5 - March 2 ..." lines caption a date range rather than report an event.
fn is_range_caption(lower: &str) -> bool {
    lower.trim().starts_with("from ") && lower.contains(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::temporal::TemporalAnnotator;
    use crate::domain::model::{TextBlock, NO_RECENT_STATUS};

    const VOCABULARY: &[&str] = &["moored", "arrived", "departed", "transited", "underway"];

    fn select(text: &str) -> StatusResult {
        let window = YearWindow::new(2025);
        let annotator = TemporalAnnotator::new(window).unwrap();
        let selector = StatusSelector::new(VOCABULARY.iter(), window);
        let block = TextBlock::new(text);
        selector.select(&annotator.annotate(&block))
    }

    #[test]
    fn test_returns_last_qualifying_line() {
        let result = select("2025\nJanuary transited Red Sea.\nFebruary arrived Bahrain.\n");
        assert_eq!(result.year, YearTag::Known(2025));
        assert_eq!(result.status_text, "February arrived Bahrain.");
    }

    #[test]
    fn test_skips_lines_without_vocabulary() {
        let result = select("2025\nMarch 3 moored at Pier 12.\nCrew held a picnic.");
        assert_eq!(result.status_text, "March 3 moored at Pier 12.");
    }

    #[test]
    fn test_skips_range_captions() {
        let result = select("2025\nMay 2 arrived Guam.\nFrom May 5 - May 9, transited the Philippine Sea.");
        assert_eq!(result.status_text, "May 2 arrived Guam.");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let result = select("2026\nUNDERWAY for sea trials");
        assert_eq!(result.year, YearTag::Known(2026));
        assert_eq!(result.status_text, "UNDERWAY for sea trials");
    }

    #[test]
    fn test_falls_back_to_secondary_year() {
        let result = select("2023\narrived Guam\n2024\nmoored Sasebo\n2025\nchange of command");
        assert_eq!(result.year, YearTag::Known(2024));
        assert_eq!(result.status_text, "moored Sasebo");
    }

    #[test]
    fn test_older_years_are_never_selected() {
        let result = select("2023\narrived Guam");
        assert_eq!(result.year, YearTag::Known(2023));
        assert_eq!(result.status_text, NO_RECENT_STATUS);
    }

    #[test]
    fn test_text_without_years_yields_terminal_fallback() {
        let result = select("moored at Norfolk\narrived Mayport");
        assert_eq!(result, StatusResult::not_found(YearTag::Unknown));
        assert!(!result.is_found());
    }

    #[test]
    fn test_empty_block() {
        let result = select("");
        assert_eq!(result.year, YearTag::Unknown);
        assert_eq!(result.status_text, NO_RECENT_STATUS);
    }

    #[test]
    fn test_no_later_qualifying_line_is_skipped() {
        let text = "2025\narrived Guam\ndeparted Guam\nholiday routine\nmoored Yokosuka\nliberty call";
        let result = select(text);
        let lines: Vec<&str> = text.split('\n').collect();
        let chosen = lines.iter().rposition(|l| *l == result.status_text).unwrap();
        let selector = StatusSelector::new(VOCABULARY.iter(), YearWindow::new(2025));
        assert!(lines[chosen + 1..].iter().all(|l| !selector.qualifies(l)));
    }
}
