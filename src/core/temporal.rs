use crate::domain::model::{AnnotatedLine, TextBlock, YearTag};
use crate::utils::error::Result;
use chrono::Datelike;
use regex::Regex;
use std::ops::RangeInclusive;

/// Which years count as "recent" relative to a reference year.
///
/// With reference 2025 and the default span the scan range is 2023..=2027,
/// the primary window 2025..=2027 and the secondary year 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub reference: i32,
    pub lookback: i32,
    pub lookahead: i32,
}

impl YearWindow {
    pub const DEFAULT_LOOKBACK: i32 = 2;
    pub const DEFAULT_LOOKAHEAD: i32 = 2;

    pub fn new(reference: i32) -> Self {
        Self::with_span(reference, Self::DEFAULT_LOOKBACK, Self::DEFAULT_LOOKAHEAD)
    }

    pub fn with_span(reference: i32, lookback: i32, lookahead: i32) -> Self {
        Self {
            reference,
            lookback: lookback.max(1),
            lookahead: lookahead.max(0),
        }
    }

    pub fn current() -> Self {
        Self::new(chrono::Utc::now().year())
    }

    pub fn scan_range(&self) -> RangeInclusive<i32> {
        (self.reference - self.lookback)..=(self.reference + self.lookahead)
    }

    pub fn primary(&self) -> RangeInclusive<i32> {
        self.reference..=(self.reference + self.lookahead)
    }

    pub fn secondary(&self) -> i32 {
        self.reference - 1
    }

    pub fn is_primary(&self, year: YearTag) -> bool {
        matches!(year, YearTag::Known(y) if self.primary().contains(&y))
    }

    pub fn is_secondary(&self, year: YearTag) -> bool {
        year == YearTag::Known(self.secondary())
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::current()
    }
}

/// Annotated view of a text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedText<'a> {
    /// Best guess at the block's latest year, used when no status line qualifies.
    pub current_year: YearTag,
    pub lines: Vec<AnnotatedLine<'a>>,
}

/// Tags every line with the year of the closest year header above it.
#[derive(Debug, Clone)]
pub struct TemporalAnnotator {
    window: YearWindow,
    year_token: Regex,
    year_header: Regex,
}

impl TemporalAnnotator {
    pub fn new(window: YearWindow) -> Result<Self> {
        let alternation = window
            .scan_range()
            .map(|year| year.to_string())
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            window,
            year_token: Regex::new(&format!("(?:{})", alternation))?,
            year_header: Regex::new(&format!("^(?:{})", alternation))?,
        })
    }

    pub fn window(&self) -> YearWindow {
        self.window
    }

    /// Latest primary-window year in the block, else the latest secondary year,
    /// else the last in-range year of any kind.
    pub fn initial_year(&self, text: &TextBlock) -> YearTag {
        let years: Vec<YearTag> = self
            .year_token
            .find_iter(text.as_str())
            .filter_map(|m| m.as_str().parse().ok())
            .map(YearTag::Known)
            .collect();

        years
            .iter()
            .rev()
            .find(|year| self.window.is_primary(**year))
            .or_else(|| {
                years
                    .iter()
                    .rev()
                    .find(|year| self.window.is_secondary(**year))
            })
            .or_else(|| years.last())
            .copied()
            .unwrap_or(YearTag::Unknown)
    }

    pub fn annotate<'a>(&self, text: &'a TextBlock) -> AnnotatedText<'a> {
        let current_year = self.initial_year(text);
        let mut running_year = current_year;

        let lines = text
            .lines()
            .map(|line| {
                if let Some(header) = self.year_header.find(line) {
                    if let Ok(year) = header.as_str().parse() {
                        running_year = YearTag::Known(year);
                    }
                }
                AnnotatedLine {
                    text: line,
                    year: running_year,
                }
            })
            .collect();

        AnnotatedText {
            current_year,
            lines,
        }
    }
}
