use crate::domain::location::{Coordinate, LocationTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scraped history text: trimmed, non-empty lines, oldest content first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock(String);

impl TextBlock {
    /// Wraps text that is already clean.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Normalizes raw page text and keeps only the newest `char_limit` characters.
    pub fn from_raw(raw: &str, char_limit: usize) -> Self {
        let clean = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let total = clean.chars().count();
        if total <= char_limit {
            return Self(clean);
        }

        // 只保留尾端（最新）的內容
        let skip = total - char_limit;
        let start = clean
            .char_indices()
            .nth(skip)
            .map(|(idx, _)| idx)
            .unwrap_or(clean.len());
        Self(clean[start..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.0.split('\n')
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Year attached to a line of text, or `Unknown` when the block carries no year at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearTag {
    Known(i32),
    Unknown,
}

impl fmt::Display for YearTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearTag::Known(year) => write!(f, "{}", year),
            YearTag::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for YearTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    pub text: &'a str,
    pub year: YearTag,
}

pub const NO_RECENT_STATUS: &str = "No recent status found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub year: YearTag,
    pub status_text: String,
}

impl StatusResult {
    pub fn not_found(year: YearTag) -> Self {
        Self {
            year,
            status_text: NO_RECENT_STATUS.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status_text != NO_RECENT_STATUS
    }
}

/// Fleet an entity is assigned to; drives the default location when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Homeport {
    Pacific,
    Westpac,
    #[default]
    Atlantic,
    Other(String),
}

impl From<&str> for Homeport {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PACIFIC" => Homeport::Pacific,
            "WESTPAC" => Homeport::Westpac,
            "ATLANTIC" => Homeport::Atlantic,
            other => Homeport::Other(other.to_string()),
        }
    }
}

impl From<String> for Homeport {
    fn from(value: String) -> Self {
        Homeport::from(value.as_str())
    }
}

impl From<Homeport> for String {
    fn from(value: Homeport) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Homeport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Homeport::Pacific => f.write_str("PACIFIC"),
            Homeport::Westpac => f.write_str("WESTPAC"),
            Homeport::Atlantic => f.write_str("ATLANTIC"),
            Homeport::Other(name) => f.write_str(name),
        }
    }
}

/// A tracked ship and where its history page lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub class: String,
    /// Hull type (CVN, LHD, ...) or destroyer flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default)]
    pub homeport: Homeport,
    pub url: String,
}

/// Output of the classification core for one text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub location: LocationTag,
    pub date: String,
    pub status: StatusResult,
}

/// Immutable per-entity record, before display offsets are applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityStatus {
    pub id: String,
    pub name: String,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub location: LocationTag,
    pub coordinate: Coordinate,
    pub date: String,
    pub status: String,
    pub source_url: String,
}

/// Final record handed to renderers: the base record plus where to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityStatusRecord {
    #[serde(flatten)]
    pub status: EntityStatus,
    pub display_coordinate: Coordinate,
}

#[derive(Debug, Clone)]
pub struct SourceText {
    pub entity: Entity,
    pub text: TextBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationGroup {
    pub location: LocationTag,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackerReport {
    pub tracker: String,
    pub generated_at: DateTime<Utc>,
    pub tracked: usize,
    pub records: Vec<EntityStatusRecord>,
    pub locations: Vec<LocationGroup>,
}
