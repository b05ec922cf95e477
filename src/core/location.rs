//! Status sentence → location tag.
//!
//! Classification runs in three steps: a departure override ("departed
//! norfolk" with nothing named after it means the ship is at sea), then the
//! rightmost keyword mention across the whole ruleset, then a default derived
//! from the entity's homeport. It never fails.

use crate::domain::location::LocationTag;
use crate::domain::model::Homeport;

/// Keywords that place a sentence at `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRule {
    pub tag: LocationTag,
    pub keywords: Vec<String>,
}

impl LocationRule {
    pub fn new(tag: LocationTag, keywords: &[&str]) -> Self {
        Self {
            tag,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// "departed <home port>" phrase and the open-water tag it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRule {
    pub phrase: String,
    pub tag: LocationTag,
}

impl DepartureRule {
    pub fn new(phrase: &str, tag: LocationTag) -> Self {
        Self {
            phrase: phrase.to_lowercase(),
            tag,
        }
    }
}

/// Where an entity is assumed to be when its status names no place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeportDefaults {
    pub pacific: LocationTag,
    pub westpac: LocationTag,
    pub other: LocationTag,
}

impl HomeportDefaults {
    pub fn resolve(&self, homeport: &Homeport) -> LocationTag {
        match homeport {
            Homeport::Pacific => self.pacific,
            Homeport::Westpac => self.westpac,
            Homeport::Atlantic | Homeport::Other(_) => self.other,
        }
    }
}

impl Default for HomeportDefaults {
    fn default() -> Self {
        Self {
            pacific: LocationTag::PacificOcean,
            westpac: LocationTag::WesternPacific,
            other: LocationTag::AtlanticOcean,
        }
    }
}

/// Complete, swappable ruleset for one tracked category.
///
/// `rules` is ordered most specific first; order only matters for exact ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRuleset {
    pub rules: Vec<LocationRule>,
    pub departures: Vec<DepartureRule>,
    pub defaults: HomeportDefaults,
}

impl LocationRuleset {
    /// Appends keywords to the rule for `tag`, adding a rule before the broad
    /// oceans when the ruleset has none for it.
    pub fn extend_keywords(&mut self, tag: LocationTag, keywords: &[String]) {
        let keywords = keywords.iter().map(|k| k.trim().to_lowercase()).filter(|k| !k.is_empty());

        if let Some(rule) = self.rules.iter_mut().find(|r| r.tag == tag) {
            for keyword in keywords {
                if !rule.keywords.contains(&keyword) {
                    rule.keywords.push(keyword);
                }
            }
            return;
        }

        let position = self
            .rules
            .iter()
            .position(|r| is_ocean(r.tag))
            .unwrap_or(self.rules.len());
        self.rules.insert(
            position,
            LocationRule {
                tag,
                keywords: keywords.collect(),
            },
        );
    }
}

fn is_ocean(tag: LocationTag) -> bool {
    matches!(
        tag,
        LocationTag::AtlanticOcean | LocationTag::PacificOcean | LocationTag::IndianOcean
    )
}

/// A keyword occurrence; the greatest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit<'r> {
    pub tag: LocationTag,
    pub keyword: &'r str,
    pub position: usize,
}

impl KeywordHit<'_> {
    /// Later start wins; on the same start the longer keyword wins.
    /// Remaining ties keep the earlier rule.
    fn beats(&self, other: &KeywordHit<'_>) -> bool {
        (self.position, self.keyword.len()) > (other.position, other.keyword.len())
    }
}

#[derive(Debug, Clone)]
pub struct LocationClassifier {
    ruleset: LocationRuleset,
}

impl LocationClassifier {
    pub fn new(ruleset: LocationRuleset) -> Self {
        Self { ruleset }
    }

    pub fn ruleset(&self) -> &LocationRuleset {
        &self.ruleset
    }

    pub fn classify(&self, sentence: &str, homeport: &Homeport) -> LocationTag {
        let lower = sentence.to_lowercase();

        if let Some(tag) = self.departure_override(&lower) {
            return tag;
        }

        self.rightmost_match(&lower)
            .map(|hit| hit.tag)
            .unwrap_or_else(|| self.ruleset.defaults.resolve(homeport))
    }

    /// First departure phrase with no location keyword after its last occurrence.
    fn departure_override(&self, lower: &str) -> Option<LocationTag> {
        self.ruleset.departures.iter().find_map(|departure| {
            let idx = lower.rfind(departure.phrase.as_str())?;
            let remaining = &lower[idx + departure.phrase.len()..];
            if self.mentions_any_location(remaining) {
                None
            } else {
                tracing::trace!("Departure override '{}' -> {}", departure.phrase, departure.tag);
                Some(departure.tag)
            }
        })
    }

    fn mentions_any_location(&self, lower: &str) -> bool {
        self.ruleset
            .rules
            .iter()
            .flat_map(|rule| rule.keywords.iter())
            .any(|keyword| lower.contains(keyword.as_str()))
    }

    pub fn rightmost_match<'r>(&'r self, lower: &str) -> Option<KeywordHit<'r>> {
        let mut best: Option<KeywordHit<'r>> = None;

        for rule in &self.ruleset.rules {
            for keyword in &rule.keywords {
                let Some(position) = lower.rfind(keyword.as_str()) else {
                    continue;
                };
                let hit = KeywordHit {
                    tag: rule.tag,
                    keyword,
                    position,
                };
                if best.map_or(true, |current| hit.beats(&current)) {
                    best = Some(hit);
                }
            }
        }

        best
    }
}
