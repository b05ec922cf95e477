//! Built-in reference data: rosters, rulesets and coordinates per tracked category.

mod coordinates;
mod destroyer;
mod fleet;

pub use coordinates::StaticDirectory;

use crate::core::location::LocationRuleset;
use crate::core::placement::OffsetProfile;
use crate::domain::model::{Entity, Homeport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub class: &'static str,
    /// "N/A" when the class has no subtype.
    pub subtype: &'static str,
    pub homeport: &'static str,
    pub url: &'static str,
}

impl RosterEntry {
    pub fn to_entity(&self) -> Entity {
        Entity {
            id: self.id.to_string(),
            name: self.name.to_string(),
            class: self.class.to_string(),
            subtype: (self.subtype != "N/A").then(|| self.subtype.to_string()),
            homeport: Homeport::from(self.homeport),
            url: self.url.to_string(),
        }
    }
}

/// Everything that differs between tracked categories.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub activity_keywords: Vec<String>,
    pub ruleset: LocationRuleset,
    pub offsets: OffsetProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Carriers and amphibious assault ships.
    #[default]
    Fleet,
    Destroyer,
}

impl Category {
    pub fn profile(&self) -> CategoryProfile {
        match self {
            Category::Fleet => fleet::profile(),
            Category::Destroyer => destroyer::profile(),
        }
    }

    pub fn roster(&self) -> &'static [RosterEntry] {
        match self {
            Category::Fleet => fleet::ROSTER,
            Category::Destroyer => destroyer::ROSTER,
        }
    }

    pub fn entities(&self) -> Vec<Entity> {
        self.roster().iter().map(RosterEntry::to_entity).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fleet => f.write_str("fleet"),
            Category::Destroyer => f.write_str("destroyer"),
        }
    }
}

pub(crate) fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::LocationTag;
    use crate::domain::ports::LocationDirectory;
    use std::collections::HashSet;

    #[test]
    fn test_roster_sizes() {
        assert_eq!(Category::Fleet.roster().len(), 20);
        assert_eq!(Category::Destroyer.roster().len(), 77);
    }

    #[test]
    fn test_roster_ids_are_unique_and_urls_valid() {
        for category in [Category::Fleet, Category::Destroyer] {
            let mut ids = HashSet::new();
            for entity in category.entities() {
                assert!(ids.insert(entity.id.clone()), "duplicate {}", entity.id);
                assert!(crate::utils::validation::validate_url("url", &entity.url).is_ok());
            }
        }
    }

    #[test]
    fn test_zumwalt_has_no_subtype() {
        let zumwalt = Category::Destroyer
            .entities()
            .into_iter()
            .find(|e| e.id == "DDG1000")
            .unwrap();
        assert_eq!(zumwalt.subtype, None);
        assert_eq!(zumwalt.class, "Zumwalt");
    }

    #[test]
    fn test_every_ruleset_tag_has_a_coordinate() {
        for category in [Category::Fleet, Category::Destroyer] {
            let profile = category.profile();
            let tags = profile
                .ruleset
                .rules
                .iter()
                .map(|r| r.tag)
                .chain(profile.ruleset.departures.iter().map(|d| d.tag));
            for tag in tags {
                let coordinate = StaticDirectory.coordinate(tag);
                assert!(coordinate.lat.abs() <= 90.0 && coordinate.lon.abs() <= 180.0);
            }
        }
    }

    #[test]
    fn test_destroyer_ruleset_adds_european_tags() {
        let tags: Vec<LocationTag> = Category::Destroyer
            .profile()
            .ruleset
            .rules
            .iter()
            .map(|r| r.tag)
            .collect();
        assert!(tags.contains(&LocationTag::Rota));
        assert!(tags.contains(&LocationTag::BalticSea));
        assert!(!Category::Fleet
            .profile()
            .ruleset
            .rules
            .iter()
            .any(|r| r.tag == LocationTag::Rota));
    }

    #[test]
    fn test_category_serde() {
        let parsed: Category = serde_json::from_str("\"destroyer\"").unwrap();
        assert_eq!(parsed, Category::Destroyer);
        assert_eq!(Category::Fleet.to_string(), "fleet");
    }
}
