use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named places a status sentence can be classified into.
///
/// The set is closed: every category's ruleset draws its tags from here, and
/// the coordinate directory must cover all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationTag {
    // 美國港口與造船廠
    NorfolkPortsmouth,
    SanDiego,
    BremertonKitsap,
    NewportNews,
    PearlHarbor,
    Mayport,
    Everett,
    Pascagoula,
    Bath,
    Rota,

    // 前進部署與海外港口
    Yokosuka,
    Sasebo,
    Guam,
    Singapore,
    Bahrain,
    Dubai,
    Busan,
    Philippines,
    Malaysia,
    Okinawa,
    Ponce,

    // 海域與咽喉要道
    SouthChinaSea,
    WesternPacific,
    PhilippineSea,
    EastChinaSea,
    RedSea,
    PersianGulf,
    GulfOfOman,
    GulfOfAden,
    ArabianSea,
    Mediterranean,
    CaribbeanSea,
    NorthSea,
    NorwegianSea,
    BalticSea,
    BlackSea,
    StraitOfGibraltar,
    SuezCanal,
    BabElMandeb,
    SeaOfJapan,

    // 大洋
    AtlanticOcean,
    PacificOcean,
    IndianOcean,
}

impl LocationTag {
    pub const ALL: [LocationTag; 43] = [
        LocationTag::NorfolkPortsmouth,
        LocationTag::SanDiego,
        LocationTag::BremertonKitsap,
        LocationTag::NewportNews,
        LocationTag::PearlHarbor,
        LocationTag::Mayport,
        LocationTag::Everett,
        LocationTag::Pascagoula,
        LocationTag::Bath,
        LocationTag::Rota,
        LocationTag::Yokosuka,
        LocationTag::Sasebo,
        LocationTag::Guam,
        LocationTag::Singapore,
        LocationTag::Bahrain,
        LocationTag::Dubai,
        LocationTag::Busan,
        LocationTag::Philippines,
        LocationTag::Malaysia,
        LocationTag::Okinawa,
        LocationTag::Ponce,
        LocationTag::SouthChinaSea,
        LocationTag::WesternPacific,
        LocationTag::PhilippineSea,
        LocationTag::EastChinaSea,
        LocationTag::RedSea,
        LocationTag::PersianGulf,
        LocationTag::GulfOfOman,
        LocationTag::GulfOfAden,
        LocationTag::ArabianSea,
        LocationTag::Mediterranean,
        LocationTag::CaribbeanSea,
        LocationTag::NorthSea,
        LocationTag::NorwegianSea,
        LocationTag::BalticSea,
        LocationTag::BlackSea,
        LocationTag::StraitOfGibraltar,
        LocationTag::SuezCanal,
        LocationTag::BabElMandeb,
        LocationTag::SeaOfJapan,
        LocationTag::AtlanticOcean,
        LocationTag::PacificOcean,
        LocationTag::IndianOcean,
    ];

    /// Display name, as rendered on the map and written to output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationTag::NorfolkPortsmouth => "Norfolk / Portsmouth",
            LocationTag::SanDiego => "San Diego",
            LocationTag::BremertonKitsap => "Bremerton / Kitsap",
            LocationTag::NewportNews => "Newport News",
            LocationTag::PearlHarbor => "Pearl Harbor",
            LocationTag::Mayport => "Mayport",
            LocationTag::Everett => "Everett",
            LocationTag::Pascagoula => "Pascagoula",
            LocationTag::Bath => "Bath",
            LocationTag::Rota => "Rota",
            LocationTag::Yokosuka => "Yokosuka",
            LocationTag::Sasebo => "Sasebo",
            LocationTag::Guam => "Guam",
            LocationTag::Singapore => "Singapore",
            LocationTag::Bahrain => "Bahrain",
            LocationTag::Dubai => "Dubai",
            LocationTag::Busan => "Busan",
            LocationTag::Philippines => "Philippines",
            LocationTag::Malaysia => "Malaysia",
            LocationTag::Okinawa => "Okinawa",
            LocationTag::Ponce => "Ponce",
            LocationTag::SouthChinaSea => "South China Sea",
            LocationTag::WesternPacific => "Western Pacific (WESTPAC)",
            LocationTag::PhilippineSea => "Philippine Sea",
            LocationTag::EastChinaSea => "East China Sea",
            LocationTag::RedSea => "Red Sea",
            LocationTag::PersianGulf => "Persian Gulf",
            LocationTag::GulfOfOman => "Gulf of Oman",
            LocationTag::GulfOfAden => "Gulf of Aden",
            LocationTag::ArabianSea => "Arabian Sea",
            LocationTag::Mediterranean => "Mediterranean",
            LocationTag::CaribbeanSea => "Caribbean Sea",
            LocationTag::NorthSea => "North Sea",
            LocationTag::NorwegianSea => "Norwegian Sea",
            LocationTag::BalticSea => "Baltic Sea",
            LocationTag::BlackSea => "Black Sea",
            LocationTag::StraitOfGibraltar => "Strait of Gibraltar",
            LocationTag::SuezCanal => "Suez Canal",
            LocationTag::BabElMandeb => "Bab el-Mandeb",
            LocationTag::SeaOfJapan => "Sea of Japan",
            LocationTag::AtlanticOcean => "Atlantic Ocean",
            LocationTag::PacificOcean => "Pacific Ocean",
            LocationTag::IndianOcean => "Indian Ocean",
        }
    }
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LocationTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown location: {}", s))
    }
}

impl Serialize for LocationTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LocationTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Theatre a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Conus,
    Pacific,
    Westpac,
    Indopac,
    Centcom,
    Eucom,
    Southcom,
    Atlantic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
    pub region: Region,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64, region: Region) -> Self {
        Self { lat, lon, region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip_through_from_str() {
        for tag in LocationTag::ALL {
            assert_eq!(tag.as_str().parse::<LocationTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!(
            "south china sea".parse::<LocationTag>(),
            Ok(LocationTag::SouthChinaSea)
        );
        assert!("Atlantis".parse::<LocationTag>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&LocationTag::WesternPacific).unwrap();
        assert_eq!(json, "\"Western Pacific (WESTPAC)\"");
        let region = serde_json::to_string(&Region::Centcom).unwrap();
        assert_eq!(region, "\"CENTCOM\"");
    }
}
