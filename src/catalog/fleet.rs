//! Carriers and amphibious assault ships.

use super::{keywords, CategoryProfile, RosterEntry};
use crate::core::location::{DepartureRule, HomeportDefaults, LocationRule, LocationRuleset};
use crate::core::placement::{OffsetProfile, RadiusTier};
use crate::domain::location::LocationTag::{self, *};

pub const ACTIVITY_KEYWORDS: &[&str] = &[
    "moored", "anchored", "underway", "arrived", "departed",
    "transited", "operations", "returned", "participated", "conducted",
    "moved to", "visited", "pulled into", "sea trials", "flight deck",
    "undocked", "homeport", "recently",
];

const LOCATION_KEYWORDS: &[(LocationTag, &[&str])] = &[
    // 港口與基地
    (Ponce, &["ponce", "port of ponce"]),
    (Okinawa, &["okinawa", "white beach", "east coast of okinawa"]),
    (Sasebo, &["sasebo", "juliet basin wharf"]),
    (Yokosuka, &["yokosuka"]),
    (NorfolkPortsmouth, &["norfolk", "portsmouth", "virginia beach", "naval station norfolk", "pier 11", "pier 12", "pier 14", "bae systems shipyard", "nassco"]),
    (SanDiego, &["san diego", "north island", "camp pendleton", "naval base san diego"]),
    (BremertonKitsap, &["bremerton", "kitsap", "psns", "puget sound"]),
    (NewportNews, &["newport news", "huntington ingalls", "outfitting berth"]),
    (PearlHarbor, &["pearl harbor"]),
    (Mayport, &["mayport", "naval station mayport"]),
    (Everett, &["everett"]),
    (Pascagoula, &["pascagoula", "ingalls"]),
    (Guam, &["guam", "apra"]),
    (Singapore, &["singapore", "changi"]),
    (Bahrain, &["bahrain", "manama"]),
    (Dubai, &["dubai", "jebel ali"]),
    (Busan, &["busan"]),
    (Philippines, &["philippines", "manila", "subic"]),
    (Malaysia, &["malaysia", "klang"]),

    // 區域與海域
    (CaribbeanSea, &["caribbean", "venezuela", "orchila", "st. croix", "trinidad", "tobago", "puerto rico", "virgin islands", "absolute resolve"]),
    (SouthChinaSea, &["south china sea", "spratly islands", "spratly", "luzon"]),
    (WesternPacific, &["san bernardino strait", "western pacific", "westpac"]),
    (PhilippineSea, &["philippine sea"]),
    (EastChinaSea, &["east china sea"]),
    (RedSea, &["red sea"]),
    (PersianGulf, &["persian gulf", "arabian gulf"]),
    (GulfOfOman, &["gulf of oman"]),
    (GulfOfAden, &["gulf of aden"]),
    (ArabianSea, &["arabian sea"]),
    (Mediterranean, &["mediterranean", "med sea"]),
    (NorthSea, &["north sea"]),
    (NorwegianSea, &["norwegian sea"]),
    (StraitOfGibraltar, &["gibraltar"]),
    (SuezCanal, &["suez"]),
    (BabElMandeb, &["bab el-mandeb"]),
    (SeaOfJapan, &["sea of japan"]),

    // 大洋（最廣泛，放最後）
    (AtlanticOcean, &["atlantic"]),
    (PacificOcean, &["pacific"]),
    (IndianOcean, &["indian ocean"]),
];

const DEPARTURES: &[(&str, LocationTag)] = &[
    ("departed san diego", PacificOcean),
    ("departed norfolk", AtlanticOcean),
    ("departed pearl harbor", PacificOcean),
    ("departed mayport", AtlanticOcean),
    ("departed bremerton", PacificOcean),
    ("departed yokosuka", WesternPacific),
    ("departed sasebo", WesternPacific),
];

pub fn profile() -> CategoryProfile {
    CategoryProfile {
        activity_keywords: keywords(ACTIVITY_KEYWORDS),
        ruleset: LocationRuleset {
            rules: LOCATION_KEYWORDS
                .iter()
                .map(|(tag, words)| LocationRule::new(*tag, words))
                .collect(),
            departures: DEPARTURES
                .iter()
                .map(|(phrase, tag)| DepartureRule::new(phrase, *tag))
                .collect(),
            defaults: HomeportDefaults::default(),
        },
        // 大型港口（Norfolk、San Diego）常常擠滿艦艇
        offsets: OffsetProfile {
            tiers: vec![
                RadiusTier { max_count: 3, radius: 3.0 },
                RadiusTier { max_count: 5, radius: 4.0 },
                RadiusTier { max_count: 8, radius: 5.0 },
            ],
            overflow_radius: 6.0,
            stagger: 0.15,
            stagger_period: 2,
        },
    }
}

#[rustfmt::skip]
pub const ROSTER: &[RosterEntry] = &[
    RosterEntry { id: "CVN68", name: "USS Nimitz", class: "Nimitz", subtype: "CVN", homeport: "PACIFIC", url: "http://uscarriers.net/cvn68history.htm" },
    RosterEntry { id: "CVN69", name: "USS Dwight D. Eisenhower", class: "Nimitz", subtype: "CVN", homeport: "ATLANTIC", url: "http://uscarriers.net/cvn69history.htm" },
    RosterEntry { id: "CVN70", name: "USS Carl Vinson", class: "Nimitz", subtype: "CVN", homeport: "PACIFIC", url: "http://uscarriers.net/cvn70history.htm" },
    RosterEntry { id: "CVN71", name: "USS Theodore Roosevelt", class: "Nimitz", subtype: "CVN", homeport: "PACIFIC", url: "http://uscarriers.net/cvn71history.htm" },
    RosterEntry { id: "CVN72", name: "USS Abraham Lincoln", class: "Nimitz", subtype: "CVN", homeport: "PACIFIC", url: "http://uscarriers.net/cvn72history.htm" },
    RosterEntry { id: "CVN73", name: "USS George Washington", class: "Nimitz", subtype: "CVN", homeport: "WESTPAC", url: "http://uscarriers.net/cvn73history.htm" },
    RosterEntry { id: "CVN74", name: "USS John C. Stennis", class: "Nimitz", subtype: "CVN", homeport: "ATLANTIC", url: "http://uscarriers.net/cvn74history.htm" },
    RosterEntry { id: "CVN75", name: "USS Harry S. Truman", class: "Nimitz", subtype: "CVN", homeport: "ATLANTIC", url: "http://uscarriers.net/cvn75history.htm" },
    RosterEntry { id: "CVN76", name: "USS Ronald Reagan", class: "Nimitz", subtype: "CVN", homeport: "PACIFIC", url: "http://uscarriers.net/cvn76history.htm" },
    RosterEntry { id: "CVN77", name: "USS George H.W. Bush", class: "Nimitz", subtype: "CVN", homeport: "ATLANTIC", url: "http://uscarriers.net/cvn77history.htm" },
    RosterEntry { id: "CVN78", name: "USS Gerald R. Ford", class: "Ford", subtype: "CVN", homeport: "ATLANTIC", url: "http://uscarriers.net/cvn78history.htm" },
    RosterEntry { id: "LHD1", name: "USS Wasp", class: "Wasp", subtype: "LHD", homeport: "ATLANTIC", url: "http://uscarriers.net/lhd1history.htm" },
    RosterEntry { id: "LHD2", name: "USS Essex", class: "Wasp", subtype: "LHD", homeport: "PACIFIC", url: "http://uscarriers.net/lhd2history.htm" },
    RosterEntry { id: "LHD3", name: "USS Kearsarge", class: "Wasp", subtype: "LHD", homeport: "ATLANTIC", url: "http://uscarriers.net/lhd3history.htm" },
    RosterEntry { id: "LHD4", name: "USS Boxer", class: "Wasp", subtype: "LHD", homeport: "PACIFIC", url: "http://uscarriers.net/lhd4history.htm" },
    RosterEntry { id: "LHD5", name: "USS Bataan", class: "Wasp", subtype: "LHD", homeport: "ATLANTIC", url: "http://uscarriers.net/lhd5history.htm" },
    RosterEntry { id: "LHD7", name: "USS Iwo Jima", class: "Wasp", subtype: "LHD", homeport: "ATLANTIC", url: "http://uscarriers.net/lhd7history.htm" },
    RosterEntry { id: "LHD8", name: "USS Makin Island", class: "Wasp", subtype: "LHD", homeport: "PACIFIC", url: "http://uscarriers.net/lhd8history.htm" },
    RosterEntry { id: "LHA6", name: "USS America", class: "America", subtype: "LHA", homeport: "PACIFIC", url: "http://uscarriers.net/lha6history.htm" },
    RosterEntry { id: "LHA7", name: "USS Tripoli", class: "America", subtype: "LHA", homeport: "WESTPAC", url: "http://uscarriers.net/lha7history.htm" },
];
