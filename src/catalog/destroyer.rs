//! Arleigh Burke (Flights I through III) and Zumwalt class destroyers.

use super::{keywords, CategoryProfile, RosterEntry};
use crate::core::location::{DepartureRule, HomeportDefaults, LocationRule, LocationRuleset};
use crate::core::placement::{OffsetProfile, RadiusTier};
use crate::domain::location::LocationTag::{self, *};

pub const ACTIVITY_KEYWORDS: &[&str] = &[
    "moored", "anchored", "underway", "arrived", "departed",
    "transited", "operations", "returned", "participated", "conducted",
    "moved to", "visited", "pulled into", "sea trials", "flight deck",
    "undocked", "homeport", "recently", "deployed",
];

const LOCATION_KEYWORDS: &[(LocationTag, &[&str])] = &[
    // 港口與基地
    (Rota, &["rota", "naval station rota"]),
    (Bath, &["bath iron works", "bath maine", "biw"]),
    (Okinawa, &["okinawa", "white beach"]),
    (Sasebo, &["sasebo", "juliet basin"]),
    (Yokosuka, &["yokosuka"]),
    (NorfolkPortsmouth, &["norfolk", "portsmouth", "virginia beach", "naval station norfolk", "pier 11", "pier 12", "pier 14", "bae systems shipyard", "nassco"]),
    (SanDiego, &["san diego", "north island", "naval base san diego"]),
    (BremertonKitsap, &["bremerton", "kitsap", "psns", "puget sound"]),
    (NewportNews, &["newport news", "huntington ingalls"]),
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
    (CaribbeanSea, &["caribbean", "venezuela", "st. croix", "puerto rico", "virgin islands"]),
    (SouthChinaSea, &["south china sea", "spratly islands"]),
    (WesternPacific, &["western pacific", "westpac"]),
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
    (BalticSea, &["baltic"]),
    (BlackSea, &["black sea"]),
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
    ("departed everett", PacificOcean),
    ("departed yokosuka", WesternPacific),
    ("departed sasebo", WesternPacific),
    ("departed rota", Mediterranean),
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
        // 驅逐艦數量多，半徑較小但分級較細
        offsets: OffsetProfile {
            tiers: vec![
                RadiusTier { max_count: 3, radius: 2.0 },
                RadiusTier { max_count: 6, radius: 2.5 },
                RadiusTier { max_count: 10, radius: 3.0 },
                RadiusTier { max_count: 15, radius: 3.5 },
            ],
            overflow_radius: 4.0,
            stagger: 0.1,
            stagger_period: 3,
        },
    }
}

#[rustfmt::skip]
pub const ROSTER: &[RosterEntry] = &[
    RosterEntry { id: "DDG51", name: "USS Arleigh Burke", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg51history.htm" },
    RosterEntry { id: "DDG52", name: "USS Barry", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg52history.htm" },
    RosterEntry { id: "DDG53", name: "USS John Paul Jones", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg53history.htm" },
    RosterEntry { id: "DDG54", name: "USS Curtis Wilbur", class: "Arleigh Burke", subtype: "I", homeport: "WESTPAC", url: "http://uscarriers.net/ddg54history.htm" },
    RosterEntry { id: "DDG55", name: "USS Stout", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg55history.htm" },
    RosterEntry { id: "DDG56", name: "USS John S. McCain", class: "Arleigh Burke", subtype: "I", homeport: "WESTPAC", url: "http://uscarriers.net/ddg56history.htm" },
    RosterEntry { id: "DDG57", name: "USS Mitscher", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg57history.htm" },
    RosterEntry { id: "DDG58", name: "USS Laboon", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg58history.htm" },
    RosterEntry { id: "DDG59", name: "USS Russell", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg59history.htm" },
    RosterEntry { id: "DDG60", name: "USS Paul Hamilton", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg60history.htm" },
    RosterEntry { id: "DDG61", name: "USS Ramage", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg61history.htm" },
    RosterEntry { id: "DDG62", name: "USS Fitzgerald", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg62history.htm" },
    RosterEntry { id: "DDG63", name: "USS Stethem", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg63history.htm" },
    RosterEntry { id: "DDG64", name: "USS Carney", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg64history.htm" },
    RosterEntry { id: "DDG65", name: "USS Benfold", class: "Arleigh Burke", subtype: "I", homeport: "WESTPAC", url: "http://uscarriers.net/ddg65history.htm" },
    RosterEntry { id: "DDG66", name: "USS Gonzalez", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg66history.htm" },
    RosterEntry { id: "DDG67", name: "USS Cole", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg67history.htm" },
    RosterEntry { id: "DDG68", name: "USS The Sullivans", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg68history.htm" },
    RosterEntry { id: "DDG69", name: "USS Milius", class: "Arleigh Burke", subtype: "I", homeport: "WESTPAC", url: "http://uscarriers.net/ddg69history.htm" },
    RosterEntry { id: "DDG70", name: "USS Hopper", class: "Arleigh Burke", subtype: "I", homeport: "PACIFIC", url: "http://uscarriers.net/ddg70history.htm" },
    RosterEntry { id: "DDG71", name: "USS Ross", class: "Arleigh Burke", subtype: "I", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg71history.htm" },
    RosterEntry { id: "DDG72", name: "USS Mahan", class: "Arleigh Burke", subtype: "II", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg72history.htm" },
    RosterEntry { id: "DDG73", name: "USS Decatur", class: "Arleigh Burke", subtype: "II", homeport: "PACIFIC", url: "http://uscarriers.net/ddg73history.htm" },
    RosterEntry { id: "DDG74", name: "USS McFaul", class: "Arleigh Burke", subtype: "II", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg74history.htm" },
    RosterEntry { id: "DDG75", name: "USS Donald Cook", class: "Arleigh Burke", subtype: "II", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg75history.htm" },
    RosterEntry { id: "DDG76", name: "USS Higgins", class: "Arleigh Burke", subtype: "II", homeport: "PACIFIC", url: "http://uscarriers.net/ddg76history.htm" },
    RosterEntry { id: "DDG77", name: "USS O'Kane", class: "Arleigh Burke", subtype: "II", homeport: "PACIFIC", url: "http://uscarriers.net/ddg77history.htm" },
    RosterEntry { id: "DDG78", name: "USS Porter", class: "Arleigh Burke", subtype: "II", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg78history.htm" },
    RosterEntry { id: "DDG79", name: "USS Oscar Austin", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg79history.htm" },
    RosterEntry { id: "DDG80", name: "USS Roosevelt", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg80history.htm" },
    RosterEntry { id: "DDG81", name: "USS Winston S. Churchill", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg81history.htm" },
    RosterEntry { id: "DDG82", name: "USS Lassen", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg82history.htm" },
    RosterEntry { id: "DDG83", name: "USS Howard", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg83history.htm" },
    RosterEntry { id: "DDG84", name: "USS Bulkeley", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg84history.htm" },
    RosterEntry { id: "DDG85", name: "USS McCampbell", class: "Arleigh Burke", subtype: "IIA", homeport: "WESTPAC", url: "http://uscarriers.net/ddg85history.htm" },
    RosterEntry { id: "DDG86", name: "USS Shoup", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg86history.htm" },
    RosterEntry { id: "DDG87", name: "USS Mason", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg87history.htm" },
    RosterEntry { id: "DDG88", name: "USS Preble", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg88history.htm" },
    RosterEntry { id: "DDG89", name: "USS Mustin", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg89history.htm" },
    RosterEntry { id: "DDG90", name: "USS Chafee", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg90history.htm" },
    RosterEntry { id: "DDG91", name: "USS Pinckney", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg91history.htm" },
    RosterEntry { id: "DDG92", name: "USS Momsen", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg92history.htm" },
    RosterEntry { id: "DDG93", name: "USS Chung-Hoon", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg93history.htm" },
    RosterEntry { id: "DDG94", name: "USS Nitze", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg94history.htm" },
    RosterEntry { id: "DDG95", name: "USS James E. Williams", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg95history.htm" },
    RosterEntry { id: "DDG96", name: "USS Bainbridge", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg96history.htm" },
    RosterEntry { id: "DDG97", name: "USS Halsey", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg97history.htm" },
    RosterEntry { id: "DDG98", name: "USS Forrest Sherman", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg98history.htm" },
    RosterEntry { id: "DDG99", name: "USS Farragut", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg99history.htm" },
    RosterEntry { id: "DDG100", name: "USS Kidd", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg100history.htm" },
    RosterEntry { id: "DDG101", name: "USS Gridley", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg101history.htm" },
    RosterEntry { id: "DDG102", name: "USS Sampson", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg102history.htm" },
    RosterEntry { id: "DDG103", name: "USS Truxtun", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg103history.htm" },
    RosterEntry { id: "DDG104", name: "USS Sterett", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg104history.htm" },
    RosterEntry { id: "DDG105", name: "USS Dewey", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg105history.htm" },
    RosterEntry { id: "DDG106", name: "USS Stockdale", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg106history.htm" },
    RosterEntry { id: "DDG107", name: "USS Gravely", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg107history.htm" },
    RosterEntry { id: "DDG108", name: "USS Wayne E. Meyer", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg108history.htm" },
    RosterEntry { id: "DDG109", name: "USS Jason Dunham", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg109history.htm" },
    RosterEntry { id: "DDG110", name: "USS William P. Lawrence", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg110history.htm" },
    RosterEntry { id: "DDG111", name: "USS Spruance", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg111history.htm" },
    RosterEntry { id: "DDG112", name: "USS Michael Murphy", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg112history.htm" },
    RosterEntry { id: "DDG113", name: "USS John Finn", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg113history.htm" },
    RosterEntry { id: "DDG114", name: "USS Ralph Johnson", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg114history.htm" },
    RosterEntry { id: "DDG115", name: "USS Rafael Peralta", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg115history.htm" },
    RosterEntry { id: "DDG116", name: "USS Thomas Hudner", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg116history.htm" },
    RosterEntry { id: "DDG117", name: "USS Paul Ignatius", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg117history.htm" },
    RosterEntry { id: "DDG118", name: "USS Daniel Inouye", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg118history.htm" },
    RosterEntry { id: "DDG119", name: "USS Delbert D. Black", class: "Arleigh Burke", subtype: "IIA", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg119history.htm" },
    RosterEntry { id: "DDG120", name: "USS Carl M. Levin", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg120history.htm" },
    RosterEntry { id: "DDG121", name: "USS Frank E. Petersen Jr.", class: "Arleigh Burke", subtype: "IIA", homeport: "PACIFIC", url: "http://uscarriers.net/ddg121history.htm" },
    RosterEntry { id: "DDG122", name: "USS John Basilone", class: "Arleigh Burke", subtype: "III", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg122history.htm" },
    RosterEntry { id: "DDG123", name: "USS Lenah Sutcliffe Higbee", class: "Arleigh Burke", subtype: "III", homeport: "PACIFIC", url: "http://uscarriers.net/ddg123history.htm" },
    RosterEntry { id: "DDG125", name: "USS Jack H. Lucas", class: "Arleigh Burke", subtype: "III", homeport: "ATLANTIC", url: "http://uscarriers.net/ddg125history.htm" },
    RosterEntry { id: "DDG1000", name: "USS Zumwalt", class: "Zumwalt", subtype: "N/A", homeport: "PACIFIC", url: "http://uscarriers.net/ddg1000history.htm" },
    RosterEntry { id: "DDG1001", name: "USS Michael Monsoor", class: "Zumwalt", subtype: "N/A", homeport: "PACIFIC", url: "http://uscarriers.net/ddg1001history.htm" },
    RosterEntry { id: "DDG1002", name: "USS Lyndon B. Johnson", class: "Zumwalt", subtype: "N/A", homeport: "PACIFIC", url: "http://uscarriers.net/ddg1002history.htm" },
];
