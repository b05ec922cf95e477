use crate::domain::location::{Coordinate, LocationTag, Region};
use crate::domain::ports::LocationDirectory;

/// Compiled-in coordinate table covering every `LocationTag`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDirectory;

impl LocationDirectory for StaticDirectory {
    fn coordinate(&self, tag: LocationTag) -> Coordinate {
        use LocationTag::*;
        use Region::*;

        let (lat, lon, region) = match tag {
            // 美國港口與造船廠
            NorfolkPortsmouth => (36.9473, -76.3134, Conus),
            SanDiego => (32.7157, -117.1611, Conus),
            BremertonKitsap => (47.5673, -122.6329, Conus),
            NewportNews => (36.9788, -76.4280, Conus),
            PearlHarbor => (21.3545, -157.9698, Pacific),
            Mayport => (30.3918, -81.4285, Conus),
            Everett => (47.9790, -122.2021, Conus),
            Pascagoula => (30.3658, -88.5561, Conus),
            Bath => (43.9106, -69.8206, Conus),
            Rota => (36.6175, -6.3497, Eucom),

            // 前進部署與海外港口
            Yokosuka => (35.2831, 139.6703, Westpac),
            Sasebo => (33.1595, 129.7235, Westpac),
            Guam => (13.4443, 144.7937, Westpac),
            Singapore => (1.2655, 103.8200, Indopac),
            Bahrain => (26.2235, 50.5876, Centcom),
            Dubai => (25.2582, 55.3047, Centcom),
            Busan => (35.1028, 129.0403, Westpac),
            Philippines => (14.5995, 120.9842, Westpac),
            Malaysia => (3.1390, 101.6869, Indopac),
            Okinawa => (26.3344, 127.8056, Westpac),
            Ponce => (17.9800, -66.6141, Southcom),

            // 海域
            SouthChinaSea => (12.0, 114.0, Westpac),
            WesternPacific => (15.0, 135.0, Westpac),
            PhilippineSea => (20.0, 130.0, Westpac),
            EastChinaSea => (28.0, 125.0, Westpac),
            RedSea => (20.0, 38.0, Centcom),
            PersianGulf => (27.0, 51.0, Centcom),
            GulfOfOman => (24.5, 58.5, Centcom),
            GulfOfAden => (12.5, 47.0, Centcom),
            ArabianSea => (15.0, 65.0, Centcom),
            Mediterranean => (35.0, 18.0, Eucom),
            CaribbeanSea => (15.5, -73.0, Southcom),
            NorthSea => (56.0, 3.0, Eucom),
            NorwegianSea => (68.0, 5.0, Eucom),
            BalticSea => (55.0, 15.0, Eucom),
            BlackSea => (43.0, 35.0, Eucom),
            StraitOfGibraltar => (35.95, -5.6, Eucom),
            SuezCanal => (30.6, 32.33, Centcom),
            BabElMandeb => (12.5833, 43.3333, Centcom),
            SeaOfJapan => (40.0, 135.0, Westpac),

            // 大洋
            AtlanticOcean => (32.0, -65.0, Atlantic),
            PacificOcean => (25.0, -140.0, Pacific),
            IndianOcean => (-5.0, 75.0, Indopac),
        };

        Coordinate::new(lat, lon, region)
    }
}
