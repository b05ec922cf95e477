use crate::domain::location::{Coordinate, LocationTag};
use crate::domain::model::{EntityStatus, EntityStatusRecord};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Radius used for groups of up to `max_count` entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTier {
    pub max_count: usize,
    pub radius: f64,
}

/// How far co-located markers are pushed apart, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetProfile {
    /// Ascending by `max_count`.
    pub tiers: Vec<RadiusTier>,
    pub overflow_radius: f64,
    /// Per-entity radius growth, applied as `1 + stagger * (i % stagger_period)`.
    pub stagger: f64,
    pub stagger_period: usize,
}

impl OffsetProfile {
    pub fn base_radius(&self, count: usize) -> f64 {
        self.tiers
            .iter()
            .find(|tier| count <= tier.max_count)
            .map(|tier| tier.radius)
            .unwrap_or(self.overflow_radius)
    }

    pub fn radius_for(&self, index: usize, count: usize) -> f64 {
        let period = self.stagger_period.max(1);
        self.base_radius(count) * (1.0 + self.stagger * (index % period) as f64)
    }

    /// Upper bound on any offset for a group of `count`.
    pub fn max_radius(&self, count: usize) -> f64 {
        let steps = self.stagger_period.max(1).min(count).saturating_sub(1);
        self.base_radius(count) * (1.0 + self.stagger * steps as f64)
    }
}

/// Position of member `index` in a ring of `count` around `base`.
pub fn ring_position(base: &Coordinate, index: usize, count: usize, profile: &OffsetProfile) -> Coordinate {
    if count <= 1 {
        return *base;
    }

    let angle = 2.0 * PI * index as f64 / count as f64;
    let radius = profile.radius_for(index, count);

    Coordinate {
        lat: base.lat + radius * angle.sin(),
        lon: base.lon + radius * angle.cos(),
        region: base.region,
    }
}

/// Spreads entities sharing a location around it; output keeps input order.
pub fn place_offsets(records: Vec<EntityStatus>, profile: &OffsetProfile) -> Vec<EntityStatusRecord> {
    let mut group_sizes: HashMap<LocationTag, usize> = HashMap::new();
    for record in &records {
        *group_sizes.entry(record.location).or_default() += 1;
    }

    let mut seen: HashMap<LocationTag, usize> = HashMap::new();
    records
        .into_iter()
        .map(|status| {
            let index = seen.entry(status.location).or_default();
            let count = group_sizes.get(&status.location).copied().unwrap_or(1);
            let display_coordinate = ring_position(&status.coordinate, *index, count, profile);
            *index += 1;

            EntityStatusRecord {
                status,
                display_coordinate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::Region;

    fn profile() -> OffsetProfile {
        OffsetProfile {
            tiers: vec![
                RadiusTier { max_count: 3, radius: 3.0 },
                RadiusTier { max_count: 5, radius: 4.0 },
                RadiusTier { max_count: 8, radius: 5.0 },
            ],
            overflow_radius: 6.0,
            stagger: 0.15,
            stagger_period: 2,
        }
    }

    fn status(id: &str, location: LocationTag, lat: f64, lon: f64) -> EntityStatus {
        EntityStatus {
            id: id.to_string(),
            name: format!("USS {}", id),
            class: "Nimitz".to_string(),
            subtype: None,
            location,
            coordinate: Coordinate::new(lat, lon, Region::Conus),
            date: "2025".to_string(),
            status: "moored".to_string(),
            source_url: "http://example.com".to_string(),
        }
    }

    #[test]
    fn test_single_entity_is_not_moved() {
        let placed = place_offsets(
            vec![status("CVN68", LocationTag::SanDiego, 32.7157, -117.1611)],
            &profile(),
        );
        assert_eq!(placed[0].display_coordinate, placed[0].status.coordinate);
    }

    #[test]
    fn test_four_entities_form_a_ring() {
        let records: Vec<EntityStatus> = (0..4)
            .map(|i| status(&format!("DDG{}", i), LocationTag::NorfolkPortsmouth, 36.9473, -76.3134))
            .collect();
        let placed = place_offsets(records, &profile());
        let max = profile().max_radius(4);

        let expected_angles = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0];
        for (record, expected) in placed.iter().zip(expected_angles) {
            let base = record.status.coordinate;
            let dlat = record.display_coordinate.lat - base.lat;
            let dlon = record.display_coordinate.lon - base.lon;
            let distance = dlat.hypot(dlon);
            assert!(distance > 0.0 && distance <= max + 1e-9);

            let angle = dlat.atan2(dlon).rem_euclid(2.0 * PI);
            assert!((angle - expected).abs() < 1e-9, "angle {} != {}", angle, expected);
            assert_eq!(record.display_coordinate.region, base.region);
        }

        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                let same = (a.display_coordinate.lat - b.display_coordinate.lat).abs() < 1e-9
                    && (a.display_coordinate.lon - b.display_coordinate.lon).abs() < 1e-9;
                assert!(!same);
            }
        }
    }

    #[test]
    fn test_radius_is_staggered() {
        let p = profile();
        assert_eq!(p.radius_for(0, 4), 4.0);
        assert!((p.radius_for(1, 4) - 4.6).abs() < 1e-9);
        assert_eq!(p.radius_for(2, 4), 4.0);
        assert_eq!(p.base_radius(2), 3.0);
        assert_eq!(p.base_radius(8), 5.0);
        assert_eq!(p.base_radius(9), 6.0);
    }

    #[test]
    fn test_groups_are_independent_and_order_is_kept() {
        let records = vec![
            status("A", LocationTag::Guam, 13.4443, 144.7937),
            status("B", LocationTag::Yokosuka, 35.2831, 139.6703),
            status("C", LocationTag::Guam, 13.4443, 144.7937),
        ];
        let placed = place_offsets(records, &profile());

        let ids: Vec<&str> = placed.iter().map(|r| r.status.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(placed[1].display_coordinate, placed[1].status.coordinate);

        // 兩艘在關島：角度 0 與 π
        assert!((placed[0].display_coordinate.lon - (144.7937 + 3.0)).abs() < 1e-9);
        assert!((placed[2].display_coordinate.lon - (144.7937 - 3.45)).abs() < 1e-9);
    }

    #[test]
    fn test_base_coordinate_is_untouched() {
        let placed = place_offsets(
            vec![
                status("A", LocationTag::Bahrain, 26.2235, 50.5876),
                status("B", LocationTag::Bahrain, 26.2235, 50.5876),
            ],
            &profile(),
        );
        for record in &placed {
            assert_eq!(record.status.coordinate.lat, 26.2235);
            assert_eq!(record.status.coordinate.lon, 50.5876);
        }
    }
}
