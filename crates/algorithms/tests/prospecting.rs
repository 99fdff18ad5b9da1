//! End-to-end classification against the built-in mining registry.

use spectramine_algorithms::classification::{classify, ClassificationKind};
use spectramine_algorithms::mineral::Mineral;
use spectramine_algorithms::point_query::{band_strength, PointStrength};
use spectramine_algorithms::proximity::find_nearby_and_nearest;
use spectramine_algorithms::registry::MiningRegistry;
use spectramine_core::GeoPoint;

fn bailadila() -> GeoPoint {
    GeoPoint::new(18.6297, 81.3025).unwrap()
}

/// South Pacific, more than 5000 km from any copper-compatible site
fn open_ocean() -> GeoPoint {
    GeoPoint::new(-30.0, -140.0).unwrap()
}

/// Coverage values straddling every band edge of every mineral
fn coverage_sweep() -> Vec<f64> {
    let mut values = vec![0.0, 0.1, 0.29, 0.3, 0.31, 50.0, 100.0];
    for m in Mineral::ALL {
        let bands = m.profile().coverage_bands;
        for edge in [bands.high, bands.moderate] {
            values.extend([edge - 0.01, edge, edge + 0.01]);
        }
    }
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

#[test]
fn scenario_a_point_on_registered_iron_site() {
    let registry = MiningRegistry::builtin();
    let result = classify(bailadila(), 0.0, Mineral::Iron, registry);

    assert_eq!(result.kind, ClassificationKind::Mining);
    assert_eq!(result.label, "Legal Mining Area");

    let site = result
        .nearby_matches
        .iter()
        .find(|s| s.name == "Bailadila Iron Ore Complex")
        .expect("Bailadila should be nearby");
    assert!(site.distance_km < 1e-6, "distance was {}", site.distance_km);
    assert!(result.nearest_distance_km.unwrap() < 1e-6);
    assert_eq!(result.nearest_site_name.as_deref(), Some("Bailadila Iron Ore Complex"));
}

#[test]
fn scenario_b_remote_copper_high_potential() {
    let registry = MiningRegistry::builtin();
    let result = classify(open_ocean(), 12.0, Mineral::Copper, registry);

    assert!(result.nearby_matches.is_empty());
    assert_eq!(result.kind, ClassificationKind::HighPotential);
    assert_eq!(result.label, "High Potential Copper Deposits");
    assert_eq!(result.nearest_distance_km, None);
    assert_eq!(result.nearest_site_name, None);

    let closest = registry
        .compatible_with(Mineral::Copper)
        .map(|s| open_ocean().distance_km(&s.location))
        .fold(f64::INFINITY, f64::min);
    assert!(closest > 5000.0, "closest copper site at {} km", closest);
}

#[test]
fn scenario_c_manganese_below_floor() {
    let registry = MiningRegistry::builtin();
    let result = classify(open_ocean(), 0.1, Mineral::Manganese, registry);
    assert_eq!(result.kind, ClassificationKind::LowPotential);
    assert_eq!(result.label, "No Significant Manganese Signature");
}

#[test]
fn scenario_d_unknown_key_uses_iron_tokens() {
    let registry = MiningRegistry::builtin();
    let mineral = Mineral::from_key_or_default("unknown_mineral_xyz");
    assert_eq!(mineral, Mineral::Iron);

    let near_kiruna = GeoPoint::new(67.86, 20.23).unwrap();
    let proximity = find_nearby_and_nearest(near_kiruna, mineral, registry);
    assert!(proximity.nearby.iter().any(|s| s.name == "Kiruna Mine"));

    let result = classify(near_kiruna, 0.0, mineral, registry);
    assert_eq!(result.kind, ClassificationKind::Mining);
}

#[test]
fn scenario_e_point_strength_boundary() {
    assert_eq!(band_strength(1.6, 1.3), PointStrength::Medium);
    assert_eq!(band_strength(1.6, 1.3).label(), "Medium");
}

#[test]
fn classification_kinds_partition_coverage() {
    let registry = MiningRegistry::builtin();
    for mineral in Mineral::ALL {
        for coverage in coverage_sweep() {
            let result = classify(open_ocean(), coverage, mineral, registry);
            let bands = mineral.profile().coverage_bands;
            let expected = if coverage >= bands.high {
                ClassificationKind::HighPotential
            } else if coverage >= bands.moderate {
                ClassificationKind::ModeratePotential
            } else {
                ClassificationKind::LowPotential
            };
            assert_eq!(result.kind, expected, "{} at {}%", mineral, coverage);
        }
    }
}

#[test]
fn nearby_site_always_wins() {
    let registry = MiningRegistry::builtin();
    for coverage in coverage_sweep() {
        let result = classify(bailadila(), coverage, Mineral::Iron, registry);
        assert_eq!(result.kind, ClassificationKind::Mining, "coverage {}", coverage);
    }
}

#[test]
fn severity_is_monotonic_in_coverage() {
    let registry = MiningRegistry::builtin();
    for mineral in Mineral::ALL {
        let mut previous = 0u8;
        for coverage in coverage_sweep() {
            let kind = classify(open_ocean(), coverage, mineral, registry).kind;
            let severity = kind.severity().expect("no site near the open ocean");
            assert!(severity >= previous, "{} dropped at {}%", mineral, coverage);
            previous = severity;
        }
    }
}

#[test]
fn classify_is_idempotent() {
    let registry = MiningRegistry::builtin();
    let point = GeoPoint::new(-23.5, -70.4).unwrap();
    for mineral in Mineral::ALL {
        let a = classify(point, 7.5, mineral, registry);
        let b = classify(point, 7.5, mineral, registry);
        assert_eq!(a, b);
        assert_eq!(
            a.nearest_distance_km.map(f64::to_bits),
            b.nearest_distance_km.map(f64::to_bits)
        );
    }
}

#[test]
fn nearby_matches_are_compatible_and_close() {
    let registry = MiningRegistry::builtin();
    for site in registry.sites() {
        for mineral in Mineral::ALL {
            let result = find_nearby_and_nearest(site.location, mineral, registry);
            for nearby in &result.nearby {
                assert!(mineral.is_compatible(&nearby.mineral_type));
                assert!(nearby.distance_km <= 15.0);
            }
            if let Some(d) = result.nearest_distance_km {
                assert!(d <= 200.0);
                assert!(result.nearest_site_name.is_some());
            } else {
                assert!(result.nearest_site_name.is_none());
            }
        }
    }
}
