//! Proximity search against the mining registry
//!
//! For a query point and a mineral family, finds every compatible registry
//! site within the nearby radius and the single nearest compatible site
//! within the relevance radius. Incompatible sites are ignored entirely.

use serde::Serialize;
use spectramine_core::GeoPoint;

use crate::mineral::Mineral;
use crate::registry::MiningRegistry;

/// Parameters for proximity search
#[derive(Debug, Clone, Copy)]
pub struct ProximityParams {
    /// Sites at or within this distance count as nearby (legal mining area).
    /// Default: 15 km
    pub nearby_radius_km: f64,
    /// The nearest site is reported only at or within this distance.
    /// Default: 200 km
    pub relevance_radius_km: f64,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            nearby_radius_km: 15.0,
            relevance_radius_km: 200.0,
        }
    }
}

impl ProximityParams {
    /// Whether a site at `distance_km` counts as nearby (inclusive)
    pub fn is_nearby(&self, distance_km: f64) -> bool {
        distance_km <= self.nearby_radius_km
    }

    /// Whether a nearest site at `distance_km` is worth reporting (inclusive)
    pub fn is_relevant(&self, distance_km: f64) -> bool {
        distance_km <= self.relevance_radius_km
    }
}

/// A compatible site within the nearby radius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySite {
    pub name: String,
    pub distance_km: f64,
    pub country: String,
    pub mineral_type: String,
}

/// Result of a proximity search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProximityResult {
    /// Nearby compatible sites, in registry order
    pub nearby: Vec<NearbySite>,
    /// Distance to the nearest compatible site, `None` if beyond the relevance radius
    pub nearest_distance_km: Option<f64>,
    pub nearest_site_name: Option<String>,
}

impl ProximityResult {
    pub fn has_nearby(&self) -> bool {
        !self.nearby.is_empty()
    }
}

/// Find nearby and nearest compatible sites with default radii.
pub fn find_nearby_and_nearest(
    point: GeoPoint,
    mineral: Mineral,
    registry: &MiningRegistry,
) -> ProximityResult {
    find_nearby_and_nearest_with_params(point, mineral, registry, ProximityParams::default())
}

/// Find nearby and nearest compatible sites.
///
/// Nearby sites keep registry order. On a distance tie the earlier site in
/// registry order stays the nearest.
pub fn find_nearby_and_nearest_with_params(
    point: GeoPoint,
    mineral: Mineral,
    registry: &MiningRegistry,
    params: ProximityParams,
) -> ProximityResult {
    let mut nearby = Vec::new();
    let mut nearest: Option<(f64, &str)> = None;

    for site in registry.compatible_with(mineral) {
        let distance = point.distance_km(&site.location);

        if params.is_nearby(distance) {
            nearby.push(NearbySite {
                name: site.name.clone(),
                distance_km: distance,
                country: site.country.clone(),
                mineral_type: site.mineral_type.clone(),
            });
        }

        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, site.name.as_str()));
        }
    }

    let (nearest_distance_km, nearest_site_name) = match nearest {
        Some((d, name)) if params.is_relevant(d) => (Some(d), Some(name.to_string())),
        _ => (None, None),
    };

    tracing::debug!(
        mineral = mineral.key(),
        nearby = nearby.len(),
        nearest_km = ?nearest_distance_km,
        "proximity search"
    );

    ProximityResult {
        nearby,
        nearest_distance_km,
        nearest_site_name,
    }
}
