//! Registry of known legal mining sites
//!
//! The registry is read-only reference data: a list of named sites with a
//! location, country and free-text mineral type. Names are unique and act as
//! the join key between proximity results and rendered map markers.
//!
//! The built-in registry is constructed once per process ([`MiningRegistry::builtin`]).
//! A replacement can be loaded from a JSON array of
//! `{"name", "lat", "lon", "country", "mineral_type"}` records.

mod sites;

use serde::{Deserialize, Serialize};
use spectramine_core::{Error, GeoPoint, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use crate::mineral::Mineral;

/// A registered legal mining site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningSite {
    pub name: String,
    pub location: GeoPoint,
    pub country: String,
    /// Free-text category, e.g. "Iron Ore", "Bauxite/Aluminum", "Polymetallic"
    pub mineral_type: String,
}

/// Flat on-disk form of a site
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteRecord {
    name: String,
    lat: f64,
    lon: f64,
    country: String,
    mineral_type: String,
}

impl TryFrom<SiteRecord> for MiningSite {
    type Error = Error;

    fn try_from(r: SiteRecord) -> Result<Self> {
        let location = GeoPoint::new(r.lat, r.lon)
            .map_err(|e| Error::Registry(format!("site '{}': {}", r.name, e)))?;
        Ok(MiningSite {
            name: r.name,
            location,
            country: r.country,
            mineral_type: r.mineral_type,
        })
    }
}

/// Immutable collection of mining sites with unique names
#[derive(Debug, Clone)]
pub struct MiningRegistry {
    sites: Vec<MiningSite>,
    by_name: HashMap<String, usize>,
}

impl MiningRegistry {
    /// Build a registry, rejecting duplicate site names.
    pub fn new(sites: Vec<MiningSite>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(sites.len());
        for (idx, site) in sites.iter().enumerate() {
            if by_name.insert(site.name.clone(), idx).is_some() {
                return Err(Error::DuplicateSite(site.name.clone()));
            }
        }
        Ok(Self { sites, by_name })
    }

    /// The built-in registry of verified legal sites, constructed on first use.
    pub fn builtin() -> &'static MiningRegistry {
        static BUILTIN: OnceLock<MiningRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let sites: Vec<MiningSite> = sites::LEGAL_MINING_SITES
                .iter()
                .map(|&(name, lat, lon, country, mineral_type)| MiningSite {
                    name: name.to_string(),
                    location: GeoPoint::new_unchecked(lat, lon),
                    country: country.to_string(),
                    mineral_type: mineral_type.to_string(),
                })
                .collect();
            let by_name = sites
                .iter()
                .enumerate()
                .map(|(idx, s)| (s.name.clone(), idx))
                .collect();
            tracing::debug!(count = sites.len(), "built-in mining registry loaded");
            MiningRegistry { sites, by_name }
        })
    }

    /// Load a registry from a JSON array of site records
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<SiteRecord> =
            serde_json::from_reader(reader).map_err(|e| Error::Registry(e.to_string()))?;
        let sites = records
            .into_iter()
            .map(MiningSite::try_from)
            .collect::<Result<Vec<_>>>()?;
        let registry = Self::new(sites)?;
        tracing::debug!(count = registry.len(), "mining registry loaded from JSON");
        Ok(registry)
    }

    /// Load a registry from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// All sites in insertion order
    pub fn sites(&self) -> &[MiningSite] {
        &self.sites
    }

    pub fn get(&self, name: &str) -> Option<&MiningSite> {
        self.by_name.get(name).map(|&idx| &self.sites[idx])
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Sites whose mineral type equals `mineral_type` exactly
    pub fn by_type<'a>(&'a self, mineral_type: &'a str) -> impl Iterator<Item = &'a MiningSite> + 'a {
        self.sites.iter().filter(move |s| s.mineral_type == mineral_type)
    }

    /// Sites located in `country`
    pub fn by_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a MiningSite> + 'a {
        self.sites.iter().filter(move |s| s.country == country)
    }

    /// Sites whose type is compatible with a mineral family
    pub fn compatible_with(&self, mineral: Mineral) -> impl Iterator<Item = &MiningSite> + '_ {
        self.sites
            .iter()
            .filter(move |s| mineral.is_compatible(&s.mineral_type))
    }

    /// Sorted list of distinct countries
    pub fn countries(&self) -> Vec<&str> {
        self.sites
            .iter()
            .map(|s| s.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of sites per mineral type, sorted by type
    pub fn type_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for site in &self.sites {
            *counts.entry(site.mineral_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, lat: f64, lon: f64, mineral_type: &str) -> MiningSite {
        MiningSite {
            name: name.to_string(),
            location: GeoPoint::new(lat, lon).unwrap(),
            country: "Testland".to_string(),
            mineral_type: mineral_type.to_string(),
        }
    }

    #[test]
    fn test_builtin_size() {
        let registry = MiningRegistry::builtin();
        assert_eq!(registry.len(), 264);
    }

    #[test]
    fn test_builtin_names_unique() {
        let registry = MiningRegistry::builtin();
        assert_eq!(registry.by_name.len(), registry.len());
    }

    #[test]
    fn test_builtin_coordinates_valid() {
        for s in MiningRegistry::builtin().sites() {
            assert!(
                GeoPoint::new(s.location.lat, s.location.lon).is_ok(),
                "bad coordinates for {}",
                s.name
            );
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = MiningRegistry::builtin();
        let kiruna = registry.get("Kiruna Mine").unwrap();
        assert_eq!(kiruna.country, "Sweden");
        assert_eq!(kiruna.mineral_type, "Iron Ore");
        assert!(registry.get("Atlantis Mine").is_none());
    }

    #[test]
    fn test_type_counts() {
        let counts = MiningRegistry::builtin().type_counts();
        assert_eq!(counts["Iron Ore"], 57);
        assert_eq!(counts["Bauxite/Aluminum"], 37);
        assert_eq!(counts["Copper"], 55);
        assert_eq!(counts["Limestone"], 27);
        assert_eq!(counts["Manganese"], 23);
        assert_eq!(counts["Polymetallic"], 5);
        assert_eq!(counts.values().sum::<usize>(), 264);
    }

    #[test]
    fn test_by_type_is_exact() {
        let registry = MiningRegistry::builtin();
        assert_eq!(registry.by_type("Iron Ore").count(), 57);
        assert_eq!(registry.by_type("iron ore").count(), 0);
    }

    #[test]
    fn test_by_country() {
        let registry = MiningRegistry::builtin();
        let swedish: Vec<_> = registry.by_country("Sweden").collect();
        assert!(swedish.iter().any(|s| s.name.contains("Kiruna")));
        assert!(swedish.iter().all(|s| s.country == "Sweden"));
        assert_eq!(registry.by_country("Atlantis").count(), 0);

        let total: usize = registry
            .countries()
            .into_iter()
            .map(|c| registry.by_country(c).count())
            .sum();
        assert_eq!(total, registry.len());
    }

    #[test]
    fn test_countries_sorted_unique() {
        let countries = MiningRegistry::builtin().countries();
        assert!(countries.windows(2).all(|w| w[0] < w[1]));
        assert!(countries.contains(&"India"));
        assert!(countries.contains(&"Sweden"));
    }

    #[test]
    fn test_compatible_with_copper_includes_polymetallic() {
        let registry = MiningRegistry::builtin();
        let n = registry.compatible_with(Mineral::Copper).count();
        assert_eq!(n, 55 + 5);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = MiningRegistry::new(vec![
            site("Twin Pit", 1.0, 1.0, "Copper"),
            site("Twin Pit", 2.0, 2.0, "Copper"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateSite(name)) if name == "Twin Pit"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "North Pit", "lat": 10.0, "lon": 20.0, "country": "A", "mineral_type": "Copper"},
            {"name": "South Pit", "lat": -10.0, "lon": 20.0, "country": "B", "mineral_type": "Limestone"}
        ]"#;
        let registry = MiningRegistry::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.sites()[1].name, "South Pit");
        assert_eq!(registry.get("North Pit").unwrap().location.lon, 20.0);
    }

    #[test]
    fn test_from_json_invalid_coordinate() {
        let json = r#"[{"name": "Bad", "lat": 95.0, "lon": 0.0, "country": "X", "mineral_type": "Zinc"}]"#;
        let result = MiningRegistry::from_json_reader(json.as_bytes());
        assert!(matches!(result, Err(Error::Registry(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = MiningRegistry::from_json_reader("{not json".as_bytes());
        assert!(matches!(result, Err(Error::Registry(_))));
    }
}
