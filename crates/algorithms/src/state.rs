//! Analysis session state
//!
//! An [`AnalysisState`] is an immutable value. Events produce a new state via
//! [`AnalysisState::reduce`]; nothing is mutated in place. The classification
//! is cached together with the inputs it was derived from and recomputed from
//! scratch whenever those inputs change.

use serde::{Deserialize, Serialize};
use spectramine_core::GeoPoint;

use crate::classification::{classify, ClassificationResult};
use crate::imagery::MineralReading;
use crate::mineral::Mineral;
use crate::registry::MiningRegistry;

/// Result of one completed scan, as delivered by the imagery boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub location: GeoPoint,
    pub address: String,
    pub image_count: usize,
    pub readings: Vec<MineralReading>,
}

impl ScanSnapshot {
    pub fn reading(&self, mineral: Mineral) -> Option<&MineralReading> {
        self.readings.iter().find(|r| r.mineral == mineral)
    }

    /// Coverage of a mineral; a missing or non-finite reading counts as 0.
    pub fn coverage(&self, mineral: Mineral) -> f64 {
        self.reading(mineral)
            .map(|r| r.coverage)
            .filter(|c| c.is_finite())
            .unwrap_or(0.0)
    }
}

/// Classification together with the inputs it was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct CachedClassification {
    pub point: GeoPoint,
    pub mineral: Mineral,
    pub coverage: f64,
    pub result: ClassificationResult,
}

impl CachedClassification {
    fn matches(&self, point: GeoPoint, mineral: Mineral, coverage: f64) -> bool {
        self.point == point
            && self.mineral == mineral
            && self.coverage.to_bits() == coverage.to_bits()
    }
}

/// Events that drive the analysis session
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    /// A new scan replaced the previous one
    ScanCompleted(ScanSnapshot),
    /// The user switched the active mineral
    MineralSelected(Mineral),
    /// Forget the scan, keep the selected mineral
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    pub selected: Mineral,
    pub scan: Option<ScanSnapshot>,
    pub classification: Option<CachedClassification>,
}

impl AnalysisState {
    pub fn new(selected: Mineral) -> Self {
        Self {
            selected,
            ..Default::default()
        }
    }

    /// Apply an event, producing the next state.
    pub fn reduce(&self, event: AnalysisEvent, registry: &MiningRegistry) -> AnalysisState {
        let next = match event {
            AnalysisEvent::ScanCompleted(snapshot) => AnalysisState {
                selected: self.selected,
                scan: Some(snapshot),
                classification: self.classification.clone(),
            },
            AnalysisEvent::MineralSelected(mineral) => AnalysisState {
                selected: mineral,
                scan: self.scan.clone(),
                classification: self.classification.clone(),
            },
            AnalysisEvent::Reset => {
                tracing::debug!("analysis state reset");
                return AnalysisState::new(self.selected);
            }
        };
        next.refreshed(registry)
    }

    /// Recompute the cached classification if its inputs no longer match.
    fn refreshed(mut self, registry: &MiningRegistry) -> AnalysisState {
        let Some(scan) = &self.scan else {
            self.classification = None;
            return self;
        };

        let point = scan.location;
        let mineral = self.selected;
        let coverage = scan.coverage(mineral);

        let stale = !self
            .classification
            .as_ref()
            .is_some_and(|c| c.matches(point, mineral, coverage));

        if stale {
            tracing::debug!(mineral = mineral.key(), %point, "recomputing classification");
            self.classification = Some(CachedClassification {
                point,
                mineral,
                coverage,
                result: classify(point, coverage, mineral, registry),
            });
        }
        self
    }

    /// Current classification, if a scan is loaded
    pub fn classification(&self) -> Option<&ClassificationResult> {
        self.classification.as_ref().map(|c| &c.result)
    }

    /// Reading of the selected mineral in the current scan
    pub fn current_reading(&self) -> Option<&MineralReading> {
        self.scan.as_ref()?.reading(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::ClassificationKind;
    use crate::registry::MiningSite;

    fn registry() -> MiningRegistry {
        MiningRegistry::new(vec![MiningSite {
            name: "Copper Hill".to_string(),
            location: GeoPoint::new(0.0, 0.0).unwrap(),
            country: "Testland".to_string(),
            mineral_type: "Copper".to_string(),
        }])
        .unwrap()
    }

    fn snapshot(lat: f64, lon: f64) -> ScanSnapshot {
        ScanSnapshot {
            location: GeoPoint::new(lat, lon).unwrap(),
            address: "Somewhere".to_string(),
            image_count: 12,
            readings: vec![
                MineralReading {
                    mineral: Mineral::Iron,
                    coverage: 16.0,
                    stats: None,
                },
                MineralReading {
                    mineral: Mineral::Copper,
                    coverage: 1.0,
                    stats: None,
                },
            ],
        }
    }

    #[test]
    fn test_scan_classifies_selected_mineral() {
        let reg = registry();
        let state = AnalysisState::default()
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg);
        let c = state.classification().unwrap();
        // Copper Hill is not an iron site
        assert_eq!(c.kind, ClassificationKind::HighPotential);
        assert_eq!(c.label, "High Potential Iron Deposits");
    }

    #[test]
    fn test_current_reading_follows_selection() {
        let reg = registry();
        let state = AnalysisState::default()
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg);
        assert_eq!(state.current_reading().map(|r| r.coverage), Some(16.0));

        let state = state.reduce(AnalysisEvent::MineralSelected(Mineral::Copper), &reg);
        assert_eq!(state.current_reading().map(|r| r.mineral), Some(Mineral::Copper));

        let state = state.reduce(AnalysisEvent::MineralSelected(Mineral::Limestone), &reg);
        assert!(state.current_reading().is_none());

        let state = state.reduce(AnalysisEvent::Reset, &reg);
        assert!(state.current_reading().is_none());
    }

    #[test]
    fn test_mineral_switch_recomputes() {
        let reg = registry();
        let state = AnalysisState::default()
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg)
            .reduce(AnalysisEvent::MineralSelected(Mineral::Copper), &reg);
        let cache = state.classification.as_ref().unwrap();
        assert_eq!(cache.mineral, Mineral::Copper);
        assert_eq!(cache.result.kind, ClassificationKind::Mining);
    }

    #[test]
    fn test_missing_reading_counts_as_zero() {
        let reg = registry();
        let state = AnalysisState::new(Mineral::Manganese)
            .reduce(AnalysisEvent::ScanCompleted(snapshot(10.0, 10.0)), &reg);
        let cache = state.classification.as_ref().unwrap();
        assert_eq!(cache.coverage, 0.0);
        assert_eq!(cache.result.label, "No Significant Manganese Signature");
    }

    #[test]
    fn test_same_inputs_keep_cache() {
        let reg = registry();
        let state = AnalysisState::default()
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg);
        let again = state.reduce(AnalysisEvent::MineralSelected(Mineral::Iron), &reg);
        assert_eq!(state.classification, again.classification);
    }

    #[test]
    fn test_rescan_elsewhere_recomputes() {
        let reg = registry();
        let state = AnalysisState::new(Mineral::Copper)
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg);
        assert_eq!(state.classification().unwrap().kind, ClassificationKind::Mining);

        let moved = state.reduce(AnalysisEvent::ScanCompleted(snapshot(5.0, 5.0)), &reg);
        let c = moved.classification().unwrap();
        assert_eq!(c.kind, ClassificationKind::LowPotential);
        assert!(c.nearby_matches.is_empty());
    }

    #[test]
    fn test_reset_keeps_mineral() {
        let reg = registry();
        let state = AnalysisState::new(Mineral::Limestone)
            .reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg)
            .reduce(AnalysisEvent::Reset, &reg);
        assert_eq!(state.selected, Mineral::Limestone);
        assert!(state.scan.is_none());
        assert!(state.classification().is_none());
    }

    #[test]
    fn test_reduce_does_not_touch_previous_state() {
        let reg = registry();
        let before = AnalysisState::default();
        let _after = before.reduce(AnalysisEvent::ScanCompleted(snapshot(0.0, 0.0)), &reg);
        assert!(before.scan.is_none());
        assert!(before.classification.is_none());
    }
}
