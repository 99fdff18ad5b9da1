//! Mineral families and their spectral calibration
//!
//! Five mineral families are supported. Each has a fixed [`MineralProfile`]:
//! the registry type tokens it is compatible with, the per-pixel detection
//! threshold of its spectral index, and the coverage bands used to grade an
//! analysis region.
//!
//! - **Iron**: Red / Blue (B4/B2), ferric oxide absorption in the blue
//! - **Aluminum**: SWIR1 / SWIR2 (B11/B12), clay/bauxite hydroxyl absorption
//! - **Copper**: (Red / Green) × (NIR / Red), oxidized sulphide staining
//! - **Limestone**: SWIR1 / SWIR2 (B11/B12), carbonate absorption near 2.3 µm
//! - **Manganese**: Red / SWIR1 (B4/B11), dark MnOx coatings

mod catalog;

pub use catalog::{profile, CoverageBands, MineralProfile, LOW_SIGNAL_FLOOR};

use serde::{Deserialize, Serialize};
use spectramine_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Supported mineral families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mineral {
    Iron,
    Aluminum,
    Copper,
    Limestone,
    Manganese,
}

impl Mineral {
    /// All minerals in canonical order
    pub const ALL: [Mineral; 5] = [
        Mineral::Iron,
        Mineral::Aluminum,
        Mineral::Copper,
        Mineral::Limestone,
        Mineral::Manganese,
    ];

    /// Lowercase selector key
    pub fn key(self) -> &'static str {
        match self {
            Mineral::Iron => "iron",
            Mineral::Aluminum => "aluminum",
            Mineral::Copper => "copper",
            Mineral::Limestone => "limestone",
            Mineral::Manganese => "manganese",
        }
    }

    /// Capitalized name used in classification labels
    pub fn display_name(self) -> &'static str {
        match self {
            Mineral::Iron => "Iron",
            Mineral::Aluminum => "Aluminum",
            Mineral::Copper => "Copper",
            Mineral::Limestone => "Limestone",
            Mineral::Manganese => "Manganese",
        }
    }

    /// Short symbol shown next to coverage figures
    pub fn symbol(self) -> &'static str {
        match self {
            Mineral::Iron => "Fe",
            Mineral::Aluminum => "Al",
            Mineral::Copper => "Cu",
            Mineral::Limestone => "Ls",
            Mineral::Manganese => "Mn",
        }
    }

    /// Human-readable band ratio of the mineral's spectral index
    pub fn formula(self) -> &'static str {
        match self {
            Mineral::Iron => "Red/Blue (B4/B2)",
            Mineral::Aluminum => "SWIR1/SWIR2 (B11/B12)",
            Mineral::Copper => "(Red/Green)×(NIR/Red)",
            Mineral::Limestone => "Carbonate: SWIR1/SWIR2 (B11/B12)",
            Mineral::Manganese => "MnOx: Red/SWIR1 (B4/B11)",
        }
    }

    /// Fixed calibration profile of this mineral
    pub fn profile(self) -> &'static MineralProfile {
        profile(self)
    }

    /// Whether a free-text registry mineral type is compatible with this mineral.
    ///
    /// Case-insensitive substring match of any accepted type token.
    pub fn is_compatible(self, mineral_type: &str) -> bool {
        let haystack = mineral_type.to_lowercase();
        self.profile()
            .accepted_type_tokens
            .iter()
            .any(|token| haystack.contains(&token.to_lowercase()))
    }

    /// Lenient selector parsing: unknown keys fall back to [`Mineral::Iron`].
    pub fn from_key_or_default(key: &str) -> Mineral {
        match key.parse() {
            Ok(mineral) => mineral,
            Err(_) => {
                tracing::warn!(key, "unrecognized mineral key, falling back to iron");
                Mineral::Iron
            }
        }
    }
}

impl Default for Mineral {
    fn default() -> Self {
        Mineral::Iron
    }
}

impl FromStr for Mineral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Mineral::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| Error::UnknownMineral(s.to_string()))
    }
}

impl fmt::Display for Mineral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
