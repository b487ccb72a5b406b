//! Shared types used across cropscan.
//! `BandRole` names the spectral channels the index pipeline reads.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    /// Visible red (~650 nm)
    Red,
    /// Near-infrared (~800 nm)
    Nir,
    /// Short-wave infrared (~1200 nm)
    Swir,
}

impl BandRole {
    pub const ALL: [BandRole; 3] = [BandRole::Red, BandRole::Nir, BandRole::Swir];
}

impl std::fmt::Display for BandRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BandRole::Red => "Red",
            BandRole::Nir => "NIR",
            BandRole::Swir => "SWIR",
        };
        write!(f, "{}", s)
    }
}
