use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BandRole;

/// Default red band index (~650 nm on a 200-band AVIRIS-style sensor).
pub const DEFAULT_RED_BAND: usize = 50;
/// Default near-infrared band index (~800 nm).
pub const DEFAULT_NIR_BAND: usize = 90;
/// Default short-wave infrared band index (~1200 nm).
pub const DEFAULT_SWIR_BAND: usize = 150;

/// Role -> band index table.
///
/// The mapping from index to wavelength is a fixed assumption about the
/// sensor layout. It is never derived from the cube's own wavelength metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandTable {
    pub red: usize,
    pub nir: usize,
    pub swir: usize,
}

impl BandTable {
    pub fn index(&self, role: BandRole) -> usize {
        match role {
            BandRole::Red => self.red,
            BandRole::Nir => self.nir,
            BandRole::Swir => self.swir,
        }
    }

    /// Check every role against a cube band count, reporting the first offender.
    pub fn validate(&self, bands: usize) -> Result<()> {
        for role in BandRole::ALL {
            let index = self.index(role);
            if index >= bands {
                return Err(Error::InvalidBandTable { role, index, bands });
            }
        }
        Ok(())
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED_BAND,
            nir: DEFAULT_NIR_BAND,
            swir: DEFAULT_SWIR_BAND,
        }
    }
}

/// Analysis parameters suitable for config files.
///
/// Only the band layout is configurable; the normalized-difference epsilon and
/// the health thresholds are fixed constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    pub bands: BandTable,
}

impl AnalysisParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_needs_151_bands() {
        let table = BandTable::default();
        assert!(table.validate(151).is_ok());
        assert!(table.validate(150).is_err());
    }

    #[test]
    fn huge_index_is_rejected_without_overflow() {
        let table = BandTable {
            red: usize::MAX,
            nir: 1,
            swir: 2,
        };
        match table.validate(151) {
            Err(Error::InvalidBandTable { role, index, .. }) => {
                assert_eq!(role, BandRole::Red);
                assert_eq!(index, usize::MAX);
            }
            other => panic!("expected InvalidBandTable, got {other:?}"),
        }
    }

    #[test]
    fn validate_reports_offending_role() {
        let table = BandTable::default();
        match table.validate(100) {
            Err(Error::InvalidBandTable { role, index, bands }) => {
                assert_eq!(role, BandRole::Swir);
                assert_eq!(index, 150);
                assert_eq!(bands, 100);
            }
            other => panic!("expected InvalidBandTable, got {other:?}"),
        }
    }

    #[test]
    fn params_parse_partial_json() {
        let params: AnalysisParams =
            serde_json::from_str(r#"{ "bands": { "red": 3, "nir": 7, "swir": 9 } }"#).unwrap();
        assert_eq!(params.bands.index(BandRole::Nir), 7);

        let empty: AnalysisParams = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AnalysisParams::default());

        let nir_only: AnalysisParams =
            serde_json::from_str(r#"{ "bands": { "nir": 7 } }"#).unwrap();
        assert_eq!(
            nir_only.bands,
            BandTable {
                red: DEFAULT_RED_BAND,
                nir: 7,
                swir: DEFAULT_SWIR_BAND,
            }
        );
    }

    #[test]
    fn params_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "bands": { "red": 1, "nir": 2, "swir": 4 } }"#).unwrap();

        let params = AnalysisParams::from_json_file(&path).unwrap();
        assert_eq!(params.bands.index(BandRole::Swir), 4);
        assert!(params.bands.validate(5).is_ok());
        assert!(params.bands.validate(4).is_err());
    }
}
