#![doc = r#"
cropscan: crop health scoring from hyperspectral cubes.

The crate computes two normalized-difference indices from fixed spectral bands
of a `(row, column, band)` cube and fuses them into one health score raster:

- vegetation index (NDVI-style): `(NIR - Red) / (NIR + Red + 1e-10)`
- moisture index (NDWI-style): `(NIR - SWIR) / (NIR + SWIR + 1e-10)`
- health score: `vegetation * (1 - clamp(moisture, 0, 1))`

plus the share of healthy (score >= 0.6) and stressed (score < 0.3) pixels.

Band layout
-----------
Band indices are a fixed role table, not derived from wavelength metadata.
The default matches a 200-band AVIRIS-style sensor (Indian Pines):

| role | index | approx. wavelength |
|------|-------|--------------------|
| Red  | 50    | 650 nm             |
| NIR  | 90    | 800 nm             |
| SWIR | 150   | 1200 nm            |

The table is validated once against the cube's band count before any band is
read. Other sensors can supply their own `BandTable` through `AnalysisParams`.

Quick start
-----------
```rust
use ndarray::Array3;
use cropscan::{analyze_cube, AnalysisParams};

fn main() -> cropscan::Result<()> {
    let mut cube = Array3::<f64>::zeros((2, 2, 151));
    cube.index_axis_mut(ndarray::Axis(2), 50).fill(0.2);
    cube.index_axis_mut(ndarray::Axis(2), 90).fill(0.8);
    cube.index_axis_mut(ndarray::Axis(2), 150).fill(0.1);

    let analysis = analyze_cube(cube.view(), &AnalysisParams::default())?;
    assert!((analysis.health[[0, 0]] - 0.1333).abs() < 1e-3);
    println!("healthy: {:.1}%", analysis.summary.healthy_pct);
    Ok(())
}
```

Numeric caveats
---------------
Neither index is clamped. Where the two bands cancel (`a + b == 0`) the epsilon
guard keeps the value finite but very large. The health score is therefore not
guaranteed to lie in [0, 1]; out-of-range pixels are counted in
`HealthSummary::health_out_of_range` and logged as a warning.

Error handling
--------------
All public functions return `cropscan::Result<T>`. Shape mismatches and band
indices beyond the cube are reported immediately; degenerate numeric input
never produces an error.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{AnalysisParams, BandTable};
pub use crate::core::processing::bands::{BandExtractor, extract_band};
pub use crate::core::processing::fusion::{
    AreaSummary, FusionScorer, HEALTHY_THRESHOLD, STRESSED_THRESHOLD, Thresholds,
};
pub use crate::core::processing::ops::{
    IndexCalculator, NORMALIZED_DIFFERENCE_EPSILON, normalized_difference,
};
pub use crate::core::processing::pipeline::{HealthAnalysis, HealthSummary};
pub use crate::core::processing::stats::RasterStats;
pub use error::{Error, Result};
pub use types::BandRole;

pub use api::{analyze_cube, analyze_raw_file, analyze_raw_file_to_dir};
