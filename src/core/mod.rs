//! Core building blocks: the band table and analysis parameters, band
//! extraction, normalized-difference indices, health fusion and raster
//! statistics. These are primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
