//! I/O collaborators around the core: a raw `f32` cube loader for the CLI
//! and `writers` for the JSON summary report.
pub mod raw;
pub use raw::read_raw_cube;

pub mod writers;
