pub mod bands;
pub mod fusion;
pub mod ops;
pub mod pipeline;
pub mod stats;
