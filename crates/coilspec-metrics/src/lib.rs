//! Spectral ranking metrics for stellarator coil-design results.
//!
//! Scores each candidate's normal-field error map by its high-frequency
//! content, derives comparable scalar columns across a result set, and
//! filters/ranks the set for downstream display.

pub mod ranking;
pub mod record;
pub mod spectral;
pub mod spectrum;
pub mod synthetic;
