//! Numerical primitives for coil-spectra analysis.

pub mod bessel;
pub mod fft;
pub mod window;
