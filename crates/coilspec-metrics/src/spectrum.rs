// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Display Spectra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Centered spectrum maps for the detail views of a result browser.
//! The rendering layer itself lives outside this workspace; these
//! helpers only prepare the arrays and axes it consumes.

use coilspec_math::fft::{fft2, fftfreq, fftshift2, fftshift_vec};
use ndarray::Array2;

/// A centered spectrum with frequency axes in integer mode numbers
/// (sample spacing 1/n per axis, numpy `fftfreq` scaling).
#[derive(Debug, Clone)]
pub struct SpectrumMap {
    pub values: Array2<f64>,
    /// Poloidal mode numbers, ascending, aligned with rows.
    pub row_freqs: Vec<f64>,
    /// Toroidal mode numbers, ascending, aligned with columns.
    pub col_freqs: Vec<f64>,
}

/// Centered imaginary part of the 2D spectrum of a field map, the view
/// shown next to the raw map in the result browser.
pub fn shifted_imag_spectrum(field: &Array2<f64>) -> SpectrumMap {
    let (h, w) = field.dim();
    let imag = fft2(field).mapv(|c| c.im);

    SpectrumMap {
        values: fftshift2(&imag),
        row_freqs: fftshift_vec(&fftfreq(h, 1.0 / h as f64)),
        col_freqs: fftshift_vec(&fftfreq(w, 1.0 / w as f64)),
    }
}

/// Centered magnitude of the 2D spectrum, for |F| heat maps.
pub fn shifted_magnitude_spectrum(field: &Array2<f64>) -> SpectrumMap {
    let (h, w) = field.dim();
    let mag = fft2(field).mapv(|c| c.norm());

    SpectrumMap {
        values: fftshift2(&mag),
        row_freqs: fftshift_vec(&fftfreq(h, 1.0 / h as f64)),
        col_freqs: fftshift_vec(&fftfreq(w, 1.0 / w as f64)),
    }
}
