// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Spectral Radius Metric
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Windowed-FFT smoothness scores for 2D normal-field error maps.
//!
//! Two variants share the same Kaiser taper but weight the spectrum in
//! opposite ways, so their outputs live on different scales and are kept
//! as separate ranking columns rather than unified.

use coilspec_math::fft::{fft2, fftshift2};
use coilspec_math::window::{floor_window, suppression_window};
use coilspec_types::constants::{MIN_FIELD_EXTENT, WINDOW_FLOOR, WINDOW_SHAPE_PARAM};
use coilspec_types::error::{CoilSpecError, CoilSpecResult};
use ndarray::Array2;

/// The window placement is only defined when the inscribed taper has
/// room for its full extent along both axes.
fn check_extent(field: &Array2<f64>) -> CoilSpecResult<(usize, usize)> {
    let (h, w) = field.dim();
    if h.min(w) < MIN_FIELD_EXTENT {
        return Err(CoilSpecError::ShapeMismatch {
            height: h,
            width: w,
            window: MIN_FIELD_EXTENT,
        });
    }
    Ok((h, w))
}

/// Suppress-then-average score with the default window shape.
///
/// Downweights the low-frequency block of the spectrum and averages the
/// remaining magnitude, so a field with more fine structure scores
/// higher. Zero fields score exactly zero.
pub fn spectral_radius(field: &Array2<f64>) -> CoilSpecResult<f64> {
    spectral_radius_shaped(field, WINDOW_SHAPE_PARAM)
}

/// Suppress-then-average score with an explicit Kaiser shape parameter.
pub fn spectral_radius_shaped(field: &Array2<f64>, beta: f64) -> CoilSpecResult<f64> {
    let (h, w) = check_extent(field)?;
    let mask = fftshift2(&suppression_window(h, w, beta)?);
    let spectrum = fft2(field);

    let total: f64 = spectrum
        .indexed_iter()
        .map(|((i, j), c)| mask[[i, j]] * c.norm())
        .sum();
    Ok(total / (h * w) as f64)
}

/// Normalize-by-window score with the default shape and floor.
///
/// Divides the spectrum magnitude by a floored window, amplifying bins
/// away from the taper by 1/floor. Not interchangeable with
/// [`spectral_radius`]: the scale differs by orders of magnitude. The
/// division has no clipping safeguard, so a floor small relative to
/// round-off noise in the transform lets single bins dominate the mean.
pub fn spectral_radius_alt(field: &Array2<f64>) -> CoilSpecResult<f64> {
    spectral_radius_alt_shaped(field, WINDOW_SHAPE_PARAM, WINDOW_FLOOR)
}

/// Normalize-by-window score with explicit shape and floor parameters.
pub fn spectral_radius_alt_shaped(
    field: &Array2<f64>,
    beta: f64,
    floor: f64,
) -> CoilSpecResult<f64> {
    let (h, w) = check_extent(field)?;
    let mask = fftshift2(&floor_window(h, w, beta, floor)?);
    let spectrum = fft2(field);

    let total: f64 = spectrum
        .indexed_iter()
        .map(|((i, j), c)| c.norm() / mask[[i, j]])
        .sum();
    Ok(total / (h * w) as f64)
}

/// Sum of |Im F| over the full 2D spectrum. A cheap asymmetry proxy
/// carried alongside the windowed scores in the metric table.
pub fn imag_energy(field: &Array2<f64>) -> f64 {
    fft2(field).iter().map(|c| c.im.abs()).sum()
}
