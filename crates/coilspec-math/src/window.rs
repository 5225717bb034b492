// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Radial Windows
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rotationally symmetric Kaiser windows and their centered placement
//! into full-size weighting masks. The masks are built in "spatial"
//! orientation (taper at the array center) and fftshifted by the caller
//! to line up with the corner DC bin of an unshifted transform.

use coilspec_types::error::{CoilSpecError, CoilSpecResult};
use ndarray::{s, Array2};

use crate::bessel::bessel_i0;

/// Square (size × size) Kaiser window rotated about its center.
///
/// The value at normalized radius ρ (ρ = 1 on the inscribed circle) is
/// I0(β·sqrt(1 − ρ²)) / I0(β); pixels outside the inscribed circle are
/// exactly zero, so the corners of the square carry no taper at all.
pub fn kaiser_radial(size: usize, beta: f64) -> Array2<f64> {
    if size <= 1 {
        return Array2::ones((size, size));
    }
    let norm = bessel_i0(beta);
    let half = (size as f64 - 1.0) / 2.0;
    Array2::from_shape_fn((size, size), |(i, j)| {
        let di = i as f64 - half;
        let dj = j as f64 - half;
        let rho2 = (di * di + dj * dj) / (half * half);
        if rho2 > 1.0 {
            0.0
        } else {
            bessel_i0(beta * (1.0 - rho2).sqrt()) / norm
        }
    })
}

/// Offsets of a centered `tile` inside a `(h, w)` background.
/// Fails instead of truncating when the tile does not fit.
fn centered_offsets(h: usize, w: usize, tile: usize) -> CoilSpecResult<(usize, usize)> {
    if tile > h || tile > w {
        return Err(CoilSpecError::ShapeMismatch {
            height: h,
            width: w,
            window: tile,
        });
    }
    Ok(((h - tile) / 2, (w - tile) / 2))
}

/// Variant-A weighting mask: an all-ones `(h, w)` background with
/// `1 − kaiser_radial(min(h, w), β)` inscribed at the center. Low
/// spatial frequencies are driven towards zero, the rest passes at
/// unit weight.
pub fn suppression_window(h: usize, w: usize, beta: f64) -> CoilSpecResult<Array2<f64>> {
    let m = h.min(w);
    let (row0, col0) = centered_offsets(h, w, m)?;
    let taper = kaiser_radial(m, beta);

    let mut mask = Array2::ones((h, w));
    let mut block = mask.slice_mut(s![row0..row0 + m, col0..col0 + m]);
    block.zip_mut_with(&taper, |b, &t| *b = 1.0 - t);
    Ok(mask)
}

/// Variant-B weighting mask: a constant `floor` background with the
/// Kaiser taper added into the centered block. After the caller's
/// fftshift the taper covers the low-frequency bins (weight ≈ 1 + floor)
/// while every other bin keeps the raw floor, so dividing a spectrum by
/// this mask amplifies its high-frequency content by 1/floor.
pub fn floor_window(h: usize, w: usize, beta: f64, floor: f64) -> CoilSpecResult<Array2<f64>> {
    let m = h.min(w);
    let (row0, col0) = centered_offsets(h, w, m)?;
    let taper = kaiser_radial(m, beta);

    let mut mask = Array2::from_elem((h, w), floor);
    let mut block = mask.slice_mut(s![row0..row0 + m, col0..col0 + m]);
    block.zip_mut_with(&taper, |b, &t| *b += t);
    Ok(mask)
}
