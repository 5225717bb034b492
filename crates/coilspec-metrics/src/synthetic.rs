// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Synthetic Fields
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic normal-field maps at both ends of the smoothness scale,
//! used to exercise the scoring pipeline without solver output.

use coilspec_types::surface::SurfaceGrid;
use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

/// Single (m, n) Fourier harmonic over the angular grid: the smoothest
/// non-trivial field the metric should encounter.
pub fn harmonic_field(
    grid: &SurfaceGrid,
    m_pol: usize,
    n_tor: usize,
    amplitude: f64,
) -> Array2<f64> {
    Array2::from_shape_fn(grid.shape(), |(i, j)| {
        amplitude * (m_pol as f64 * grid.theta[i]).sin() * (n_tor as f64 * grid.phi[j]).cos()
    })
}

/// iid Gaussian map, the "all spatial frequencies at once" extreme.
pub fn noise_field(h: usize, w: usize, sigma: f64) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((h, w), |_| sigma * rng.sample::<f64, _>(StandardNormal))
}

/// Unit impulse at the grid center: flat spectrum of magnitude one.
pub fn impulse_field(h: usize, w: usize) -> Array2<f64> {
    let mut field = Array2::zeros((h, w));
    if h > 0 && w > 0 {
        field[[h / 2, w / 2]] = 1.0;
    }
    field
}
