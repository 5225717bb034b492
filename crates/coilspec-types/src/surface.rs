// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Surface Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use std::f64::consts::PI;

/// Regular angular grid on a toroidal surface.
/// Rows index the poloidal angle theta, columns the toroidal angle phi.
/// Both axes are periodic, so the endpoint 2π is excluded.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    pub ntheta: usize,
    pub nphi: usize,
    pub theta: Array1<f64>, // poloidal samples [ntheta]
    pub phi: Array1<f64>,   // toroidal samples [nphi]
    pub dtheta: f64,
    pub dphi: f64,
}

impl SurfaceGrid {
    pub fn new(ntheta: usize, nphi: usize) -> Self {
        let dtheta = 2.0 * PI / ntheta as f64;
        let dphi = 2.0 * PI / nphi as f64;
        let theta = Array1::from_iter((0..ntheta).map(|i| i as f64 * dtheta));
        let phi = Array1::from_iter((0..nphi).map(|j| j as f64 * dphi));

        SurfaceGrid {
            ntheta,
            nphi,
            theta,
            phi,
            dtheta,
            dphi,
        }
    }

    /// Field map shape on this grid: (ntheta, nphi).
    pub fn shape(&self) -> (usize, usize) {
        (self.ntheta, self.nphi)
    }
}
