// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Modified Bessel I0
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
const SERIES_MAX_ITER: usize = 200;
const SERIES_REL_TOL: f64 = 1.0e-16;

/// Modified Bessel function of the first kind, order zero.
///
/// Power series in (x/2)²; terms are monotone decreasing once k exceeds
/// x/2, so the relative-tolerance cutoff is safe for the window shape
/// parameters used in this workspace (x up to a few tens).
pub fn bessel_i0(x: f64) -> f64 {
    let q = 0.25 * x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..=SERIES_MAX_ITER {
        term *= q / ((k * k) as f64);
        sum += term;
        if term < sum * SERIES_REL_TOL {
            break;
        }
    }
    sum
}
