// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Kaiser shape parameter of the low-frequency suppression window.
/// Sets how far the taper reaches into the spectrum; changing it
/// changes every ranking built on the spectral-power columns.
pub const WINDOW_SHAPE_PARAM: f64 = 25.0;

/// Background value of the variant-B weighting mask. The spectrum is
/// divided by this floor away from the taper, so the high-frequency
/// contribution is amplified by 1/WINDOW_FLOOR.
pub const WINDOW_FLOOR: f64 = 0.02;

/// Smallest field extent the window placement is defined for.
/// Fields with a smaller dimension below this are rejected.
pub const MIN_FIELD_EXTENT: usize = 25;

/// Default cutoff on the residual-to-target ratio when filtering
/// a result set down to "successful" candidates.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 0.5;
