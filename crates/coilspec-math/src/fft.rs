// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — 2D FFT Helpers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 2D FFT wrappers around rustfft, numpy conventions throughout:
//! the forward transform is unnormalized and the DC bin sits at the
//! array corner. Shifting relocates the window, never the transform.

use ndarray::Array2;
use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward 2D DFT of a real field. Matches `numpy.fft.fft2()`.
pub fn fft2(input: &Array2<f64>) -> Array2<Complex64> {
    let (h, w) = input.dim();
    let mut planner = FftPlanner::new();
    let mut data = input.mapv(|v| Complex64::new(v, 0.0));

    // Rows first (axis 1)
    let row_fft = planner.plan_fft_forward(w);
    for mut row in data.rows_mut() {
        let buf = row.as_slice_mut().expect("row-major layout");
        row_fft.process(buf);
    }

    // Columns (axis 0): transpose to contiguous rows, transform, transpose back
    let mut columns = data.reversed_axes().as_standard_layout().into_owned();
    let col_fft = planner.plan_fft_forward(h);
    for mut row in columns.rows_mut() {
        let buf = row.as_slice_mut().expect("row-major layout");
        col_fft.process(buf);
    }

    columns.reversed_axes().as_standard_layout().into_owned()
}

/// Circular shift that moves the centered zero-frequency position to the
/// array corner convention of `fft2`. Matches `numpy.fft.fftshift()` on
/// both axes.
pub fn fftshift2<T: Clone>(input: &Array2<T>) -> Array2<T> {
    let (h, w) = input.dim();
    Array2::from_shape_fn((h, w), |(i, j)| {
        let si = (i + h - h / 2) % h;
        let sj = (j + w - w / 2) % w;
        input[[si, sj]].clone()
    })
}

/// 1D counterpart of [`fftshift2`], for frequency axes.
pub fn fftshift_vec(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let mut out = values.to_vec();
    out.rotate_left(n - n / 2);
    out
}

/// DFT sample frequencies for a signal of length `n` with sample spacing
/// `d`. Matches `numpy.fft.fftfreq()`: non-negative frequencies first,
/// then the negative half in ascending order.
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * d);
    (0..n)
        .map(|i| {
            let k = if i < n.div_ceil(2) {
                i as isize
            } else {
                i as isize - n as isize
            };
            k as f64 * scale
        })
        .collect()
}
