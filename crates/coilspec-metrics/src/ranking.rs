// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Metric Table & Ranking
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derived scalar columns per candidate result, plus the success filter
//! and column ranking the scatter-plot browser is built on.

use coilspec_types::config::MetricConfig;
use coilspec_types::error::CoilSpecResult;
use ndarray::Array2;

use crate::record::CandidateRecord;
use crate::spectral::{imag_energy, spectral_radius_alt_shaped, spectral_radius_shaped};

/// All scalar columns attached to one candidate result: solver scalars
/// carried over from the record plus the columns derived here.
#[derive(Debug, Clone)]
pub struct MetricRow {
    pub filename: String,
    pub objective: f64,
    pub solver_spectral_radius: f64,
    pub complexity: f64,
    pub magnitude: f64,
    /// Max of the target normal field.
    pub target_max: f64,
    /// Max of the B·n residual.
    pub residual_max: f64,
    /// residual_max / target_max; the success filter cuts on this.
    pub residual_ratio: f64,
    /// Suppress-then-average windowed score of the target field.
    pub spectral_power: f64,
    /// Normalize-by-window score; different scale, separate column.
    pub spectral_power_alt: f64,
    /// Sum of |Im F| of the target field.
    pub imag_energy: f64,
}

fn field_max(field: &Array2<f64>) -> f64 {
    field.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

impl MetricRow {
    /// Compute every derived column for one record.
    pub fn evaluate(record: &CandidateRecord, config: &MetricConfig) -> CoilSpecResult<Self> {
        let target_max = field_max(&record.b_external_normal);
        let residual_max = field_max(&record.bdotn);

        Ok(MetricRow {
            filename: record.filename.clone(),
            objective: record.objective,
            solver_spectral_radius: record.solver_spectral_radius,
            complexity: record.complexity,
            magnitude: record.magnitude,
            target_max,
            residual_max,
            residual_ratio: residual_max / target_max,
            spectral_power: spectral_radius_shaped(
                &record.b_external_normal,
                config.window_shape,
            )?,
            spectral_power_alt: spectral_radius_alt_shaped(
                &record.b_external_normal,
                config.window_shape,
                config.window_floor,
            )?,
            imag_energy: imag_energy(&record.b_external_normal),
        })
    }

    pub fn column(&self, column: RankColumn) -> f64 {
        match column {
            RankColumn::Objective => self.objective,
            RankColumn::SolverSpectralRadius => self.solver_spectral_radius,
            RankColumn::Complexity => self.complexity,
            RankColumn::Magnitude => self.magnitude,
            RankColumn::TargetMax => self.target_max,
            RankColumn::ResidualMax => self.residual_max,
            RankColumn::ResidualRatio => self.residual_ratio,
            RankColumn::SpectralPower => self.spectral_power,
            RankColumn::SpectralPowerAlt => self.spectral_power_alt,
            RankColumn::ImagEnergy => self.imag_energy,
        }
    }
}

/// Scalar columns a result set can be ranked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankColumn {
    Objective,
    SolverSpectralRadius,
    Complexity,
    Magnitude,
    TargetMax,
    ResidualMax,
    ResidualRatio,
    SpectralPower,
    SpectralPowerAlt,
    ImagEnergy,
}

/// Evaluate the metric table for a whole result set.
pub fn evaluate_all(
    records: &[CandidateRecord],
    config: &MetricConfig,
) -> CoilSpecResult<Vec<MetricRow>> {
    records
        .iter()
        .map(|r| MetricRow::evaluate(r, config))
        .collect()
}

/// Keep the rows whose residual-to-target ratio is within `threshold`.
pub fn filter_successful(rows: &[MetricRow], threshold: f64) -> Vec<MetricRow> {
    rows.iter()
        .filter(|r| r.residual_ratio <= threshold)
        .cloned()
        .collect()
}

/// Stable sort on one column. NaN columns order after every real value
/// (IEEE total order), so broken rows sink to the end of an ascending
/// ranking instead of poisoning the comparison.
pub fn rank_by(rows: &mut [MetricRow], column: RankColumn, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = a.column(column).total_cmp(&b.column(column));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
