// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Result Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-result JSON records written by the coil optimizer.
//!
//! Each file holds a `graph` object whose entries are either plain JSON
//! values or serializer wrappers of the form
//! `{"@module": ..., "data": <payload>}`; wrappers are unwrapped to
//! their payload before extraction.

use coilspec_types::error::{CoilSpecError, CoilSpecResult};
use ndarray::Array2;
use serde_json::Value;
use std::path::Path;

/// One coil-optimization result: solver-reported scalars plus the two
/// field maps sampled on the plasma surface grid.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub filename: String,
    /// Objective value `J` at the optimum.
    pub objective: f64,
    /// Spectral radius reported by the optimizer itself (distinct from
    /// the windowed scores this crate derives).
    pub solver_spectral_radius: f64,
    pub complexity: f64,
    pub magnitude: f64,
    /// Target normal field on the surface, rows = poloidal samples.
    pub b_external_normal: Array2<f64>,
    /// Residual B·n after optimization, same grid.
    pub bdotn: Array2<f64>,
}

impl CandidateRecord {
    /// Parse a single result file.
    pub fn from_file(path: &Path) -> CoilSpecResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&contents)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_value(&root, filename)
    }

    /// Parse an already-deserialized result document.
    pub fn from_value(root: &Value, filename: String) -> CoilSpecResult<Self> {
        let graph = root
            .get("graph")
            .and_then(Value::as_object)
            .ok_or_else(|| record_error(&filename, "missing 'graph' object"))?;

        Ok(CandidateRecord {
            objective: scalar_entry(graph, "J", &filename)?,
            solver_spectral_radius: scalar_entry(graph, "spectral_radius", &filename)?,
            complexity: scalar_entry(graph, "complexity", &filename)?,
            magnitude: scalar_entry(graph, "magnitude", &filename)?,
            b_external_normal: field_entry(graph, "B_external_normal", &filename)?,
            bdotn: field_entry(graph, "BdotN", &filename)?,
            filename,
        })
    }
}

/// Load every `*.json` record in a results directory, in filename order.
/// Non-JSON directory entries are skipped; a malformed record aborts the
/// load with the offending file named.
pub fn load_results_dir(dir: &Path) -> CoilSpecResult<Vec<CandidateRecord>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|p| CandidateRecord::from_file(p)).collect()
}

fn record_error(filename: &str, message: &str) -> CoilSpecError {
    CoilSpecError::RecordError(format!("{filename}: {message}"))
}

/// Strip a serializer wrapper, if present.
fn unwrap_payload(value: &Value) -> &Value {
    match value.as_object() {
        Some(obj) if obj.contains_key("@module") => obj.get("data").unwrap_or(value),
        _ => value,
    }
}

fn scalar_entry(
    graph: &serde_json::Map<String, Value>,
    key: &str,
    filename: &str,
) -> CoilSpecResult<f64> {
    let value = graph
        .get(key)
        .ok_or_else(|| record_error(filename, &format!("missing scalar '{key}'")))?;
    unwrap_payload(value)
        .as_f64()
        .ok_or_else(|| record_error(filename, &format!("scalar '{key}' is not a number")))
}

fn field_entry(
    graph: &serde_json::Map<String, Value>,
    key: &str,
    filename: &str,
) -> CoilSpecResult<Array2<f64>> {
    let value = graph
        .get(key)
        .ok_or_else(|| record_error(filename, &format!("missing field '{key}'")))?;
    let rows = unwrap_payload(value)
        .as_array()
        .ok_or_else(|| record_error(filename, &format!("field '{key}' is not an array")))?;

    let height = rows.len();
    let width = rows
        .first()
        .and_then(Value::as_array)
        .map(|r| r.len())
        .unwrap_or(0);

    let mut field = Array2::zeros((height, width));
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_array().ok_or_else(|| {
            record_error(filename, &format!("field '{key}' row {i} is not an array"))
        })?;
        if row.len() != width {
            return Err(record_error(
                filename,
                &format!("field '{key}' row {i} has {} values, expected {width}", row.len()),
            ));
        }
        for (j, v) in row.iter().enumerate() {
            field[[i, j]] = v.as_f64().ok_or_else(|| {
                record_error(filename, &format!("field '{key}' has a non-numeric entry"))
            })?;
        }
    }
    Ok(field)
}
