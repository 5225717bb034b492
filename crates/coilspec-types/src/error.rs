// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoilSpecError {
    #[error("Window of extent {window} does not fit {height}x{width} field")]
    ShapeMismatch {
        height: usize,
        width: usize,
        window: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Malformed result record: {0}")]
    RecordError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoilSpecResult<T> = Result<T, CoilSpecError>;
