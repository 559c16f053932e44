//! UniFFI exports
//!
//! Foreign callers pass samples as a list of rows; each row must have the
//! same length.

use ndarray::Array2;

use crate::bcea::{calculate_bcea, BceaResult};
use crate::config::PrecisionConfig;
use crate::error::PrecisionError;
use crate::report::FixationPrecision;
use crate::rms_s2s::{calculate_rms_s2s, RmsS2sResult};

/// FFI-safe error type for precision computations
#[derive(uniffi::Error, Debug, Clone)]
#[uniffi(flat_error)]
pub enum FfiError {
    ComputationError { message: String },
}

impl std::fmt::Display for FfiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FfiError::ComputationError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FfiError {}

impl From<PrecisionError> for FfiError {
    fn from(e: PrecisionError) -> Self {
        FfiError::ComputationError {
            message: e.to_string(),
        }
    }
}

/// Convert row-major nested vectors into a sample matrix
pub(crate) fn rows_to_array(rows: Vec<Vec<f64>>) -> Result<Array2<f64>, PrecisionError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(PrecisionError::RaggedRows {
            row,
            expected: ncols,
            found: bad.len(),
        });
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|_| PrecisionError::invalid_shape("rows of equal length", &[nrows, ncols]))
}

#[uniffi::export]
pub fn bcea_from_rows(rows: Vec<Vec<f64>>, k: f64) -> Result<BceaResult, FfiError> {
    let samples = rows_to_array(rows)?;
    Ok(calculate_bcea(samples.view(), k)?)
}

#[uniffi::export]
pub fn rms_s2s_from_rows(rows: Vec<Vec<f64>>) -> Result<RmsS2sResult, FfiError> {
    let samples = rows_to_array(rows)?;
    Ok(calculate_rms_s2s(samples.view())?)
}

#[uniffi::export]
pub fn fixation_precision_from_rows(
    rows: Vec<Vec<f64>>,
    config: PrecisionConfig,
) -> Result<FixationPrecision, FfiError> {
    let samples = rows_to_array(rows)?;
    Ok(FixationPrecision::compute(samples.view(), &config)?)
}

#[uniffi::export]
pub fn default_precision_config() -> PrecisionConfig {
    PrecisionConfig::default()
}
