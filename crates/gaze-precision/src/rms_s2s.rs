//! Root-mean-square sample-to-sample distance (RMS-S2S)
//!
//! RMS-S2S measures the jitter between consecutive gaze samples. For each
//! coordinate dimension it is the RMS of the successive differences, and a
//! final combined value is the RMS of the Euclidean distances between
//! consecutive samples in the full coordinate space.
//!
//! Rows with a missing value in any column are dropped before differencing.
//! The remaining rows keep their order, so the result depends on sample
//! order.

use ndarray::{Array2, ArrayView2, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{PrecisionError, Result};
use crate::samples::{all_missing, complete_rows, ensure_two_dimensional};

/// Minimum number of complete rows needed to form one difference
pub const MIN_RMS_S2S_SAMPLES: usize = 2;

/// Result of an RMS-S2S computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RmsS2sResult {
    /// RMS of successive differences, one value per input column
    pub per_axis: Vec<f64>,
    /// RMS of the Euclidean distances between consecutive samples
    pub combined: f64,
}

impl RmsS2sResult {
    /// All-NaN result for input with `dimensions` columns
    pub fn nan(dimensions: usize) -> Self {
        Self {
            per_axis: vec![f64::NAN; dimensions],
            combined: f64::NAN,
        }
    }

    /// True when every value is NaN
    pub fn is_empty_sentinel(&self) -> bool {
        self.combined.is_nan() && self.per_axis.iter().all(|v| v.is_nan())
    }

    /// Per-axis values followed by the combined value
    pub fn to_vec(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.per_axis.len() + 1);
        values.extend_from_slice(&self.per_axis);
        values.push(self.combined);
        values
    }

    /// Number of coordinate dimensions
    pub fn dimensions(&self) -> usize {
        self.per_axis.len()
    }
}

/// Compute RMS-S2S over gaze samples with any number of columns
///
/// - All values missing (or no rows): logs a warning and returns the all-NaN
///   result, one value per column plus the combined value. That is
///   `[NaN, NaN, NaN]` for the usual `(n, 2)` input, but four or more values
///   when there are three or more columns.
/// - Fewer than two complete rows otherwise: [`PrecisionError::InsufficientSamples`].
/// - No columns: [`PrecisionError::InvalidShape`].
///
/// # Example
///
/// ```
/// use gaze_precision::calculate_rms_s2s;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
/// let result = calculate_rms_s2s(data.view()).unwrap();
/// assert_eq!(result.per_axis, vec![1.0, 1.0]);
/// assert!((result.combined - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn calculate_rms_s2s(samples: ArrayView2<'_, f64>) -> Result<RmsS2sResult> {
    let dimensions = samples.ncols();
    if dimensions == 0 {
        return Err(PrecisionError::invalid_shape(
            "at least one coordinate column",
            samples.shape(),
        ));
    }

    if all_missing(&samples) {
        tracing::warn!(rows = samples.nrows(), "all gaze samples are missing");
        return Ok(RmsS2sResult::nan(dimensions));
    }

    let complete = complete_rows(&samples);
    tracing::debug!(
        rows = samples.nrows(),
        complete = complete.nrows(),
        "rms_s2s: filtered samples"
    );

    if complete.nrows() < MIN_RMS_S2S_SAMPLES {
        return Err(PrecisionError::InsufficientSamples {
            required: MIN_RMS_S2S_SAMPLES,
            found: complete.nrows(),
        });
    }

    let per_axis = complete
        .columns()
        .into_iter()
        .map(|column| rms(column.windows(2).into_iter().map(|w| w[1] - w[0])))
        .collect();

    let combined = rms(step_distances(&complete));

    Ok(RmsS2sResult { per_axis, combined })
}

/// [`calculate_rms_s2s`] for arrays of unknown rank
pub fn calculate_rms_s2s_dyn(samples: ArrayViewD<'_, f64>) -> Result<RmsS2sResult> {
    calculate_rms_s2s(ensure_two_dimensional(samples)?)
}

/// Euclidean distance between each pair of consecutive rows
fn step_distances(rows: &Array2<f64>) -> impl Iterator<Item = f64> + '_ {
    rows.axis_windows(Axis(0), 2).into_iter().map(|w| {
        let a = w.row(0);
        let b = w.row(1);
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (bi - ai).powi(2))
            .sum::<f64>()
            .sqrt()
    })
}

fn rms(values: impl Iterator<Item = f64>) -> f64 {
    let (sum_sq, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v * v, n + 1));
    (sum_sq / count as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rms_s2s_diagonal() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let result = calculate_rms_s2s(data.view()).unwrap();

        assert_eq!(result.per_axis, vec![1.0, 1.0]);
        assert!((result.combined - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(result.to_vec().len(), 3);
    }

    #[test]
    fn test_rms_s2s_uneven_steps() {
        // x steps: 3, -1 -> sqrt((9 + 1) / 2)
        // y steps: 4, 0  -> sqrt((16 + 0) / 2)
        // distances: 5, 1 -> sqrt((25 + 1) / 2)
        let data = array![[0.0, 0.0], [3.0, 4.0], [2.0, 4.0]];
        let result = calculate_rms_s2s(data.view()).unwrap();

        assert!((result.per_axis[0] - 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((result.per_axis[1] - 8.0_f64.sqrt()).abs() < 1e-12);
        assert!((result.combined - 13.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rms_s2s_drops_incomplete_rows() {
        let data = array![[0.0, 0.0], [f64::NAN, 9.0], [1.0, 1.0], [5.0, f64::NAN], [2.0, 2.0]];
        let clean = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];

        assert_eq!(
            calculate_rms_s2s(data.view()).unwrap(),
            calculate_rms_s2s(clean.view()).unwrap()
        );
    }

    #[test]
    fn test_rms_s2s_all_nan_sentinel() {
        let data = Array2::from_elem((4, 2), f64::NAN);
        let result = calculate_rms_s2s(data.view()).unwrap();

        assert!(result.is_empty_sentinel());
        assert_eq!(result.to_vec().len(), 3);
    }

    #[test]
    fn test_rms_s2s_sentinel_tracks_dimensions() {
        let data = Array2::from_elem((4, 3), f64::NAN);
        let result = calculate_rms_s2s(data.view()).unwrap();
        assert_eq!(result.dimensions(), 3);
        assert_eq!(result.to_vec().len(), 4);
    }

    #[test]
    fn test_rms_s2s_insufficient_samples() {
        let data = array![[1.0, 2.0], [f64::NAN, 3.0]];
        let err = calculate_rms_s2s(data.view()).unwrap_err();
        assert_eq!(
            err,
            PrecisionError::InsufficientSamples {
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rms_s2s_no_columns() {
        let data = Array2::<f64>::zeros((3, 0));
        assert!(matches!(
            calculate_rms_s2s(data.view()),
            Err(PrecisionError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_rms_s2s_three_dimensions() {
        let data = array![[0.0, 0.0, 0.0], [1.0, 2.0, 2.0]];
        let result = calculate_rms_s2s(data.view()).unwrap();
        assert_eq!(result.per_axis, vec![1.0, 2.0, 2.0]);
        assert!((result.combined - 3.0).abs() < 1e-12);
    }
}
