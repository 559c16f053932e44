//! Bivariate Contour Ellipse Area (BCEA)
//!
//! BCEA summarizes the 2D spread of the gaze samples in a fixation as the
//! area of the ellipse that covers a given proportion of the samples,
//! assuming a bivariate normal distribution:
//!
//! ```text
//! BCEA = 2 k π σx σy √(1 - ρ²)
//! ```
//!
//! where `σx`, `σy` are the sample standard deviations, `ρ` is the Pearson
//! correlation of x and y, and `k` scales the ellipse to the desired
//! confidence proportion `P` via `P = 1 - e^(-k)`.
//!
//! Samples are filtered pairwise: a row contributes only if both its x and y
//! are present. Row order does not matter.

use std::f64::consts::PI;

use ndarray::{ArrayView2, ArrayViewD};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::samples::{ensure_two_columns, ensure_two_dimensional, valid_pairs};

/// Default scale factor, covering roughly 68.3% of a bivariate normal
pub const DEFAULT_BCEA_K: f64 = 1.14;

/// Result of a BCEA computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BceaResult {
    /// Ellipse area, in squared input units
    pub area: f64,
    /// Sample standard deviation of x
    pub sigma_x: f64,
    /// Sample standard deviation of y
    pub sigma_y: f64,
    /// Correlation coefficient of x and y
    pub rho: f64,
    /// Number of samples with both coordinates present
    pub valid_samples: u64,
}

impl BceaResult {
    /// The all-NaN result returned when no valid samples exist
    pub fn nan() -> Self {
        Self {
            area: f64::NAN,
            sigma_x: f64::NAN,
            sigma_y: f64::NAN,
            rho: f64::NAN,
            valid_samples: 0,
        }
    }

    /// True for the no-valid-samples result
    pub fn is_empty_sentinel(&self) -> bool {
        self.valid_samples == 0
            && self.area.is_nan()
            && self.sigma_x.is_nan()
            && self.sigma_y.is_nan()
            && self.rho.is_nan()
    }

    /// `(area, sigma_x, sigma_y, rho)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.area, self.sigma_x, self.sigma_y, self.rho)
    }
}

/// Compute the BCEA of an `(n, 2)` array of gaze samples
///
/// Returns an error if the input does not have exactly two columns. If no
/// row has both coordinates present, a warning is logged and the all-NaN
/// result is returned.
///
/// Zero variance along either axis yields a NaN `rho` and `area`; `k` is not
/// range-checked.
///
/// # Example
///
/// ```
/// use gaze_precision::calculate_bcea;
/// use ndarray::array;
///
/// let data = array![[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 3.0]];
/// let result = calculate_bcea(data.view(), 1.14).unwrap();
/// assert!((result.rho - 0.6).abs() < 1e-10);
/// ```
pub fn calculate_bcea(samples: ArrayView2<'_, f64>, k: f64) -> Result<BceaResult> {
    ensure_two_columns(&samples)?;

    let (x, y) = valid_pairs(&samples);
    let n = x.len();
    tracing::debug!(rows = samples.nrows(), valid = n, "bcea: filtered samples");

    if n == 0 {
        tracing::warn!("no valid data points after NaN removal");
        return Ok(BceaResult::nan());
    }

    let sigma_x = sample_variance(&x).sqrt();
    let sigma_y = sample_variance(&y).sqrt();
    let sigma_xy = sample_covariance(&x, &y);

    let rho = sigma_xy / (sigma_x * sigma_y);
    let area = 2.0 * k * PI * sigma_x * sigma_y * (1.0 - rho.powi(2)).sqrt();

    Ok(BceaResult {
        area,
        sigma_x,
        sigma_y,
        rho,
        valid_samples: n as u64,
    })
}

/// [`calculate_bcea`] with [`DEFAULT_BCEA_K`]
pub fn calculate_bcea_default(samples: ArrayView2<'_, f64>) -> Result<BceaResult> {
    calculate_bcea(samples, DEFAULT_BCEA_K)
}

/// [`calculate_bcea`] for arrays of unknown rank
///
/// Fails unless the input is two-dimensional with two columns.
pub fn calculate_bcea_dyn(samples: ArrayViewD<'_, f64>, k: f64) -> Result<BceaResult> {
    calculate_bcea(ensure_two_dimensional(samples)?, k)
}

/// Scale factor `k` for a confidence proportion `p` in (0, 1)
///
/// Inverts `p = 1 - e^(-k)`. Returns NaN outside the open interval.
pub fn bcea_k_for_confidence(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    -(-p).ln_1p()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected variance; NaN for a single value
fn sample_variance(values: &[f64]) -> f64 {
    sample_covariance(values, values)
}

/// Bessel-corrected covariance of two equal-length slices
fn sample_covariance(a: &[f64], b: &[f64]) -> f64 {
    let mean_a = mean(a);
    let mean_b = mean(b);
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&ai, &bi)| (ai - mean_a) * (bi - mean_b))
        .sum();
    sum / (a.len() as f64 - 1.0)
}
