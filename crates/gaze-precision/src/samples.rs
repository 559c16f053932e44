//! Gaze sample validation and missing-value filtering
//!
//! Gaze samples are stored as a 2D array: one row per sample in temporal
//! order, one column per coordinate dimension (x first, y second). Missing
//! values are NaN.
//!
//! Two filtering policies are provided, and each calculator picks one:
//!
//! - **Pairwise** (BCEA): a sample is valid when both x and y are present.
//!   Extra columns are never consulted.
//! - **Row-level** (RMS-S2S): a sample is kept only when every column is
//!   present. Kept rows stay in their original order, since the
//!   sample-to-sample differences depend on adjacency.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewD, Ix2};

use crate::error::{PrecisionError, Result};

/// Column index of the horizontal coordinate
pub const X_COLUMN: usize = 0;
/// Column index of the vertical coordinate
pub const Y_COLUMN: usize = 1;

/// Require an `(n, 2)` layout
pub fn ensure_two_columns(samples: &ArrayView2<'_, f64>) -> Result<()> {
    if samples.ncols() != 2 {
        return Err(PrecisionError::invalid_shape("(n, 2)", samples.shape()));
    }
    Ok(())
}

/// Require a two-dimensional array and return it as a 2D view
pub fn ensure_two_dimensional<'a>(samples: ArrayViewD<'a, f64>) -> Result<ArrayView2<'a, f64>> {
    let shape = samples.shape().to_vec();
    samples
        .into_dimensionality::<Ix2>()
        .map_err(|_| PrecisionError::invalid_shape("a two-dimensional array", &shape))
}

/// Per-sample flag: true only when both x and y are present
pub fn validity_mask(samples: &ArrayView2<'_, f64>) -> Vec<bool> {
    samples
        .rows()
        .into_iter()
        .map(|row| !row[X_COLUMN].is_nan() && !row[Y_COLUMN].is_nan())
        .collect()
}

/// Extract the x and y coordinates of every valid sample
///
/// Expects a layout already checked by [`ensure_two_columns`].
pub fn valid_pairs(samples: &ArrayView2<'_, f64>) -> (Vec<f64>, Vec<f64>) {
    let mask = validity_mask(samples);
    samples
        .rows()
        .into_iter()
        .zip(mask)
        .filter(|(_, valid)| *valid)
        .map(|(row, _)| (row[X_COLUMN], row[Y_COLUMN]))
        .unzip()
}

fn is_complete(row: &ArrayView1<'_, f64>) -> bool {
    !row.iter().any(|v| v.is_nan())
}

/// Number of rows with no missing value in any column
pub fn complete_row_count(samples: &ArrayView2<'_, f64>) -> usize {
    samples.rows().into_iter().filter(is_complete).count()
}

/// Keep the rows with no missing value in any column, preserving order
pub fn complete_rows(samples: &ArrayView2<'_, f64>) -> Array2<f64> {
    let keep: Vec<usize> = samples
        .rows()
        .into_iter()
        .enumerate()
        .filter(|(_, row)| is_complete(row))
        .map(|(i, _)| i)
        .collect();
    Array2::from_shape_fn((keep.len(), samples.ncols()), |(i, j)| samples[[keep[i], j]])
}

/// True when every value is missing (vacuously true for an empty array)
pub fn all_missing(samples: &ArrayView2<'_, f64>) -> bool {
    samples.iter().all(|v| v.is_nan())
}
