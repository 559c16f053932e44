//! Combined precision report for a fixation
//!
//! # Parallel Processing
//!
//! When the `parallel` feature is enabled, [`compute_batch`] spreads the
//! fixations over the rayon thread pool. Output order always matches input
//! order.

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bcea::{calculate_bcea, BceaResult};
use crate::config::PrecisionConfig;
use crate::error::Result;
use crate::rms_s2s::{calculate_rms_s2s, RmsS2sResult, MIN_RMS_S2S_SAMPLES};
use crate::samples::complete_row_count;

/// Both precision metrics for one fixation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FixationPrecision {
    pub bcea: BceaResult,
    /// `None` when the fixation is too short for sample-to-sample analysis
    pub rms_s2s: Option<RmsS2sResult>,
}

impl FixationPrecision {
    /// Compute both metrics for an `(n, 2)` fixation
    ///
    /// Shape errors are returned. A fixation with fewer than
    /// `config.min_rms_samples` complete rows (never fewer than two) still
    /// gets its BCEA.
    pub fn compute(samples: ArrayView2<'_, f64>, config: &PrecisionConfig) -> Result<Self> {
        let bcea = calculate_bcea(samples, config.bcea_k)?;

        let required = config.min_rms_samples.max(MIN_RMS_S2S_SAMPLES as u64);
        let complete = complete_row_count(&samples) as u64;
        let rms_s2s = if complete < required {
            tracing::debug!(complete, required, "fixation too short for rms_s2s");
            None
        } else {
            Some(calculate_rms_s2s(samples)?)
        };

        Ok(Self { bcea, rms_s2s })
    }
}

/// Compute precision reports for many fixations
pub fn compute_batch(
    fixations: &[ArrayView2<'_, f64>],
    config: &PrecisionConfig,
) -> Vec<Result<FixationPrecision>> {
    #[cfg(feature = "parallel")]
    let reports = fixations
        .par_iter()
        .map(|samples| FixationPrecision::compute(samples.view(), config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports = fixations
        .iter()
        .map(|samples| FixationPrecision::compute(samples.view(), config))
        .collect();

    reports
}
