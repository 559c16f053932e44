//! gaze-precision - Precision metrics for eye-tracking data
//!
//! This crate computes two standard eye-tracker precision metrics from
//! arrays of gaze samples (one row per sample, x then y):
//!
//! - **BCEA**: Bivariate Contour Ellipse Area, the spread of a fixation
//! - **RMS-S2S**: root-mean-square sample-to-sample distance, the jitter
//!   between consecutive samples
//!
//! # Missing Data
//!
//! Missing coordinates are NaN. The calculators filter them differently:
//! BCEA drops a sample when x or y is missing, RMS-S2S drops a row when any
//! column is missing and keeps the remaining rows in order.
//!
//! # Degenerate Input
//!
//! Both calculators return `Result`. Input with no usable samples yields an
//! all-NaN result and a `tracing` warning; shape problems and RMS-S2S input
//! with a single complete row are errors.

pub mod bcea;
pub mod config;
pub mod error;
pub mod report;
pub mod rms_s2s;
pub mod samples;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use bcea::*;
pub use config::*;
pub use error::PrecisionError;
pub use report::*;
pub use rms_s2s::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
