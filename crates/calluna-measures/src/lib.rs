//! Parameterized elastic distance measures for time-series classification.
//!
//! Provides the configuration protocol shared by elastic distance measures —
//! named-parameter get/set with per-parameter defaults — and a uniform
//! evaluation entry point, while the numeric kernels themselves (the MSM and
//! DTW recurrences) stay behind trait seams supplied by the caller. Includes
//! the MSM variant, its DTW base parameter block, and a rayon-parallel
//! pairwise distance matrix.

mod cutoff;
mod dtw;
mod error;
mod kernel;
mod matrix;
mod measure;
mod msm;
mod params;
mod series;

pub use cutoff::Cutoff;
pub use dtw::{DtwConfig, DtwMeasure};
pub use error::MeasureError;
pub use kernel::{DtwKernel, DtwParams, MsmKernel, MsmParams};
pub use matrix::DistanceMatrix;
pub use measure::{DistanceMeasure, MeasureDistance, pairwise};
pub use msm::MsmMeasure;
pub use params::ParamSet;
pub use series::{TimeSeries, TimeSeriesView};
