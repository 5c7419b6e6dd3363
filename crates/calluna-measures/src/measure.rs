//! The distance-measure capability and its evaluation result type.

use std::cmp::Ordering;
use std::fmt;

use rayon::prelude::*;
use tracing::instrument;

use crate::cutoff::Cutoff;
use crate::matrix::DistanceMatrix;
use crate::params::ParamSet;
use crate::series::{TimeSeries, TimeSeriesView};

/// A named, parameterized distance measure over time series.
///
/// The contract every variant upholds:
///
/// - [`params`][Self::params] returns a fresh mapping of the full current
///   configuration — the variant's own keys merged over the keys its base
///   parameter block contributes, own keys winning on collision. Pure and
///   idempotent.
/// - [`set_params`][Self::set_params] replaces the configuration wholesale.
///   Absent keys reset their parameter to its documented default;
///   unrecognized keys are tolerated. Never fails.
/// - [`distance`][Self::distance] evaluates under the current configuration
///   and is read-only over it, so interleaving evaluations with `params`
///   calls is always safe. Reconfiguration needs `&mut self`; evaluation
///   only `&self`.
pub trait DistanceMeasure {
    /// Short lowercase name of the measure family, e.g. `"msm"`.
    fn name(&self) -> &'static str;

    /// Return the full current configuration as a fresh mapping.
    fn params(&self) -> ParamSet;

    /// Replace the configuration from a named-parameter set.
    fn set_params(&mut self, config: &ParamSet);

    /// Compute the distance between two series.
    fn distance(
        &self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: Cutoff,
    ) -> MeasureDistance;
}

/// A non-negative distance value produced by a measure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MeasureDistance(f64);

impl MeasureDistance {
    /// Infinite distance, the sentinel for an abandoned evaluation.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Wrap a raw kernel result.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if this evaluation was abandoned at a cutoff.
    #[must_use]
    pub fn is_abandoned(self) -> bool {
        self.0 == f64::INFINITY
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for MeasureDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Compute pairwise distances for a collection of series under one measure.
///
/// Returns a symmetric [`DistanceMatrix`] over all unique pairs, computed in
/// parallel with rayon. Evaluations run without a cutoff.
#[must_use]
#[instrument(skip(measure, series), fields(measure = measure.name(), n = series.len()))]
pub fn pairwise<M>(measure: &M, series: &[TimeSeries]) -> DistanceMatrix
where
    M: DistanceMeasure + Sync,
{
    let n = series.len();
    // No pairs exist below two series.
    if n < 2 {
        return DistanceMatrix::from_raw(n, Vec::new());
    }
    let total_pairs = n * (n - 1) / 2;
    let views: Vec<TimeSeriesView<'_>> = series.iter().map(|s| s.as_view()).collect();

    // Lower triangle, flat index i*(i-1)/2 + j with i > j.
    let distances: Vec<MeasureDistance> = (0..total_pairs)
        .into_par_iter()
        .map(|flat_idx| {
            let i = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
            let j = flat_idx - i * (i - 1) / 2;
            measure.distance(views[i], views[j], Cutoff::NoLimit)
        })
        .collect();

    DistanceMatrix::from_raw(n, distances)
}
