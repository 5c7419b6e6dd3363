//! The DTW base variant: parameter block and standalone measure.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cutoff::Cutoff;
use crate::kernel::{DtwKernel, DtwParams};
use crate::measure::{DistanceMeasure, MeasureDistance};
use crate::params::ParamSet;
use crate::series::TimeSeriesView;

/// Parameter block for the DTW measure family.
///
/// Variants that extend the family (such as [`MsmMeasure`][crate::MsmMeasure])
/// compose over this block instead of inheriting from a base measure: they
/// own a `DtwConfig`, delegate reconfiguration to it first, and lay their
/// own keys over its keys when reporting the full parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DtwConfig {
    window: f64,
}

impl DtwConfig {
    /// Name of the warping-window parameter.
    pub const WINDOW_KEY: &'static str = "w";

    /// Default warping window: full-width, i.e. unconstrained.
    pub const DEFAULT_WINDOW: f64 = 1.0;

    /// Build a block from a named-parameter set, defaulting absent keys.
    #[must_use]
    pub fn from_params(config: &ParamSet) -> Self {
        Self {
            window: config.value_or(Self::WINDOW_KEY, Self::DEFAULT_WINDOW),
        }
    }

    /// Replace this block's parameters from a named-parameter set.
    ///
    /// A key absent from `config` resets its parameter to the default.
    pub fn set_params(&mut self, config: &ParamSet) {
        self.window = config.value_or(Self::WINDOW_KEY, Self::DEFAULT_WINDOW);
    }

    /// Return this block's parameters as a fresh mapping.
    #[must_use]
    pub fn params(&self) -> ParamSet {
        ParamSet::new().with(Self::WINDOW_KEY, self.window)
    }

    /// Return the warping window fraction.
    #[must_use]
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Return the typed parameter block handed to a kernel.
    #[must_use]
    pub fn kernel_params(&self) -> DtwParams {
        DtwParams {
            window: self.window,
        }
    }
}

impl Default for DtwConfig {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
        }
    }
}

/// The DTW family's base measure, backed by a caller-supplied kernel.
#[derive(Debug, Clone)]
pub struct DtwMeasure<K> {
    config: DtwConfig,
    kernel: K,
}

impl<K: DtwKernel> DtwMeasure<K> {
    /// Create a DTW measure with default parameters.
    #[must_use]
    pub fn new(kernel: K) -> Self {
        Self {
            config: DtwConfig::default(),
            kernel,
        }
    }

    /// Create a DTW measure with overrides from a named-parameter set.
    #[must_use]
    pub fn with_params(kernel: K, config: &ParamSet) -> Self {
        Self {
            config: DtwConfig::from_params(config),
            kernel,
        }
    }

    /// Return the warping window fraction.
    #[must_use]
    pub fn window(&self) -> f64 {
        self.config.window()
    }
}

impl<K: DtwKernel> DistanceMeasure for DtwMeasure<K> {
    fn name(&self) -> &'static str {
        "dtw"
    }

    fn params(&self) -> ParamSet {
        self.config.params()
    }

    fn set_params(&mut self, config: &ParamSet) {
        self.config.set_params(config);
    }

    /// Compute the DTW distance between two series.
    ///
    /// The cutoff is forwarded to the kernel, which may abandon early and
    /// return [`MeasureDistance::INFINITY`].
    #[instrument(skip(self, a, b), fields(measure = "dtw"))]
    fn distance(
        &self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: Cutoff,
    ) -> MeasureDistance {
        let dist = self
            .kernel
            .distance(a.as_slice(), b.as_slice(), self.config.kernel_params(), cutoff);
        MeasureDistance::new(dist)
    }
}
