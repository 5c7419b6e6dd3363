//! Trait seams for the external numeric kernels.
//!
//! The recurrences themselves (the MSM cost recursion, the DTW cost matrix)
//! live outside this crate. A measure owns a kernel implementation supplied
//! by the caller and hands it a typed parameter block built from the
//! measure's current configuration — the parameter contract is checked at
//! compile time rather than spread through a bag of named arguments.

use serde::{Deserialize, Serialize};

use crate::cutoff::Cutoff;

/// Parameters handed to a DTW kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DtwParams {
    /// Warping window as a fraction of series length; `1.0` is unconstrained.
    pub window: f64,
}

/// Parameters handed to an MSM kernel.
///
/// MSM composes over the DTW parameter family, so the window travels with
/// the move-split-merge cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MsmParams {
    /// Cost of a split or merge operation.
    pub cost: f64,
    /// Warping window as a fraction of series length; `1.0` is unconstrained.
    pub window: f64,
}

/// A DTW-family distance kernel.
///
/// Pure over its inputs. Receives the cutoff and may abandon early,
/// returning `f64::INFINITY` once the distance provably exceeds it.
pub trait DtwKernel {
    /// Compute the distance between two series under `params`.
    fn distance(&self, a: &[f64], b: &[f64], params: DtwParams, cutoff: Cutoff) -> f64;
}

/// An MSM distance kernel.
///
/// Pure over its inputs. Does not receive a cutoff — see
/// [`MsmMeasure::distance`][crate::MsmMeasure] for why.
pub trait MsmKernel {
    /// Compute the distance between two series under `params`.
    fn distance(&self, a: &[f64], b: &[f64], params: MsmParams) -> f64;
}

impl<F> DtwKernel for F
where
    F: Fn(&[f64], &[f64], DtwParams, Cutoff) -> f64,
{
    fn distance(&self, a: &[f64], b: &[f64], params: DtwParams, cutoff: Cutoff) -> f64 {
        self(a, b, params, cutoff)
    }
}

impl<F> MsmKernel for F
where
    F: Fn(&[f64], &[f64], MsmParams) -> f64,
{
    fn distance(&self, a: &[f64], b: &[f64], params: MsmParams) -> f64 {
        self(a, b, params)
    }
}
