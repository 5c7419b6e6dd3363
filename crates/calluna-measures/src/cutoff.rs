//! Early-abandon threshold passed to distance evaluations.

use std::fmt;

/// Upper bound beyond which a kernel may abandon an evaluation early.
///
/// The cutoff is pure data at this layer: whether and how it is honored is
/// the kernel's contract. A kernel that abandons returns
/// [`MeasureDistance::INFINITY`][crate::MeasureDistance::INFINITY] in place
/// of the exact distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Cutoff {
    /// No threshold — the evaluation always runs to completion.
    #[default]
    NoLimit,

    /// Abandon once the distance provably exceeds this bound.
    Bounded(f64),
}

impl Cutoff {
    /// Return the bound, or `None` for [`Cutoff::NoLimit`].
    #[must_use]
    pub fn bound(self) -> Option<f64> {
        match self {
            Self::NoLimit => None,
            Self::Bounded(b) => Some(b),
        }
    }

    /// Return the bound as a plain `f64`, with `NoLimit` mapped to infinity.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::NoLimit => f64::INFINITY,
            Self::Bounded(b) => b,
        }
    }
}

impl From<f64> for Cutoff {
    /// Converts a raw threshold. Both infinite and NaN bounds map to
    /// [`Cutoff::NoLimit`]: a NaN threshold compares false against every
    /// distance, so it can never reject anything and degenerates to an
    /// unbounded evaluation.
    fn from(bound: f64) -> Self {
        if bound.is_nan() || bound.is_infinite() {
            Self::NoLimit
        } else {
            Self::Bounded(bound)
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLimit => write!(f, "no limit"),
            Self::Bounded(b) => write!(f, "{b:.6}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_no_limit() {
        assert_eq!(Cutoff::default(), Cutoff::NoLimit);
    }

    #[test]
    fn bound_accessor() {
        assert_eq!(Cutoff::NoLimit.bound(), None);
        assert_eq!(Cutoff::Bounded(2.5).bound(), Some(2.5));
    }

    #[test]
    fn as_f64_maps_no_limit_to_infinity() {
        assert_eq!(Cutoff::NoLimit.as_f64(), f64::INFINITY);
        assert_eq!(Cutoff::Bounded(1.0).as_f64(), 1.0);
    }

    #[test]
    fn from_f64() {
        assert_eq!(Cutoff::from(3.0), Cutoff::Bounded(3.0));
        assert_eq!(Cutoff::from(f64::INFINITY), Cutoff::NoLimit);
    }

    #[test]
    fn from_f64_nan_means_no_limit() {
        assert_eq!(Cutoff::from(f64::NAN), Cutoff::NoLimit);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Cutoff::NoLimit), "no limit");
        assert_eq!(format!("{}", Cutoff::Bounded(1.5)), "1.500000");
    }
}
