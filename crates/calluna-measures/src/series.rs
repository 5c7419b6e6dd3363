//! Validated time series inputs.
//!
//! Measures take series as borrowed views and never retain them; validation
//! happens once at construction so every evaluation path can assume
//! non-empty, all-finite data.

use crate::error::MeasureError;

/// Owned time series. Non-empty with all finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries(Vec<f64>);

impl TimeSeries {
    /// Create a validated time series.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MeasureError::EmptySeries`] | `values` is empty |
    /// | [`MeasureError::NonFiniteValue`] | any value is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, MeasureError> {
        validate(&values)?;
        Ok(Self(values))
    }

    /// Borrow this series as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> TimeSeriesView<'_> {
        TimeSeriesView(&self.0)
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed series; provided for the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Borrowed view into a validated time series.
#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesView<'a>(&'a [f64]);

impl<'a> TimeSeriesView<'a> {
    /// Create a validated view over a slice.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MeasureError::EmptySeries`] | `slice` is empty |
    /// | [`MeasureError::NonFiniteValue`] | any value is NaN or infinite |
    pub fn new(slice: &'a [f64]) -> Result<Self, MeasureError> {
        validate(slice)?;
        Ok(Self(slice))
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[f64]> for TimeSeriesView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

fn validate(values: &[f64]) -> Result<(), MeasureError> {
    if values.is_empty() {
        return Err(MeasureError::EmptySeries);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(MeasureError::NonFiniteValue { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            TimeSeries::new(vec![]),
            Err(MeasureError::EmptySeries)
        ));
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            TimeSeries::new(vec![1.0, f64::NAN]),
            Err(MeasureError::NonFiniteValue { index: 1 })
        ));
    }

    #[test]
    fn rejects_infinity() {
        assert!(matches!(
            TimeSeries::new(vec![f64::NEG_INFINITY, 2.0]),
            Err(MeasureError::NonFiniteValue { index: 0 })
        ));
    }

    #[test]
    fn accepts_valid_series() {
        let ts = TimeSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.as_ref(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn view_validation() {
        assert!(matches!(
            TimeSeriesView::new(&[]),
            Err(MeasureError::EmptySeries)
        ));
        let data = [1.0, 2.0];
        let view = TimeSeriesView::new(&data).unwrap();
        assert_eq!(view.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn as_view_round_trip() {
        let ts = TimeSeries::new(vec![4.0, 5.0]).unwrap();
        assert_eq!(ts.as_view().as_slice(), &[4.0, 5.0]);
        assert_eq!(ts.into_inner(), vec![4.0, 5.0]);
    }
}
