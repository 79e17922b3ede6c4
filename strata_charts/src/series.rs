// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series input types.
//!
//! A [`DataSeries`] is an ordered sequence of labeled records; order is the
//! horizontal axis ordering and is preserved exactly. Validation happens
//! once at construction so renderers never see NaN or a ragged field
//! shape.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ChartError;

/// One labeled record: a category label plus one or two numeric fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Category label; display order is the series order.
    pub label: String,
    /// Primary numeric value.
    pub value: f64,
    /// Optional comparison value drawn behind the primary.
    pub secondary: Option<f64>,
}

impl Record {
    /// Creates a record with a single value.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            secondary: None,
        }
    }

    /// Attaches a comparison value.
    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// An ordered, fixed-shape sequence of labeled records.
///
/// Invariants enforced at construction:
/// - every numeric field is finite;
/// - every record has the same field shape (all records carry a secondary
///   value, or none do).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSeries {
    records: Vec<Record>,
}

impl DataSeries {
    /// Validates and wraps `records`. An empty series is valid.
    pub fn new(records: Vec<Record>) -> Result<Self, ChartError> {
        let has_secondary = records.first().is_some_and(|r| r.secondary.is_some());
        for (index, r) in records.iter().enumerate() {
            if !r.value.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
            if let Some(s) = r.secondary
                && !s.is_finite()
            {
                return Err(ChartError::NonFiniteValue { index });
            }
            if r.secondary.is_some() != has_secondary {
                return Err(ChartError::MixedShape { index });
            }
        }
        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the series has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns `true` when records carry a secondary value.
    pub fn has_secondary(&self) -> bool {
        self.records.first().is_some_and(|r| r.secondary.is_some())
    }

    /// Returns `(min, max)` over primary and secondary values, or `None`
    /// for an empty series.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in &self.records {
            min = min.min(r.value);
            max = max.max(r.value);
            if let Some(s) = r.secondary {
                min = min.min(s);
                max = max.max(s);
            }
        }
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}

/// A point in data space for line/area charts with a numeric x-field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyPoint {
    /// X value in data units (e.g. a bin midpoint).
    pub x: f64,
    /// Y value in data units.
    pub y: f64,
}

impl XyPoint {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of finite [`XyPoint`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XySeries {
    points: Vec<XyPoint>,
}

impl XySeries {
    /// Validates and wraps `points`. An empty series is valid.
    pub fn new(points: Vec<XyPoint>) -> Result<Self, ChartError> {
        for (index, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
        }
        Ok(Self { points })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, ChartError> {
        Self::new(pairs.iter().map(|&(x, y)| XyPoint::new(x, y)).collect())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in order.
    pub fn points(&self) -> &[XyPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn rejects_nan_values() {
        let err = DataSeries::new(vec![Record::new("a", 1.0), Record::new("b", f64::NAN)]);
        assert_eq!(err.unwrap_err(), ChartError::NonFiniteValue { index: 1 });
    }

    #[test]
    fn rejects_mixed_shape() {
        let err = DataSeries::new(vec![
            Record::new("a", 1.0).with_secondary(2.0),
            Record::new("b", 1.0),
        ]);
        assert_eq!(err.unwrap_err(), ChartError::MixedShape { index: 1 });
    }

    #[test]
    fn preserves_order() {
        let s = DataSeries::new(vec![
            Record::new("first", 3.0),
            Record::new("second", 1.0),
            Record::new("third", 2.0),
        ])
        .unwrap();
        let labels: Vec<&str> = s.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn extent_spans_both_fields() {
        let s = DataSeries::new(vec![
            Record::new("a", 91.0).with_secondary(80.0),
            Record::new("b", 96.0).with_secondary(93.0),
        ])
        .unwrap();
        assert_eq!(s.value_extent(), Some((80.0, 96.0)));
    }

    #[test]
    fn empty_series_is_valid() {
        let s = DataSeries::new(Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.value_extent(), None);
    }

    #[test]
    fn xy_rejects_infinite_x() {
        let err = XySeries::from_pairs(&[(0.0, 1.0), (f64::INFINITY, 2.0)]);
        assert_eq!(err.unwrap_err(), ChartError::NonFiniteValue { index: 1 });
    }
}
