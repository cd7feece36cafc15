//! Rider search queries.

use geo::Coord;
use thiserror::Error;

use crate::validation::validate_coordinate;
use crate::{CoordinateError, CoordinateField};

/// A rider's request: where they start, where they end, and the places they
/// would like the route to pass near.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::SearchInput;
///
/// let search = SearchInput::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 3.0 })
///     .with_via_points([Coord { x: 1.5, y: 1.5 }]);
/// assert_eq!(search.via_points.len(), 1);
/// assert!(search.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchInput {
    /// Desired pick-up point.
    #[cfg_attr(feature = "serde", serde(with = "crate::latlng"))]
    pub start: Coord<f64>,
    /// Desired drop-off point.
    #[cfg_attr(feature = "serde", serde(with = "crate::latlng"))]
    pub end: Coord<f64>,
    /// Intermediate places the rider wants to pass near.
    #[cfg_attr(feature = "serde", serde(default, with = "crate::latlng::seq"))]
    pub via_points: Vec<Coord<f64>>,
}

/// Errors returned by [`SearchInput::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchInputValidationError {
    /// A start, end or via-point coordinate was invalid.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

impl SearchInput {
    /// Construct a query without via-points.
    #[must_use]
    pub const fn new(start: Coord<f64>, end: Coord<f64>) -> Self {
        Self {
            start,
            end,
            via_points: Vec::new(),
        }
    }

    /// Replace the via-points.
    #[must_use]
    pub fn with_via_points<I>(mut self, via_points: I) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        self.via_points = via_points.into_iter().collect();
        self
    }

    /// Check every coordinate is finite and within WGS84 bounds.
    ///
    /// # Errors
    /// Returns the first invalid coordinate, naming the field.
    pub fn validate(&self) -> Result<(), SearchInputValidationError> {
        validate_coordinate(CoordinateField::Start, self.start)?;
        validate_coordinate(CoordinateField::End, self.end)?;
        for (index, point) in self.via_points.iter().enumerate() {
            validate_coordinate(CoordinateField::ViaPoint(index), *point)?;
        }
        Ok(())
    }
}
