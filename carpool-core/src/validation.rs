//! Coordinate validation for boundary layers.
//!
//! The scoring path never calls these helpers. Serving layers and the CLI
//! run them on decoded input so malformed coordinates are rejected before
//! they can produce meaningless scores.

use std::fmt;

use geo::Coord;
use thiserror::Error;

use crate::StopId;

/// Identifies which coordinate of a query or route failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    /// The start point of a route or search.
    Start,
    /// The end point of a route or search.
    End,
    /// A rider via-point, by index.
    ViaPoint(usize),
    /// A route stop, by identifier.
    Stop(StopId),
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
            Self::ViaPoint(index) => write!(f, "via_points[{index}]"),
            Self::Stop(id) => write!(f, "stop {id}"),
        }
    }
}

/// A coordinate that cannot be scored meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("{field} has a non-finite coordinate")]
    NonFinite {
        /// Offending field.
        field: CoordinateField,
    },
    /// Latitude was outside `-90.0..=90.0`.
    #[error("{field} latitude {latitude} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Offending field.
        field: CoordinateField,
        /// Rejected latitude.
        latitude: f64,
    },
    /// Longitude was outside `-180.0..=180.0`.
    #[error("{field} longitude {longitude} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Offending field.
        field: CoordinateField,
        /// Rejected longitude.
        longitude: f64,
    },
}

/// Check that `coord` is finite and within WGS84 bounds.
///
/// # Errors
/// Returns [`CoordinateError`] naming `field` when the coordinate is
/// non-finite or out of range.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::validation::validate_coordinate;
/// use carpool_core::{CoordinateError, CoordinateField};
///
/// assert!(validate_coordinate(CoordinateField::Start, Coord { x: 2.35, y: 48.85 }).is_ok());
/// let err = validate_coordinate(CoordinateField::End, Coord { x: 0.0, y: 91.0 }).unwrap_err();
/// assert!(matches!(err, CoordinateError::LatitudeOutOfRange { .. }));
/// ```
pub fn validate_coordinate(
    field: CoordinateField,
    coord: Coord<f64>,
) -> Result<(), CoordinateError> {
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return Err(CoordinateError::NonFinite { field });
    }
    if !(-90.0..=90.0).contains(&coord.y) {
        return Err(CoordinateError::LatitudeOutOfRange {
            field,
            latitude: coord.y,
        });
    }
    if !(-180.0..=180.0).contains(&coord.x) {
        return Err(CoordinateError::LongitudeOutOfRange {
            field,
            longitude: coord.x,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coord { x: 180.0, y: 90.0 })]
    #[case(Coord { x: -180.0, y: -90.0 })]
    #[case(Coord { x: 0.0, y: 0.0 })]
    fn accepts_boundary_values(#[case] coord: Coord<f64>) {
        assert!(validate_coordinate(CoordinateField::Start, coord).is_ok());
    }

    #[rstest]
    #[case(Coord { x: f64::NAN, y: 0.0 })]
    #[case(Coord { x: 0.0, y: f64::INFINITY })]
    fn rejects_non_finite(#[case] coord: Coord<f64>) {
        let err = validate_coordinate(CoordinateField::ViaPoint(2), coord)
            .expect_err("non-finite coordinate must be rejected");
        assert_eq!(
            err,
            CoordinateError::NonFinite {
                field: CoordinateField::ViaPoint(2)
            }
        );
    }

    #[rstest]
    fn rejects_out_of_range_longitude() {
        let err = validate_coordinate(CoordinateField::End, Coord { x: 180.5, y: 0.0 })
            .expect_err("longitude past the antimeridian must be rejected");
        assert!(matches!(
            err,
            CoordinateError::LongitudeOutOfRange {
                field: CoordinateField::End,
                ..
            }
        ));
    }

    #[rstest]
    fn field_names_render_for_messages() {
        assert_eq!(CoordinateField::ViaPoint(3).to_string(), "via_points[3]");
        assert_eq!(CoordinateField::Stop(7).to_string(), "stop 7");
    }
}
