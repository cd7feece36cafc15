//! Great-circle geometry on WGS84 coordinates.
//!
//! Distances are returned in kilometres. All functions are pure and total:
//! finite input always yields a finite result, and non-finite input yields a
//! non-finite result rather than a panic.

use geo::{Coord, Distance, HaversineMeasure, Point};

const METRES_PER_KM: f64 = 1_000.0;

/// Earth radius used for every deviation score, in metres.
const EARTH: HaversineMeasure = HaversineMeasure::new(6_371_000.0);

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the Haversine formula over a spherical Earth of radius 6371 km.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::distance_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let km = distance_km(london, paris);
/// assert!((km - 344.0).abs() < 10.0);
/// assert_eq!(distance_km(london, london), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from metres to kilometres"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    EARTH.distance(Point::from(a), Point::from(b)) / METRES_PER_KM
}

/// Arithmetic midpoint of two coordinates.
///
/// Latitude and longitude are averaged independently. This is the anchor
/// used to represent a route leg; it is not the great-circle midpoint and
/// does not handle legs crossing the antimeridian.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::midpoint;
///
/// let mid = midpoint(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 4.0 });
/// assert_eq!(mid, Coord { x: 1.0, y: 2.0 });
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "midpoint averages the two coordinates"
)]
pub fn midpoint(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}
