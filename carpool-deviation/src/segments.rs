//! Representative anchor points for route legs.
//!
//! Each leg of a route is reduced to the midpoint of its two ends. Distances
//! to a leg are then measured to that single anchor rather than projected
//! onto the leg itself, which is coarse for long legs but cheap.

use carpool_core::{Stop, midpoint};
use geo::Coord;

/// Build one anchor per leg of `start -> stops... -> end`.
///
/// With no stops the result is the single midpoint of `start` and `end`;
/// otherwise it has `stops.len() + 1` entries.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::Stop;
/// use carpool_deviation::build_segments;
///
/// let stops = [Stop::new(1, Coord { x: 1.0, y: 1.0 })];
/// let anchors = build_segments(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 }, &stops);
/// assert_eq!(anchors, vec![Coord { x: 0.5, y: 0.5 }, Coord { x: 1.5, y: 1.5 }]);
/// ```
#[must_use]
pub fn build_segments<'a, I>(start: Coord<f64>, end: Coord<f64>, ordered_stops: I) -> Vec<Coord<f64>>
where
    I: IntoIterator<Item = &'a Stop>,
{
    let stops = ordered_stops.into_iter();
    let mut anchors = Vec::with_capacity(stops.size_hint().0 + 1);
    let mut previous = start;
    for stop in stops {
        anchors.push(midpoint(previous, stop.location));
        previous = stop.location;
    }
    anchors.push(midpoint(previous, end));
    anchors
}
