//! Deviation of a single stop ordering.

use carpool_core::{Stop, distance_km};
use geo::Coord;

use crate::build_segments;

/// Total distance, in kilometres, the via-points lie from `ordering`.
///
/// The route `start -> ordering... -> end` is reduced to one anchor per leg
/// (see [`build_segments`]). Each via-point contributes its distance to the
/// nearest anchor and the contributions are summed. No via-points means no
/// deviation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_deviation::score_ordering;
///
/// let start = Coord { x: 0.0, y: 0.0 };
/// let end = Coord { x: 2.0, y: 2.0 };
/// let on_anchor = score_ordering(start, end, &[], &[Coord { x: 1.0, y: 1.0 }]);
/// assert!(on_anchor < 1e-9);
/// assert_eq!(score_ordering(start, end, &[], &[]), 0.0);
/// ```
#[must_use]
pub fn score_ordering(
    start: Coord<f64>,
    end: Coord<f64>,
    ordering: &[&Stop],
    via_points: &[Coord<f64>],
) -> f64 {
    if via_points.is_empty() {
        return 0.0;
    }
    let anchors = build_segments(start, end, ordering.iter().copied());
    via_points
        .iter()
        .map(|&point| nearest_anchor_km(point, &anchors))
        .sum()
}

fn nearest_anchor_km(point: Coord<f64>, anchors: &[Coord<f64>]) -> f64 {
    anchors
        .iter()
        .map(|&anchor| distance_km(point, anchor))
        .fold(f64::INFINITY, f64::min)
}
