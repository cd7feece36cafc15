//! Score how well a route matches a rider's search.
//!
//! The `RouteScorer` trait assigns a deviation in kilometres to a
//! [`Route`](crate::Route) given a [`SearchInput`](crate::SearchInput).
//! Lower is better; zero is a perfect match.

use crate::{Route, SearchInput};

/// Calculate a deviation score for a route.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so candidate routes
/// can be scored across threads. The method is infallible: it never rejects
/// input, and validation is the caller's concern.
///
/// Implementations must:
/// - Return non-negative values for finite input.
/// - Be deterministic: equal inputs give equal scores.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use carpool_core::{distance_km, Route, RouteScorer, SearchInput};
///
/// struct StartOnly;
///
/// impl RouteScorer for StartOnly {
///     fn score(&self, route: &Route, search: &SearchInput) -> f64 {
///         distance_km(route.start, search.start)
///     }
/// }
///
/// let route = Route::new(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }, 5.0);
/// let search = SearchInput::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 });
/// assert_eq!(StartOnly.score(&route, &search), 0.0);
/// ```
pub trait RouteScorer: Send + Sync {
    /// Return the deviation of `route` from `search` in kilometres.
    fn score(&self, route: &Route, search: &SearchInput) -> f64;
}
