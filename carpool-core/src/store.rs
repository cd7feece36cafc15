//! Data access traits for published routes.
//!
//! The `RouteStore` trait is the read-only boundary to whatever persists
//! routes. The engine never writes through it.

use crate::Route;

/// Read-only access to routes that riders may search.
///
/// Implementers should return only live routes, with stop lists already
/// restricted to approved stops in display order. Routes without free seats
/// may be returned; the search layer skips them.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use carpool_core::{Route, RouteStore};
///
/// struct VecStore {
///     routes: Vec<Route>,
/// }
///
/// impl RouteStore for VecStore {
///     fn searchable_routes(&self) -> Box<dyn Iterator<Item = Route> + Send + '_> {
///         Box::new(self.routes.iter().cloned())
///     }
/// }
///
/// let route = Route::new(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }, 5.0);
/// let store = VecStore { routes: vec![route.clone()] };
/// let found: Vec<_> = store.searchable_routes().collect();
/// assert_eq!(found, vec![route]);
/// ```
pub trait RouteStore {
    /// Return every route eligible for search.
    fn searchable_routes(&self) -> Box<dyn Iterator<Item = Route> + Send + '_>;
}

#[cfg(test)]
mod tests {
    use super::RouteStore;
    use crate::test_support::{MemoryRouteStore, lat_lng};
    use crate::Route;
    use rstest::rstest;

    #[rstest]
    fn returns_stored_routes_in_insertion_order() {
        let first = Route::new(1, lat_lng(0.0, 0.0), lat_lng(1.0, 1.0), 5.0);
        let second = Route::new(2, lat_lng(0.0, 0.0), lat_lng(2.0, 2.0), 5.0);
        let store = MemoryRouteStore::with_routes([first.clone(), second.clone()]);
        let found: Vec<_> = store.searchable_routes().collect();
        assert_eq!(found, vec![first, second]);
    }

    #[rstest]
    fn empty_store_yields_nothing() {
        let store = MemoryRouteStore::default();
        assert_eq!(store.searchable_routes().count(), 0);
    }
}
