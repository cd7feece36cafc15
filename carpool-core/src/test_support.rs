//! Test-only helpers: an in-memory `RouteStore`, a lookup-table scorer and
//! small constructors for coordinates and stops.

use std::collections::HashMap;

use geo::Coord;

use crate::{ApplicationId, Route, RouteId, RouteScorer, RouteStore, SearchInput, Stop, StopId};

/// Build a coordinate from latitude and longitude, in that order.
#[must_use]
pub const fn lat_lng(lat: f64, lng: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

/// Approved creator stop at `(lat, lng)`.
#[must_use]
pub fn creator_stop(id: StopId, lat: f64, lng: f64) -> Stop {
    Stop::new(id, lat_lng(lat, lng))
}

/// Approved stop contributed by `application` at `(lat, lng)`.
#[must_use]
pub fn participant_stop(id: StopId, application: ApplicationId, lat: f64, lng: f64) -> Stop {
    Stop::new(id, lat_lng(lat, lng)).with_application(application)
}

/// In-memory `RouteStore` implementation used in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryRouteStore {
    routes: Vec<Route>,
}

impl MemoryRouteStore {
    /// Create a store from a collection of routes.
    pub fn with_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        Self {
            routes: routes.into_iter().collect(),
        }
    }
}

impl RouteStore for MemoryRouteStore {
    fn searchable_routes(&self) -> Box<dyn Iterator<Item = Route> + Send + '_> {
        Box::new(self.routes.iter().cloned())
    }
}

/// `RouteScorer` returning a preset score per route id.
///
/// Routes without an entry score `fallback`.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<RouteId, f64>,
    fallback: f64,
}

impl FixedScorer {
    /// Create a scorer from `(route id, score)` pairs.
    pub fn new<I>(scores: I, fallback: f64) -> Self
    where
        I: IntoIterator<Item = (RouteId, f64)>,
    {
        Self {
            scores: scores.into_iter().collect(),
            fallback,
        }
    }
}

impl RouteScorer for FixedScorer {
    fn score(&self, route: &Route, _search: &SearchInput) -> f64 {
        self.scores.get(&route.id).copied().unwrap_or(self.fallback)
    }
}
