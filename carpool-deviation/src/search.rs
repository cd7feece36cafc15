//! Rank candidate routes for a rider's search.

use carpool_core::{Route, RouteScorer, RouteStore, SearchInput};

use crate::{DeviationEngine, DeviationEngineConfig};

/// A route that passed search, with its deviation score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedRoute {
    /// The matching route.
    pub route: Route,
    /// Deviation in kilometres; lower ranks first.
    pub deviation_km: f64,
}

/// Scores and ranks candidate routes.
///
/// Candidates without a free seat are skipped. Every other candidate is
/// scored, those scoring above their own `max_deviation_km` are dropped, and
/// the rest are returned in ascending score order. Equal scores keep their
/// input order.
///
/// With the `parallel` feature, scoring runs on the rayon thread pool; the
/// output does not change.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{Route, SearchInput};
/// use carpool_deviation::RouteSearch;
///
/// let close = Route::new(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }, 50.0);
/// let far = Route::new(2, Coord { x: 5.0, y: 5.0 }, Coord { x: 6.0, y: 6.0 }, 50.0);
/// let search = SearchInput::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
///
/// let ranked = RouteSearch::default().search([far, close], &search);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].route.id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSearch<S = DeviationEngine> {
    scorer: S,
}

impl Default for RouteSearch<DeviationEngine> {
    fn default() -> Self {
        Self::new(DeviationEngine::new())
    }
}

impl RouteSearch<DeviationEngine> {
    /// Search with a deviation engine built from `config`.
    #[must_use]
    pub const fn with_engine_config(config: DeviationEngineConfig) -> Self {
        Self::new(DeviationEngine::with_config(config))
    }
}

impl<S: RouteScorer> RouteSearch<S> {
    /// Search using `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `candidates` against `search`.
    #[must_use]
    pub fn search<I>(&self, candidates: I, search: &SearchInput) -> Vec<RankedRoute>
    where
        I: IntoIterator<Item = Route>,
    {
        let open: Vec<Route> = candidates
            .into_iter()
            .filter(|route| {
                if !route.has_capacity() {
                    log::debug!("route {} skipped: no free seats", route.id);
                }
                route.has_capacity()
            })
            .collect();

        let mut ranked: Vec<RankedRoute> = self
            .score_all(open, search)
            .into_iter()
            .filter_map(|(route, deviation_km)| accept(route, deviation_km))
            .collect();
        ranked.sort_by(|a, b| a.deviation_km.total_cmp(&b.deviation_km));
        ranked
    }

    /// Rank `candidates` and return only the routes.
    #[must_use]
    pub fn routes<I>(&self, candidates: I, search: &SearchInput) -> Vec<Route>
    where
        I: IntoIterator<Item = Route>,
    {
        self.search(candidates, search)
            .into_iter()
            .map(|ranked| ranked.route)
            .collect()
    }

    /// Rank every searchable route held by `store`.
    #[must_use]
    pub fn search_store<R>(&self, store: &R, search: &SearchInput) -> Vec<RankedRoute>
    where
        R: RouteStore + ?Sized,
    {
        self.search(store.searchable_routes(), search)
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, routes: Vec<Route>, search: &SearchInput) -> Vec<(Route, f64)> {
        routes
            .into_iter()
            .map(|route| {
                let score = self.scorer.score(&route, search);
                (route, score)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, routes: Vec<Route>, search: &SearchInput) -> Vec<(Route, f64)> {
        use rayon::prelude::*;

        routes
            .into_par_iter()
            .map(|route| {
                let score = self.scorer.score(&route, search);
                (route, score)
            })
            .collect()
    }
}

fn accept(route: Route, deviation_km: f64) -> Option<RankedRoute> {
    if !deviation_km.is_finite() {
        log::warn!(
            "route {} discarded: deviation {deviation_km} is not finite",
            route.id
        );
        return None;
    }
    (deviation_km <= route.max_deviation_km).then_some(RankedRoute {
        route,
        deviation_km,
    })
}
