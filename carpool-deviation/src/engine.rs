//! Route deviation engine.
//!
//! Combines how far the rider's endpoints are from the route's endpoints
//! with the best stop deviation found across the enumerated stop orderings.

use std::num::NonZeroUsize;

use carpool_core::{Route, RouteScorer, SearchInput, Stop, StopId, distance_km};

use crate::{
    DEFAULT_MAX_INTERLEAVINGS, enumerate_interleavings, group_by_contributor, interleaving_count,
    score_ordering,
};

/// Configuration for [`DeviationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DeviationEngineConfig {
    /// Upper bound on stop orderings scored per route.
    pub max_interleavings: NonZeroUsize,
}

impl Default for DeviationEngineConfig {
    fn default() -> Self {
        Self {
            max_interleavings: DEFAULT_MAX_INTERLEAVINGS,
        }
    }
}

/// Breakdown of a route's deviation score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviationReport {
    /// `endpoint_km + stop_km`; the value used for ranking.
    pub total_km: f64,
    /// Distance between the rider's and the route's start plus the same for
    /// the ends.
    pub endpoint_km: f64,
    /// Best summed via-point distance over the scored orderings.
    pub stop_km: f64,
    /// Number of stop orderings scored.
    pub orderings_evaluated: usize,
    /// Whether the ordering cap cut enumeration short.
    pub truncated: bool,
    /// Stop ids of the first best-scoring ordering. Empty when the route has
    /// no approved stops.
    pub best_ordering: Vec<StopId>,
}

/// Scores routes against rider searches.
///
/// Only approved stops take part. Stops are grouped by contributor and every
/// order-preserving merge of the groups, up to
/// [`DeviationEngineConfig::max_interleavings`], is scored; the lowest stop
/// deviation wins.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{Route, SearchInput};
/// use carpool_deviation::DeviationEngine;
///
/// let route = Route::new(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }, 10.0);
/// let search = SearchInput::new(route.start, route.end);
/// assert_eq!(DeviationEngine::new().score(&route, &search), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviationEngine {
    config: DeviationEngineConfig,
}

impl DeviationEngine {
    /// Construct an engine using the default ordering cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DeviationEngineConfig::default())
    }

    /// Construct an engine with explicit configuration.
    #[must_use]
    pub const fn with_config(config: DeviationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DeviationEngineConfig {
        &self.config
    }

    /// Deviation of `route` from `search`, in kilometres.
    #[must_use]
    pub fn score(&self, route: &Route, search: &SearchInput) -> f64 {
        self.evaluate(route, search).total_km
    }

    /// Score `route` and report how the score was reached.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "summing distance components")]
    pub fn evaluate(&self, route: &Route, search: &SearchInput) -> DeviationReport {
        let endpoint_km = distance_km(search.start, route.start) + distance_km(search.end, route.end);

        let groups = group_by_contributor(route.approved_stops());
        let cap = self.config.max_interleavings;
        let orderings = enumerate_interleavings(&groups, cap);

        let truncated = groups.len() > 1 && {
            let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
            interleaving_count(&sizes).is_none_or(|count| {
                u128::try_from(orderings.len()).is_ok_and(|seen| count > seen)
            })
        };
        if truncated {
            log::debug!(
                "route {}: stop orderings capped at {cap} across {} contributors",
                route.id,
                groups.len()
            );
        }

        let (stop_km, best) = best_ordering(route, search, &orderings);
        DeviationReport {
            total_km: endpoint_km + stop_km,
            endpoint_km,
            stop_km,
            orderings_evaluated: orderings.len(),
            truncated,
            best_ordering: best
                .map(|ordering| ordering.iter().map(|stop| stop.id).collect())
                .unwrap_or_default(),
        }
    }
}

/// Lowest stop deviation and the first ordering reaching it.
///
/// With no orderings the route is scored on its endpoints alone.
fn best_ordering<'o, 'a>(
    route: &Route,
    search: &SearchInput,
    orderings: &'o [Vec<&'a Stop>],
) -> (f64, Option<&'o [&'a Stop]>) {
    if orderings.is_empty() {
        return (
            score_ordering(route.start, route.end, &[], &search.via_points),
            None,
        );
    }
    let mut best: Option<(f64, &'o [&'a Stop])> = None;
    for ordering in orderings {
        let score = score_ordering(route.start, route.end, ordering, &search.via_points);
        if best.is_none_or(|(lowest, _)| score < lowest) {
            best = Some((score, ordering.as_slice()));
        }
    }
    best.map_or((f64::INFINITY, None), |(score, ordering)| {
        (score, Some(ordering))
    })
}

impl RouteScorer for DeviationEngine {
    fn score(&self, route: &Route, search: &SearchInput) -> f64 {
        self.evaluate(route, search).total_km
    }
}
