//! Facade crate for the carpool route-matching engine.
//!
//! This crate re-exports the core domain types and the deviation engine so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use carpool_core::{
    ApplicationId, ContributorKey, CoordinateError, CoordinateField, Place, Route, RouteId,
    RouteScorer, RouteStore, RouteValidationError, SearchInput, SearchInputValidationError, Stop,
    StopId, StopStatus, UserId, distance_km, midpoint,
};

pub use carpool_deviation::{
    DEFAULT_MAX_INTERLEAVINGS, DeviationEngine, DeviationEngineConfig, DeviationReport,
    RankedRoute, RouteSearch,
};

#[cfg(feature = "test-support")]
pub use carpool_core::test_support;
