//! Core domain types for the carpool deviation engine.
//!
//! Routes published by drivers, the stops contributed to them, and the search
//! queries riders submit all live here, together with the great-circle
//! geometry shared by every scoring component. Coordinates use
//! [`geo::Coord`] with `x = longitude` and `y = latitude` (WGS84 degrees).
//!
//! Nothing in this crate rejects input on the scoring path. Boundary layers
//! call [`SearchInput::validate`] and [`Route::validate`] before handing
//! values to a [`RouteScorer`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
#[cfg(feature = "serde")]
mod latlng;
pub mod route;
pub mod scorer;
pub mod search;
pub mod stop;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validation;

pub use geodesy::{distance_km, midpoint};
pub use route::{Route, RouteId, RouteValidationError, UserId};
pub use scorer::RouteScorer;
pub use search::{SearchInput, SearchInputValidationError};
pub use stop::{ApplicationId, ContributorKey, Place, Stop, StopId, StopStatus};
pub use store::RouteStore;
pub use validation::{CoordinateError, CoordinateField};
