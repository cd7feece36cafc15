//! Route deviation scoring and search for the carpool engine.
//!
//! A route's approved stops are grouped by contributor
//! ([`group_by_contributor`]), merged in every order that keeps each
//! contributor's own order ([`enumerate_interleavings`]), and each merge is
//! scored by how far the rider's via-points lie from the midpoints of its
//! legs ([`score_ordering`]). [`DeviationEngine`] adds the endpoint distance
//! and keeps the best merge; [`RouteSearch`] ranks candidate routes with it.
//!
//! Enumeration is capped at [`DEFAULT_MAX_INTERLEAVINGS`] orderings per route
//! unless configured otherwise. The cap is an early exit in a fixed
//! group-priority order, not a sample, so a heavily shared route may miss its
//! best ordering. [`DeviationReport::truncated`] says when that happened.
//!
//! Enable the `parallel` feature to score candidates on the rayon pool.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod grouping;
mod interleave;
mod ordering;
mod search;
mod segments;

pub use engine::{DeviationEngine, DeviationEngineConfig, DeviationReport};
pub use grouping::group_by_contributor;
pub use interleave::{DEFAULT_MAX_INTERLEAVINGS, enumerate_interleavings, interleaving_count};
pub use ordering::score_ordering;
pub use search::{RankedRoute, RouteSearch};
pub use segments::build_segments;
