//! Intermediate stops on a published route.
//!
//! A stop is contributed either by the route's creator or by a participant
//! whose application to join the route was accepted. Contributions from the
//! same source keep their relative order; order across contributors is free
//! and is what the deviation engine searches over.

use geo::Coord;

/// Identifier of a stop record.
pub type StopId = u64;

/// Identifier of a participant's accepted application to join a route.
pub type ApplicationId = u64;

/// Moderation state of a stop.
///
/// Only [`StopStatus::Approved`] stops take part in deviation scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum StopStatus {
    /// Suggested by a participant and awaiting the creator's decision.
    Pending,
    /// Accepted onto the route.
    #[default]
    Approved,
    /// Declined by the creator.
    Rejected,
}

/// Who contributed a stop.
///
/// Used as the grouping key when partitioning a route's stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContributorKey {
    /// The route's creator.
    Creator,
    /// A participant, identified by their accepted application.
    Application(ApplicationId),
}

/// Optional place metadata carried alongside a stop's coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Provider place identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub place_id: Option<String>,
    /// Human-readable address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatted_address: Option<String>,
}

/// A stop on a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{ContributorKey, Stop, StopStatus};
///
/// let creator_stop = Stop::new(1, Coord { x: 1.0, y: 1.0 });
/// assert_eq!(creator_stop.contributor(), ContributorKey::Creator);
///
/// let suggested = Stop::new(2, Coord { x: 2.0, y: 2.0 })
///     .with_application(7)
///     .with_status(StopStatus::Pending);
/// assert_eq!(suggested.contributor(), ContributorKey::Application(7));
/// assert!(!suggested.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Stop identifier.
    pub id: StopId,
    /// Application that contributed the stop; `None` for the creator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub application_id: Option<ApplicationId>,
    /// Display position. Not a semantic ordering across contributors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: u32,
    /// Stop location.
    #[cfg_attr(feature = "serde", serde(with = "crate::latlng"))]
    pub location: Coord<f64>,
    /// Place metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub place: Place,
    /// Moderation state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: StopStatus,
}

impl Stop {
    /// Construct an approved creator stop at `location`.
    #[must_use]
    pub fn new(id: StopId, location: Coord<f64>) -> Self {
        Self {
            id,
            application_id: None,
            position: 0,
            location,
            place: Place::default(),
            status: StopStatus::Approved,
        }
    }

    /// Attribute the stop to a participant's application.
    #[must_use]
    pub fn with_application(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Set the display position.
    #[must_use]
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Set the moderation state.
    #[must_use]
    pub fn with_status(mut self, status: StopStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach place metadata.
    #[must_use]
    pub fn with_place(mut self, place: Place) -> Self {
        self.place = place;
        self
    }

    /// Grouping key for this stop.
    #[must_use]
    pub fn contributor(&self) -> ContributorKey {
        self.application_id
            .map_or(ContributorKey::Creator, ContributorKey::Application)
    }

    /// Whether the stop takes part in scoring.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == StopStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, ContributorKey::Creator)]
    #[case(Some(4), ContributorKey::Application(4))]
    fn contributor_follows_application(
        #[case] application: Option<ApplicationId>,
        #[case] expected: ContributorKey,
    ) {
        let mut stop = Stop::new(1, Coord { x: 0.0, y: 0.0 });
        stop.application_id = application;
        assert_eq!(stop.contributor(), expected);
    }

    #[rstest]
    #[case(StopStatus::Approved, true)]
    #[case(StopStatus::Pending, false)]
    #[case(StopStatus::Rejected, false)]
    fn only_approved_stops_score(#[case] status: StopStatus, #[case] expected: bool) {
        let stop = Stop::new(1, Coord { x: 0.0, y: 0.0 }).with_status(status);
        assert_eq!(stop.is_approved(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_minimal_stop_json() {
        let stop: Stop = serde_json::from_str(r#"{"id": 3, "location": {"lat": 51.5, "lng": -0.1}}"#)
            .expect("minimal stop should decode");
        assert_eq!(stop.location, Coord { x: -0.1, y: 51.5 });
        assert_eq!(stop.status, StopStatus::Approved);
        assert_eq!(stop.contributor(), ContributorKey::Creator);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn status_uses_lowercase_names() {
        let json = serde_json::to_string(&StopStatus::Pending).expect("encode status");
        assert_eq!(json, r#""pending""#);
    }
}
