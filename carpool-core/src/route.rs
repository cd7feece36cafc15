//! Driver-published routes.
//!
//! A route runs from a start to an end coordinate through an ordered list of
//! stops, has a passenger capacity, and carries the deviation budget beyond
//! which it is not offered to riders.

use chrono::{DateTime, Utc};
use geo::Coord;
use thiserror::Error;

use crate::validation::validate_coordinate;
use crate::{CoordinateError, CoordinateField, Place, Stop};

/// Identifier of a route.
pub type RouteId = u64;

/// Identifier of a user.
pub type UserId = u64;

/// A route offered by a driver.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{Route, Stop};
///
/// let route = Route::new(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 3.0 }, 25.0)
///     .with_capacity(3, 2)
///     .with_stops(vec![Stop::new(10, Coord { x: 1.0, y: 1.0 })]);
///
/// assert!(route.has_capacity());
/// assert_eq!(route.approved_stops().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Route identifier.
    pub id: RouteId,
    /// User who published the route.
    #[cfg_attr(feature = "serde", serde(default))]
    pub creator_id: UserId,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Departure point.
    #[cfg_attr(feature = "serde", serde(with = "crate::latlng"))]
    pub start: Coord<f64>,
    /// Place metadata for the departure point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_place: Place,
    /// Destination.
    #[cfg_attr(feature = "serde", serde(with = "crate::latlng"))]
    pub end: Coord<f64>,
    /// Place metadata for the destination.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_place: Place,
    /// Planned departure time, when the driver has set one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub leaving_at: Option<DateTime<Utc>>,
    /// Stops in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stops: Vec<Stop>,
    /// Seats offered in total.
    pub max_passengers: u32,
    /// Seats still free, derived from the participant count.
    pub available_seats: u32,
    /// Largest deviation, in kilometres, for which the route is offered.
    pub max_deviation_km: f64,
}

/// Errors returned by [`Route::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteValidationError {
    /// The start, end or a stop coordinate was invalid.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    /// The deviation budget was negative or non-finite.
    #[error("max deviation {value} km must be finite and non-negative")]
    InvalidMaxDeviation {
        /// Rejected budget.
        value: f64,
    },
    /// More seats were free than the route offers.
    #[error("{available} available seats exceed capacity of {max}")]
    SeatsExceedCapacity {
        /// Reported free seats.
        available: u32,
        /// Route capacity.
        max: u32,
    },
}

impl Route {
    /// Construct a route with a single free seat and no stops.
    #[must_use]
    pub fn new(id: RouteId, start: Coord<f64>, end: Coord<f64>, max_deviation_km: f64) -> Self {
        Self {
            id,
            creator_id: 0,
            description: None,
            start,
            start_place: Place::default(),
            end,
            end_place: Place::default(),
            leaving_at: None,
            stops: Vec::new(),
            max_passengers: 1,
            available_seats: 1,
            max_deviation_km,
        }
    }

    /// Set the publishing user.
    #[must_use]
    pub fn with_creator(mut self, creator_id: UserId) -> Self {
        self.creator_id = creator_id;
        self
    }

    /// Replace the stop list.
    #[must_use]
    pub fn with_stops(mut self, stops: Vec<Stop>) -> Self {
        self.stops = stops;
        self
    }

    /// Set total and free seat counts.
    #[must_use]
    pub fn with_capacity(mut self, max_passengers: u32, available_seats: u32) -> Self {
        self.max_passengers = max_passengers;
        self.available_seats = available_seats;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach place metadata to the start and end points.
    #[must_use]
    pub fn with_places(mut self, start_place: Place, end_place: Place) -> Self {
        self.start_place = start_place;
        self.end_place = end_place;
        self
    }

    /// Set the planned departure time.
    #[must_use]
    pub fn with_leaving_at(mut self, leaving_at: DateTime<Utc>) -> Self {
        self.leaving_at = Some(leaving_at);
        self
    }

    /// Stops that take part in scoring, in display order.
    pub fn approved_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops.iter().filter(|stop| stop.is_approved())
    }

    /// Whether at least one seat is free.
    #[must_use]
    pub const fn has_capacity(&self) -> bool {
        self.available_seats > 0
    }

    /// Check coordinates, the deviation budget and seat counts.
    ///
    /// # Errors
    /// Returns the first [`RouteValidationError`] encountered.
    pub fn validate(&self) -> Result<(), RouteValidationError> {
        validate_coordinate(CoordinateField::Start, self.start)?;
        validate_coordinate(CoordinateField::End, self.end)?;
        for stop in &self.stops {
            validate_coordinate(CoordinateField::Stop(stop.id), stop.location)?;
        }
        if !self.max_deviation_km.is_finite() || self.max_deviation_km < 0.0 {
            return Err(RouteValidationError::InvalidMaxDeviation {
                value: self.max_deviation_km,
            });
        }
        if self.available_seats > self.max_passengers {
            return Err(RouteValidationError::SeatsExceedCapacity {
                available: self.available_seats,
                max: self.max_passengers,
            });
        }
        Ok(())
    }
}
