//! Trip records and the booking lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{DriverId, RiderId, VehicleClass};
use crate::error::{DispatchError, DispatchResult};
use crate::spatial::Location;

/// Globally-unique trip identifier, generated at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(Uuid);

impl TripId {
    /// Mint a fresh identifier. Only the coordinator creates trips.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Booking lifecycle status.
///
/// Transitions run `Booked → InProgress → Completed` with an early exit
/// `Booked → Withdrawn`. `Completed` and `Withdrawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Booked,
    InProgress,
    Completed,
    Withdrawn,
}

impl TripStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Withdrawn)
    }
}

/// A trip as held in the coordinator's registry.
///
/// Rider, driver and the allotted vehicle class are fixed at creation.
/// Origin, destination and fare may still change while the trip is live;
/// a trip is never destroyed, only transitioned into a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    id: TripId,
    rider: RiderId,
    driver: DriverId,
    origin: Location,
    destination: Location,
    fare: f64,
    /// Class actually allotted, which may sit one tier above the request.
    vehicle_class: VehicleClass,
    status: TripStatus,
}

impl Trip {
    pub(crate) fn new(
        rider: RiderId,
        driver: DriverId,
        origin: Location,
        destination: Location,
        fare: f64,
        vehicle_class: VehicleClass,
    ) -> Self {
        Self {
            id: TripId::new(),
            rider,
            driver,
            origin,
            destination,
            fare,
            vehicle_class,
            status: TripStatus::Booked,
        }
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn rider(&self) -> RiderId {
        self.rider
    }

    pub fn driver(&self) -> DriverId {
        self.driver
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn destination(&self) -> Location {
        self.destination
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// The class the rider actually travels in.
    pub fn vehicle_class(&self) -> VehicleClass {
        self.vehicle_class
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    fn invalid_state(&self) -> DispatchError {
        DispatchError::InvalidTripState {
            trip: self.id,
            status: self.status,
        }
    }

    /// Replace route and fare. Allowed while `Booked` or `InProgress`;
    /// the status itself does not change.
    pub(crate) fn update_route(
        &mut self,
        origin: Location,
        destination: Location,
        fare: f64,
    ) -> DispatchResult<()> {
        if self.status.is_terminal() {
            return Err(self.invalid_state());
        }
        self.origin = origin;
        self.destination = destination;
        self.fare = fare;
        Ok(())
    }

    /// `Booked → InProgress`.
    pub(crate) fn start(&mut self) -> DispatchResult<()> {
        if self.status != TripStatus::Booked {
            return Err(self.invalid_state());
        }
        self.status = TripStatus::InProgress;
        Ok(())
    }

    /// `InProgress → Completed`.
    pub(crate) fn complete(&mut self) -> DispatchResult<()> {
        if self.status != TripStatus::InProgress {
            return Err(self.invalid_state());
        }
        self.status = TripStatus::Completed;
        Ok(())
    }

    /// `Booked → Withdrawn`.
    pub(crate) fn withdraw(&mut self) -> DispatchResult<()> {
        if self.status != TripStatus::Booked {
            return Err(self.invalid_state());
        }
        self.status = TripStatus::Withdrawn;
        Ok(())
    }
}
