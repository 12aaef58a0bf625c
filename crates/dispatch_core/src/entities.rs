//! Driver, rider and vehicle records held by the directories.
//!
//! The records are owned by [`crate::directory::DriverDirectory`] and
//! [`crate::directory::RiderDirectory`]; every field is private and mutation
//! goes through directory methods so the availability and active-trip
//! invariants are enforced in one place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spatial::Location;
use crate::trips::TripId;

/// Identifier of a registered driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a registered rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiderId(pub u32);

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Vehicle category, ordered by upgrade tier (lowest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleClass {
    Compact,
    Sedan,
}

impl VehicleClass {
    /// Class a rider may be bumped to when no exact match is free.
    ///
    /// Only the lowest tier is upgrade-eligible; every other class returns
    /// `None`.
    pub fn upgrade_class(self) -> Option<VehicleClass> {
        match self {
            VehicleClass::Compact => Some(VehicleClass::Sedan),
            VehicleClass::Sedan => None,
        }
    }
}

/// A vehicle: class plus registration identifier.
///
/// At most one driver holds a given registration at any time; the directory
/// rejects a second registration of the same vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    class: VehicleClass,
    registration: String,
}

impl Vehicle {
    pub fn new(class: VehicleClass, registration: impl Into<String>) -> Self {
        Self {
            class,
            registration: registration.into(),
        }
    }

    pub fn class(&self) -> VehicleClass {
        self.class
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }
}

/// A registered driver.
#[derive(Debug, Clone)]
pub struct Driver {
    id: DriverId,
    name: String,
    credential: String,
    vehicle: Vehicle,
    /// Unknown until the driver first goes on duty.
    location: Option<Location>,
    accepting_rides: bool,
    active_trip: Option<TripId>,
    trips: Vec<TripId>,
}

impl Driver {
    /// A freshly registered driver: no location yet, not accepting rides.
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        credential: impl Into<String>,
        vehicle: Vehicle,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            credential: credential.into(),
            vehicle,
            location: None,
            accepting_rides: false,
            active_trip: None,
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn accepting_rides(&self) -> bool {
        self.accepting_rides
    }

    /// The single in-flight trip, if the driver is committed to one.
    pub fn active_trip(&self) -> Option<TripId> {
        self.active_trip
    }

    /// Every trip ever assigned to this driver, oldest first.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Whether the driver can take a new trip right now.
    ///
    /// Holds iff the driver is accepting rides and has no active trip.
    pub fn is_available(&self) -> bool {
        self.accepting_rides && self.active_trip.is_none()
    }

    /// Plaintext equality check against the stored credential.
    pub fn credential_matches(&self, candidate: &str) -> bool {
        self.credential == candidate
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub(crate) fn set_accepting_rides(&mut self, accepting: bool) {
        self.accepting_rides = accepting;
    }

    pub(crate) fn set_active_trip(&mut self, trip: Option<TripId>) {
        self.active_trip = trip;
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

/// A registered rider.
#[derive(Debug, Clone)]
pub struct Rider {
    id: RiderId,
    name: String,
    credential: String,
    trips: Vec<TripId>,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            credential: credential.into(),
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every trip ever booked by this rider, oldest first.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Plaintext equality check against the stored credential.
    pub fn credential_matches(&self, candidate: &str) -> bool {
        self.credential == candidate
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::new(
            DriverId(1),
            "Aastik",
            "abcd",
            Vehicle::new(VehicleClass::Compact, "ABCD-12"),
        )
    }

    #[test]
    fn new_driver_is_not_available() {
        assert!(!driver().is_available());
    }

    #[test]
    fn availability_requires_accepting_and_no_active_trip() {
        let mut driver = driver();

        driver.set_accepting_rides(true);
        assert!(driver.is_available());

        driver.set_active_trip(Some(TripId::new()));
        assert!(!driver.is_available(), "mid-trip drivers are not available");

        driver.set_active_trip(None);
        assert!(driver.is_available());

        driver.set_accepting_rides(false);
        assert!(!driver.is_available(), "off-duty drivers are not available");
    }

    #[test]
    fn only_the_lowest_tier_upgrades() {
        assert_eq!(
            VehicleClass::Compact.upgrade_class(),
            Some(VehicleClass::Sedan)
        );
        assert_eq!(VehicleClass::Sedan.upgrade_class(), None);
    }

    #[test]
    fn classes_are_ordered_by_tier() {
        assert!(VehicleClass::Compact < VehicleClass::Sedan);
    }

    #[test]
    fn credential_check_is_exact() {
        let rider = Rider::new(RiderId(7), "Ayush", "abcd");
        assert!(rider.credential_matches("abcd"));
        assert!(!rider.credential_matches("ABCD"));
        assert!(!rider.credential_matches("abcd "));
    }
}
