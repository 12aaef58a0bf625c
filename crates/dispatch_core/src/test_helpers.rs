//! Test helpers for common fixture setup.
//!
//! Shared across unit tests, integration tests and benches so fixture wiring
//! lives in one place.

use crate::entities::{Driver, DriverId, Rider, RiderId, Vehicle, VehicleClass};
use crate::spatial::Location;

/// The standard pickup point used across test files.
pub fn test_location() -> Location {
    Location::new(2, 3)
}

/// A dropoff a short hop from [`test_location`].
pub fn test_nearby_location() -> Location {
    Location::new(4, 5)
}

/// A dropoff far beyond any allowed trip span.
pub fn test_distant_location() -> Location {
    Location::new(1_000_000, 1_000_000)
}

/// Vehicle fixture.
pub fn test_vehicle(class: VehicleClass, registration: &str) -> Vehicle {
    Vehicle::new(class, registration)
}

/// Driver fixture with the shared test credential; not yet on duty.
pub fn test_driver(id: u32, class: VehicleClass, registration: &str) -> Driver {
    Driver::new(
        DriverId(id),
        format!("driver-{id}"),
        "abcd",
        test_vehicle(class, registration),
    )
}

/// Rider fixture with the shared test credential.
pub fn test_rider(id: u32) -> Rider {
    Rider::new(RiderId(id), format!("rider-{id}"), "abcd")
}
