#![allow(dead_code)]

use dispatch_core::coordinator::TripCoordinator;
use dispatch_core::directory::{DriverDirectory, RiderDirectory};
use dispatch_core::entities::{Driver, Rider, VehicleClass};
use dispatch_core::params::CoordinatorParams;
use dispatch_core::spatial::Location;
use dispatch_core::test_helpers::{test_driver, test_location, test_rider};

/// Builder that assembles a coordinator over pre-registered fixtures.
#[derive(Debug, Default)]
pub struct CoordinatorBuilder {
    drivers: Vec<(Driver, Option<Location>)>,
    riders: Vec<Rider>,
    params: Option<CoordinatorParams>,
}

impl CoordinatorBuilder {
    /// Create a fresh builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a driver already on duty at `location`.
    pub fn with_driver_at(mut self, driver: Driver, location: Location) -> Self {
        self.drivers.push((driver, Some(location)));
        self
    }

    /// Add a registered driver who has not gone on duty yet.
    pub fn with_off_duty_driver(mut self, driver: Driver) -> Self {
        self.drivers.push((driver, None));
        self
    }

    /// Add a registered rider.
    pub fn with_rider(mut self, rider: Rider) -> Self {
        self.riders.push(rider);
        self
    }

    /// Override the coordinator parameters.
    pub fn with_params(mut self, params: CoordinatorParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> TripCoordinator {
        let mut drivers = DriverDirectory::new();
        for (driver, location) in self.drivers {
            let id = driver.id();
            drivers.register(driver).expect("register driver fixture");
            if let Some(location) = location {
                drivers
                    .make_available(id, location)
                    .expect("make driver fixture available");
            }
        }

        let mut riders = RiderDirectory::new();
        for rider in self.riders {
            riders.register(rider).expect("register rider fixture");
        }

        match self.params {
            Some(params) => TripCoordinator::with_params(riders, drivers, params),
            None => TripCoordinator::new(riders, drivers),
        }
    }
}

/// The canonical booking scenario: a compact and a sedan driver on duty at
/// the standard pickup point, three registered riders.
pub fn booking_scenario() -> TripCoordinator {
    CoordinatorBuilder::new()
        .with_driver_at(
            test_driver(1, VehicleClass::Compact, "ABCD-12"),
            test_location(),
        )
        .with_driver_at(
            test_driver(2, VehicleClass::Sedan, "ABCD-34"),
            test_location(),
        )
        .with_rider(test_rider(11))
        .with_rider(test_rider(12))
        .with_rider(test_rider(13))
        .build()
}
