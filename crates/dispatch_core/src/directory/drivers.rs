//! Registry of drivers and their vehicles.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::entities::{Driver, DriverId};
use crate::error::{DispatchError, DispatchResult};
use crate::spatial::{DistancePolicy, Location};
use crate::trips::TripId;

/// Owns every registered driver and enforces driver and vehicle uniqueness.
///
/// Drivers are keyed by id in ascending order, so listings come back in a
/// stable order. All mutation of driver records goes through this type.
#[derive(Debug, Default)]
pub struct DriverDirectory {
    drivers: BTreeMap<DriverId, Driver>,
    /// Vehicle registration id → owning driver.
    vehicles: HashMap<String, DriverId>,
}

impl DriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new driver together with their vehicle.
    ///
    /// Stores both or neither: a duplicate driver id or an already-owned
    /// vehicle leaves the directory untouched.
    pub fn register(&mut self, driver: Driver) -> DispatchResult<()> {
        if self.drivers.contains_key(&driver.id()) {
            return Err(DispatchError::DuplicateDriver { id: driver.id() });
        }
        let registration = driver.vehicle().registration().to_owned();
        if self.vehicles.contains_key(&registration) {
            return Err(DispatchError::DuplicateVehicle { registration });
        }

        debug!(driver = %driver.id(), vehicle = %registration, "driver registered");
        self.vehicles.insert(registration, driver.id());
        self.drivers.insert(driver.id(), driver);
        Ok(())
    }

    /// Look up a driver by id.
    pub fn get(&self, id: DriverId) -> DispatchResult<&Driver> {
        self.drivers
            .get(&id)
            .ok_or(DispatchError::DriverNotFound { id })
    }

    fn get_mut(&mut self, id: DriverId) -> DispatchResult<&mut Driver> {
        self.drivers
            .get_mut(&id)
            .ok_or(DispatchError::DriverNotFound { id })
    }

    /// Flip whether the driver is accepting new rides.
    pub fn set_availability(&mut self, id: DriverId, accepting: bool) -> DispatchResult<()> {
        self.get_mut(id)?.set_accepting_rides(accepting);
        Ok(())
    }

    /// Overwrite the driver's current location.
    pub fn set_location(&mut self, id: DriverId, location: Location) -> DispatchResult<()> {
        self.get_mut(id)?.set_location(location);
        Ok(())
    }

    /// Put the driver on duty at `location`: position is recorded first,
    /// then the accepting-rides flag goes up.
    pub fn make_available(&mut self, id: DriverId, location: Location) -> DispatchResult<()> {
        let driver = self.get_mut(id)?;
        driver.set_location(location);
        driver.set_accepting_rides(true);
        Ok(())
    }

    /// Ids of all drivers currently accepting rides, in ascending id order.
    ///
    /// A driver who is mid-trip still appears here as long as the flag is
    /// up; callers that need a driver who can take a trip right now must
    /// re-check [`Driver::is_available`] per candidate.
    pub fn accepting_drivers(&self) -> Vec<DriverId> {
        self.drivers
            .values()
            .filter(|driver| driver.accepting_rides())
            .map(Driver::id)
            .collect()
    }

    /// Accepting drivers within `radius` of `origin`, boundary inclusive.
    ///
    /// Linear scan over the accepting-driver listing. Drivers whose location
    /// is not yet known are never within any radius.
    pub fn drivers_within_radius(
        &self,
        origin: Location,
        radius: f64,
        distance_policy: &dyn DistancePolicy,
    ) -> Vec<DriverId> {
        self.drivers
            .values()
            .filter(|driver| driver.accepting_rides())
            .filter(|driver| {
                driver
                    .location()
                    .is_some_and(|at| distance_policy.distance(at, origin) <= radius)
            })
            .map(Driver::id)
            .collect()
    }

    /// Set or clear the driver's active trip.
    pub fn attach_trip(&mut self, id: DriverId, trip: Option<TripId>) -> DispatchResult<()> {
        self.get_mut(id)?.set_active_trip(trip);
        Ok(())
    }

    /// Append a trip to the driver's history.
    pub fn record_trip(&mut self, id: DriverId, trip: TripId) -> DispatchResult<()> {
        self.get_mut(id)?.push_trip(trip);
        Ok(())
    }

    /// Number of registered drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
