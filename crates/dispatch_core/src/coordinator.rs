//! Trip orchestration: candidate search, matching, pricing and the booking
//! lifecycle.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::directory::{DriverDirectory, RiderDirectory};
use crate::entities::{DriverId, RiderId, VehicleClass};
use crate::error::{DispatchError, DispatchResult};
use crate::matching::MatchingPolicy;
use crate::params::CoordinatorParams;
use crate::pricing::PricingPolicy;
use crate::spatial::{DistancePolicy, Location};
use crate::trips::{Trip, TripId};

/// Orchestrates trips across both directories.
///
/// Owns the trip registry and is the only code that drives the booking
/// state machine. Distance, pricing and matching behavior are injected per
/// call, so an algorithm can be swapped without touching the coordinator.
///
/// Matching reads a snapshot of the accepting drivers and only afterwards
/// claims the selected one; there is no atomic reserve step. The engine is
/// single-threaded in scope, so the window is unobservable here, but a
/// concurrent adaptation must close it per driver.
#[derive(Debug, Default)]
pub struct TripCoordinator {
    riders: RiderDirectory,
    drivers: DriverDirectory,
    trips: HashMap<TripId, Trip>,
    params: CoordinatorParams,
}

impl TripCoordinator {
    /// Coordinator over the given directories, with default parameters.
    pub fn new(riders: RiderDirectory, drivers: DriverDirectory) -> Self {
        Self::with_params(riders, drivers, CoordinatorParams::default())
    }

    /// Coordinator with explicit tuning parameters.
    pub fn with_params(
        riders: RiderDirectory,
        drivers: DriverDirectory,
        params: CoordinatorParams,
    ) -> Self {
        Self {
            riders,
            drivers,
            trips: HashMap::new(),
            params,
        }
    }

    pub fn riders(&self) -> &RiderDirectory {
        &self.riders
    }

    pub fn riders_mut(&mut self) -> &mut RiderDirectory {
        &mut self.riders
    }

    pub fn drivers(&self) -> &DriverDirectory {
        &self.drivers
    }

    pub fn drivers_mut(&mut self) -> &mut DriverDirectory {
        &mut self.drivers
    }

    pub fn params(&self) -> &CoordinatorParams {
        &self.params
    }

    /// Look up a trip by id.
    pub fn trip(&self, id: TripId) -> DispatchResult<&Trip> {
        self.trips.get(&id).ok_or(DispatchError::TripNotFound { id })
    }

    /// Number of trips ever created; trips are never destroyed.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Driver assigned to the given trip.
    pub fn driver_for_trip(&self, trip_id: TripId) -> DispatchResult<DriverId> {
        Ok(self.trip(trip_id)?.driver())
    }

    fn ensure_span_allowed(
        &self,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<()> {
        let distance = distance_policy.distance(origin, destination);
        if distance > self.params.max_trip_distance {
            return Err(DispatchError::ExcessiveDistance {
                distance,
                max: self.params.max_trip_distance,
            });
        }
        Ok(())
    }

    /// Whether the rider's recorded trips qualify them for preferred fares.
    fn is_preferred(&self, rider: RiderId) -> DispatchResult<bool> {
        Ok(self.riders.trip_history_internal(rider)?.len()
            >= self.params.preferred_rider_trip_count)
    }

    fn compute_fare(
        &self,
        rider: RiderId,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        pricing_policy: &dyn PricingPolicy,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64> {
        if self.is_preferred(rider)? {
            pricing_policy.fare_for_preferred(class, origin, destination, distance_policy)
        } else {
            pricing_policy.fare(class, origin, destination, distance_policy)
        }
    }

    /// Book a trip for `rider` from `origin` to `destination`.
    ///
    /// Candidate drivers are gathered within the configured search radius of
    /// the pickup and the matching policy picks one of them. The fare is
    /// computed from the class the rider asked for, even when the allotted
    /// vehicle sits a tier above it; the trip record itself carries the
    /// allotted class.
    #[allow(clippy::too_many_arguments)]
    pub fn create_trip(
        &mut self,
        rider: RiderId,
        origin: Location,
        destination: Location,
        pricing_policy: &dyn PricingPolicy,
        distance_policy: &dyn DistancePolicy,
        matching_policy: &dyn MatchingPolicy,
        requested_class: VehicleClass,
    ) -> DispatchResult<TripId> {
        self.ensure_span_allowed(origin, destination, distance_policy)?;

        let candidate_ids =
            self.drivers
                .drivers_within_radius(origin, self.params.search_radius, distance_policy);

        let rider_record = self.riders.get(rider)?;
        let candidates = candidate_ids
            .iter()
            .map(|id| self.drivers.get(*id))
            .collect::<DispatchResult<Vec<_>>>()?;

        let driver = matching_policy
            .find_driver(rider_record, &candidates, origin, destination, requested_class)
            .ok_or(DispatchError::NoDriverAvailable)?;

        let allotted_class = self.drivers.get(driver)?.vehicle().class();
        if allotted_class != requested_class {
            info!(%driver, ?requested_class, ?allotted_class, "rider upgraded at no extra cost");
        }

        // Fare follows the requested class, not the allotted one.
        let fare = self.compute_fare(
            rider,
            requested_class,
            origin,
            destination,
            pricing_policy,
            distance_policy,
        )?;

        let trip = Trip::new(rider, driver, origin, destination, fare, allotted_class);
        let trip_id = trip.id();

        self.riders.record_trip(rider, trip_id)?;
        self.drivers.record_trip(driver, trip_id)?;
        self.drivers.attach_trip(driver, Some(trip_id))?;
        self.trips.insert(trip_id, trip);

        debug!(trip = %trip_id, %rider, %driver, fare, "trip booked");
        Ok(trip_id)
    }

    /// Change a live trip's route.
    ///
    /// The vehicle class can never change mid-trip, so the fare is recomputed
    /// from the class the trip was actually allotted, not the one originally
    /// requested. `origin` here means the cab's current position. The status
    /// is left untouched.
    pub fn update_trip(
        &mut self,
        trip_id: TripId,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
        pricing_policy: &dyn PricingPolicy,
    ) -> DispatchResult<()> {
        // The span rule is enforced before the trip is even looked up.
        self.ensure_span_allowed(origin, destination, distance_policy)?;

        let trip = self.trip(trip_id)?;
        if trip.status().is_terminal() {
            return Err(DispatchError::InvalidTripState {
                trip: trip_id,
                status: trip.status(),
            });
        }
        let (rider, allotted_class) = (trip.rider(), trip.vehicle_class());

        let fare = self.compute_fare(
            rider,
            allotted_class,
            origin,
            destination,
            pricing_policy,
            distance_policy,
        )?;

        self.trips
            .get_mut(&trip_id)
            .ok_or(DispatchError::TripNotFound { id: trip_id })?
            .update_route(origin, destination, fare)?;
        debug!(trip = %trip_id, fare, "trip rerouted");
        Ok(())
    }

    /// Cancel a booked trip and release its driver.
    pub fn withdraw_trip(&mut self, trip_id: TripId) -> DispatchResult<()> {
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(DispatchError::TripNotFound { id: trip_id })?;
        trip.withdraw()?;
        let driver = trip.driver();

        self.drivers.attach_trip(driver, None)?;
        debug!(trip = %trip_id, %driver, "trip withdrawn");
        Ok(())
    }

    /// Start a booked trip: the driver arrives at the pickup point.
    pub fn start_trip(&mut self, trip_id: TripId) -> DispatchResult<()> {
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(DispatchError::TripNotFound { id: trip_id })?;
        trip.start()?;
        let (driver, origin) = (trip.driver(), trip.origin());

        // The active trip was attached at booking time; only the vehicle
        // position changes here.
        self.drivers.set_location(driver, origin)?;
        debug!(trip = %trip_id, %driver, "trip started");
        Ok(())
    }

    /// Complete an in-progress trip, dropping the rider at the destination
    /// and releasing the driver there. Returns the final fare.
    pub fn end_trip(&mut self, trip_id: TripId) -> DispatchResult<f64> {
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(DispatchError::TripNotFound { id: trip_id })?;
        trip.complete()?;
        let (driver, destination, fare) = (trip.driver(), trip.destination(), trip.fare());

        self.drivers.attach_trip(driver, None)?;
        self.drivers.set_location(driver, destination)?;
        debug!(trip = %trip_id, %driver, fare, "trip completed");
        Ok(fare)
    }
}
