//! Tiered trip pricing.
//!
//! Fares are computed from the distance between the trip endpoints using a
//! per-class rate schedule. The first [`FIRST_TIER_END`] units are charged at
//! the first-tier rate, units up to [`SECOND_TIER_END`] at the second-tier
//! rate, and everything beyond at the third-tier rate. No fare drops below
//! [`MIN_FARE`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::VehicleClass;
use crate::error::{DispatchError, DispatchResult};
use crate::spatial::{DistancePolicy, Location};

/// Fare floor in currency units.
pub const MIN_FARE: f64 = 50.0;

/// End of the first pricing tier, in distance units.
pub const FIRST_TIER_END: f64 = 2.0;

/// End of the second pricing tier, in distance units.
pub const SECOND_TIER_END: f64 = 5.0;

/// Trait for fare computation policies.
///
/// `fare_for_preferred` carries the same signature as `fare`; the two are
/// kept distinct so preferred-rider pricing can diverge later without
/// touching any caller.
pub trait PricingPolicy: Send + Sync {
    /// Fare for a standard rider.
    fn fare(
        &self,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64>;

    /// Fare for a preferred (loyal) rider.
    fn fare_for_preferred(
        &self,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64>;
}

/// Per-distance-unit rates for one vehicle class, one rate per tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub first_tier_rate: f64,
    pub second_tier_rate: f64,
    pub third_tier_rate: f64,
}

impl RateSchedule {
    pub fn new(first_tier_rate: f64, second_tier_rate: f64, third_tier_rate: f64) -> Self {
        Self {
            first_tier_rate,
            second_tier_rate,
            third_tier_rate,
        }
    }

    /// Fare before the floor is applied.
    fn raw_fare(&self, distance: f64) -> f64 {
        if distance <= FIRST_TIER_END {
            self.first_tier_rate * distance
        } else if distance <= SECOND_TIER_END {
            self.first_tier_rate * FIRST_TIER_END
                + self.second_tier_rate * (distance - FIRST_TIER_END)
        } else {
            self.first_tier_rate * FIRST_TIER_END
                + self.second_tier_rate * (SECOND_TIER_END - FIRST_TIER_END)
                + self.third_tier_rate * (distance - SECOND_TIER_END)
        }
    }
}

/// Reference pricing policy: tiered per-class rates with a fare floor.
///
/// The default table carries the standard Compact (10, 8, 5) and Sedan
/// (15, 20, 30) schedules. A class absent from the table cannot be priced
/// and fails with [`DispatchError::InvalidVehicleClass`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredPricing {
    rates: BTreeMap<VehicleClass, RateSchedule>,
}

impl TieredPricing {
    /// Policy over an explicit rate table.
    pub fn with_rates(rates: BTreeMap<VehicleClass, RateSchedule>) -> Self {
        Self { rates }
    }

    fn fare_for(
        &self,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64> {
        let schedule = self
            .rates
            .get(&class)
            .ok_or(DispatchError::InvalidVehicleClass { class })?;
        let distance = distance_policy.distance(origin, destination);
        Ok(schedule.raw_fare(distance).max(MIN_FARE))
    }
}

impl Default for TieredPricing {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(VehicleClass::Compact, RateSchedule::new(10.0, 8.0, 5.0));
        rates.insert(VehicleClass::Sedan, RateSchedule::new(15.0, 20.0, 30.0));
        Self { rates }
    }
}

impl PricingPolicy for TieredPricing {
    fn fare(
        &self,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64> {
        self.fare_for(class, origin, destination, distance_policy)
    }

    // Same computation as the standard path for now.
    fn fare_for_preferred(
        &self,
        class: VehicleClass,
        origin: Location,
        destination: Location,
        distance_policy: &dyn DistancePolicy,
    ) -> DispatchResult<f64> {
        self.fare_for(class, origin, destination, distance_policy)
    }
}
