//! Engine tuning knobs and their defaults.

use serde::{Deserialize, Serialize};

/// Default ceiling on the origin→destination span of a trip, in distance units.
pub const DEFAULT_MAX_TRIP_DISTANCE: f64 = 100.0;

/// Default radius searched around a pickup point for candidate drivers.
pub const DEFAULT_SEARCH_RADIUS: f64 = 10.0;

/// Default trip-history size at which a rider gets the preferred fare path.
pub const DEFAULT_PREFERRED_RIDER_TRIP_COUNT: usize = 10;

/// Tunables for [`crate::coordinator::TripCoordinator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorParams {
    /// Trips spanning more than this distance are rejected outright.
    pub max_trip_distance: f64,
    /// How far around the pickup point to look for candidate drivers.
    pub search_radius: f64,
    /// Recorded-trip count at which a rider is treated as preferred.
    pub preferred_rider_trip_count: usize,
}

impl Default for CoordinatorParams {
    fn default() -> Self {
        Self {
            max_trip_distance: DEFAULT_MAX_TRIP_DISTANCE,
            search_radius: DEFAULT_SEARCH_RADIUS,
            preferred_rider_trip_count: DEFAULT_PREFERRED_RIDER_TRIP_COUNT,
        }
    }
}
