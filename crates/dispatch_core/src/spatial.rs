//! Spatial primitives: grid coordinates and pluggable distance measurement.

use serde::{Deserialize, Serialize};

/// A 2-D coordinate pair on the city grid. Plain value type with no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: i64,
    pub longitude: i64,
}

impl Location {
    pub fn new(latitude: i64, longitude: i64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Trait for distance measures between two locations.
///
/// Implementations must be symmetric and report zero for identical points.
/// The unit is whatever the deployment treats as a standard distance unit;
/// pricing tiers and search radii are expressed in the same unit.
pub trait DistancePolicy: Send + Sync {
    /// Distance between `a` and `b` in standard units. Never negative.
    fn distance(&self, a: Location, b: Location) -> f64;
}

/// Straight-line distance over the two coordinate axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl DistancePolicy for EuclideanDistance {
    fn distance(&self, a: Location, b: Location) -> f64 {
        let dlat = (a.latitude - b.latitude) as f64;
        let dlon = (a.longitude - b.longitude) as f64;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}
