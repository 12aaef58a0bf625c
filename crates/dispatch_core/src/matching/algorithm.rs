use crate::entities::{Driver, DriverId, Rider, VehicleClass};
use crate::spatial::Location;

/// Trait for driver selection policies.
///
/// Given the candidate set gathered around a pickup point, a policy picks at
/// most one driver for the rider. Different policies optimize for different
/// objectives; the engine only relies on the contract below.
///
/// # Arguments
///
/// * `rider` - The rider requesting the trip
/// * `candidates` - Candidate drivers in directory order; may include drivers
///   who are accepting rides but currently mid-trip
/// * `origin` / `destination` - The requested trip endpoints
/// * `requested_class` - The vehicle class the rider asked for
///
/// # Returns
///
/// `Some(driver_id)` when a candidate qualifies, `None` otherwise. An empty
/// result is an expected outcome, not an error; the caller decides how to
/// react.
///
/// Selection is pure: implementations never mutate the candidates.
pub trait MatchingPolicy: Send + Sync {
    fn find_driver(
        &self,
        rider: &Rider,
        candidates: &[&Driver],
        origin: Location,
        destination: Location,
        requested_class: VehicleClass,
    ) -> Option<DriverId>;
}
