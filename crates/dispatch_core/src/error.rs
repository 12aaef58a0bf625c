//! Domain error taxonomy.
//!
//! Every failure is synchronous and typed; errors are raised at the point of
//! violation and propagate to the caller. Nothing in the engine retries or
//! swallows them.

use thiserror::Error;

use crate::entities::{DriverId, RiderId, VehicleClass};
use crate::trips::{TripId, TripStatus};

/// Result alias used across the engine.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// Registration conflict on a driver id.
    #[error("driver {id} is already registered, try a different id")]
    DuplicateDriver { id: DriverId },

    /// Registration conflict on a vehicle: some driver already holds it.
    #[error("vehicle {registration} is already registered to another driver")]
    DuplicateVehicle { registration: String },

    /// Registration conflict on a rider id.
    #[error("rider {id} is already registered, try a different id")]
    DuplicateRider { id: RiderId },

    #[error("no driver with id {id}")]
    DriverNotFound { id: DriverId },

    #[error("no rider with id {id}")]
    RiderNotFound { id: RiderId },

    #[error("no trip with id {id}")]
    TripNotFound { id: TripId },

    /// Trip span exceeds the policy limit.
    #[error("trip spans {distance:.1} units, more than the allowed {max:.1}")]
    ExcessiveDistance { distance: f64, max: f64 },

    /// The pricing policy carries no rate schedule for this class.
    #[error("no fare schedule for vehicle class {class:?}")]
    InvalidVehicleClass { class: VehicleClass },

    /// Operation attempted from a status that forbids it.
    #[error("trip {trip} does not allow this operation while {status:?}")]
    InvalidTripState { trip: TripId, status: TripStatus },

    /// Trip-history access with a wrong credential.
    #[error("the credential for the rider is incorrect")]
    InvalidCredential,

    /// No candidate satisfied the matching policy. An expected outcome of
    /// booking under load, not a defect.
    #[error("no driver available, please try after some time")]
    NoDriverAvailable,
}
