//! Registry of riders and their trip history.

use std::collections::BTreeMap;

use crate::entities::{Rider, RiderId};
use crate::error::{DispatchError, DispatchResult};
use crate::trips::TripId;

/// Owns every registered rider.
#[derive(Debug, Default)]
pub struct RiderDirectory {
    riders: BTreeMap<RiderId, Rider>,
}

impl RiderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new rider.
    pub fn register(&mut self, rider: Rider) -> DispatchResult<()> {
        if self.riders.contains_key(&rider.id()) {
            return Err(DispatchError::DuplicateRider { id: rider.id() });
        }
        self.riders.insert(rider.id(), rider);
        Ok(())
    }

    /// Look up a rider by id.
    pub fn get(&self, id: RiderId) -> DispatchResult<&Rider> {
        self.riders
            .get(&id)
            .ok_or(DispatchError::RiderNotFound { id })
    }

    fn get_mut(&mut self, id: RiderId) -> DispatchResult<&mut Rider> {
        self.riders
            .get_mut(&id)
            .ok_or(DispatchError::RiderNotFound { id })
    }

    /// Append a trip to the rider's history.
    pub fn record_trip(&mut self, id: RiderId, trip: TripId) -> DispatchResult<()> {
        self.get_mut(id)?.push_trip(trip);
        Ok(())
    }

    /// The rider's full trip history, gated by their credential.
    ///
    /// The comparison is exact and case-sensitive.
    pub fn trip_history(&self, id: RiderId, credential: &str) -> DispatchResult<&[TripId]> {
        let rider = self.get(id)?;
        if !rider.credential_matches(credential) {
            return Err(DispatchError::InvalidCredential);
        }
        Ok(rider.trips())
    }

    /// The rider's full trip history without the credential gate.
    ///
    /// For trusted internal callers only, e.g. the loyalty check.
    pub fn trip_history_internal(&self, id: RiderId) -> DispatchResult<&[TripId]> {
        Ok(self.get(id)?.trips())
    }

    /// Number of registered riders.
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}
