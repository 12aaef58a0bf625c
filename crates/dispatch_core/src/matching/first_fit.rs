use super::algorithm::MatchingPolicy;
use crate::entities::{Driver, DriverId, Rider, VehicleClass};
use crate::spatial::Location;

/// First-fit matching with a one-tier upgrade fallback.
///
/// # Algorithm Behavior
///
/// 1. Scan the candidates in order and return the first whose vehicle class
///    equals the requested class and who is available right now.
/// 2. If none qualifies and the requested class is the lowest tier, scan
///    again and return the first candidate of the next tier up. This pass
///    does not re-check availability.
/// 3. Otherwise report no match.
///
/// Deterministic and O(n) over the candidate list, which makes it the
/// baseline policy for tests and comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitMatching;

impl MatchingPolicy for FirstFitMatching {
    fn find_driver(
        &self,
        _rider: &Rider,
        candidates: &[&Driver],
        _origin: Location,
        _destination: Location,
        requested_class: VehicleClass,
    ) -> Option<DriverId> {
        for driver in candidates {
            if driver.vehicle().class() == requested_class && driver.is_available() {
                return Some(driver.id());
            }
        }

        // Upgrade fallback for lowest-tier requests. Availability is not
        // re-checked on this pass.
        if let Some(upgrade) = requested_class.upgrade_class() {
            for driver in candidates {
                if driver.vehicle().class() == upgrade {
                    return Some(driver.id());
                }
            }
        }

        None
    }
}
