use dispatch_core::directory::DriverDirectory;
use dispatch_core::entities::{DriverId, VehicleClass};
use dispatch_core::error::DispatchError;
use dispatch_core::spatial::{EuclideanDistance, Location};
use dispatch_core::test_helpers::{test_driver, test_location};

#[test]
fn registering_a_duplicate_driver_id_fails() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Compact, "ABCD-12"))
        .expect("first registration");

    let err = directory
        .register(test_driver(1, VehicleClass::Sedan, "ABCD-34"))
        .unwrap_err();
    assert_eq!(err, DispatchError::DuplicateDriver { id: DriverId(1) });
    assert_eq!(directory.len(), 1);
}

#[test]
fn registering_an_already_owned_vehicle_fails_without_partial_writes() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Compact, "ABCD-12"))
        .expect("first registration");

    let err = directory
        .register(test_driver(2, VehicleClass::Compact, "ABCD-12"))
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::DuplicateVehicle {
            registration: "ABCD-12".to_owned(),
        }
    );

    // Neither the rejected driver nor their vehicle claim was stored: the
    // same driver can come back with a different vehicle.
    assert_eq!(directory.len(), 1);
    directory
        .register(test_driver(2, VehicleClass::Compact, "ABCD-56"))
        .expect("re-registration with a fresh vehicle");
}

#[test]
fn accepting_listing_tracks_the_availability_flag() {
    let mut directory = DriverDirectory::new();
    for id in 1..=3 {
        directory
            .register(test_driver(
                id,
                VehicleClass::Compact,
                &format!("REG-{id}"),
            ))
            .expect("register");
        directory
            .make_available(DriverId(id), test_location())
            .expect("make available");
    }
    assert_eq!(directory.accepting_drivers().len(), 3);

    directory
        .set_availability(DriverId(3), false)
        .expect("flip flag");
    assert_eq!(
        directory.accepting_drivers(),
        vec![DriverId(1), DriverId(2)]
    );

    let err = directory.set_availability(DriverId(10), false).unwrap_err();
    assert_eq!(err, DispatchError::DriverNotFound { id: DriverId(10) });
}

#[test]
fn newly_registered_drivers_are_not_accepting_until_made_available() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Compact, "ABCD-12"))
        .expect("register");
    assert!(directory.accepting_drivers().is_empty());

    directory
        .make_available(DriverId(1), test_location())
        .expect("make available");
    let driver = directory.get(DriverId(1)).expect("get");
    assert!(driver.accepting_rides());
    assert_eq!(driver.location(), Some(test_location()));
    assert!(driver.is_available());
}

#[test]
fn radius_query_is_inclusive_at_the_boundary() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Compact, "REG-1"))
        .expect("register");
    directory
        .register(test_driver(2, VehicleClass::Compact, "REG-2"))
        .expect("register");
    directory
        .register(test_driver(3, VehicleClass::Compact, "REG-3"))
        .expect("register");

    let origin = Location::new(0, 0);
    // Exactly on the boundary: 3-4-5 triangle at radius 5.
    directory
        .make_available(DriverId(1), Location::new(3, 4))
        .expect("make available");
    // Just outside.
    directory
        .make_available(DriverId(2), Location::new(3, 5))
        .expect("make available");
    // Inside.
    directory
        .make_available(DriverId(3), Location::new(1, 1))
        .expect("make available");

    let within = directory.drivers_within_radius(origin, 5.0, &EuclideanDistance);
    assert_eq!(within, vec![DriverId(1), DriverId(3)]);
}

#[test]
fn radius_query_never_returns_off_duty_or_unlocated_drivers() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Compact, "REG-1"))
        .expect("register");
    directory
        .register(test_driver(2, VehicleClass::Compact, "REG-2"))
        .expect("register");
    directory
        .register(test_driver(3, VehicleClass::Compact, "REG-3"))
        .expect("register");

    let origin = Location::new(0, 0);
    directory
        .make_available(DriverId(1), origin)
        .expect("make available");
    directory
        .set_availability(DriverId(1), false)
        .expect("go off duty");
    // Driver 2 is accepting but never reported a location.
    directory
        .set_availability(DriverId(2), true)
        .expect("accepting without location");
    directory
        .make_available(DriverId(3), origin)
        .expect("make available");

    let within = directory.drivers_within_radius(origin, 10.0, &EuclideanDistance);
    assert_eq!(within, vec![DriverId(3)]);
}

#[test]
fn set_location_overwrites_the_previous_position() {
    let mut directory = DriverDirectory::new();
    directory
        .register(test_driver(1, VehicleClass::Sedan, "REG-1"))
        .expect("register");
    directory
        .make_available(DriverId(1), Location::new(2, 3))
        .expect("make available");
    directory
        .set_location(DriverId(1), Location::new(9, 9))
        .expect("relocate");
    assert_eq!(
        directory.get(DriverId(1)).expect("get").location(),
        Some(Location::new(9, 9))
    );

    let err = directory
        .set_location(DriverId(4), Location::new(0, 0))
        .unwrap_err();
    assert_eq!(err, DispatchError::DriverNotFound { id: DriverId(4) });
}
