//! Keyed registries owning the driver and rider populations.

pub mod drivers;
pub mod riders;

pub use drivers::DriverDirectory;
pub use riders::RiderDirectory;
