//! Common test utilities shared by the integration tests.

use fleetyard_lib::{ContainerFactory, HazardLog, Ship};

/// Factory with a fresh serial counter and an in-memory hazard log.
pub fn recording_factory() -> (ContainerFactory, HazardLog) {
    let log = HazardLog::new();
    (ContainerFactory::with_hazard_channel(log.clone()), log)
}

/// The two ships used by the demonstration scenario.
#[allow(dead_code)]
pub fn demo_ships() -> (Ship, Ship) {
    (
        Ship::new("Atlantic Express", 25.0, 3, 10.0).expect("valid ship"),
        Ship::new("Pacific Runner", 20.0, 5, 20.0).expect("valid ship"),
    )
}

/// Serial numbers aboard `ship`, in manifest order.
#[allow(dead_code)]
pub fn manifest(ship: &Ship) -> Vec<String> {
    use fleetyard_lib::CargoContainer;

    ship.containers()
        .iter()
        .map(|c| c.serial_number().to_string())
        .collect()
}
