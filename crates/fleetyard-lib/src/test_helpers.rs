// Test-only helpers for `fleetyard-lib` unit tests
#![allow(dead_code)]

use crate::container::{Container, ContainerFactory};
use crate::hazard::HazardLog;
use crate::product::ProductType;
use crate::ship::Ship;

/// Factory with a fresh serial counter whose hazard alerts land in the returned log.
pub fn recording_factory() -> (ContainerFactory, HazardLog) {
    let log = HazardLog::new();
    (ContainerFactory::with_hazard_channel(log.clone()), log)
}

/// Builder for `Ship` instances with roomy defaults.
pub struct ShipBuilder {
    name: String,
    max_speed_knots: f64,
    max_container_count: usize,
    max_weight_tons: f64,
}

impl ShipBuilder {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            max_speed_knots: 20.0,
            max_container_count: 10,
            max_weight_tons: 100.0,
        }
    }

    pub fn max_container_count(mut self, count: usize) -> Self {
        self.max_container_count = count;
        self
    }

    pub fn max_weight_tons(mut self, tons: f64) -> Self {
        self.max_weight_tons = tons;
        self
    }

    pub fn build(self) -> Ship {
        Ship::new(
            &self.name,
            self.max_speed_knots,
            self.max_container_count,
            self.max_weight_tons,
        )
        .expect("valid test ship")
    }
}

/// Empty refrigerated container with the given tare weight, handy for weight-limit tests.
pub fn empty_reefer(factory: &ContainerFactory, tare_weight: f64) -> Container {
    factory
        .refrigerated(tare_weight, 1000.0, ProductType::Cheese, 8.0)
        .expect("valid test container")
        .into()
}
